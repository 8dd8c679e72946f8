use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{ConfigOverrides, GameConfig, THEME_CLASSIC};
use grid_snake::error::AppError;
use grid_snake::input::InputHandler;
use grid_snake::logging;
use grid_snake::session::{Flow, Session};
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::ui::hud::HudInfo;
use tracing::info;

/// Classic snake on a fixed grid. Arrows/WASD steer, Space pauses or
/// restarts, Q quits.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with gameplay options; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Seed for food placement; makes a whole session reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// Append debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = GameConfig::resolve(cli.config.as_deref(), &cli.overrides)?;
    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }
    info!(?config, seed = ?cli.seed, "starting session");

    let hud = HudInfo {
        grid: config.grid(),
        tick_rate_hz: config.tick_rate_hz,
        theme: &THEME_CLASSIC,
    };
    let tick_interval = config.tick_interval();
    let mut session = Session::new(config, cli.seed);
    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut next_tick = Instant::now() + tick_interval;
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(&session.state().snapshot(), &hud)?;
            dirty = false;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(game_input) = input.poll_input(timeout)? {
            match session.handle_input(game_input) {
                Flow::Quit => break,
                Flow::Idle => {}
                Flow::Redraw => dirty = true,
                Flow::Restarted => {
                    next_tick = Instant::now() + tick_interval;
                    dirty = true;
                }
            }
        }

        let now = Instant::now();
        if now >= next_tick {
            dirty |= session.tick();

            next_tick += tick_interval;
            if next_tick < now {
                next_tick = now + tick_interval;
            }
        }
    }

    info!(score = session.state().score(), "session ended");
    Ok(())
}
