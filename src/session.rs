use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::config::GameConfig;
use crate::game::{GameState, GameStatus};
use crate::input::{Direction, GameInput};

/// What the driver loop should do after an input was handled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    /// Nothing visible changed.
    Idle,
    Redraw,
    /// Restart the tick clock as well as redrawing.
    Restarted,
    Quit,
}

/// One play session: the current game, the direction request waiting for
/// the next tick, and the seed source used for restarts.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    seeds: StdRng,
    state: GameState,
    pending: Option<Direction>,
}

impl Session {
    /// Starts the first game. A fixed `seed` makes every game of the
    /// session reproducible.
    #[must_use]
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut seeds = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = new_game(&config, &mut seeds);

        Self {
            config,
            seeds,
            state,
            pending: None,
        }
    }

    /// Applies one input between ticks.
    ///
    /// Only the latest direction seen while running is kept. Confirm
    /// restarts a finished game and toggles pause otherwise.
    pub fn handle_input(&mut self, input: GameInput) -> Flow {
        match input {
            GameInput::Quit => Flow::Quit,
            GameInput::Direction(direction) => {
                if self.state.status() == GameStatus::Running {
                    self.pending = Some(direction);
                }
                Flow::Idle
            }
            GameInput::Confirm if self.state.status() == GameStatus::Over => {
                self.state = new_game(&self.config, &mut self.seeds);
                self.pending = None;
                Flow::Restarted
            }
            GameInput::Confirm | GameInput::Pause => {
                if self.state.status() == GameStatus::Over {
                    return Flow::Idle;
                }
                self.state.toggle_pause();
                self.pending = None;
                debug!(status = ?self.state.status(), "pause toggled");
                Flow::Redraw
            }
        }
    }

    /// Runs one tick with the pending request. Returns false when the game
    /// is not running and nothing moved.
    pub fn tick(&mut self) -> bool {
        if self.state.status() != GameStatus::Running {
            return false;
        }

        self.state.tick(self.pending.take());
        true
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn new_game(config: &GameConfig, seeds: &mut StdRng) -> GameState {
    let seed = seeds.next_u64();
    debug!(seed, "new game");
    GameState::new_with_seed(config.clone(), seed)
}
