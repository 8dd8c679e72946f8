use std::io;
use std::panic;
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::Snapshot;
use crate::renderer;
use crate::ui::hud::HudInfo;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// The game's hold on the terminal. Raw mode and the alternate screen last
/// exactly as long as this value, and a panic restores them too.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Switches the terminal into game mode.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
            .map(|terminal| Self { terminal })
            .inspect_err(|_| restore_terminal())
    }

    /// Draws one frame from a snapshot taken after the latest tick.
    pub fn draw(&mut self, snapshot: &Snapshot, hud: &HudInfo<'_>) -> io::Result<()> {
        self.terminal.draw(|frame| renderer::render(frame, snapshot, hud))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leaves raw mode and the alternate screen. Errors are ignored since this
/// runs on the way out.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}

/// Chains a terminal restore in front of the current panic hook, once per
/// process.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            default_hook(panic_info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::{PANIC_HOOK, install_panic_hook};

    #[test]
    fn panic_hook_is_installed_once() {
        install_panic_hook();
        install_panic_hook();

        assert!(PANIC_HOOK.is_completed());
    }
}
