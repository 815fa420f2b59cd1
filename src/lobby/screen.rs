//! Screen trait and transition type for the outer state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::SessionStats;
use crate::input::PointerEvent;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] and
/// [`Screen::handle_pointer`] to drive the
/// [`LobbyController`](crate::LobbyController) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Back to the menu, abandoning any round in progress.
    GoToMenu,
    /// Deal a new round.
    StartRound {
        /// Seed to deal from; `None` for a fresh one.
        seed: Option<u64>,
    },
    /// Deal a fresh round after the one just finished.
    PlayAgain,
    /// Deal the finished round's layout again.
    ReplayDeal,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its own state, renders its UI, and handles input.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, stats: &SessionStats);

    /// Handles a key press and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Handles pointer input. Most screens ignore it.
    fn handle_pointer(&mut self, _pointer: PointerEvent) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
