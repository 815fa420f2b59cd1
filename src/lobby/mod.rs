//! Outer state machine: menu, round, and round end.

mod controller;
mod screen;
mod screens;

pub use controller::LobbyController;
pub use screen::{Screen, ScreenTransition};
pub use screens::{MenuScreen, RoundEndScreen, RoundProgress, RoundScreen};
