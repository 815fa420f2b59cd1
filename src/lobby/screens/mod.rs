//! Screen implementations for the outer state machine.

mod menu;
mod round;
mod round_end;

pub use menu::MenuScreen;
pub use round::{RoundProgress, RoundScreen};
pub use round_end::RoundEndScreen;
