//! Game rules for Baker's Dozen.
//!
//! Pure functions over piles. Nothing here mutates state or performs
//! I/O; the round state machine and interaction controller build on them.

pub mod placement;
pub mod progress;
pub mod win;

pub use placement::{check_move, is_valid_foundation_move, is_valid_tableau_move};
pub use progress::{has_any_legal_move, legal_moves};
pub use win::is_won;
