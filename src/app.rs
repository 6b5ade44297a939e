//! Application state for fcd.
//!
//! - [session]: the query/selection state machine driving the interactive loop.
//! - [keymap]: translation from raw key events to session input events.

pub mod keymap;
pub mod session;

pub use keymap::{InputEvent, map_key};
pub use session::{NO_SELECTION, Session, Transition};
