//! Core runtime logic for fcd.
//!
//! This module contains the non-UI “engine” pieces used by the application:
//! - [score]: the fuzzy relevance function applied to every corpus entry.
//! - [rank]: parallel scoring of the whole corpus and the deterministic merge.
//! - [walk]: the one-shot background directory walk that builds the corpus.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod rank;
pub mod score;
pub mod terminal;
pub mod walk;

pub use rank::rank;
pub use score::{highlight_set, score};
pub use terminal::run_terminal;
pub use walk::{enumerate, spawn_walker};
