//! Miscellaneous utility functions for fcd.
//!
//! This module holds the [cli] submodule for argument handling and the
//! [helpers] submodule with color parsing, home lookup and the final
//! selection resolution.

pub mod cli;
pub mod helpers;

pub use helpers::{get_home, parse_color, resolve_selection};
