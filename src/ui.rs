//! Presentation layer for fcd.
//!
//! - [render]: the result window, highlighting and status footer.
//! - [icons]: decorative per-extension icons for result rows.

pub mod icons;
pub mod render;

pub use render::{render, render_loading};
