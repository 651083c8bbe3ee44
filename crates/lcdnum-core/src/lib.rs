//! # lcdnum Core
//!
//! Seven-segment LCD rendering engine for lcdnum.
//!
//! This crate provides:
//! - Glyph tables for the digits 0-9, at the standard 3x3 size or scaled to
//!   any width and height
//! - Horizontal composition of digit glyphs into one multi-line text block
//! - The `render` / `render_sized` operations used by the lcdnum binary
//!
//! ```text
//!  _     _
//! | |  | _|
//! |_|  ||_
//! ```
//!
//! Glyph tables are plain values built fresh per call; there is no shared
//! or cached state between renders.

pub mod error;
pub mod render;
pub mod segments;

pub use error::{RenderError, Result};
pub use render::{render, render_sized};
pub use segments::{Bar, Glyph, GlyphSize, GlyphTable, SegmentPattern, Side};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
