//! Error types for the lcdnum rendering engine

use thiserror::Error;

/// Result type for lcdnum core operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Rendering error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The input number was negative
    #[error("Input number cannot be negative!")]
    NegativeNumber,

    /// A requested digit dimension was below the 1-column/1-row minimum
    #[error("Width and height have to be at least 1!")]
    InvalidSize { width: usize, height: usize },

    /// A decomposed digit had no glyph in the table.
    ///
    /// Digits always fall in 0-9 and every table covers 0-9, so this is an
    /// internal-consistency guard rather than an expected runtime failure.
    #[error("Could not find digit {0}")]
    UnknownDigit(u8),
}
