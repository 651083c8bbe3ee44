//! Number-to-block rendering
//!
//! Decomposes a number into its decimal digits, looks each digit up in a
//! glyph table, and stitches the glyphs together row by row into one
//! multi-line block.

use tracing::trace;

use crate::error::{RenderError, Result};
use crate::segments::{Glyph, GlyphSize, GlyphTable};

/// Render `number` with the standard 3x3 digit glyphs.
///
/// Prints the finished block to stdout and also returns it. Fails if
/// `number` is negative; nothing is printed on failure.
pub fn render(number: i64) -> Result<String> {
    let block = render_block(number, GlyphSize::Standard)?;
    println!("{block}");
    Ok(block)
}

/// Render `number` with digits scaled to `width` columns per bar and
/// `height` rows per vertical section.
///
/// Prints the finished block to stdout and also returns it. Fails if either
/// dimension is below 1 or if `number` is negative; the size check runs
/// first, and nothing is printed on failure.
pub fn render_sized(number: i64, width: usize, height: usize) -> Result<String> {
    let block = render_block(number, GlyphSize::Custom { width, height })?;
    println!("{block}");
    Ok(block)
}

/// Shared render path: validate, build a fresh table, merge the glyphs.
///
/// Both checks run before any table is built.
fn render_block(number: i64, size: GlyphSize) -> Result<String> {
    size.validate()?;
    if number < 0 {
        return Err(RenderError::NegativeNumber);
    }

    let table = GlyphTable::new(size)?;
    let mut glyphs = Vec::new();
    for digit in decimal_digits(number) {
        let glyph = table.glyph(digit).ok_or(RenderError::UnknownDigit(digit))?;
        glyphs.push(glyph);
    }

    trace!(number, digits = glyphs.len(), "rendering block");
    Ok(merge_glyphs(&glyphs))
}

/// Decimal digits of a non-negative number, most significant first.
fn decimal_digits(number: i64) -> Vec<u8> {
    number.to_string().bytes().map(|b| b - b'0').collect()
}

/// Concatenate glyphs horizontally, row by row, and join the rows with
/// newlines.
///
/// Every glyph in a table shares the same row count and row width, so each
/// output row is the glyph rows at that index in input order.
fn merge_glyphs(glyphs: &[&Glyph]) -> String {
    let height = glyphs.first().map_or(0, |glyph| glyph.height());
    let mut lines = vec![String::new(); height];
    for glyph in glyphs {
        for (line, row) in lines.iter_mut().zip(glyph.rows()) {
            line.push_str(row);
        }
    }
    lines.join("\n")
}
