//! Seven-segment digit glyphs
//!
//! Builds the glyph table that maps each decimal digit to its multi-row
//! text rendering. Two sizes exist: the standard 3x3 glyphs, drawn from a
//! fixed vocabulary of row literals, and scaled glyphs assembled from five
//! row primitives stacked as top bar / upper verticals / middle bar / lower
//! verticals / bottom bar.
//!
//! The digit 2 at the standard size and scaled to width 3, height 1:
//!
//! ```text
//!  _      ___
//!  _|        |
//! |_      ___
//!        |
//!         ___
//! ```
//!
//! Tables are plain values built fresh per call; nothing is shared between
//! callers.

use tracing::debug;

use crate::error::{RenderError, Result};

// Standard-size row vocabulary. Each literal is one 3-column glyph row; the
// underscore in a middle or lower row belongs to the bar drawn at that row's
// baseline.
const EMPTY: &str = "   ";
const BOTH: &str = "| |";
const BOTTOM: &str = "|_|";
const RIGHT: &str = "  |";
const MID_RIGHT: &str = " _|";
const MID_LEFT: &str = "|_ ";
const MID: &str = " _ ";

/// Built-in 3x3 glyph rows, indexed by digit value.
///
/// Digits 3 and 4 omit the middle bar at this size; [`SegmentPattern`] draws
/// it when scaling. Both shapes are load-bearing for existing output.
const STANDARD_GLYPHS: [[&str; 3]; 10] = [
    [MID, BOTH, BOTTOM],        // 0
    [EMPTY, RIGHT, RIGHT],      // 1
    [MID, MID_RIGHT, MID_LEFT], // 2
    [MID, RIGHT, MID_RIGHT],    // 3
    [EMPTY, BOTH, RIGHT],       // 4
    [MID, MID_LEFT, MID_RIGHT], // 5
    [MID, MID_LEFT, BOTTOM],    // 6
    [MID, RIGHT, RIGHT],        // 7
    [MID, BOTTOM, BOTTOM],      // 8
    [MID, BOTTOM, MID_RIGHT],   // 9
];

/// State of one horizontal bar in a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bar {
    /// The bar is drawn
    Lit,
    /// The bar row stays blank
    Dark,
}

/// Which vertical bars one half of a glyph draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Right vertical only
    Right,
    /// Left vertical only
    Left,
    /// Verticals on both edges
    Both,
}

/// The five-part segment selection for one digit.
///
/// A scaled glyph is assembled top to bottom from these roles: the three
/// horizontal bars pick a drawn or blank row, the two vertical sections pick
/// which side bars to draw for `height` rows each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPattern {
    /// Top horizontal bar
    pub top: Bar,
    /// Verticals in the upper half
    pub upper: Side,
    /// Middle horizontal bar
    pub middle: Bar,
    /// Verticals in the lower half
    pub lower: Side,
    /// Bottom horizontal bar
    pub bottom: Bar,
}

impl SegmentPattern {
    const fn new(top: Bar, upper: Side, middle: Bar, lower: Side, bottom: Bar) -> Self {
        Self {
            top,
            upper,
            middle,
            lower,
            bottom,
        }
    }

    /// Look up the segment pattern for a decimal digit (0-9).
    pub fn for_digit(digit: u8) -> Option<&'static SegmentPattern> {
        SEGMENT_PATTERNS.get(usize::from(digit))
    }
}

/// Segment selection per digit, indexed by digit value.
const SEGMENT_PATTERNS: [SegmentPattern; 10] = [
    SegmentPattern::new(Bar::Lit, Side::Both, Bar::Dark, Side::Both, Bar::Lit), // 0
    SegmentPattern::new(Bar::Dark, Side::Right, Bar::Dark, Side::Right, Bar::Dark), // 1
    SegmentPattern::new(Bar::Lit, Side::Right, Bar::Lit, Side::Left, Bar::Lit), // 2
    SegmentPattern::new(Bar::Lit, Side::Right, Bar::Lit, Side::Right, Bar::Lit), // 3
    SegmentPattern::new(Bar::Dark, Side::Both, Bar::Lit, Side::Right, Bar::Dark), // 4
    SegmentPattern::new(Bar::Lit, Side::Left, Bar::Lit, Side::Right, Bar::Lit), // 5
    SegmentPattern::new(Bar::Lit, Side::Left, Bar::Lit, Side::Both, Bar::Lit), // 6
    SegmentPattern::new(Bar::Lit, Side::Right, Bar::Dark, Side::Right, Bar::Dark), // 7
    SegmentPattern::new(Bar::Lit, Side::Both, Bar::Lit, Side::Both, Bar::Lit), // 8
    SegmentPattern::new(Bar::Lit, Side::Both, Bar::Lit, Side::Right, Bar::Lit), // 9
];

/// Requested digit size for a glyph table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSize {
    /// The built-in 3-row, 3-column glyphs
    #[default]
    Standard,
    /// Scaled glyphs: `width` columns per bar, `height` rows per vertical
    /// section
    Custom { width: usize, height: usize },
}

impl GlyphSize {
    /// Check that custom dimensions are at least 1x1.
    pub fn validate(&self) -> Result<()> {
        match *self {
            GlyphSize::Standard => Ok(()),
            GlyphSize::Custom { width, height } => {
                if width < 1 || height < 1 {
                    Err(RenderError::InvalidSize { width, height })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Number of rows in every glyph built at this size.
    pub fn glyph_height(&self) -> usize {
        match *self {
            GlyphSize::Standard => 3,
            GlyphSize::Custom { height, .. } => 2 * height + 3,
        }
    }

    /// Number of columns in every glyph row built at this size.
    pub fn glyph_width(&self) -> usize {
        match *self {
            GlyphSize::Standard => 3,
            GlyphSize::Custom { width, .. } => width + 2,
        }
    }
}

/// One digit rendered as rows of text, all rows the same width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    /// The glyph's rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Row width in columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }
}

/// Glyphs for the digits 0-9 at one size, indexed by digit value
#[derive(Debug, Clone)]
pub struct GlyphTable {
    size: GlyphSize,
    glyphs: Vec<Glyph>,
}

impl GlyphTable {
    /// Build a fresh table for the requested size.
    ///
    /// Pure constructor: every call returns an independent value, so tables
    /// never share state between callers.
    pub fn new(size: GlyphSize) -> Result<Self> {
        size.validate()?;
        let glyphs = match size {
            GlyphSize::Standard => standard_glyphs(),
            GlyphSize::Custom { width, height } => scaled_glyphs(width, height),
        };
        debug!(?size, "built glyph table");
        Ok(Self { size, glyphs })
    }

    /// The size this table was built for.
    pub fn size(&self) -> GlyphSize {
        self.size
    }

    /// Look up the glyph for a decimal digit (0-9).
    pub fn glyph(&self, digit: u8) -> Option<&Glyph> {
        self.glyphs.get(usize::from(digit))
    }
}

fn standard_glyphs() -> Vec<Glyph> {
    STANDARD_GLYPHS
        .iter()
        .map(|rows| Glyph {
            rows: rows.iter().map(|row| (*row).to_string()).collect(),
        })
        .collect()
}

fn scaled_glyphs(width: usize, height: usize) -> Vec<Glyph> {
    SEGMENT_PATTERNS
        .iter()
        .map(|pattern| scaled_glyph(pattern, width, height))
        .collect()
}

/// Stack the five glyph parts for one digit at the given scale.
fn scaled_glyph(pattern: &SegmentPattern, width: usize, height: usize) -> Glyph {
    let mut rows = Vec::with_capacity(2 * height + 3);
    rows.push(bar_row(pattern.top, width));
    rows.extend(section_rows(pattern.upper, width, height));
    rows.push(bar_row(pattern.middle, width));
    rows.extend(section_rows(pattern.lower, width, height));
    rows.push(bar_row(pattern.bottom, width));
    Glyph { rows }
}

/// One horizontal-bar row: `width` underscores between single spaces, or a
/// blank row of the same length.
fn bar_row(bar: Bar, width: usize) -> String {
    match bar {
        Bar::Lit => format!(" {} ", "_".repeat(width)),
        Bar::Dark => " ".repeat(width + 2),
    }
}

/// The `height` identical rows for one vertical section of a glyph. Row
/// length always matches [`bar_row`]: width + 2.
fn section_rows(side: Side, width: usize, height: usize) -> Vec<String> {
    let row = match side {
        Side::Right => format!("{}|", " ".repeat(width + 1)),
        Side::Left => format!("|{}", " ".repeat(width + 1)),
        Side::Both => format!("|{}|", " ".repeat(width)),
    };
    vec![row; height]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_standard_table_dimensions() {
        let table = GlyphTable::new(GlyphSize::Standard).unwrap();
        for digit in 0..10 {
            let glyph = table.glyph(digit).unwrap();
            assert_eq!(glyph.height(), 3);
            assert_eq!(glyph.width(), 3);
            for row in glyph.rows() {
                assert_eq!(row.len(), 3);
            }
        }
    }

    #[test]
    fn test_standard_glyph_shapes() {
        let table = GlyphTable::new(GlyphSize::Standard).unwrap();
        assert_eq!(table.glyph(0).unwrap().rows(), [" _ ", "| |", "|_|"]);
        assert_eq!(table.glyph(5).unwrap().rows(), [" _ ", "|_ ", " _|"]);
        assert_eq!(table.glyph(8).unwrap().rows(), [" _ ", "|_|", "|_|"]);
    }

    #[test]
    fn test_bar_rows() {
        assert_eq!(bar_row(Bar::Lit, 3), " ___ ");
        assert_eq!(bar_row(Bar::Dark, 3), "     ");
        assert_eq!(bar_row(Bar::Lit, 1), " _ ");
    }

    #[test]
    fn test_section_rows() {
        assert_eq!(section_rows(Side::Right, 1, 2), vec!["  |", "  |"]);
        assert_eq!(section_rows(Side::Left, 1, 1), vec!["|  "]);
        assert_eq!(section_rows(Side::Both, 4, 1), vec!["|    |"]);
    }

    #[test]
    fn test_scaled_glyph_shape() {
        let table = GlyphTable::new(GlyphSize::Custom {
            width: 1,
            height: 1,
        })
        .unwrap();
        let two = table.glyph(2).unwrap();
        assert_eq!(two.rows(), [" _ ", "  |", " _ ", "|  ", " _ "]);
    }

    #[test]
    fn test_scaled_table_dimensions() {
        for (width, height) in [(1, 1), (3, 2), (10, 1), (2, 8)] {
            let size = GlyphSize::Custom { width, height };
            let table = GlyphTable::new(size).unwrap();
            for digit in 0..10 {
                let glyph = table.glyph(digit).unwrap();
                assert_eq!(glyph.height(), size.glyph_height());
                assert_eq!(glyph.width(), size.glyph_width());
                for row in glyph.rows() {
                    assert_eq!(row.len(), size.glyph_width());
                }
            }
        }
    }

    #[test]
    fn test_size_validation() {
        assert!(GlyphSize::Standard.validate().is_ok());
        assert!(GlyphSize::Custom {
            width: 1,
            height: 1
        }
        .validate()
        .is_ok());
        for (width, height) in [(0, 5), (5, 0), (0, 0)] {
            assert_eq!(
                GlyphSize::Custom { width, height }.validate(),
                Err(RenderError::InvalidSize { width, height })
            );
            assert!(GlyphTable::new(GlyphSize::Custom { width, height }).is_err());
        }
    }

    #[test]
    fn test_glyph_size_formulas() {
        assert_eq!(GlyphSize::Standard.glyph_height(), 3);
        assert_eq!(GlyphSize::Standard.glyph_width(), 3);
        let size = GlyphSize::Custom {
            width: 4,
            height: 6,
        };
        assert_eq!(size.glyph_height(), 15);
        assert_eq!(size.glyph_width(), 6);
    }

    #[test]
    fn test_lookup_bounds() {
        let table = GlyphTable::new(GlyphSize::Standard).unwrap();
        assert!(table.glyph(9).is_some());
        assert!(table.glyph(10).is_none());
        assert!(SegmentPattern::for_digit(9).is_some());
        assert!(SegmentPattern::for_digit(10).is_none());
    }

    /// Read the lit segments back out of a standard 3x3 glyph.
    fn standard_topology(digit: usize) -> SegmentPattern {
        let rows = STANDARD_GLYPHS[digit];
        SegmentPattern::new(
            bar_of(rows[0]),
            side_of(rows[1]),
            bar_of(rows[1]),
            side_of(rows[2]),
            bar_of(rows[2]),
        )
    }

    fn bar_of(row: &str) -> Bar {
        if row.contains('_') {
            Bar::Lit
        } else {
            Bar::Dark
        }
    }

    fn side_of(row: &str) -> Side {
        match (row.starts_with('|'), row.ends_with('|')) {
            (true, true) => Side::Both,
            (false, true) => Side::Right,
            (true, false) => Side::Left,
            (false, false) => panic!("standard glyph row {row:?} draws no vertical"),
        }
    }

    #[test]
    fn test_standard_and_scaled_topology_agreement() {
        // The two tables are authored independently. They agree for eight
        // digits; the compact glyphs for 3 and 4 omit the middle bar that
        // the scaled patterns draw. Pin that divergence so drift in either
        // table shows up here.
        for digit in 0..10 {
            let derived = standard_topology(digit);
            let pattern = *SegmentPattern::for_digit(digit as u8).unwrap();
            if digit == 3 || digit == 4 {
                assert_eq!(derived.middle, Bar::Dark, "digit {digit}");
                assert_eq!(pattern.middle, Bar::Lit, "digit {digit}");
                let relit = SegmentPattern {
                    middle: Bar::Lit,
                    ..derived
                };
                assert_eq!(relit, pattern, "digit {digit}");
            } else {
                assert_eq!(derived, pattern, "digit {digit}");
            }
        }
    }

    #[test]
    fn test_tables_are_independent_values() {
        let a = GlyphTable::new(GlyphSize::Standard).unwrap();
        let b = GlyphTable::new(GlyphSize::Custom {
            width: 2,
            height: 2,
        })
        .unwrap();
        // Building b must not disturb a.
        assert_eq!(a.glyph(1).unwrap().rows(), ["   ", "  |", "  |"]);
        assert_eq!(b.glyph(1).unwrap().height(), 7);
        assert_eq!(a.size(), GlyphSize::Standard);
    }
}
