//! A collection of constants.

/// Partial-block ramp, lightest to tallest.
pub const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Every text row spans this many levels.
pub const LEVELS_PER_ROW: usize = GLYPHS.len();

/// Glyph for a column that reaches the top of its row.
pub const FULL_BLOCK: char = GLYPHS[LEVELS_PER_ROW - 1];

/// Glyph for a column that does not reach into a row at all.
pub const BLANK: char = ' ';

/// Tallest chart accepted; keeps every level computation far from overflow.
pub const MAX_HEIGHT: usize = 4096;

/// Rows used when the caller does not ask for a height.
pub const DEFAULT_HEIGHT: usize = 8;
/// Columns used by the demo charts.
pub const DEFAULT_WIDTH: usize = 40;

/// Columns left free at the right edge of the terminal so a full-width
/// chart never wraps.
pub const RIGHT_MARGIN: usize = 1;
