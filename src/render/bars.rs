//! Level sequence to rows of block glyphs.
//!
//! ### Workflow
//! Rows are produced top-down, `height` first and `0` last, so the chart
//! has `height + 1` lines.  Row `r` owns the level band
//! `[r * 8, (r + 1) * 8)` and each column picks one glyph for it:
//!
//! * at or above the band top → `█`
//! * inside the band → the ramp glyph for the partial height
//! * at or below the band bottom → blank
//!
//! The topmost row can only hold a blank or (for levels past
//! `height * 8`) a full block; it is the empty headroom above the tallest
//! bar.

use crate::core::{
    constants::{BLANK, FULL_BLOCK, GLYPHS, LEVELS_PER_ROW},
    data::Level,
};

/// Level band covered by one text row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowBounds {
    pub min_y: Level,
    pub max_y: Level,
}

impl RowBounds {
    #[inline]
    #[must_use]
    pub const fn new(row: usize) -> Self {
        // saturating: rows past `usize::MAX / 8` can only hold blanks
        Self {
            min_y: row.saturating_mul(LEVELS_PER_ROW),
            max_y: row.saturating_add(1).saturating_mul(LEVELS_PER_ROW),
        }
    }

    /// Glyph drawn in this row for a column at `level`.
    #[inline]
    #[must_use]
    pub const fn glyph(&self, level: Level) -> char {
        if level >= self.max_y {
            FULL_BLOCK
        } else if level > self.min_y {
            // 1..=7 levels into the band → ramp 0..=6
            GLYPHS[level - self.min_y - 1]
        } else {
            BLANK
        }
    }
}

/// Append one row (glyphs + `'\n'`) to `buf`.
#[inline]
fn push_row(buf: &mut String, levels: &[Level], bounds: RowBounds) {
    buf.extend(levels.iter().map(|&v| bounds.glyph(v)));
    buf.push('\n');
}

/// Append the `height + 1` chart rows for `levels` to `buf`.
pub fn render_into(buf: &mut String, levels: &[Level], height: usize) {
    // every glyph in the ramp is 3 bytes of UTF-8; blanks are 1.
    // Only a hint: a failed reservation just means the String grows as it goes.
    let _ = buf.try_reserve(
        height
            .saturating_add(1)
            .saturating_mul(levels.len().saturating_mul(3).saturating_add(1)),
    );
    for row in (0..=height).rev() {
        push_row(buf, levels, RowBounds::new(row));
    }
}

/// Render `levels` as `height + 1` newline-terminated rows, top row first.
///
/// Levels are not validated: anything past `height * 8` saturates to a
/// full block in every row, so hand-written bar data needs no
/// preprocessing.
#[must_use]
pub fn render(levels: &[Level], height: usize) -> String {
    let mut out = String::new();
    render_into(&mut out, levels, height);
    out
}
