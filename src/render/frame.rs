//! Output layer: decorates a rendered chart with a title and colour and
//! writes it out.  The chart text itself is produced by `bars::render`.
//!
//! Two layouts:
//! - `Layout::Titled` - bold title line, chart rows, blank line
//! - `Layout::Boxed`  - chart rows inside a box-drawing border with the
//!   title centred in the top rule

use std::io::Write;

use crate::core::color::{AnsiCode, colorize};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Layout {
    #[default]
    Titled,
    Boxed,
}

/// Title + colour applied around a chart.
#[derive(Clone, Debug)]
pub struct Section {
    title: String,
    color: AnsiCode,
    layout: Layout,
}

/// Write centred bold text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&colorize(&AnsiCode::bold(), text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: AnsiCode::plain(),
            layout: Layout::default(),
        }
    }

    #[must_use]
    pub fn color(mut self, color: AnsiCode) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Decorate `chart` (newline-terminated rows) for display.
    #[must_use]
    pub fn format(&self, chart: &str) -> String {
        let width = chart.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut out = String::with_capacity(chart.len() * 2);

        match self.layout {
            Layout::Titled => {
                if !self.title.is_empty() {
                    out.push_str(&colorize(&AnsiCode::bold(), &self.title));
                    out.push('\n');
                }
                for line in chart.lines() {
                    out.push_str(&colorize(&self.color, line));
                    out.push('\n');
                }
                out.push('\n');
            }
            Layout::Boxed => {
                out.push_str(TL);
                push_centered(&mut out, &self.title, width);
                out.push_str(TR);
                out.push('\n');
                for line in chart.lines() {
                    out.push_str(V);
                    out.push_str(&colorize(&self.color, line));
                    out.push_str(&" ".repeat(width - line.chars().count()));
                    out.push_str(V);
                    out.push('\n');
                }
                out.push_str(BL);
                out.push_str(&H.repeat(width));
                out.push_str(BR);
                out.push('\n');
            }
        }
        out
    }

    /// Decorate `chart` and write it to `out` in one call.
    pub fn write_to<W: Write>(&self, out: &mut W, chart: &str) -> std::io::Result<()> {
        out.write_all(self.format(chart).as_bytes())?;
        out.flush()
    }
}
