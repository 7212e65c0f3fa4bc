//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Weighted samples go through two stages:
//! [`bin`] maps them onto `width` levels in `[0, height * 8]`, and
//! [`render`] turns any level sequence into `height + 1` rows of
//! `▁▂▃▄▅▆▇█` glyphs.  [`histogram`] chains the two.
//!
//! ```rust
//! use block_histogram::{Config, histogram, render};
//!
//! let cfg = Config::builder(4, 1).x_range(0.0..=4.0).build()?;
//! let chart = histogram(&[0.5, 1.5, 1.7, 3.9], &[1.0, 1.0, 1.0, 2.0], &cfg)?;
//! assert_eq!(chart, "    \n▄█ █\n");
//!
//! // hand-written bar data skips the binner
//! assert_eq!(render(&[2, 8], 1), "  \n▂█\n");
//! # Ok::<(), block_histogram::BinError>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder, OutOfRange},
    constants::{GLYPHS, LEVELS_PER_ROW},
    data::{Level, Samples},
    error::{BinError, GraphError},
};

pub use render::{RowBounds, bin, bin_sums, quantize, render, render_into};

/// Bin `x`/`y` with `config` and render the result.
///
/// Equivalent to `render(&bin(x, y, config)?, config.height())`.
pub fn histogram(x: &[f64], y: &[f64], config: &Config) -> Result<String, BinError> {
    let levels = bin(x, y, config)?;
    Ok(render(&levels, config.height()))
}
