//! Weighted binning of samples onto a `width × height·8` level grid.
//!
//! * `bin_sums` - one weight sum per equal-width x bin
//! * `quantize` - rescale sums to levels, grounded at zero, topped at the
//!   tallest bin or a caller-fixed `y_max`
//! * `bin`      - both, in one call
//!
//! ```rust
//! use block_histogram::{Config, render::binner::bin};
//!
//! let cfg = Config::builder(2, 1).x_range(0.0..=1.0).build()?;
//! let levels = bin(&[0.0, 0.5, 1.0], &[1.0, 1.0, 1.0], &cfg)?;
//! assert_eq!(levels, vec![4, 8]);
//! # Ok::<(), block_histogram::BinError>(())
//! ```

use log::debug;

use crate::core::{
    bounds::resolve_x_range,
    config::{Config, OutOfRange},
    constants::LEVELS_PER_ROW,
    data::Level,
    error::BinError,
};

/// Fixed-width partition of `[low, high]`.
#[derive(Clone, Copy, Debug)]
struct Grid {
    low: f64,
    high: f64,
    step: f64,
    width: usize,
}

impl Grid {
    #[allow(clippy::cast_precision_loss)]
    fn new((low, high): (f64, f64), width: usize) -> Self {
        Self {
            low,
            high,
            step: (high - low) / width as f64,
            width,
        }
    }

    /// Bin for `x`; `None` when `x` is outside `[low, high]` or not finite.
    ///
    /// Bins are half-open except the last, which also takes `x == high`.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index(&self, x: f64) -> Option<usize> {
        if !(self.low..=self.high).contains(&x) {
            return None;
        }
        // non-negative and finite here, so the cast only truncates
        let i = ((x - self.low) / self.step).floor() as usize;
        Some(i.min(self.width - 1))
    }
}

fn check_inputs(x: &[f64], y: &[f64], config: &Config) -> Result<(), BinError> {
    config.validate()?;
    if x.len() != y.len() {
        return Err(BinError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if let Some(index) = y.iter().position(|w| !w.is_finite()) {
        return Err(BinError::NonFiniteWeight { index });
    }
    Ok(())
}

/// Sum of the weights falling into each of `config.width()` bins.
pub fn bin_sums(x: &[f64], y: &[f64], config: &Config) -> Result<Vec<f64>, BinError> {
    check_inputs(x, y, config)?;

    let range = resolve_x_range(x, config)?;
    let grid = Grid::new(range, config.width());
    debug!(
        "binning {} samples into {} bins over [{}, {}]",
        x.len(),
        grid.width,
        grid.low,
        grid.high
    );

    let mut sums = vec![0.0; grid.width];
    let mut dropped = 0usize;
    for (index, (&xv, &w)) in x.iter().zip(y).enumerate() {
        match grid.index(xv) {
            Some(i) => sums[i] += w,
            None => match config.out_of_range() {
                OutOfRange::Drop => dropped += 1,
                OutOfRange::Reject => return Err(BinError::OutOfRange { index, x: xv }),
            },
        }
    }
    if dropped > 0 {
        debug!("dropped {dropped} samples outside the x-range");
    }
    if let Some(bin) = sums.iter().position(|s| !s.is_finite()) {
        return Err(BinError::SumOverflow { bin });
    }
    Ok(sums)
}

/// Rescale bin sums to levels in `[0, height * LEVELS_PER_ROW]`.
///
/// The scale always starts at zero.  Its top is `y_max` when given, so
/// charts quantized with the same `y_max` are comparable; sums above it
/// clamp to the top level.  Without `y_max` the largest sum maps to the
/// top level.  When the top is not positive every level is zero.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn quantize(sums: &[f64], height: usize, y_max: Option<f64>) -> Vec<Level> {
    let top = height.saturating_mul(LEVELS_PER_ROW);
    let y_max = y_max.unwrap_or_else(|| sums.iter().copied().fold(0.0_f64, f64::max));
    debug!("y_max = {y_max}, {top} levels");

    if y_max.is_nan() || y_max <= 0.0 {
        return vec![0; sums.len()];
    }

    sums.iter()
        .map(|&s| {
            // `s / y_max` is exactly 1.0 at the maximum, so the top bin
            // always reaches `top` despite rounding elsewhere.
            let scaled = (s / y_max * top as f64).floor();
            if scaled <= 0.0 {
                0
            } else {
                (scaled as Level).min(top)
            }
        })
        .collect()
}

/// Bin weighted samples and rescale the sums to levels.
///
/// Returns exactly `config.width()` levels, each in
/// `[0, config.height() * LEVELS_PER_ROW]`.
pub fn bin(x: &[f64], y: &[f64], config: &Config) -> Result<Vec<Level>, BinError> {
    let sums = bin_sums(x, y, config)?;
    Ok(quantize(&sums, config.height(), config.y_max()))
}
