//! Geometry helpers: x-range resolution + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::{config::Config, constants::RIGHT_MARGIN, error::BinError};

/// Extrema of the finite values in `xs`, or `None` if there are none.
#[must_use]
pub fn finite_extrema(xs: &[f64]) -> Option<(f64, f64)> {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for &x in xs.iter().filter(|x| x.is_finite()) {
        low = low.min(x);
        high = high.max(x);
    }
    (low <= high).then_some((low, high))
}

/// Check that `[low, high]` splits into `width` bins of finite, non-zero
/// step.  Both ends being finite is not enough: `high - low` can still
/// overflow, and a subnormal span can divide down to zero.
#[allow(clippy::cast_precision_loss)]
pub fn check_x_range(low: f64, high: f64, width: usize) -> Result<(), BinError> {
    let step = (high - low) / width as f64;
    if !low.is_finite() || !high.is_finite() || high <= low || !step.is_finite() || step <= 0.0 {
        return Err(BinError::Range { low, high });
    }
    Ok(())
}

/// Resolve the x-range used for binning.
///
/// * Configured bounds win; missing ones come from the finite extrema of `xs`.
/// * A bound that must be derived from a series without finite values is
///   [`BinError::EmptyData`].
/// * Unlike a line plot there is no padding for a flat series: a resolved
///   range with `high <= low` is [`BinError::Range`].
pub fn resolve_x_range(xs: &[f64], config: &Config) -> Result<(f64, f64), BinError> {
    let (low, high) = match (config.x_min(), config.x_max()) {
        (Some(low), Some(high)) => (low, high),
        (low, high) => {
            let (data_low, data_high) = finite_extrema(xs).ok_or(BinError::EmptyData)?;
            (low.unwrap_or(data_low), high.unwrap_or(data_high))
        }
    };

    check_x_range(low, high, config.width())?;
    Ok((low, high))
}

/// Current terminal width (80 columns fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> Width {
    terminal_size().map_or(Width(80), |(w, _)| w)
}

/// Chart width that fits on one terminal line.
#[inline]
#[must_use]
pub fn chart_width(Width(cols): Width) -> usize {
    usize::from(cols).saturating_sub(RIGHT_MARGIN).max(1)
}
