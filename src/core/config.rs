//! Run-time configuration object + fluent builder.

use crate::core::{bounds::check_x_range, constants::MAX_HEIGHT, error::BinError};

/// What the binner does with a sample whose `x` lies outside the x-range.
///
/// Narrow explicit bounds are the normal way to look at a window of a
/// larger data set, so such samples are dropped unless the caller opts
/// into [`OutOfRange::Reject`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutOfRange {
    #[default]
    Drop,
    Reject,
}

/// Validated chart geometry and binning parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    width: usize,
    height: usize,
    x_min: Option<f64>,
    x_max: Option<f64>,
    y_max: Option<f64>,
    out_of_range: OutOfRange,
}

impl Config {
    /// Start a builder for a chart `width` columns wide and `height` rows tall.
    #[inline]
    #[must_use]
    pub fn builder(width: usize, height: usize) -> ConfigBuilder {
        ConfigBuilder::new(width, height)
    }

    /// Number of bins, one text column each.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of full-resolution rows; the rendered chart has one more.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn x_min(&self) -> Option<f64> {
        self.x_min
    }

    #[inline]
    #[must_use]
    pub fn x_max(&self) -> Option<f64> {
        self.x_max
    }

    /// Fixed top of the y-scale; `None` scales to the tallest bin.
    #[inline]
    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.y_max
    }

    #[inline]
    #[must_use]
    pub fn out_of_range(&self) -> OutOfRange {
        self.out_of_range
    }

    /// Re-check the invariants `build` established.
    pub(crate) fn validate(&self) -> Result<(), BinError> {
        if self.width == 0 || self.height == 0 || self.height > MAX_HEIGHT {
            return Err(BinError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        for bound in [self.x_min, self.x_max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(BinError::Range {
                    low: self.x_min.unwrap_or(f64::NAN),
                    high: self.x_max.unwrap_or(f64::NAN),
                });
            }
        }
        if let (Some(low), Some(high)) = (self.x_min, self.x_max) {
            check_x_range(low, high, self.width)?;
        }
        if let Some(y_max) = self.y_max {
            if !y_max.is_finite() || y_max <= 0.0 {
                return Err(BinError::InvalidYMax { y_max });
            }
        }
        Ok(())
    }
}

/// Fluent builder; nothing is checked until `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    width: usize,
    height: usize,
    x_min: Option<f64>,
    x_max: Option<f64>,
    y_max: Option<f64>,
    out_of_range: OutOfRange,
}

impl ConfigBuilder {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            x_min: None,
            x_max: None,
            y_max: None,
            out_of_range: OutOfRange::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn x_min(mut self, v: f64) -> Self {
        self.x_min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn x_max(mut self, v: f64) -> Self {
        self.x_max = Some(v);
        self
    }
    /// Lower bound, or derive it from the data when `None`.
    #[inline]
    #[must_use]
    pub fn x_min_opt(mut self, v: Option<f64>) -> Self {
        self.x_min = v;
        self
    }
    /// Upper bound, or derive it from the data when `None`.
    #[inline]
    #[must_use]
    pub fn x_max_opt(mut self, v: Option<f64>) -> Self {
        self.x_max = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn x_range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.x_min = Some(*r.start());
        self.x_max = Some(*r.end());
        self
    }
    /// Pin the top of the y-scale so several charts share one scale.
    /// Bins above it are drawn at full height.
    #[inline]
    #[must_use]
    pub fn y_max(mut self, v: f64) -> Self {
        self.y_max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn y_max_opt(mut self, v: Option<f64>) -> Self {
        self.y_max = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn out_of_range(mut self, policy: OutOfRange) -> Self {
        self.out_of_range = policy;
        self
    }

    pub fn build(self) -> Result<Config, BinError> {
        let cfg = Config {
            width: self.width,
            height: self.height,
            x_min: self.x_min,
            x_max: self.x_max,
            y_max: self.y_max,
            out_of_range: self.out_of_range,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, BinError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_bounds_open_and_drop_outliers() {
        let cfg = Config::builder(20, 10).build().unwrap();
        assert_eq!(cfg.width(), 20);
        assert_eq!(cfg.height(), 10);
        assert_eq!(cfg.x_min(), None);
        assert_eq!(cfg.x_max(), None);
        assert_eq!(cfg.y_max(), None);
        assert_eq!(cfg.out_of_range(), OutOfRange::Drop);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Config::builder(0, 3).build(),
            Err(BinError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            Config::builder(3, 0).build(),
            Err(BinError::InvalidDimension {
                width: 3,
                height: 0
            })
        );
    }

    #[test]
    fn height_is_capped() {
        assert!(Config::builder(1, MAX_HEIGHT).build().is_ok());
        assert_eq!(
            Config::builder(1, MAX_HEIGHT + 1).build(),
            Err(BinError::InvalidDimension {
                width: 1,
                height: MAX_HEIGHT + 1
            })
        );
        assert!(matches!(
            Config::builder(1, usize::MAX).build(),
            Err(BinError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn explicit_span_too_wide_to_divide_is_rejected() {
        assert_eq!(
            Config::builder(4, 2).x_range(-1e308..=1e308).build(),
            Err(BinError::Range {
                low: -1e308,
                high: 1e308
            })
        );
    }

    #[test]
    fn y_max_must_be_positive_and_finite() {
        let cfg = Config::builder(4, 2).y_max(12.5).build().unwrap();
        assert_eq!(cfg.y_max(), Some(12.5));
        for bad in [0.0, -1.0, f64::INFINITY] {
            assert_eq!(
                Config::builder(4, 2).y_max(bad).build(),
                Err(BinError::InvalidYMax { y_max: bad })
            );
        }
        assert!(matches!(
            Config::builder(4, 2).y_max_opt(Some(f64::NAN)).build(),
            Err(BinError::InvalidYMax { .. })
        ));
    }

    #[test]
    fn equal_or_inverted_explicit_bounds_are_rejected() {
        assert_eq!(
            Config::builder(4, 2).x_range(1.0..=1.0).build(),
            Err(BinError::Range {
                low: 1.0,
                high: 1.0
            })
        );
        assert!(matches!(
            Config::builder(4, 2).x_min(2.0).x_max(-2.0).build(),
            Err(BinError::Range { .. })
        ));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(matches!(
            Config::builder(4, 2).x_max(f64::INFINITY).build(),
            Err(BinError::Range { .. })
        ));
        assert!(matches!(
            Config::builder(4, 2).x_min(f64::NAN).build(),
            Err(BinError::Range { .. })
        ));
    }

    #[test]
    fn a_single_explicit_bound_is_accepted() {
        let cfg = Config::builder(4, 2)
            .x_min_opt(Some(-1.0))
            .x_max_opt(None)
            .out_of_range(OutOfRange::Reject)
            .build()
            .unwrap();
        assert_eq!(cfg.x_min(), Some(-1.0));
        assert_eq!(cfg.x_max(), None);
        assert_eq!(cfg.out_of_range(), OutOfRange::Reject);
    }

    #[test]
    fn builder_converts_into_result() {
        let r: Result<Config, BinError> = Config::builder(1, 1).into();
        assert!(r.is_ok());
    }
}
