//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, constants::MAX_HEIGHT, data::ParseCsvError};

/// Faults detected while validating a configuration or binning samples.
#[derive(Debug, Clone, PartialEq)]
pub enum BinError {
    /// `x` and `y` hold a different number of samples.
    LengthMismatch { x_len: usize, y_len: usize },
    /// Width is zero, or height is zero or above `MAX_HEIGHT`.
    InvalidDimension { width: usize, height: usize },
    /// The resolved x-range is empty, inverted or not finite.
    Range { low: f64, high: f64 },
    /// A sample fell outside the x-range while out-of-range samples are rejected.
    OutOfRange { index: usize, x: f64 },
    /// A weight is NaN or infinite.
    NonFiniteWeight { index: usize },
    /// Finite weights added up past `f64::MAX` in one bin.
    SumOverflow { bin: usize },
    /// A fixed y-scale maximum that is not a positive finite number.
    InvalidYMax { y_max: f64 },
    /// An x bound had to be derived from the data but no finite x-value exists.
    EmptyData,
}

impl fmt::Display for BinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinError::LengthMismatch { x_len, y_len } => {
                write!(f, "x has {x_len} samples but y has {y_len}")
            }
            BinError::InvalidDimension { width, height } => {
                write!(
                    f,
                    "chart must be at least 1×1 and at most {MAX_HEIGHT} rows, got {width}×{height}"
                )
            }
            BinError::Range { low, high } => {
                write!(f, "x_min {low} must be < x_max {high}, both finite and a finite bin width apart")
            }
            BinError::OutOfRange { index, x } => {
                write!(f, "sample {index} (x = {x}) lies outside the x-range")
            }
            BinError::NonFiniteWeight { index } => {
                write!(f, "weight of sample {index} is not a finite number")
            }
            BinError::SumOverflow { bin } => {
                write!(f, "weights in bin {bin} sum past the largest finite number")
            }
            BinError::InvalidYMax { y_max } => {
                write!(f, "y_max {y_max} must be a positive finite number")
            }
            BinError::EmptyData => write!(f, "no finite x-values to derive the x-range from"),
        }
    }
}
impl Error for BinError {}

/// Top-level error type bubbled up by the command-line front end.
#[derive(Debug)]
pub enum GraphError {
    Io(io::Error),
    Csv(ParseCsvError),
    Color(ColorError),
    Bin(BinError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Io(e) => write!(f, "{e}"),
            GraphError::Csv(e) => write!(f, "{e}"),
            GraphError::Color(e) => write!(f, "{e}"),
            GraphError::Bin(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GraphError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GraphError::Io(e) => Some(e),
            GraphError::Csv(e) => Some(e),
            GraphError::Color(e) => Some(e),
            GraphError::Bin(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<io::Error> for GraphError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for GraphError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<ColorError> for GraphError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<BinError> for GraphError {
    fn from(e: BinError) -> Self {
        Self::Bin(e)
    }
}
