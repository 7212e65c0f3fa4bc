//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;

// re-export frequently-used items for convenience
pub use bounds::resolve_x_range;
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder, OutOfRange};
pub use constants::{BLANK, DEFAULT_HEIGHT, DEFAULT_WIDTH, FULL_BLOCK, GLYPHS, LEVELS_PER_ROW};
pub use data::{Level, Samples};
pub use error::{BinError, GraphError};
