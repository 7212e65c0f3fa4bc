pub mod bars;
pub mod binner;
pub mod frame;

pub use bars::{RowBounds, render, render_into};
pub use binner::{bin, bin_sums, quantize};
pub use frame::{Layout, Section};
