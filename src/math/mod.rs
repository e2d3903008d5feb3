//! Mathematical utilities: values with uncertainty and weighted least squares.

pub mod uncertain;
pub mod wls;

pub use uncertain::*;
pub use wls::*;
