//! Input data: the built-in measurements and synthetic replicates.

pub mod dataset;
pub mod synthetic;

pub use dataset::*;
pub use synthetic::*;
