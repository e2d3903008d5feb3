//! Linearised rate laws and thermodynamic conversions.
//!
//! Models are implemented as small, pure functions so that fitting code can
//! stay generic.

pub mod model;
pub mod thermo;

pub use model::*;
pub use thermo::*;
