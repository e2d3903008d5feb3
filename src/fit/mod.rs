//! Fitting orchestration.
//!
//! Responsibilities:
//!
//! - weighted straight-line fit through linearised points (`fitter`)
//! - KIE vs temperature (`kie`)
//! - Arrhenius and Eyring analyses per isotope (`arrhenius`, `eyring`)

pub mod arrhenius;
pub mod eyring;
pub mod fitter;
pub mod kie;

pub use arrhenius::*;
pub use eyring::*;
pub use fitter::*;
pub use kie::*;
