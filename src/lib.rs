//! `kie-analysis` library crate.
//!
//! The binary (`kie`) is a thin wrapper around this library so that:
//!
//! - the fits and thermodynamic conversions are testable without spawning processes
//! - the numeric core (`math`, `models`, `fit`) stays independent of plotting and I/O

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
