//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - measured inputs (`Isotope`, `RatePoint`, `RateSeries`, `KineticDataset`)
//! - analysis outputs (`KieResult`, `ArrheniusResult`, `EyringResult`, etc.)
//! - run configuration (`AnalysisConfig`, `SimulateConfig`)

pub mod types;

pub use types::*;
