//! Input/output helpers.
//!
//! - results JSON export/read-back and per-temperature CSV export (`export`)
//! - simulation summary JSON export/read-back (`export`)

pub mod export;

pub use export::*;
