//! Static image output.
//!
//! - PNG figures with error bars (`png`)
//! - runtime font registration for axis text (`fonts`)

pub mod fonts;
pub mod png;

pub use png::*;
