//! Linearised rate laws.
//!
//! Both forms plot against `x = 1/T`:
//!
//! - Arrhenius: `ln k = ln A - Ea / (R T)`
//! - Eyring: `ln(k/T) = ln(k_B/h) + ΔS‡/R - ΔH‡ / (R T)`
//!
//! The fitter only needs the y-transform of each form; the physical quantities
//! are recovered from the fitted slope and intercept in `thermo`.

use crate::domain::{PlotPoint, RateSeries};
use crate::math::Measured;

/// Which linear form a rate series is transformed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linearization {
    Arrhenius,
    Eyring,
}

impl Linearization {
    /// Transform a rate constant at temperature `t` (K) into the plot's y value.
    pub fn transform(self, temperature_k: f64, k: Measured) -> Measured {
        match self {
            Linearization::Arrhenius => k.ln(),
            Linearization::Eyring => (k / temperature_k).ln(),
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Linearization::Arrhenius => "ln(k)",
            Linearization::Eyring => "ln(k/T)",
        }
    }

    /// Transform every point of a series.
    pub fn plot_points(self, series: &RateSeries) -> Vec<PlotPoint> {
        series
            .points
            .iter()
            .map(|p| PlotPoint {
                temperature_k: p.temperature_k,
                x: p.inv_t(),
                y: self.transform(p.temperature_k, p.k),
            })
            .collect()
    }
}
