//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - printed in the console report
//! - exported to JSON/CSV

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::math::{LinearFit, Measured};

/// Substrate isotope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Isotope {
    Protium,
    Deuterium,
}

impl Isotope {
    /// Element symbol used in labels and exports.
    pub fn symbol(self) -> &'static str {
        match self {
            Isotope::Protium => "H",
            Isotope::Deuterium => "D",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Isotope::Protium => "Protium",
            Isotope::Deuterium => "Deuterium",
        }
    }
}

/// One measured rate constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Absolute temperature (K).
    pub temperature_k: f64,
    /// Rate constant with its standard deviation.
    pub k: Measured,
}

impl RatePoint {
    /// Reciprocal temperature `1/T` (K⁻¹).
    pub fn inv_t(&self) -> f64 {
        1.0 / self.temperature_k
    }
}

/// Rate constants for one isotope across temperatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    pub isotope: Isotope,
    pub points: Vec<RatePoint>,
}

/// Paired protium/deuterium measurements at the same temperatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticDataset {
    pub protium: RateSeries,
    pub deuterium: RateSeries,
}

/// A point on a linearised plot: `x = 1/T`, `y` with propagated σ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub temperature_k: f64,
    pub x: f64,
    pub y: Measured,
}

/// Kinetic isotope effect at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KiePoint {
    pub temperature_k: f64,
    /// `k_H / k_D`.
    pub ratio: Measured,
    /// `ln(k_H / k_D)`.
    pub ln_ratio: Measured,
}

/// `ln(KIE)` vs `1/T` analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KieResult {
    pub points: Vec<KiePoint>,
    pub fit: LinearFit,
}

impl KiePoint {
    /// `ln(KIE)` against `1/T`.
    pub fn plot_point(&self) -> PlotPoint {
        PlotPoint {
            temperature_k: self.temperature_k,
            x: 1.0 / self.temperature_k,
            y: self.ln_ratio,
        }
    }
}

impl KieResult {
    pub fn plot_points(&self) -> Vec<PlotPoint> {
        self.points.iter().map(KiePoint::plot_point).collect()
    }
}

/// Arrhenius analysis (`ln k` vs `1/T`) for one isotope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusResult {
    pub isotope: Isotope,
    pub points: Vec<PlotPoint>,
    pub fit: LinearFit,
    /// Activation energy (cal/mol).
    pub activation_energy: Measured,
    /// Pre-exponential factor (units of k).
    pub prefactor: Measured,
}

/// Eyring analysis (`ln(k/T)` vs `1/T`) for one isotope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyringResult {
    pub isotope: Isotope,
    pub points: Vec<PlotPoint>,
    pub fit: LinearFit,
    /// Activation enthalpy ΔH‡ (cal/mol).
    pub enthalpy: Measured,
    /// Activation entropy ΔS‡ (cal K⁻¹ mol⁻¹).
    pub entropy: Measured,
    /// Gibbs free energy of activation ΔG‡ at `reference_temp_k` (cal/mol).
    pub gibbs: Measured,
    pub reference_temp_k: f64,
}

/// Protium vs deuterium comparison derived from the Arrhenius fits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsotopeComparison {
    /// `A_H / A_D`.
    pub prefactor_ratio: Measured,
    /// `ln(A_H / A_D)`.
    pub ln_prefactor_ratio: Measured,
    /// `Ea_D - Ea_H` (kcal/mol).
    pub ea_difference_kcal: Measured,
}

/// A full analysis run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub out_dir: PathBuf,
    pub plot: bool,
    pub plot_width: u32,
    pub plot_height: u32,
    /// Temperature (K) at which ΔG‡ is evaluated.
    pub reference_temp_k: f64,
    pub export_results: Option<PathBuf>,
    pub export_points: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            plot: true,
            plot_width: 1920,
            plot_height: 1440,
            reference_temp_k: crate::models::T_REF,
            export_results: None,
            export_points: None,
        }
    }
}

/// Configuration of a synthetic recovery run.
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    /// True activation energy (kcal/mol).
    pub ea_kcal: f64,
    /// True `ln A`.
    pub ln_a: f64,
    /// Relative standard deviation applied to each rate constant.
    pub noise: f64,
    pub replicates: usize,
    pub seed: u64,
    pub temperatures_k: Vec<f64>,
    /// Optional JSON export of the summary.
    pub export: Option<PathBuf>,
}

/// Aggregate outcome of a synthetic recovery run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub replicates: usize,
    pub true_ea_kcal: f64,
    pub mean_ea_kcal: f64,
    /// Scatter of the recovered Ea across replicates.
    pub empirical_sd_kcal: f64,
    /// Average propagated standard error of Ea.
    pub mean_propagated_sd_kcal: f64,
    /// Fraction of replicates whose ±1σ interval contains the true Ea.
    pub coverage_1sigma: f64,
}
