//! Physical constants and fit-parameter → thermodynamics conversions.
//!
//! Energies are in cal/mol and entropies in cal K⁻¹ mol⁻¹, matching the gas
//! constant below.

use crate::math::Measured;

/// Gas constant (cal K⁻¹ mol⁻¹).
pub const R: f64 = 1.987_204_258_640_83;
/// Boltzmann constant (J K⁻¹).
pub const K_B: f64 = 1.380_66e-23;
/// Planck constant (J s).
pub const H_PLANCK: f64 = 6.626_075_5e-34;
/// Default reference temperature for ΔG‡ (K).
pub const T_REF: f64 = 298.15;
/// Offset between Celsius and Kelvin.
pub const ZERO_CELSIUS: f64 = 273.15;

pub const CAL_PER_KCAL: f64 = 1000.0;

/// `Ea = -slope · R` from an Arrhenius fit.
pub fn activation_energy(slope: Measured) -> Measured {
    -slope * R
}

/// `A = exp(intercept)` from an Arrhenius fit.
pub fn prefactor(intercept: Measured) -> Measured {
    intercept.exp()
}

/// `ΔH‡ = -slope · R` from an Eyring fit.
pub fn enthalpy(slope: Measured) -> Measured {
    -slope * R
}

/// `ΔS‡ = R · (intercept - ln(k_B/h))` from an Eyring fit.
pub fn entropy(intercept: Measured) -> Measured {
    R * (intercept - (K_B / H_PLANCK).ln())
}

/// `ΔG‡ = ΔH‡ - T · ΔS‡`.
pub fn gibbs(enthalpy: Measured, entropy: Measured, temperature_k: f64) -> Measured {
    enthalpy - temperature_k * entropy
}

pub fn to_kcal(cal: Measured) -> Measured {
    cal / CAL_PER_KCAL
}
