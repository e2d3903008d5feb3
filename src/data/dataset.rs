//! The measured rate constants.
//!
//! Four temperatures (40, 50, 60, 70 °C), each with a protium and a deuterium
//! rate constant (s⁻¹) and its standard deviation.

use crate::domain::{Isotope, KineticDataset, RatePoint, RateSeries};
use crate::error::AppError;
use crate::math::Measured;
use crate::models::ZERO_CELSIUS;

pub const TEMPERATURES_C: [f64; 4] = [40.0, 50.0, 60.0, 70.0];

const K_H: [f64; 4] = [1.18e-05, 4.29e-05, 1.52e-04, 5.32e-04];
const SD_H: [f64; 4] = [2.10e-07, 9.28e-07, 5.75e-06, 5.90e-06];

const K_D: [f64; 4] = [1.30e-06, 6.42e-06, 2.51e-05, 1.04e-04];
const SD_D: [f64; 4] = [3.08e-08, 3.70e-07, 8.43e-07, 6.48e-06];

/// Measurement temperatures in Kelvin.
pub fn temperatures_k() -> Vec<f64> {
    TEMPERATURES_C.iter().map(|c| c + ZERO_CELSIUS).collect()
}

/// Build a series from paired value / standard deviation arrays.
pub fn series_from_arrays(isotope: Isotope, temperatures_k: &[f64], k: &[f64], sd: &[f64]) -> RateSeries {
    let points = temperatures_k
        .iter()
        .zip(k.iter().zip(sd))
        .map(|(&temperature_k, (&k, &sd))| RatePoint {
            temperature_k,
            k: Measured::new(k, sd),
        })
        .collect();
    RateSeries { isotope, points }
}

/// The built-in protium / deuterium dataset.
pub fn builtin_dataset() -> KineticDataset {
    let temps = temperatures_k();
    KineticDataset {
        protium: series_from_arrays(Isotope::Protium, &temps, &K_H, &SD_H),
        deuterium: series_from_arrays(Isotope::Deuterium, &temps, &K_D, &SD_D),
    }
}

/// Check a single series before fitting.
pub fn validate_series(series: &RateSeries) -> Result<(), AppError> {
    let label = series.isotope.display_name();
    if series.points.len() < 2 {
        return Err(AppError::new(
            3,
            format!("{label} series needs at least 2 temperatures, got {}.", series.points.len()),
        ));
    }
    for p in &series.points {
        if !(p.temperature_k.is_finite() && p.temperature_k > 0.0) {
            return Err(AppError::new(
                3,
                format!("{label}: invalid temperature {} K.", p.temperature_k),
            ));
        }
        if !(p.k.value.is_finite() && p.k.value > 0.0) {
            return Err(AppError::new(
                3,
                format!("{label}: rate constant at {:.2} K must be positive, got {}.", p.temperature_k, p.k.value),
            ));
        }
        if !(p.k.std_dev.is_finite() && p.k.std_dev > 0.0) {
            return Err(AppError::new(
                3,
                format!("{label}: standard deviation at {:.2} K must be positive, got {}.", p.temperature_k, p.k.std_dev),
            ));
        }
    }
    Ok(())
}

/// Check both series and that they were measured at the same temperatures.
pub fn validate_dataset(dataset: &KineticDataset) -> Result<(), AppError> {
    validate_series(&dataset.protium)?;
    validate_series(&dataset.deuterium)?;

    let same_grid = dataset.protium.points.len() == dataset.deuterium.points.len()
        && dataset
            .protium
            .points
            .iter()
            .zip(&dataset.deuterium.points)
            .all(|(h, d)| (h.temperature_k - d.temperature_k).abs() < 1e-9);
    if !same_grid {
        return Err(AppError::new(
            3,
            "Protium and deuterium series must share the same temperatures.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_is_valid() {
        let ds = builtin_dataset();
        validate_dataset(&ds).unwrap();
        assert_eq!(ds.protium.points.len(), 4);
        assert!((ds.protium.points[0].temperature_k - 313.15).abs() < 1e-9);
        assert!((ds.deuterium.points[3].k.value - 1.04e-4).abs() < 1e-18);
    }

    #[test]
    fn rejects_non_positive_rate_constant() {
        let mut ds = builtin_dataset();
        ds.deuterium.points[1].k = Measured::new(0.0, 1e-7);
        let err = validate_dataset(&ds).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().contains("Deuterium"));
    }

    #[test]
    fn rejects_mismatched_temperatures() {
        let mut ds = builtin_dataset();
        ds.deuterium.points[2].temperature_k += 1.0;
        assert!(validate_dataset(&ds).is_err());
    }
}
