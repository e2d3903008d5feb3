//! Kinetic isotope effect vs temperature.
//!
//! At each temperature the KIE is `k_H / k_D`; its logarithm is fitted against
//! `1/T` with the propagated σ of `ln(k_H / k_D)` as weights.

use crate::data::validate_dataset;
use crate::domain::{KieResult, KiePoint, KineticDataset};
use crate::error::AppError;
use crate::fit::fit_points;

/// Per-temperature isotope effects, in dataset order.
pub fn kie_points(dataset: &KineticDataset) -> Vec<KiePoint> {
    dataset
        .protium
        .points
        .iter()
        .zip(&dataset.deuterium.points)
        .map(|(h, d)| {
            let ln_ratio = (h.k / d.k).ln();
            KiePoint {
                temperature_k: h.temperature_k,
                ratio: ln_ratio.exp(),
                ln_ratio,
            }
        })
        .collect()
}

/// Compute the KIE at every temperature and fit `ln(KIE)` vs `1/T`.
pub fn analyze_kie(dataset: &KineticDataset) -> Result<KieResult, AppError> {
    validate_dataset(dataset)?;

    let points = kie_points(dataset);
    let plot: Vec<_> = points.iter().map(KiePoint::plot_point).collect();
    let fit = fit_points("ln(KIE)", &plot)?;

    Ok(KieResult { points, fit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_dataset;

    #[test]
    fn kie_equals_exp_of_ln_difference() {
        let ds = builtin_dataset();
        let points = kie_points(&ds);
        for (p, (h, d)) in points.iter().zip(ds.protium.points.iter().zip(&ds.deuterium.points)) {
            let expected = (h.k.value.ln() - d.k.value.ln()).exp();
            assert!(
                (p.ratio.value - expected).abs() < 1e-9 * expected,
                "T={}: {} vs {expected}",
                p.temperature_k,
                p.ratio.value
            );
            assert!((p.ratio.value - h.k.value / d.k.value).abs() < 1e-9 * expected);
        }
    }

    #[test]
    fn builtin_kie_is_normal_and_decreases_with_temperature() {
        let result = analyze_kie(&builtin_dataset()).unwrap();
        assert_eq!(result.points.len(), 4);
        assert!(result.points.iter().all(|p| p.ratio.value > 1.0));
        // 40 °C: 1.18e-5 / 1.30e-6
        assert!((result.points[0].ratio.value - 9.0769).abs() < 1e-3);
        // ln(KIE) grows with 1/T, i.e. the KIE shrinks as the temperature rises.
        assert!(result.fit.slope > 0.0);
    }

    #[test]
    fn ratio_sigma_uses_both_isotopes() {
        let ds = builtin_dataset();
        let p = kie_points(&ds)[0];
        let h = ds.protium.points[0].k;
        let d = ds.deuterium.points[0].k;
        let rel = (h.relative().powi(2) + d.relative().powi(2)).sqrt();
        assert!((p.ln_ratio.std_dev - rel).abs() < 1e-12);
        assert!((p.ratio.std_dev - p.ratio.value * rel).abs() < 1e-9);
    }
}
