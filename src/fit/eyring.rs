//! Eyring analysis: `ln(k/T)` vs `1/T`.

use crate::data::validate_series;
use crate::domain::{EyringResult, RateSeries};
use crate::error::AppError;
use crate::fit::fit_points;
use crate::models::{Linearization, enthalpy, entropy, gibbs};

/// Fit one isotope's Eyring plot and derive ΔH‡, ΔS‡ and ΔG‡(`reference_temp_k`).
pub fn analyze_eyring(series: &RateSeries, reference_temp_k: f64) -> Result<EyringResult, AppError> {
    if !(reference_temp_k.is_finite() && reference_temp_k > 0.0) {
        return Err(AppError::new(
            2,
            format!("Reference temperature must be positive, got {reference_temp_k} K."),
        ));
    }
    validate_series(series)?;

    let points = Linearization::Eyring.plot_points(series);
    let label = format!("Eyring ({})", series.isotope.symbol());
    let fit = fit_points(&label, &points)?;

    let enthalpy = enthalpy(fit.slope_measured());
    let entropy = entropy(fit.intercept_measured());
    let gibbs = gibbs(enthalpy, entropy, reference_temp_k);

    Ok(EyringResult {
        isotope: series.isotope,
        points,
        fit,
        enthalpy,
        entropy,
        gibbs,
        reference_temp_k,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{builtin_dataset, series_from_arrays};
    use crate::domain::Isotope;
    use crate::fit::analyze_arrhenius;
    use crate::models::{H_PLANCK, K_B, R, T_REF};

    #[test]
    fn recovers_eyring_parameters() {
        let dh = 22_000.0;
        let ds = -8.0;
        let temps = [300.0, 315.0, 330.0, 345.0];
        let k: Vec<f64> = temps
            .iter()
            .map(|&t| K_B * t / H_PLANCK * (ds / R).exp() * (-dh / (R * t)).exp())
            .collect();
        let sd: Vec<f64> = k.iter().map(|k| 0.01 * k).collect();
        let series = series_from_arrays(Isotope::Deuterium, &temps, &k, &sd);

        let r = analyze_eyring(&series, T_REF).unwrap();
        assert!((r.enthalpy.value - dh).abs() < 1e-3, "ΔH {}", r.enthalpy);
        assert!((r.entropy.value - ds).abs() < 1e-6, "ΔS {}", r.entropy);
    }

    #[test]
    fn gibbs_is_consistent_with_enthalpy_and_entropy() {
        let r = analyze_eyring(&builtin_dataset().protium, T_REF).unwrap();
        let g = r.enthalpy - T_REF * r.entropy;
        assert!((r.gibbs.value - g.value).abs() < 1e-9 * g.value.abs());
        assert!((r.gibbs.std_dev - g.std_dev).abs() < 1e-9 * g.std_dev);
        assert_eq!(r.reference_temp_k, T_REF);
    }

    #[test]
    fn enthalpy_is_activation_energy_minus_mean_rt() {
        // ln(k/T) = ln k - ln T, so the Eyring slope differs from the Arrhenius
        // slope by roughly the mean temperature.
        let ds = builtin_dataset();
        let a = analyze_arrhenius(&ds.protium).unwrap();
        let e = analyze_eyring(&ds.protium, T_REF).unwrap();
        let diff = a.activation_energy.value - e.enthalpy.value;
        assert!((diff - R * 328.0).abs() < R * 10.0, "Ea - ΔH = {diff}");
    }

    #[test]
    fn rejects_bad_reference_temperature() {
        let err = analyze_eyring(&builtin_dataset().protium, 0.0).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
