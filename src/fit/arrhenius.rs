//! Arrhenius analysis: `ln k` vs `1/T`.
//!
//! - slope → activation energy `Ea = -slope · R`
//! - intercept → pre-exponential factor `A = exp(intercept)`

use crate::data::validate_series;
use crate::domain::{ArrheniusResult, IsotopeComparison, RateSeries};
use crate::error::AppError;
use crate::fit::fit_points;
use crate::math::Measured;
use crate::models::{Linearization, activation_energy, prefactor, to_kcal};

/// Fit one isotope's Arrhenius plot.
pub fn analyze_arrhenius(series: &RateSeries) -> Result<ArrheniusResult, AppError> {
    validate_series(series)?;

    let points = Linearization::Arrhenius.plot_points(series);
    let label = format!("Arrhenius ({})", series.isotope.symbol());
    let fit = fit_points(&label, &points)?;

    let activation_energy = activation_energy(fit.slope_measured());
    let prefactor = prefactor(fit.intercept_measured());
    if !(activation_energy.is_finite() && prefactor.is_finite()) {
        return Err(AppError::new(4, format!("{label}: non-finite activation parameters.")));
    }

    Ok(ArrheniusResult {
        isotope: series.isotope,
        points,
        fit,
        activation_energy,
        prefactor,
    })
}

/// Compare the light and heavy isotope Arrhenius parameters.
///
/// The prefactors are re-seeded as independent values before taking the ratio,
/// as are the activation energies before differencing.
pub fn compare_isotopes(light: &ArrheniusResult, heavy: &ArrheniusResult) -> IsotopeComparison {
    let a_light = Measured::new(light.prefactor.value, light.prefactor.std_dev);
    let a_heavy = Measured::new(heavy.prefactor.value, heavy.prefactor.std_dev);
    let prefactor_ratio = a_light / a_heavy;

    let ea_difference = heavy.activation_energy - light.activation_energy;

    IsotopeComparison {
        prefactor_ratio,
        ln_prefactor_ratio: prefactor_ratio.ln(),
        ea_difference_kcal: to_kcal(ea_difference),
    }
}
