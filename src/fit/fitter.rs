//! Shared fitting step: weighted straight line through linearised points.
//!
//! Given plot points `(x_i, y_i ± σ_i)` we solve the weighted OLS problem and
//! check the result for obvious trouble (non-finite parameters, a chi-square
//! far above its degrees of freedom).

use crate::domain::PlotPoint;
use crate::error::AppError;
use crate::math::{LinearFit, weighted_linear_fit};

/// Reduced chi-square above which the fit is flagged in the log.
const CHI2_WARN: f64 = 10.0;

/// Fit `y = intercept + slope · x` through `points` with weights `1/σ²`.
pub fn fit_points(label: &str, points: &[PlotPoint]) -> Result<LinearFit, AppError> {
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y.value).collect();
    let sigma: Vec<f64> = points.iter().map(|p| p.y.std_dev).collect();

    let fit = weighted_linear_fit(&x, &y, &sigma)
        .map_err(|e| AppError::new(e.exit_code(), format!("{label}: {e}")))?;

    if !(fit.intercept.is_finite() && fit.slope.is_finite()) {
        return Err(AppError::new(4, format!("{label}: fit produced non-finite parameters.")));
    }

    log::debug!(
        "{label}: intercept={:.6}±{:.6} slope={:.3}±{:.3} chi2={:.3} (n={})",
        fit.intercept,
        fit.intercept_se,
        fit.slope,
        fit.slope_se,
        fit.chi_squared,
        fit.n
    );
    if let Some(reduced) = fit.reduced_chi_squared() {
        if reduced > CHI2_WARN {
            log::warn!(
                "{label}: reduced chi-square {reduced:.1} suggests the reported uncertainties are too small"
            );
        }
    }

    Ok(fit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Measured;

    #[test]
    fn error_carries_label() {
        let points = vec![PlotPoint {
            temperature_k: 300.0,
            x: 1.0 / 300.0,
            y: Measured::new(1.0, 0.1),
        }];
        let err = fit_points("Arrhenius (H)", &points).unwrap_err();
        assert!(err.message().starts_with("Arrhenius (H):"), "{err}");
        assert_eq!(err.exit_code(), 4);
    }
}
