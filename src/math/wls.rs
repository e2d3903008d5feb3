//! Weighted least squares for straight lines.
//!
//! Every linearised kinetics plot in this crate is a problem of the form:
//!
//! ```text
//! minimize Σ (y_i - (b0 + b1 x_i))² / σ_i²
//! ```
//!
//! Implementation choices:
//! - We scale rows by `1/σ_i` and solve an ordinary least squares problem with
//!   SVD, which stays well behaved for the narrow `1/T` ranges typical of
//!   kinetics (the design columns are nearly collinear).
//! - The parameter covariance is `(XᵀWX)⁻¹` with σ taken as absolute: it is
//!   *not* rescaled by the reduced chi-square.

use nalgebra::{DMatrix, DVector, Matrix2};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::math::Measured;

/// Straight-line fit `y = intercept + slope · x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    pub intercept_se: f64,
    pub slope_se: f64,
    /// Parameter covariance, ordered `[intercept, slope]`.
    pub covariance: [[f64; 2]; 2],
    /// Weighted residual sum of squares `Σ ((y_i - ŷ_i) / σ_i)²`.
    pub chi_squared: f64,
    pub n: usize,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn intercept_measured(&self) -> Measured {
        Measured::new(self.intercept, self.intercept_se)
    }

    pub fn slope_measured(&self) -> Measured {
        Measured::new(self.slope, self.slope_se)
    }

    /// Degrees of freedom left after fitting two parameters.
    pub fn dof(&self) -> usize {
        self.n.saturating_sub(2)
    }

    /// `chi² / dof`, or `None` for an exactly determined fit.
    pub fn reduced_chi_squared(&self) -> Option<f64> {
        match self.dof() {
            0 => None,
            dof => Some(self.chi_squared / dof as f64),
        }
    }
}

/// Fit a straight line by weighted least squares with weights `1/σ²`.
pub fn weighted_linear_fit(x: &[f64], y: &[f64], sigma: &[f64]) -> Result<LinearFit, AppError> {
    let n = x.len();
    if y.len() != n || sigma.len() != n {
        return Err(AppError::new(
            4,
            format!(
                "Weighted fit input lengths differ (x={}, y={}, sigma={}).",
                n,
                y.len(),
                sigma.len()
            ),
        ));
    }
    if n < 2 {
        return Err(AppError::new(4, format!("Weighted fit needs at least 2 points, got {n}.")));
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(AppError::new(4, "Weighted fit received non-finite data."));
    }
    if let Some(bad) = sigma.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
        return Err(AppError::new(
            4,
            format!("Weighted fit requires positive finite sigma, got {bad}."),
        ));
    }

    let mut design = DMatrix::zeros(n, 2);
    let mut rhs = DVector::zeros(n);
    for i in 0..n {
        let inv = 1.0 / sigma[i];
        design[(i, 0)] = inv;
        design[(i, 1)] = x[i] * inv;
        rhs[i] = y[i] * inv;
    }

    let normal = design.transpose() * &design;
    let normal = Matrix2::new(normal[(0, 0)], normal[(0, 1)], normal[(1, 0)], normal[(1, 1)]);
    let covariance = normal.try_inverse().ok_or_else(|| {
        AppError::new(4, "Weighted fit is singular (are all x values identical?).")
    })?;

    let beta = solve_least_squares(&design, &rhs)
        .ok_or_else(|| AppError::new(4, "Weighted fit is too ill-conditioned to solve."))?;
    let (intercept, slope) = (beta[0], beta[1]);

    let chi_squared = (0..n)
        .map(|i| ((y[i] - (intercept + slope * x[i])) / sigma[i]).powi(2))
        .sum::<f64>();

    let (var_b0, var_b1) = (covariance[(0, 0)], covariance[(1, 1)]);
    if !(var_b0.is_finite() && var_b1.is_finite() && var_b0 >= 0.0 && var_b1 >= 0.0) {
        return Err(AppError::new(4, "Weighted fit produced an invalid covariance matrix."));
    }

    Ok(LinearFit {
        intercept,
        slope,
        intercept_se: var_b0.sqrt(),
        slope_se: var_b1.sqrt(),
        covariance: [
            [covariance[(0, 0)], covariance[(0, 1)]],
            [covariance[(1, 0)], covariance[(1, 1)]],
        ],
        chi_squared,
        n,
    })
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
