//! Values with a standard deviation and first-order error propagation.
//!
//! Every operand is treated as an independent variable, so for `f(a, b)`:
//!
//! ```text
//! σ_f² = (∂f/∂a · σ_a)² + (∂f/∂b · σ_b)²
//! ```
//!
//! Scalars (`f64`) are exact and only scale or shift the uncertainty.

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A nominal value with its standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measured {
    pub value: f64,
    pub std_dev: f64,
}

impl Measured {
    pub fn new(value: f64, std_dev: f64) -> Self {
        Self {
            value,
            std_dev: std_dev.abs(),
        }
    }

    /// A value known exactly.
    pub fn exact(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Natural logarithm: `σ = σ_a / |a|`.
    pub fn ln(self) -> Self {
        Self::new(self.value.ln(), self.std_dev / self.value.abs())
    }

    /// Exponential: `σ = exp(a) · σ_a`.
    pub fn exp(self) -> Self {
        let v = self.value.exp();
        Self::new(v, v * self.std_dev)
    }

    /// Relative standard deviation `σ / |value|`.
    pub fn relative(self) -> f64 {
        self.std_dev / self.value.abs()
    }

    pub fn is_finite(self) -> bool {
        self.value.is_finite() && self.std_dev.is_finite()
    }
}

impl Add for Measured {
    type Output = Measured;

    fn add(self, rhs: Measured) -> Measured {
        Measured::new(self.value + rhs.value, self.std_dev.hypot(rhs.std_dev))
    }
}

impl Sub for Measured {
    type Output = Measured;

    fn sub(self, rhs: Measured) -> Measured {
        Measured::new(self.value - rhs.value, self.std_dev.hypot(rhs.std_dev))
    }
}

impl Mul for Measured {
    type Output = Measured;

    fn mul(self, rhs: Measured) -> Measured {
        // ∂(ab)/∂a = b, ∂(ab)/∂b = a
        let sd = (rhs.value * self.std_dev).hypot(self.value * rhs.std_dev);
        Measured::new(self.value * rhs.value, sd)
    }
}

impl Div for Measured {
    type Output = Measured;

    fn div(self, rhs: Measured) -> Measured {
        // ∂(a/b)/∂a = 1/b, ∂(a/b)/∂b = -a/b²
        let da = self.std_dev / rhs.value;
        let db = self.value * rhs.std_dev / (rhs.value * rhs.value);
        Measured::new(self.value / rhs.value, da.hypot(db))
    }
}

impl Neg for Measured {
    type Output = Measured;

    fn neg(self) -> Measured {
        Measured::new(-self.value, self.std_dev)
    }
}

impl Add<f64> for Measured {
    type Output = Measured;

    fn add(self, rhs: f64) -> Measured {
        Measured::new(self.value + rhs, self.std_dev)
    }
}

impl Sub<f64> for Measured {
    type Output = Measured;

    fn sub(self, rhs: f64) -> Measured {
        Measured::new(self.value - rhs, self.std_dev)
    }
}

impl Mul<f64> for Measured {
    type Output = Measured;

    fn mul(self, rhs: f64) -> Measured {
        Measured::new(self.value * rhs, self.std_dev * rhs)
    }
}

impl Div<f64> for Measured {
    type Output = Measured;

    fn div(self, rhs: f64) -> Measured {
        Measured::new(self.value / rhs, self.std_dev / rhs)
    }
}

impl Mul<Measured> for f64 {
    type Output = Measured;

    fn mul(self, rhs: Measured) -> Measured {
        rhs * self
    }
}

/// Formats as `value+/-std_dev`.
///
/// With an explicit precision (`{:.3}`) both parts use that many decimals.
/// Otherwise the uncertainty is rounded to two significant digits and the value
/// to the same decimal place; very large or very small magnitudes switch to a
/// shared exponent, e.g. `(2.50+/-0.31)e13`.
impl std::fmt::Display for Measured {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(p) = f.precision() {
            return write!(f, "{:.p$}+/-{:.p$}", self.value, self.std_dev);
        }
        if !self.is_finite() {
            return write!(f, "{}+/-{}", self.value, self.std_dev);
        }

        let magnitude = self.value.abs().max(self.std_dev);
        let exponent = if magnitude > 0.0 {
            magnitude.log10().floor() as i32
        } else {
            0
        };

        if (-3..6).contains(&exponent) {
            let decimals = decimals_for(self.std_dev);
            return write!(f, "{:.decimals$}+/-{:.decimals$}", self.value, self.std_dev);
        }

        let scale = 10f64.powi(exponent);
        let (value, sd) = (self.value / scale, self.std_dev / scale);
        let decimals = decimals_for(sd);
        write!(f, "({value:.decimals$}+/-{sd:.decimals$})e{exponent}")
    }
}

/// Decimal places that keep two significant digits of `sd`.
fn decimals_for(sd: f64) -> usize {
    if sd > 0.0 && sd.is_finite() {
        (1 - sd.log10().floor() as i32).max(0) as usize
    } else {
        6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn ratio_matches_relative_quadrature() {
        let a = Measured::new(1.18e-5, 2.10e-7);
        let b = Measured::new(1.30e-6, 3.08e-8);
        let r = a / b;

        let expected_sd = r.value * (a.relative().powi(2) + b.relative().powi(2)).sqrt();
        assert!(close(r.value, 1.18e-5 / 1.30e-6, 1e-12));
        assert!(close(r.std_dev, expected_sd, 1e-12), "got {}, want {expected_sd}", r.std_dev);
    }

    #[test]
    fn ln_and_exp_follow_first_order_rules() {
        let a = Measured::new(4.0, 0.2);
        let l = a.ln();
        assert!(close(l.value, 4f64.ln(), 1e-12));
        assert!(close(l.std_dev, 0.05, 1e-12));

        let e = Measured::new(2.0, 0.1).exp();
        assert!(close(e.value, 2f64.exp(), 1e-12));
        assert!(close(e.std_dev, 2f64.exp() * 0.1, 1e-12));
    }

    #[test]
    fn ln_of_ratio_equals_difference_of_lns() {
        let a = Measured::new(5.32e-4, 5.90e-6);
        let b = Measured::new(1.04e-4, 6.48e-6);

        let via_ratio = (a / b).ln();
        let via_diff = a.ln() - b.ln();
        assert!(close(via_ratio.value, via_diff.value, 1e-12));
        assert!(close(via_ratio.std_dev, via_diff.std_dev, 1e-12));
    }

    #[test]
    fn sums_and_scalars() {
        let a = Measured::new(3.0, 0.3);
        let b = Measured::new(1.0, 0.4);
        let d = a - b;
        assert!(close(d.value, 2.0, 1e-12));
        assert!(close(d.std_dev, 0.5, 1e-12));

        let s = -a * 2.0;
        assert!(close(s.value, -6.0, 1e-12));
        assert!(close(s.std_dev, 0.6, 1e-12));
        assert_eq!(2.0 * a, a * 2.0);

        let shifted = (a - 1.0) / 4.0;
        assert!(close(shifted.value, 0.5, 1e-12));
        assert!(close(shifted.std_dev, 0.075, 1e-12));
    }

    #[test]
    fn product_with_zero_nominal_is_finite() {
        let p = Measured::new(0.0, 0.1) * Measured::new(2.0, 0.5);
        assert_eq!(p.value, 0.0);
        assert!(close(p.std_dev, 0.2, 1e-12));
    }

    #[test]
    fn display_rounds_to_two_significant_digits() {
        assert_eq!(Measured::new(1.2346, 0.0123).to_string(), "1.235+/-0.012");
        assert_eq!(Measured::new(2.5e13, 3.1e12).to_string(), "(2.50+/-0.31)e13");
        assert_eq!(format!("{:.2}", Measured::new(27.123, 0.456)), "27.12+/-0.46");
    }
}
