use tracing::info;

use crate::math::curve::curve::Curve;
use crate::math::rootfinder::BrentRootFinder;
use crate::math::softplus::{
    log1p_ratio,
    softplus
};
use crate::scaling::flowdirection::FlowDirection;
use crate::scalingerror::ScalingError;

// ─────────────────────────────────────────────────────────────────────────────
// One-parameter scaling of Anderson localization
// ─────────────────────────────────────────────────────────────────────────────
//
//   β(d, x) = d - 1 - (1 + e^x)·ln(1 + e^{-x}),    x = ln G
//
// The factor K(x) = (1 + e^x)·ln(1 + e^{-x}) decreases monotonically from +∞
// (x → -∞, where K ≈ -x) to 1 (x → +∞). Hence
//   - β → d - 2 for a good metal (ohmic scaling),
//   - β → -∞ deep in the localized regime,
//   - a fixed point β = 0 exists only for d > 2.
//
// K is evaluated without forming e^x for x > 0:
//   x > 0:  K = (1 + u)·ln(1 + u)/u,   u = e^{-x}
//   x ≤ 0:  K = (1 + e^x)·softplus(-x)

fn scaling_factor(x: f64) -> f64 {
    if x > 0.0 {
        let u = (-x).exp();
        (1.0 + u) * log1p_ratio(u)
    } else {
        (1.0 + x.exp()) * softplus(-x)
    }
}

/// e^x·ln(1 + e^{-x}), the part of K' that does not cancel.
fn scaling_factor_slope(x: f64) -> f64 {
    if x > 0.0 {
        log1p_ratio((-x).exp())
    } else {
        x.exp() * softplus(-x)
    }
}

/// β(d, x) for dimension `d` and log-conductance `x`.
pub fn beta(d: f64, x: f64) -> f64 {
    d - 1.0 - scaling_factor(x)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaFunction {
    dimension: f64
}

impl BetaFunction {
    pub fn new(dimension: f64) -> BetaFunction {
        BetaFunction { dimension }
    }

    /// Limit of β for x → +∞.
    pub fn asymptote(&self) -> f64 {
        self.dimension - 2.0
    }

    pub fn has_critical_point(&self) -> bool {
        self.dimension > 2.0
    }

    pub fn flow_direction(&self, x: f64) -> FlowDirection {
        FlowDirection::from_beta(self.value(x))
    }

    /// The metal-insulator fixed point, `None` when `d <= 2`.
    pub fn critical_point(&self) -> Result<Option<f64>, ScalingError> {
        self.critical_point_with(&BrentRootFinder::default())
    }

    pub fn critical_point_with(&self, finder: &BrentRootFinder) -> Result<Option<f64>, ScalingError> {
        if !self.has_critical_point() {
            return Ok(None);
        }
        let (lower, upper) = finder.bracket(self, -1.0, 1.0)?;
        let x_c = finder.solve(*self, lower, upper)?;
        info!(dimension = self.dimension, x_c, "located metal-insulator fixed point");
        Ok(Some(x_c))
    }

    /// ν = 1 / β'(x_c), the correlation-length exponent of the linearized
    /// flow at the fixed point.
    pub fn correlation_length_exponent(&self) -> Result<Option<f64>, ScalingError> {
        Ok(self.critical_point()?.map(|x_c| 1.0 / self.derivative(x_c)))
    }
}

impl Curve for BetaFunction {
    fn value(&self, x: f64) -> f64 {
        beta(self.dimension, x)
    }

    /// dβ/dx = 1 - e^x·ln(1 + e^{-x}), strictly positive.
    fn derivative(&self, x: f64) -> f64 {
        1.0 - scaling_factor_slope(x)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::LN_2;

    use super::*;

    fn naive_beta(d: f64, x: f64) -> f64 {
        d - 1.0 - (1.0 + x.exp()) * (1.0 + (-x).exp()).ln()
    }

    #[test]
    fn agrees_with_closed_form_on_plot_range() {
        let mut x = -10.0;
        while x <= 10.0 {
            for d in [1.0, 2.0, 3.0] {
                assert_abs_diff_eq!(beta(d, x), naive_beta(d, x), epsilon = 1e-10);
            }
            x += 0.37;
        }
    }

    #[test]
    fn dimensions_differ_by_constant() {
        for &x in &[-50.0, -10.0, -1.3, 0.0, 0.7, 4.0, 10.0, 300.0] {
            assert_abs_diff_eq!(beta(3.0, x) - beta(1.0, x), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn value_at_origin() {
        for d in [1.0, 2.0, 3.0] {
            assert_abs_diff_eq!(beta(d, 0.0), d - 1.0 - 2.0 * LN_2, epsilon = 1e-15);
        }
    }

    #[test]
    fn metallic_limit_is_d_minus_two() {
        for d in [1.0, 2.0, 3.0] {
            let curve = BetaFunction::new(d);
            assert_abs_diff_eq!(curve.value(40.0), curve.asymptote(), epsilon = 1e-12);
            assert_eq!(curve.value(1000.0), d - 2.0);
        }
    }

    #[test]
    fn localized_limit_diverges() {
        let curve = BetaFunction::new(3.0);
        let far = curve.value(-1000.0);
        assert!(far.is_finite());
        assert!(far < -990.0);
        assert!(curve.value(-1e6) < far);
    }

    #[test]
    fn analytic_derivative_matches_difference_quotient() {
        let curve = BetaFunction::new(2.0);
        for &x in &[-8.0, -2.5, -0.1, 0.0, 0.4, 3.0, 9.0] {
            assert_abs_diff_eq!(curve.derivative(x), curve.central_difference(x, 1e-5), epsilon = 1e-7);
            assert!(curve.derivative(x) > 0.0);
        }
    }

    #[test]
    fn three_dimensions_have_a_fixed_point() {
        let curve = BetaFunction::new(3.0);
        let x_c = curve.critical_point().unwrap().unwrap();
        assert!(x_c < 0.0);
        assert_abs_diff_eq!(curve.value(x_c), 0.0, epsilon = 1e-10);
        assert_eq!(curve.flow_direction(x_c + 1.0), FlowDirection::Metallic);
        assert_eq!(curve.flow_direction(x_c - 1.0), FlowDirection::Insulating);
        assert_abs_diff_eq!(x_c, -1.366487910631117, epsilon = 1e-9);
    }

    #[test]
    fn correlation_length_exponent_in_three_dimensions() {
        let nu = BetaFunction::new(3.0).correlation_length_exponent().unwrap().unwrap();
        assert_abs_diff_eq!(nu, 1.6845672714463347, epsilon = 1e-8);
        assert_eq!(BetaFunction::new(2.0).correlation_length_exponent().unwrap(), None);
    }

    #[test]
    fn low_dimensions_always_localize() {
        for d in [1.0, 2.0] {
            let curve = BetaFunction::new(d);
            assert_eq!(curve.critical_point().unwrap(), None);
            assert_eq!(curve.flow_direction(10.0), FlowDirection::Insulating);
        }
    }
}
