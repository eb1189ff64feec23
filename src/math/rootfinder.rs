use argmin::core::{
    CostFunction,
    Error,
    Executor,
    State
};
use argmin::solver::brent::BrentRoot;
use tracing::debug;

use crate::math::curve::curve::Curve;
use crate::scalingerror::ScalingError;

const MAX_BRACKET_DOUBLINGS: usize = 64;

/// Adapts a `Curve` to argmin's cost-function interface so the solver
/// searches for `value(x) = 0`.
struct ZeroCrossing<C> {
    curve: C
}

impl<C: Curve> CostFunction for ZeroCrossing<C> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.curve.value(*x))
    }
}

pub struct BrentRootFinder {
    tolerance: f64,
    max_iters: u64
}

impl BrentRootFinder {
    pub fn new(tolerance: f64, max_iters: u64) -> BrentRootFinder {
        BrentRootFinder { tolerance, max_iters }
    }

    /// Root of `curve` inside `[lower, upper]`. The endpoints must have
    /// values of opposite sign.
    pub fn solve<C: Curve>(&self, curve: C, lower: f64, upper: f64) -> Result<f64, ScalingError> {
        let f_lower = curve.value(lower);
        let f_upper = curve.value(upper);
        if f_lower == 0.0 {
            return Ok(lower);
        }
        if f_upper == 0.0 {
            return Ok(upper);
        }
        if f_lower.signum() == f_upper.signum() {
            return Err(ScalingError::RootSearch(format!(
                "no sign change on [{}, {}]", lower, upper
            )));
        }

        let solver = BrentRoot::new(lower, upper, self.tolerance);
        let result = Executor::new(ZeroCrossing { curve }, solver)
            .configure(|state| state.param(0.5 * (lower + upper)).max_iters(self.max_iters))
            .run()
            .map_err(|error| ScalingError::RootSearch(error.to_string()))?;

        // Brent's current iterate is its best estimate of the root.
        let state = result.state();
        debug!(iterations = state.get_iter(), "brent root search finished");
        state
            .get_param()
            .copied()
            .ok_or_else(|| ScalingError::RootSearch("solver returned no parameter".to_owned()))
    }

    /// Widens `[lower, upper]` geometrically away from its midpoint until the
    /// curve changes sign across it.
    pub fn bracket<C: Curve>(&self, curve: &C, lower: f64, upper: f64) -> Result<(f64, f64), ScalingError> {
        let center = 0.5 * (lower + upper);
        let mut half_width = 0.5 * (upper - lower).abs().max(f64::EPSILON);
        for _ in 0..MAX_BRACKET_DOUBLINGS {
            let (a, b) = (center - half_width, center + half_width);
            if curve.value(a).signum() != curve.value(b).signum() {
                return Ok((a, b));
            }
            half_width *= 2.0;
        }
        Err(ScalingError::RootSearch(format!(
            "no sign change found around {}", center
        )))
    }
}

impl Default for BrentRootFinder {
    fn default() -> Self {
        BrentRootFinder::new(1e-12, 200)
    }
}
