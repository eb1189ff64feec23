use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::Curve;
use crate::scalingerror::ScalingError;

/// Cosmetic displacement added to a curve so that overlapping branches can
/// be told apart on the chart. Not part of the physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Perturbation {
    None,
    Offset {
        shift: f64
    },
    /// amplitude·exp(-((x - center)/width)²) + shift
    GaussianBump {
        amplitude: f64,
        center: f64,
        width: f64,
        shift: f64
    }
}

impl Perturbation {
    /// Every parameter must be finite and a bump needs a positive width.
    pub fn validate(&self) -> Result<(), ScalingError> {
        match *self {
            Perturbation::None => Ok(()),
            Perturbation::Offset { shift } => {
                if !shift.is_finite() {
                    return Err(ScalingError::InvalidCurve(format!("offset shift {} is not finite", shift)));
                }
                Ok(())
            },
            Perturbation::GaussianBump { amplitude, center, width, shift } => {
                if ![amplitude, center, width, shift].iter().all(|v| v.is_finite()) {
                    return Err(ScalingError::InvalidCurve(format!(
                        "gaussian bump ({}, {}, {}, {}) has a non-finite parameter",
                        amplitude, center, width, shift
                    )));
                }
                if width <= 0.0 {
                    return Err(ScalingError::InvalidCurve(format!("gaussian bump width {} must be positive", width)));
                }
                Ok(())
            }
        }
    }

    pub fn displacement(&self, x: f64) -> f64 {
        match self {
            Perturbation::None => 0.0,
            Perturbation::Offset { shift } => *shift,
            Perturbation::GaussianBump { amplitude, center, width, shift } => {
                let z = (x - center) / width;
                amplitude * (-z * z).exp() + shift
            }
        }
    }

    pub fn displacement_derivative(&self, x: f64) -> f64 {
        match self {
            Perturbation::GaussianBump { amplitude, center, width, .. } => {
                let z = (x - center) / width;
                -2.0 * amplitude * z / width * (-z * z).exp()
            },
            _ => 0.0
        }
    }

    pub fn apply(&self, x: f64, y: f64) -> f64 {
        match self {
            Perturbation::None => y,
            _ => y + self.displacement(x)
        }
    }
}

impl Default for Perturbation {
    fn default() -> Self {
        Perturbation::None
    }
}

pub struct PerturbedCurve<C> {
    base: C,
    perturbation: Perturbation
}

impl<C: Curve> PerturbedCurve<C> {
    pub fn new(base: C, perturbation: Perturbation) -> PerturbedCurve<C> {
        PerturbedCurve { base, perturbation }
    }
}

impl<C: Curve> Curve for PerturbedCurve<C> {
    fn value(&self, x: f64) -> f64 {
        self.perturbation.apply(x, self.base.value(x))
    }

    fn derivative(&self, x: f64) -> f64 {
        self.base.derivative(x) + self.perturbation.displacement_derivative(x)
    }
}
