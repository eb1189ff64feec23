use crate::math::curve::curve::Curve;
use crate::math::lineardomain::LinearDomain;

/// A curve tabulated on a `LinearDomain`. `x_data` and `y_data` always
/// have the same length, at least two.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    x_data: Vec<f64>,
    y_data: Vec<f64>,
}

impl SampledCurve {
    pub fn sample<C: Curve + ?Sized>(curve: &C, domain: &LinearDomain) -> SampledCurve {
        let x_data = domain.to_vec();
        let y_data = x_data.iter().map(|&x| curve.value(x)).collect();
        SampledCurve { x_data, y_data }
    }

    pub fn len(&self) -> usize {
        self.x_data.len()
    }

    pub fn x_data(&self) -> &[f64] {
        &self.x_data
    }

    pub fn y_data(&self) -> &[f64] {
        &self.y_data
    }

    pub fn min_x(&self) -> f64 {
        self.x_data.first().copied().unwrap_or(f64::NAN)
    }

    pub fn max_x(&self) -> f64 {
        self.x_data.last().copied().unwrap_or(f64::NAN)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_data.iter().copied().zip(self.y_data.iter().copied())
    }
}
