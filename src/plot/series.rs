use crate::math::curve::nonparametriccurve::sampledcurve::SampledCurve;
use crate::plot::linestyle::LineStyle;

/// A labelled, styled curve ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    label: String,
    style: LineStyle,
    curve: SampledCurve
}

impl Series {
    pub fn new(label: String, style: LineStyle, curve: SampledCurve) -> Series {
        Series { label, style, curve }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn curve(&self) -> &SampledCurve {
        &self.curve
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.curve.iter().collect()
    }
}
