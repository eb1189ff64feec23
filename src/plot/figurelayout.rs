use serde::{
    Deserialize,
    Serialize
};

use crate::scalingerror::ScalingError;

/// Everything about the chart that is not data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureLayout {
    width: u32,
    height: u32,
    x_range: (f64, f64),
    y_range: (f64, f64),
    x_description: String,
    y_description: String,
    description_font_size: u32,
    legend_font_size: u32,
    show_frame: bool,
    show_zero_lines: bool,
    show_ticks: bool,
    show_legend: bool
}

impl Default for FigureLayout {
    /// 8 x 6 inches at 100 dpi, zoomed on the crossover region.
    fn default() -> Self {
        FigureLayout {
            width: 800,
            height: 600,
            x_range: (-4.0, 10.0),
            y_range: (-4.0, 2.0),
            x_description: "ln(G)".to_owned(),
            y_description: "β(G) = d ln G / d ln L".to_owned(),
            description_font_size: 14,
            legend_font_size: 12,
            show_frame: true,
            show_zero_lines: true,
            show_ticks: false,
            show_legend: true
        }
    }
}

impl FigureLayout {
    pub fn validate(&self) -> Result<(), ScalingError> {
        if self.width == 0 || self.height == 0 {
            return Err(ScalingError::InvalidLayout(
                format!("figure size {}x{} is empty", self.width, self.height)
            ));
        }
        for (axis, (lo, hi)) in [("x", self.x_range), ("y", self.y_range)] {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(ScalingError::InvalidLayout(
                    format!("{} range [{}, {}] is empty or not finite", axis, lo, hi)
                ));
            }
        }
        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    pub fn x_description(&self) -> &str {
        &self.x_description
    }

    pub fn y_description(&self) -> &str {
        &self.y_description
    }

    pub fn description_font_size(&self) -> u32 {
        self.description_font_size
    }

    pub fn legend_font_size(&self) -> u32 {
        self.legend_font_size
    }

    pub fn show_frame(&self) -> bool {
        self.show_frame
    }

    pub fn show_zero_lines(&self) -> bool {
        self.show_zero_lines
    }

    pub fn show_ticks(&self) -> bool {
        self.show_ticks
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    pub fn with_ranges(mut self, x_range: (f64, f64), y_range: (f64, f64)) -> FigureLayout {
        self.x_range = x_range;
        self.y_range = y_range;
        self
    }
}
