use std::fmt;

use plotters::style::{
    Color,
    RGBColor,
    ShapeStyle
};
use serde::{
    Deserialize,
    Serialize
};

use crate::scalingerror::ScalingError;

/// An opaque RGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeriesColor {
    r: u8,
    g: u8,
    b: u8
}

impl SeriesColor {
    /// First color of the tab10 cycle.
    pub const TAB_BLUE: SeriesColor = SeriesColor::new(0x1f, 0x77, 0xb4);
    /// Second color of the tab10 cycle.
    pub const TAB_ORANGE: SeriesColor = SeriesColor::new(0xff, 0x7f, 0x0e);
    /// CSS `orange`.
    pub const ORANGE: SeriesColor = SeriesColor::new(0xff, 0xa5, 0x00);
    pub const BLACK: SeriesColor = SeriesColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> SeriesColor {
        SeriesColor { r, g, b }
    }

    pub fn parse(hex: &str) -> Result<SeriesColor, ScalingError> {
        let invalid = || ScalingError::InvalidColor(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(SeriesColor::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_rgb(&self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for SeriesColor {
    type Error = ScalingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SeriesColor::parse(&value)
    }
}

impl From<SeriesColor> for String {
    fn from(color: SeriesColor) -> String {
        color.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashPattern {
    Solid,
    /// Dash and gap lengths in pixels.
    Dashed {
        dash: u32,
        gap: u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    color: SeriesColor,
    #[serde(default = "LineStyle::default_dash")]
    dash: DashPattern,
    #[serde(default = "LineStyle::default_width")]
    width: u32
}

impl LineStyle {
    pub fn new(color: SeriesColor, dash: DashPattern, width: u32) -> LineStyle {
        LineStyle { color, dash, width }
    }

    pub fn solid(color: SeriesColor) -> LineStyle {
        LineStyle::new(color, DashPattern::Solid, LineStyle::default_width())
    }

    /// Dashes proportioned like matplotlib's `'dashed'` at 1.5 px.
    pub fn dashed(color: SeriesColor) -> LineStyle {
        LineStyle::new(color, DashPattern::Dashed { dash: 6, gap: 3 }, LineStyle::default_width())
    }

    fn default_dash() -> DashPattern {
        DashPattern::Solid
    }

    fn default_width() -> u32 {
        2
    }

    pub fn dash(&self) -> DashPattern {
        self.dash
    }

    pub fn shape_style(&self) -> ShapeStyle {
        self.color.to_rgb().stroke_width(self.width)
    }
}
