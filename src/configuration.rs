use std::fs::File;
use std::io::BufReader;
use std::path::{
    Path,
    PathBuf
};

use serde::{
    Deserialize,
    Serialize
};

use crate::math::lineardomain::LinearDomain;
use crate::plot::figurelayout::FigureLayout;
use crate::plot::linestyle::{
    LineStyle,
    SeriesColor
};
use crate::scaling::perturbation::Perturbation;
use crate::scalingerror::ScalingError;

pub const DEFAULT_OUTPUT_PATH: &str = "scaling_of_Anderson_localization.svg";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainConfiguration {
    start: f64,
    end: f64,
    num_points: usize
}

impl DomainConfiguration {
    pub fn new(start: f64, end: f64, num_points: usize) -> DomainConfiguration {
        DomainConfiguration { start, end, num_points }
    }

    pub fn to_domain(&self) -> Result<LinearDomain, ScalingError> {
        LinearDomain::new(self.start, self.end, self.num_points)
    }
}

impl Default for DomainConfiguration {
    fn default() -> Self {
        DomainConfiguration::new(-10.0, 10.0, 400)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfiguration {
    label: String,
    dimension: f64,
    style: LineStyle,
    #[serde(default)]
    perturbation: Perturbation
}

impl CurveConfiguration {
    pub fn new(label: &str, dimension: f64, style: LineStyle, perturbation: Perturbation) -> CurveConfiguration {
        CurveConfiguration {
            label: label.to_owned(),
            dimension,
            style,
            perturbation
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn dimension(&self) -> f64 {
        self.dimension
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn perturbation(&self) -> Perturbation {
        self.perturbation
    }

    pub fn validate(&self) -> Result<(), ScalingError> {
        if !self.dimension.is_finite() {
            return Err(ScalingError::InvalidCurve(
                format!("'{}' has non-finite dimension {}", self.label, self.dimension)
            ));
        }
        self.perturbation.validate()
    }
}

/// RG-flow arrows drawn on the unperturbed curve of one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowArrowConfiguration {
    dimension: f64,
    positions: Vec<f64>,
    #[serde(default = "FlowArrowConfiguration::default_length")]
    length: f64
}

impl FlowArrowConfiguration {
    pub fn new(dimension: f64, positions: Vec<f64>, length: f64) -> FlowArrowConfiguration {
        FlowArrowConfiguration { dimension, positions, length }
    }

    fn default_length() -> f64 {
        0.6
    }

    pub fn dimension(&self) -> f64 {
        self.dimension
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Presentation parameters of the scaling plot. `Default` reproduces the
/// textbook figure; any field may be overridden from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    output_path: PathBuf,
    domain: DomainConfiguration,
    layout: FigureLayout,
    curves: Vec<CurveConfiguration>,
    flow_arrows: Option<FlowArrowConfiguration>,
    mark_critical_points: bool
}

impl Default for Configuration {
    fn default() -> Self {
        let curves = vec![
            CurveConfiguration::new(
                "d=3: metal-insulator transition",
                3.0,
                LineStyle::solid(SeriesColor::TAB_BLUE),
                Perturbation::None
            ),
            CurveConfiguration::new(
                "d=1: always localized",
                1.0,
                LineStyle::solid(SeriesColor::TAB_ORANGE),
                Perturbation::None
            ),
            // The two d=2 branches coincide; shift them apart by hand.
            CurveConfiguration::new(
                "d=2: metal-insulator transition",
                2.0,
                LineStyle::dashed(SeriesColor::ORANGE),
                Perturbation::Offset { shift: -0.05 }
            ),
            CurveConfiguration::new(
                "d=2: always localized",
                2.0,
                LineStyle::dashed(SeriesColor::ORANGE),
                Perturbation::GaussianBump { amplitude: 0.5, center: 2.0, width: 1.0, shift: 0.1 }
            ),
        ];
        Configuration {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            domain: DomainConfiguration::default(),
            layout: FigureLayout::default(),
            curves,
            flow_arrows: None,
            mark_critical_points: false
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ScalingError> {
        let configuration: Configuration = serde_json::from_str(json)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ScalingError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), ScalingError> {
        self.domain.to_domain()?;
        self.layout.validate()?;
        for curve in &self.curves {
            curve.validate()?;
        }
        if let Some(arrows) = &self.flow_arrows {
            if !(arrows.length.is_finite() && arrows.length > 0.0) {
                return Err(ScalingError::InvalidLayout(
                    format!("flow arrow length {} must be positive", arrows.length)
                ));
            }
            if !arrows.dimension.is_finite() || !arrows.positions.iter().all(|x| x.is_finite()) {
                return Err(ScalingError::InvalidCurve(
                    format!("flow arrows need a finite dimension and positions, got {} at {:?}", arrows.dimension, arrows.positions)
                ));
            }
        }
        Ok(())
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn domain(&self) -> &DomainConfiguration {
        &self.domain
    }

    pub fn layout(&self) -> &FigureLayout {
        &self.layout
    }

    pub fn curves(&self) -> &[CurveConfiguration] {
        &self.curves
    }

    pub fn flow_arrows(&self) -> Option<&FlowArrowConfiguration> {
        self.flow_arrows.as_ref()
    }

    pub fn mark_critical_points(&self) -> bool {
        self.mark_critical_points
    }

    pub fn with_output_path<P: Into<PathBuf>>(mut self, output_path: P) -> Configuration {
        self.output_path = output_path.into();
        self
    }

    pub fn with_flow_arrows(mut self, flow_arrows: FlowArrowConfiguration) -> Configuration {
        self.flow_arrows = Some(flow_arrows);
        self
    }

    pub fn with_critical_points_marked(mut self, mark: bool) -> Configuration {
        self.mark_critical_points = mark;
        self
    }
}
