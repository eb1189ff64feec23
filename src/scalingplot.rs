use std::path::PathBuf;

use tracing::{
    debug,
    info
};

use crate::configuration::Configuration;
use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::sampledcurve::SampledCurve;
use crate::plot::figure::{
    Figure,
    FlowArrow
};
use crate::plot::series::Series;
use crate::scaling::betafunction::BetaFunction;
use crate::scaling::perturbation::PerturbedCurve;
use crate::scalingerror::ScalingError;

/// Samples every configured curve and assembles the figure.
pub fn build_figure(configuration: &Configuration) -> Result<Figure, ScalingError> {
    configuration.validate()?;
    let domain = configuration.domain().to_domain()?;
    let mut figure = Figure::new(configuration.layout().clone());

    for curve_configuration in configuration.curves() {
        let curve = PerturbedCurve::new(
            BetaFunction::new(curve_configuration.dimension()),
            curve_configuration.perturbation()
        );
        let sampled = SampledCurve::sample(&curve, &domain);
        debug!(
            label = curve_configuration.label(),
            dimension = curve_configuration.dimension(),
            points = sampled.len(),
            x_min = sampled.min_x(),
            x_max = sampled.max_x(),
            "sampled beta function"
        );
        figure.add_series(Series::new(
            curve_configuration.label().to_owned(),
            *curve_configuration.style(),
            sampled
        ));
    }

    if configuration.mark_critical_points() {
        let mut dimensions: Vec<f64> = Vec::new();
        for curve_configuration in configuration.curves() {
            let d = curve_configuration.dimension();
            if dimensions.contains(&d) {
                continue;
            }
            dimensions.push(d);
            if let Some(x_c) = BetaFunction::new(d).critical_point()? {
                figure.add_marker(x_c, 0.0);
            }
        }
    }

    if let Some(arrows) = configuration.flow_arrows() {
        let beta = BetaFunction::new(arrows.dimension());
        for &x in arrows.positions() {
            figure.add_arrow(FlowArrow::new(
                x,
                beta.value(x),
                beta.flow_direction(x),
                arrows.length()
            ));
        }
    }

    Ok(figure)
}

/// Builds the figure and writes it to the configured output path.
pub fn render(configuration: &Configuration) -> Result<PathBuf, ScalingError> {
    let figure = build_figure(configuration)?;
    let path = configuration.output_path().to_path_buf();
    figure.save_svg(&path)?;
    info!(path = %path.display(), series = figure.series().len(), "rendered scaling plot");
    Ok(path)
}
