use std::iter::once;
use std::path::Path;

use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::{
    debug,
    info
};

use crate::plot::clip::ClipWindow;
use crate::plot::figurelayout::FigureLayout;
use crate::plot::linestyle::{
    DashPattern,
    LineStyle
};
use crate::plot::series::Series;
use crate::scaling::flowdirection::FlowDirection;
use crate::scalingerror::ScalingError;

const FONT_FAMILY: &str = "sans-serif";
const LEGEND_GLYPH_LENGTH: u32 = 20;
const MARKER_RADIUS: i32 = 4;
// The SVG backend writes `font-size` as the requested size divided by this.
const SVG_FONT_SCALE: f64 = 1.24;

fn font_size(px: u32) -> f64 {
    f64::from(px) * SVG_FONT_SCALE
}

/// Horizontal arrow showing which way ln G flows at a point of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowArrow {
    x: f64,
    y: f64,
    direction: FlowDirection,
    length: f64
}

impl FlowArrow {
    pub fn new(x: f64, y: f64, direction: FlowDirection, length: f64) -> FlowArrow {
        FlowArrow { x, y, direction, length }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn direction(&self) -> FlowDirection {
        self.direction
    }

    /// Tail and tip in data coordinates.
    pub fn endpoints(&self) -> ((f64, f64), (f64, f64)) {
        let half = 0.5 * self.length * self.direction.sign();
        ((self.x - half, self.y), (self.x + half, self.y))
    }
}

pub struct Figure {
    layout: FigureLayout,
    series: Vec<Series>,
    arrows: Vec<FlowArrow>,
    markers: Vec<(f64, f64)>
}

impl Figure {
    pub fn new(layout: FigureLayout) -> Figure {
        Figure {
            layout,
            series: Vec::new(),
            arrows: Vec::new(),
            markers: Vec::new()
        }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn arrows(&self) -> &[FlowArrow] {
        &self.arrows
    }

    pub fn markers(&self) -> &[(f64, f64)] {
        &self.markers
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_arrow(&mut self, arrow: FlowArrow) {
        self.arrows.push(arrow);
    }

    pub fn add_marker(&mut self, x: f64, y: f64) {
        self.markers.push((x, y));
    }

    /// Renders the whole figure into an SVG document held in memory.
    pub fn to_svg_string(&self) -> Result<String, ScalingError> {
        self.layout.validate()?;
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.layout.size()).into_drawing_area();
            self.draw(&root).map_err(ScalingError::render)?;
            root.present().map_err(ScalingError::render)?;
        }
        Ok(svg)
    }

    /// Renders and writes the figure, replacing any existing file at `path`.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), ScalingError> {
        let svg = self.to_svg_string()?;
        let bytes = svg.len();
        std::fs::write(path.as_ref(), svg)?;
        info!(path = %path.as_ref().display(), bytes, "wrote figure");
        Ok(())
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let layout = &self.layout;
        let (x_lo, x_hi) = layout.x_range();
        let (y_lo, y_hi) = layout.y_range();

        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_desc(layout.x_description())
            .y_desc(layout.y_description())
            .axis_desc_style((FONT_FAMILY, font_size(layout.description_font_size())));
        if !layout.show_ticks() {
            mesh.set_all_tick_mark_size(0)
                .x_labels(0)
                .y_labels(0);
        }
        mesh.draw()?;

        if layout.show_frame() {
            chart.draw_series(once(Rectangle::new([(x_lo, y_lo), (x_hi, y_hi)], BLACK.stroke_width(1))))?;
        }

        if layout.show_zero_lines() {
            if y_lo <= 0.0 && 0.0 <= y_hi {
                chart.draw_series(once(PathElement::new(vec![(x_lo, 0.0), (x_hi, 0.0)], BLACK.stroke_width(1))))?;
            }
            if x_lo <= 0.0 && 0.0 <= x_hi {
                chart.draw_series(once(PathElement::new(vec![(0.0, y_lo), (0.0, y_hi)], BLACK.stroke_width(1))))?;
            }
        }

        let window = ClipWindow::new(layout.x_range(), layout.y_range());
        for series in &self.series {
            let style = series.style().shape_style();
            let pieces = window.clip_polyline(&series.points());
            debug!(label = series.label(), pieces = pieces.len(), "drawing series");

            if pieces.is_empty() {
                // Off-screen series still get their legend entry.
                chart.draw_series(LineSeries::new(Vec::<(f64, f64)>::new(), style))?
                    .label(series.label())
                    .legend(legend_glyph(*series.style()));
                continue;
            }

            for (i, piece) in pieces.into_iter().enumerate() {
                let annotation = match series.style().dash() {
                    DashPattern::Solid => chart.draw_series(LineSeries::new(piece, style))?,
                    DashPattern::Dashed { dash, gap } => {
                        chart.draw_series(DashedLineSeries::new(piece, dash, gap, style))?
                    }
                };
                if i == 0 {
                    annotation
                        .label(series.label())
                        .legend(legend_glyph(*series.style()));
                }
            }
        }

        for arrow in &self.arrows {
            if arrow.direction() == FlowDirection::Critical {
                if window.contains((arrow.x(), arrow.y())) {
                    chart.draw_series(once(Circle::new((arrow.x(), arrow.y()), MARKER_RADIUS, BLACK.filled())))?;
                }
                continue;
            }
            let (tail, tip) = arrow.endpoints();
            if !window.contains(tail) || !window.contains(tip) {
                continue;
            }
            let head_length = 0.3 * (tip.0 - tail.0);
            let head_half_height = 0.02 * (y_hi - y_lo);
            chart.draw_series(once(PathElement::new(vec![tail, tip], BLACK.stroke_width(1))))?;
            chart.draw_series(once(Polygon::new(
                vec![
                    tip,
                    (tip.0 - head_length, tip.1 + head_half_height),
                    (tip.0 - head_length, tip.1 - head_half_height),
                ],
                BLACK.filled(),
            )))?;
        }

        for &(x, y) in &self.markers {
            if window.contains((x, y)) {
                chart.draw_series(once(Circle::new((x, y), MARKER_RADIUS, BLACK.filled())))?;
            }
        }

        if layout.show_legend() && !self.series.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .label_font((FONT_FAMILY, font_size(layout.legend_font_size())))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        Ok(())
    }
}

/// Short sample of the series line. A solid line is one dash spanning the
/// whole glyph.
fn legend_glyph(style: LineStyle) -> impl Fn((i32, i32)) -> DashedPathElement<std::vec::IntoIter<(i32, i32)>, u32> {
    let shape = style.shape_style();
    let (dash, gap) = match style.dash() {
        DashPattern::Solid => (LEGEND_GLYPH_LENGTH, 0),
        DashPattern::Dashed { dash, gap } => (dash, gap)
    };
    move |(x, y)| DashedPathElement::new(vec![(x, y), (x + LEGEND_GLYPH_LENGTH as i32, y)], dash, gap, shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::curve::nonparametriccurve::sampledcurve::SampledCurve;
    use crate::math::lineardomain::LinearDomain;
    use crate::plot::linestyle::{
        LineStyle,
        SeriesColor
    };
    use crate::scaling::betafunction::BetaFunction;

    fn single_series_figure(style: LineStyle) -> Figure {
        let domain = LinearDomain::new(-10.0, 10.0, 50).unwrap();
        let curve = SampledCurve::sample(&BetaFunction::new(3.0), &domain);
        let mut figure = Figure::new(FigureLayout::default());
        figure.add_series(Series::new("d=3: metal-insulator transition".to_owned(), style, curve));
        figure
    }

    #[test]
    fn renders_svg_document_with_legend() {
        let svg = single_series_figure(LineStyle::solid(SeriesColor::TAB_BLUE)).to_svg_string().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("d=3: metal-insulator transition"));
        assert!(svg.contains("ln(G)"));
    }

    #[test]
    fn renders_dashed_series() {
        let svg = single_series_figure(LineStyle::dashed(SeriesColor::ORANGE)).to_svg_string().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("d=3"));
    }

    #[test]
    fn hidden_ticks_leave_no_label_nodes() {
        let svg = single_series_figure(LineStyle::solid(SeriesColor::TAB_BLUE)).to_svg_string().unwrap();
        // x description, y description and one legend entry.
        assert_eq!(svg.matches("<text").count(), 3);
    }

    #[test]
    fn text_is_written_at_requested_pixel_size() {
        let svg = single_series_figure(LineStyle::solid(SeriesColor::TAB_BLUE)).to_svg_string().unwrap();
        assert!(svg.contains(r#"font-size="14""#));
        assert!(svg.contains(r#"font-size="12""#));
    }

    #[test]
    fn legend_glyph_is_dashed_for_dashed_series() {
        // Above every beta(3, x), so only the legend shows the line style.
        let polylines = |style: LineStyle| {
            let domain = LinearDomain::new(-10.0, 10.0, 50).unwrap();
            let curve = SampledCurve::sample(&BetaFunction::new(3.0), &domain);
            let mut figure = Figure::new(FigureLayout::default().with_ranges((-4.0, 10.0), (5.0, 6.0)));
            figure.add_series(Series::new("d=3".to_owned(), style, curve));
            figure.to_svg_string().unwrap().matches("<polyline").count()
        };
        let solid = polylines(LineStyle::solid(SeriesColor::ORANGE));
        let dashed = polylines(LineStyle::dashed(SeriesColor::ORANGE));
        assert!(dashed > solid, "dashed {} vs solid {}", dashed, solid);
    }

    #[test]
    fn arrows_point_along_the_flow() {
        let right = FlowArrow::new(1.0, 0.5, FlowDirection::Metallic, 0.6);
        let left = FlowArrow::new(1.0, -0.5, FlowDirection::Insulating, 0.6);
        let (tail, tip) = right.endpoints();
        assert!(tip.0 > tail.0);
        let (tail, tip) = left.endpoints();
        assert!(tip.0 < tail.0);
    }

    #[test]
    fn invalid_layout_fails_before_drawing() {
        let figure = Figure::new(FigureLayout::default().with_ranges((0.0, 0.0), (-1.0, 1.0)));
        assert!(matches!(figure.to_svg_string(), Err(ScalingError::InvalidLayout(_))));
    }

    #[test]
    fn save_reports_unwritable_path() {
        let figure = single_series_figure(LineStyle::solid(SeriesColor::BLACK));
        let result = figure.save_svg("/nonexistent-directory/for/sure/plot.svg");
        assert!(matches!(result, Err(ScalingError::IOError(_))));
    }
}
