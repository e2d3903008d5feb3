//! PNG rendering of the KIE and Eyring plots.
//!
//! Both figures share one layout: `1000/T` on the x axis, the fitted straight
//! line, black capped error bars and semi-transparent circular markers, on a
//! white background with a light grey grid.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::domain::{EyringResult, KieResult, PlotPoint};
use crate::error::AppError;
use crate::math::LinearFit;
use crate::models::Linearization;
use crate::plot::fonts::{FONT_FAMILY, ensure_font};

pub const KIE_PLOT_FILE: &str = "KIE_Plot_with_error.png";
pub const EYRING_PLOT_FILE: &str = "Plot_with_error.png";

/// Reversed "mako" ramp, light green to deep blue.
const MAKO_R_6: [RGBColor; 6] = [
    RGBColor(0xA1, 0xDF, 0xB9),
    RGBColor(0x4B, 0xC2, 0xAD),
    RGBColor(0x35, 0x9E, 0xAA),
    RGBColor(0x35, 0x7B, 0xA2),
    RGBColor(0x3E, 0x56, 0x9A),
    RGBColor(0x3F, 0x35, 0x6D),
];
const MAKO_R_4: [RGBColor; 4] = [
    RGBColor(0x7E, 0xD3, 0xAF),
    RGBColor(0x35, 0xA0, 0xAB),
    RGBColor(0x36, 0x6A, 0xA0),
    RGBColor(0x40, 0x3A, 0x75),
];
const GRID: RGBColor = RGBColor(128, 128, 128);

const MARKER_ALPHA: f64 = 0.5;
const KIE_Y_RANGE: (f64, f64) = (-1.0, 3.5);
const X_DESC: &str = "1000/T (1000/K)";

/// Canvas size and whether text (axis titles, tick labels, legend) is drawn.
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub annotate: bool,
}

impl PlotStyle {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            annotate: true,
        }
    }

    /// Points → pixels. The default 1920×1440 canvas is a 6.4×4.8 in figure at 300 dpi.
    fn pt(&self, pt: f64) -> f64 {
        pt * self.height as f64 / (4.8 * 72.0)
    }

    fn px(&self, pt: f64) -> u32 {
        self.pt(pt).round().max(1.0) as u32
    }
}

struct Series<'a> {
    label: String,
    points: &'a [PlotPoint],
    fit: &'a LinearFit,
    line: RGBColor,
    marker: RGBColor,
}

/// `ln(KIE)` vs `1000/T` with the fitted line.
pub fn render_kie_plot(path: &Path, kie: &KieResult, style: &PlotStyle) -> Result<(), AppError> {
    let points = kie.plot_points();
    let series = [Series {
        label: "KIE forward".to_string(),
        points: &points,
        fit: &kie.fit,
        line: MAKO_R_6[0],
        marker: MAKO_R_6[1],
    }];

    draw_figure(path, &series, "ln(KIE)", Some(KIE_Y_RANGE), style)
        .map_err(|e| AppError::new(5, format!("Failed to render '{}': {e}", path.display())))
}

/// Eyring plots for both isotopes on one set of axes.
pub fn render_eyring_plot(
    path: &Path,
    light: &EyringResult,
    heavy: &EyringResult,
    style: &PlotStyle,
) -> Result<(), AppError> {
    let series = [
        Series {
            label: format!("k1 {}", light.isotope.symbol()),
            points: &light.points,
            fit: &light.fit,
            line: MAKO_R_4[0],
            marker: MAKO_R_4[1],
        },
        Series {
            label: format!("k1 {}", heavy.isotope.symbol()),
            points: &heavy.points,
            fit: &heavy.fit,
            line: MAKO_R_4[2],
            marker: MAKO_R_4[3],
        },
    ];

    draw_figure(path, &series, Linearization::Eyring.y_label(), None, style)
        .map_err(|e| AppError::new(5, format!("Failed to render '{}': {e}", path.display())))
}

fn draw_figure(
    path: &Path,
    series: &[Series<'_>],
    y_label: &str,
    y_range: Option<(f64, f64)>,
    style: &PlotStyle,
) -> Result<(), Box<dyn Error>> {
    let annotate = style.annotate && ensure_font();

    let (x0, x1) = padded(series.iter().flat_map(|s| s.points.iter().map(|p| 1000.0 * p.x)), 0.05);
    let (y0, y1) = match y_range {
        Some(range) => range,
        None => padded(
            series
                .iter()
                .flat_map(|s| s.points.iter().flat_map(|p| [p.y.value - p.y.std_dev, p.y.value + p.y.std_dev])),
            0.08,
        ),
    };

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    // Without label areas Plotters never touches the font backend.
    let mut builder = ChartBuilder::on(&root);
    builder.margin(style.px(12.0));
    if annotate {
        builder
            .x_label_area_size(style.px(36.0))
            .y_label_area_size(style.px(44.0));
    }
    let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;

    let mut mesh = chart.configure_mesh();
    mesh.bold_line_style(GRID.mix(0.5))
        .light_line_style(GRID.mix(0.12))
        .axis_style(BLACK.stroke_width(style.px(0.8)));
    if annotate {
        mesh.x_desc(X_DESC)
            .y_desc(y_label)
            .axis_desc_style((FONT_FAMILY, style.pt(14.0)))
            .label_style((FONT_FAMILY, style.pt(12.0)));
    }
    mesh.draw()?;

    let error_style = BLACK.mix(MARKER_ALPHA).stroke_width(style.px(1.0));
    let cap = style.px(6.0);
    let radius = style.px(3.5);

    for s in series {
        // 1) Fitted line across the measured temperature range.
        let (lo, hi) = s
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
        chart.draw_series(LineSeries::new(
            [lo, hi].into_iter().map(|x| (1000.0 * x, s.fit.predict(x))),
            s.line.stroke_width(style.px(2.0)),
        ))?;

        // 2) ±σ error bars.
        chart.draw_series(s.points.iter().map(|p| {
            ErrorBar::new_vertical(
                1000.0 * p.x,
                p.y.value - p.y.std_dev,
                p.y.value,
                p.y.value + p.y.std_dev,
                error_style,
                cap,
            )
        }))?;

        // 3) Markers (also the legend swatch).
        let marker = s.marker.mix(MARKER_ALPHA).filled();
        let anno = chart.draw_series(
            s.points
                .iter()
                .map(|p| Circle::new((1000.0 * p.x, p.y.value), radius, marker)),
        )?;
        if annotate {
            anno.label(s.label.as_str())
                .legend(move |(x, y)| Circle::new((x, y), radius, marker));
        }
    }

    if annotate {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .margin(style.px(6.0))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .label_font((FONT_FAMILY, style.pt(14.0)))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Min/max of the finite values, widened by `frac` of the span on each side.
fn padded(values: impl Iterator<Item = f64>, frac: f64) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !(lo.is_finite() && hi.is_finite()) {
        return (0.0, 1.0);
    }
    let span = (hi - lo).max(1e-6 * lo.abs().max(1.0));
    (lo - frac * span, hi + frac * span)
}
