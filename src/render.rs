use crate::sampler::Point;
use crate::settings::LineStyle;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Anything that can draw a sampled function as one connected line.
///
/// Each call replaces whatever was drawn before.
pub trait PlotSurface {
    fn draw_line(&mut self, points: &[Point], style: &LineStyle) -> Result<(), Box<dyn Error>>;
}

/// Keeps the most recent line in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    line: Option<(Vec<Point>, LineStyle)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> Option<&[Point]> {
        self.line.as_ref().map(|(points, _)| points.as_slice())
    }

    pub fn style(&self) -> Option<&LineStyle> {
        self.line.as_ref().map(|(_, style)| style)
    }

    pub fn line_count(&self) -> usize {
        usize::from(self.line.is_some())
    }
}

impl PlotSurface for RecordingSurface {
    fn draw_line(&mut self, points: &[Point], style: &LineStyle) -> Result<(), Box<dyn Error>> {
        self.line = Some((points.to_vec(), *style));
        Ok(())
    }
}

/// Renders the line into an in-memory SVG document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    document: String,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            document: String::new(),
        }
    }

    /// The last rendered document, empty until something is drawn.
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl PlotSurface for SvgSurface {
    fn draw_line(&mut self, points: &[Point], style: &LineStyle) -> Result<(), Box<dyn Error>> {
        let (x_range, y_range) = chart_ranges(points);
        let (r, g, b) = style.color;

        let mut document = String::new();
        {
            let root =
                SVGBackend::with_string(&mut document, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .build_cartesian_2d(x_range, y_range)?;

            chart.draw_series(LineSeries::new(
                points.iter().map(|&point| <(f64, f64)>::from(point)),
                RGBColor(r, g, b).stroke_width(style.width),
            ))?;

            root.present()?;
        }

        self.document = document;
        Ok(())
    }
}

/// Widens `[min_val, max_val]` by 5% on each side, or by 0.5 when the values
/// (nearly) coincide. The bounds may come in either order.
pub fn calculate_range(min_val: f64, max_val: f64) -> Range<f64> {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = max - min;
    let padding = if range < 1e-6 { 0.5 } else { range * 0.05 };
    (min - padding)..(max + padding)
}

fn chart_ranges(points: &[Point]) -> (Range<f64>, Range<f64>) {
    if points.is_empty() {
        return (calculate_range(0.0, 1.0), calculate_range(0.0, 1.0));
    }
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for point in points {
        x_min = x_min.min(point.x);
        x_max = x_max.max(point.x);
        y_min = y_min.min(point.y);
        y_max = y_max.max(point.y);
    }
    (calculate_range(x_min, x_max), calculate_range(y_min, y_max))
}
