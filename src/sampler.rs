use crate::errors::SampleError;
use crate::expression::Expression;
use crate::settings::PlotSettings;
use log::debug;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Walks `[x_min, x_max]` in fixed steps and evaluates a function at each stop.
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    settings: PlotSettings,
}

impl Sampler {
    pub fn new(settings: PlotSettings) -> Self {
        Self { settings }
    }

    /// Samples `expression` from `x_min` while `x <= x_max`.
    ///
    /// `x` advances by repeatedly adding the step, so rounding can decide
    /// whether the final stop lands on `x_max`. A single undefined sample
    /// fails the whole run; no partial series is returned. An inverted
    /// range yields no points.
    pub fn sample(
        &self,
        expression: &Expression,
        x_min: f64,
        x_max: f64,
    ) -> Result<Vec<Point>, SampleError> {
        self.settings.validate()?;
        let estimate = self.check_range(x_min, x_max)?;
        debug!(
            "Sampling '{}' on [{}, {}], about {} points",
            expression, x_min, x_max, estimate
        );

        let step = self.settings.step;
        let mut points = Vec::with_capacity(estimate as usize);
        let mut x = x_min;
        while x <= x_max {
            // x + step == x once x is large enough; the count check stops that
            if points.len() == self.settings.max_points {
                return Err(SampleError::TooManyPoints {
                    requested: estimate,
                    limit: self.settings.max_points,
                });
            }
            let y = expression
                .evaluate_at(x)
                .map_err(|reason| SampleError::Undefined { x, reason })?;
            points.push(Point { x, y });
            x += step;
        }

        Ok(points)
    }

    /// Parses `text` and samples it.
    pub fn sample_text(
        &self,
        text: &str,
        x_min: f64,
        x_max: f64,
    ) -> Result<Vec<Point>, SampleError> {
        let expression = Expression::parse(text)?;
        self.sample(&expression, x_min, x_max)
    }

    /// Rejects ranges that cannot be walked and returns the expected count.
    fn check_range(&self, x_min: f64, x_max: f64) -> Result<f64, SampleError> {
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(SampleError::UnboundedRange { x_min, x_max });
        }
        if x_min > x_max {
            return Ok(0.0);
        }

        let estimate = ((x_max - x_min) / self.settings.step).floor() + 1.0;
        if estimate > self.settings.max_points as f64 {
            return Err(SampleError::TooManyPoints {
                requested: estimate,
                limit: self.settings.max_points,
            });
        }
        Ok(estimate)
    }
}
