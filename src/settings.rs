use crate::errors::SampleError;

/// Distance between consecutive sample points.
pub const DEFAULT_STEP: f64 = 0.1;

/// Upper bound on points produced by a single plot request.
pub const DEFAULT_MAX_POINTS: usize = 1_000_000;

/// Stroke used for the plotted line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineStyle {
    pub color: (u8, u8, u8),
    pub width: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: (255, 0, 0),
            width: 2,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlotSettings {
    pub step: f64,
    pub max_points: usize,
    pub line: LineStyle,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_points: DEFAULT_MAX_POINTS,
            line: LineStyle::default(),
        }
    }
}

impl PlotSettings {
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn validate(&self) -> Result<(), SampleError> {
        if self.step.is_finite() && self.step > 0.0 {
            Ok(())
        } else {
            Err(SampleError::InvalidStep(self.step))
        }
    }
}
