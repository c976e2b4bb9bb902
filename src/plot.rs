use crate::errors::PlotError;
use crate::render::PlotSurface;
use crate::sampler::Sampler;
use crate::settings::PlotSettings;
use crate::validation::check_inputs;
use log::{info, warn};

/// Turns the three raw form fields into a drawn line.
///
/// This is the whole plot-button flow without any UI: validate, sample,
/// hand the series to a surface. On failure nothing is drawn and the error
/// carries the text to show the user.
#[derive(Debug, Clone, Default)]
pub struct FunctionPlotter {
    settings: PlotSettings,
}

impl FunctionPlotter {
    pub fn new(settings: PlotSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    /// Returns the number of points drawn.
    pub fn plot<S: PlotSurface>(
        &self,
        function: &str,
        x_min: &str,
        x_max: &str,
        surface: &mut S,
    ) -> Result<usize, PlotError> {
        let result = self.try_plot(function, x_min, x_max, surface);
        match &result {
            Ok(count) => info!("Plotted '{}' with {} points", function, count),
            Err(error) => warn!("Plot of '{}' rejected: {:?}", function, error),
        }
        result
    }

    fn try_plot<S: PlotSurface>(
        &self,
        function: &str,
        x_min: &str,
        x_max: &str,
        surface: &mut S,
    ) -> Result<usize, PlotError> {
        let inputs = check_inputs(function, x_min, x_max)?;

        let points = Sampler::new(self.settings).sample(
            &inputs.expression,
            inputs.x_min,
            inputs.x_max,
        )?;

        surface
            .draw_line(&points, &self.settings.line)
            .map_err(|e| PlotError::Render(e.to_string()))?;

        Ok(points.len())
    }
}
