pub mod ast;
pub mod errors;
pub mod expression;
pub mod plot;
pub mod render;
pub mod sampler;
pub mod settings;
pub mod validation;

pub use errors::{
    DomainError, InputError, ParseError, PlotError, SampleError, ValidationReport,
    INVALID_FUNCTION_MESSAGE,
};
pub use expression::{evaluate, Expression};
pub use plot::FunctionPlotter;
pub use render::{PlotSurface, RecordingSurface, SvgSurface};
pub use sampler::{Point, Sampler};
pub use settings::{LineStyle, PlotSettings};
pub use validation::{check_inputs, ValidInputs};
