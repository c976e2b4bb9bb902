use std::fmt;
use thiserror::Error;

/// Shown whenever the function text cannot be parsed or is undefined
/// somewhere on the requested range.
pub const INVALID_FUNCTION_MESSAGE: &str = "Invalid function!! \n function should be in the form of x  and with those  operations   */+-^ sin cos tan log exp  \n Example: 2*x^2+3*x-4  or 2*sin(x)+3*cos(x)  or 2*log(x)+3*exp(x)";

pub const EMPTY_FUNCTION_MESSAGE: &str = "Function cannot be empty";
pub const BOUNDS_ORDER_MESSAGE: &str = "x_min should be less than x_max";

/// Which end of the plotting interval a message refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => f.write_str("x_min"),
            Bound::Max => f.write_str("x_max"),
        }
    }
}

/// A single violated input rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{}", EMPTY_FUNCTION_MESSAGE)]
    EmptyFunction,
    #[error("{0} cannot be empty")]
    EmptyBound(Bound),
    #[error("{0} should be a number")]
    BoundNotNumber(Bound),
    #[error("{}", BOUNDS_ORDER_MESSAGE)]
    BoundsOrder,
    #[error("{}", INVALID_FUNCTION_MESSAGE)]
    InvalidFunction,
}

/// Every input rule that failed, in rule order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    errors: Vec<InputError>,
}

impl ValidationReport {
    pub fn new(errors: Vec<InputError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[InputError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for ValidationReport {}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    Syntax(String),
    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("Unknown function '{0}'")]
    UnknownFunction(String),
    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Malformed expression: expected {0}")]
    Malformed(&'static str),
}

/// The expression is not defined at a particular point.
///
/// This is an ordinary evaluation outcome, not a failure of the expression
/// itself: `1/x` is a perfectly good function that happens to be undefined
/// at zero.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Logarithm of non-positive value {0}")]
    LogarithmOfNonPositive(f64),
    #[error("{operation} produced a non-finite result")]
    NonFinite { operation: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("Function is undefined at x = {x}: {reason}")]
    Undefined { x: f64, reason: DomainError },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Sampling step must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("Cannot sample an unbounded range [{x_min}, {x_max}]")]
    UnboundedRange { x_min: f64, x_max: f64 },
    #[error("Range would produce {requested} points, the limit is {limit}")]
    TooManyPoints { requested: f64, limit: usize },
}

/// Why a plot request produced no plot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error(transparent)]
    Invalid(#[from] ValidationReport),
    #[error("{}", INVALID_FUNCTION_MESSAGE)]
    Undefined { x: f64, reason: DomainError },
    #[error(transparent)]
    Sampling(SampleError),
    #[error("Failed to render plot: {0}")]
    Render(String),
}

impl PlotError {
    /// Text for the blocking error dialog.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<SampleError> for PlotError {
    fn from(error: SampleError) -> Self {
        match error {
            SampleError::Undefined { x, reason } => PlotError::Undefined { x, reason },
            SampleError::Parse(_) => PlotError::Invalid(ValidationReport::new(vec![
                InputError::InvalidFunction,
            ])),
            other => PlotError::Sampling(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_messages() {
        assert_eq!(
            InputError::EmptyBound(Bound::Min).to_string(),
            "x_min cannot be empty"
        );
        assert_eq!(
            InputError::BoundNotNumber(Bound::Max).to_string(),
            "x_max should be a number"
        );
    }

    #[test]
    fn test_report_joins_with_newline() {
        let report = ValidationReport::new(vec![
            InputError::EmptyFunction,
            InputError::EmptyBound(Bound::Min),
            InputError::EmptyBound(Bound::Max),
        ]);
        assert_eq!(
            report.to_string(),
            "Function cannot be empty\nx_min cannot be empty\nx_max cannot be empty"
        );
    }

    #[test]
    fn test_undefined_sample_shows_invalid_function_message() {
        let error = PlotError::from(SampleError::Undefined {
            x: 0.0,
            reason: DomainError::DivisionByZero,
        });
        assert_eq!(error.user_message(), INVALID_FUNCTION_MESSAGE);
    }

    #[test]
    fn test_range_errors_keep_their_message() {
        let error = PlotError::from(SampleError::InvalidStep(0.0));
        assert_eq!(
            error.user_message(),
            "Sampling step must be positive and finite, got 0"
        );
    }
}
