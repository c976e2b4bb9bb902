use crate::errors::{Bound, InputError, ValidationReport};
use crate::expression::Expression;
use log::debug;

/// Point at which a function is probed to check it is well-formed.
pub const PROBE_X: f64 = 1.0;

/// Inputs that passed every rule, with the function already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInputs {
    pub expression: Expression,
    pub x_min: f64,
    pub x_max: f64,
}

/// Checks the three raw form fields.
///
/// Every rule runs regardless of earlier failures, and the report lists the
/// violations in rule order:
///
/// 1. the function must not be empty;
/// 2. `x_min` must be non-empty and numeric;
/// 3. `x_max` must be non-empty and numeric;
/// 4. `x_min < x_max`, checked only when both bounds are non-zero;
/// 5. the function must parse and be defined at `x = 1`.
pub fn check_inputs(
    function: &str,
    x_min: &str,
    x_max: &str,
) -> Result<ValidInputs, ValidationReport> {
    let mut errors = Vec::new();

    if function.is_empty() {
        errors.push(InputError::EmptyFunction);
    }

    let min = parse_bound(Bound::Min, x_min, &mut errors);
    let max = parse_bound(Bound::Max, x_max, &mut errors);

    if let (Some(min), Some(max)) = (min, max) {
        // a zero bound skips the ordering check entirely
        if min != 0.0 && max != 0.0 && min >= max {
            errors.push(InputError::BoundsOrder);
        }
    }

    let expression = if function.is_empty() {
        None
    } else {
        probe(function).map_or_else(
            |error| {
                errors.push(error);
                None
            },
            Some,
        )
    };

    let report = ValidationReport::new(errors);
    match (expression, min, max) {
        (Some(expression), Some(x_min), Some(x_max)) if report.is_empty() => Ok(ValidInputs {
            expression,
            x_min,
            x_max,
        }),
        _ => Err(report),
    }
}

fn parse_bound(bound: Bound, text: &str, errors: &mut Vec<InputError>) -> Option<f64> {
    if text.is_empty() {
        errors.push(InputError::EmptyBound(bound));
        return None;
    }
    let value =
        remove_digit_separators(text.trim()).and_then(|digits| digits.parse::<f64>().ok());
    if value.is_none() {
        errors.push(InputError::BoundNotNumber(bound));
    }
    value
}

/// Drops `_` separators such as `1_000`. A separator must sit between two
/// digits; anywhere else the text is not a number.
fn remove_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut digits = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(digits)
}

fn probe(function: &str) -> Result<Expression, InputError> {
    let expression = Expression::parse(function).map_err(|error| {
        debug!("Rejecting function '{}': {}", function, error);
        InputError::InvalidFunction
    })?;
    expression.evaluate_at(PROBE_X).map_err(|reason| {
        debug!(
            "Rejecting function '{}': undefined at x = {}: {}",
            function, PROBE_X, reason
        );
        InputError::InvalidFunction
    })?;
    Ok(expression)
}
