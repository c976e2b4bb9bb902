use crate::ast::{ASTNode, Parser};
use crate::errors::{DomainError, ParseError};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// A parsed function of `x`, ready to be evaluated at any number of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    ast: ASTNode,
}

impl Expression {
    /// Parses `text`, treating an uppercase `X` as the variable `x`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let source = normalize(text);
        let ast = Parser::parse_expression(&source)?;
        Ok(Self { source, ast })
    }

    /// Value of the function at `x`, or the reason it is undefined there.
    pub fn evaluate_at(&self, x: f64) -> Result<f64, DomainError> {
        self.ast.evaluate(x).inspect_err(|reason| {
            debug!("'{}' is undefined at x = {}: {}", self.source, x, reason);
        })
    }

    pub fn ast(&self) -> &ASTNode {
        &self.ast
    }

    /// The normalized text this expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parses and evaluates in one step.
///
/// # Returns
///
/// * `Ok(Some(y))` if the function is defined at `x`.
/// * `Ok(None)` if it is undefined there (division by zero, log of a
///   non-positive number, a non-finite result).
/// * `Err(ParseError)` if the text is not a valid function of `x`.
pub fn evaluate(text: &str, x: f64) -> Result<Option<f64>, ParseError> {
    let expression = Expression::parse(text)?;
    Ok(expression.evaluate_at(x).ok())
}

fn normalize(text: &str) -> String {
    text.replace('X', "x")
}
