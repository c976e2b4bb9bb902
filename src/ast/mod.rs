mod evaluator;
mod parser;

pub use parser::ExpressionParser as Parser;

use crate::errors::{DomainError, ParseError};

/// Name of the single free variable.
pub const VARIABLE: &str = "x";

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    Variable,
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<ASTNode>,
    },
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    FunctionCall {
        function: Function,
        argument: Box<ASTNode>,
    },
}

impl ASTNode {
    pub fn binary(left: ASTNode, operator: Operator, right: ASTNode) -> Self {
        ASTNode::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn negate(operand: ASTNode) -> Self {
        ASTNode::UnaryOperation {
            operator: UnaryOperator::Negate,
            operand: Box::new(operand),
        }
    }

    pub fn call(function: Function, argument: ASTNode) -> Self {
        ASTNode::FunctionCall {
            function,
            argument: Box::new(argument),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -operand,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, DomainError> {
        let value = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => {
                if right == 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                left / right
            }
            Operator::Power => {
                if left == 0.0 && right < 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                left.powf(right)
            }
        };
        finite(self.symbol(), value)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            "^" | "**" => Ok(Operator::Power),
            _ => Err(ParseError::UnknownOperator(value.to_string())),
        }
    }
}

/// Elementary functions of one argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Log,
    Exp,
}

impl Function {
    pub fn apply(&self, argument: f64) -> Result<f64, DomainError> {
        let value = match self {
            Function::Sin => argument.sin(),
            Function::Cos => argument.cos(),
            Function::Tan => argument.tan(),
            Function::Log => {
                if argument <= 0.0 {
                    return Err(DomainError::LogarithmOfNonPositive(argument));
                }
                argument.ln()
            }
            Function::Exp => argument.exp(),
        };
        finite(self.name(), value)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
            Function::Exp => "exp",
        }
    }
}

impl TryFrom<&str> for Function {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sin" => Ok(Function::Sin),
            "cos" => Ok(Function::Cos),
            "tan" => Ok(Function::Tan),
            "log" => Ok(Function::Log),
            "exp" => Ok(Function::Exp),
            _ => Err(ParseError::UnknownFunction(value.to_string())),
        }
    }
}

/// Named constants understood alongside the variable.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "E" => Some(std::f64::consts::E),
        _ => None,
    }
}

pub(crate) fn finite(operation: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { operation })
    }
}
