use crate::ast::{finite, ASTNode};
use crate::errors::DomainError;

impl ASTNode {
    /// Evaluates the tree with `x` bound to the given value.
    ///
    /// Every intermediate result must be finite; the first operation that
    /// leaves the real line decides the returned [`DomainError`].
    pub fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        match self {
            ASTNode::Number(n) => Ok(*n),

            ASTNode::Variable => finite("x", x),

            ASTNode::UnaryOperation { operator, operand } => {
                let value = operand.evaluate(x)?;
                Ok(operator.apply(value))
            }

            ASTNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = left.evaluate(x)?;
                let right_value = right.evaluate(x)?;
                operator.apply(left_value, right_value)
            }

            ASTNode::FunctionCall { function, argument } => {
                let value = argument.evaluate(x)?;
                function.apply(value)
            }
        }
    }
}
