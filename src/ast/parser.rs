use crate::ast::{constant, ASTNode, Function, Operator, VARIABLE};
use crate::errors::ParseError;
use log::debug;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./expression.pest"]
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parses already-normalized text into a tree over the variable `x`.
    pub fn parse_expression(input: &str) -> Result<ASTNode, ParseError> {
        debug!("Parsing expression: {}", input);
        let parse_result = ExpressionParser::parse(Rule::expression, input)
            .map_err(|e| ParseError::Syntax(e.to_string()))?
            .next()
            .ok_or(ParseError::Malformed("an expression"))?;

        let mut pairs = parse_result.into_inner();
        let ast = Self::build_sum(next_pair(&mut pairs, "an expression")?)?;
        debug!("Parse result: {:?}", ast);
        Ok(ast)
    }

    fn build_sum(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_product(next_pair(&mut pairs, "a term")?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator = Operator::try_from(operator_pair.as_str())?;
            let right = Self::build_product(next_pair(&mut pairs, "a term")?)?;
            node = ASTNode::binary(node, operator, right);
        }

        Ok(node)
    }

    fn build_product(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        let mut pairs = pair.into_inner();
        let mut node = Self::build_unary(next_pair(&mut pairs, "a factor")?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator = Operator::try_from(operator_pair.as_str())?;
            let right = Self::build_unary(next_pair(&mut pairs, "a factor")?)?;
            node = ASTNode::binary(node, operator, right);
        }

        Ok(node)
    }

    /// Leading signs bind looser than `^`, so `-x^2` is `-(x^2)`.
    ///
    /// A run of signs folds to at most one negation.
    fn build_unary(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        let mut negations = 0usize;
        let mut power = None;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::sign => {
                    if inner.as_str() == "-" {
                        negations += 1;
                    }
                }
                Rule::power => power = Some(inner),
                rule => {
                    return Err(ParseError::Syntax(format!(
                        "Unexpected rule in unary expression: {:?}",
                        rule
                    )))
                }
            }
        }

        let mut node = Self::build_power(power.ok_or(ParseError::Malformed("an operand"))?)?;
        if negations % 2 == 1 {
            node = ASTNode::negate(node);
        }
        Ok(node)
    }

    /// The exponent is itself a unary expression, which makes `^`
    /// right-associative: `2^3^2` is `2^(3^2)`.
    fn build_power(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        let mut pairs = pair.into_inner();
        let base = Self::build_atom(next_pair(&mut pairs, "a base")?)?;

        match pairs.next() {
            Some(operator_pair) => {
                let operator = Operator::try_from(operator_pair.as_str())?;
                let exponent = Self::build_unary(next_pair(&mut pairs, "an exponent")?)?;
                Ok(ASTNode::binary(base, operator, exponent))
            }
            None => Ok(base),
        }
    }

    fn build_atom(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        let mut pairs = pair.into_inner();
        let inner = next_pair(&mut pairs, "a primary expression")?;
        debug!("Building primary expression: {:?}", inner.as_rule());

        match inner.as_rule() {
            Rule::number => {
                let text = inner.as_str();
                text.parse::<f64>()
                    .map(ASTNode::Number)
                    .map_err(|_| ParseError::InvalidNumber(text.to_string()))
            }
            Rule::identifier => Self::build_identifier(inner.as_str()),
            Rule::call => Self::build_function_call(inner),
            Rule::sum => Self::build_sum(inner),
            rule => Err(ParseError::Syntax(format!(
                "Unexpected rule in primary expression: {:?}",
                rule
            ))),
        }
    }

    fn build_identifier(name: &str) -> Result<ASTNode, ParseError> {
        if name == VARIABLE {
            return Ok(ASTNode::Variable);
        }
        constant(name)
            .map(ASTNode::Number)
            .ok_or_else(|| ParseError::UnknownIdentifier(name.to_string()))
    }

    fn build_function_call(pair: Pair<Rule>) -> Result<ASTNode, ParseError> {
        let mut inner = pair.into_inner();
        let function = Function::try_from(next_pair(&mut inner, "a function name")?.as_str())?;
        let argument = Self::build_sum(next_pair(&mut inner, "a function argument")?)?;
        Ok(ASTNode::call(function, argument))
    }
}

fn next_pair<'i>(
    pairs: &mut Pairs<'i, Rule>,
    expected: &'static str,
) -> Result<Pair<'i, Rule>, ParseError> {
    pairs.next().ok_or(ParseError::Malformed(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::UnaryOperator;

    fn number(value: f64) -> ASTNode {
        ASTNode::Number(value)
    }

    #[test]
    fn test_polynomial() {
        let ast = ExpressionParser::parse_expression("5*x^3 + 2*x").unwrap();
        let expected = ASTNode::binary(
            ASTNode::binary(
                number(5.0),
                Operator::Multiply,
                ASTNode::binary(ASTNode::Variable, Operator::Power, number(3.0)),
            ),
            Operator::Add,
            ASTNode::binary(number(2.0), Operator::Multiply, ASTNode::Variable),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_power_is_right_associative() {
        let ast = ExpressionParser::parse_expression("2^3^2").unwrap();
        let expected = ASTNode::binary(
            number(2.0),
            Operator::Power,
            ASTNode::binary(number(3.0), Operator::Power, number(2.0)),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let ast = ExpressionParser::parse_expression("x - 1 - 2").unwrap();
        let expected = ASTNode::binary(
            ASTNode::binary(ASTNode::Variable, Operator::Subtract, number(1.0)),
            Operator::Subtract,
            number(2.0),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_negation_binds_looser_than_power() {
        let ast = ExpressionParser::parse_expression("-x^2").unwrap();
        let expected = ASTNode::UnaryOperation {
            operator: UnaryOperator::Negate,
            operand: Box::new(ASTNode::binary(
                ASTNode::Variable,
                Operator::Power,
                number(2.0),
            )),
        };
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_negative_exponent() {
        let ast = ExpressionParser::parse_expression("2^-x").unwrap();
        let expected = ASTNode::binary(
            number(2.0),
            Operator::Power,
            ASTNode::negate(ASTNode::Variable),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_many_leading_signs() {
        assert_eq!(
            ExpressionParser::parse_expression("--x").unwrap(),
            ASTNode::Variable
        );
        assert_eq!(
            ExpressionParser::parse_expression("-+-+-x").unwrap(),
            ASTNode::negate(ASTNode::Variable)
        );

        let even = format!("{}x", "-".repeat(50_000));
        assert_eq!(
            ExpressionParser::parse_expression(&even).unwrap(),
            ASTNode::Variable
        );
        let odd = format!("{}x^2", "-".repeat(50_001));
        assert_eq!(
            ExpressionParser::parse_expression(&odd).unwrap(),
            ASTNode::negate(ASTNode::binary(
                ASTNode::Variable,
                Operator::Power,
                number(2.0)
            ))
        );
    }

    #[test]
    fn test_double_star_power() {
        assert_eq!(
            ExpressionParser::parse_expression("x**2").unwrap(),
            ExpressionParser::parse_expression("x^2").unwrap()
        );
    }

    #[test]
    fn test_unary_plus_is_dropped() {
        assert_eq!(
            ExpressionParser::parse_expression("+x").unwrap(),
            ASTNode::Variable
        );
    }

    #[test]
    fn test_function_call() {
        let ast = ExpressionParser::parse_expression("2*sin(x)+3*cos(x)").unwrap();
        let expected = ASTNode::binary(
            ASTNode::binary(
                number(2.0),
                Operator::Multiply,
                ASTNode::call(Function::Sin, ASTNode::Variable),
            ),
            Operator::Add,
            ASTNode::binary(
                number(3.0),
                Operator::Multiply,
                ASTNode::call(Function::Cos, ASTNode::Variable),
            ),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_nested_groups() {
        let ast = ExpressionParser::parse_expression("((x + 1) * (x - 1))").unwrap();
        let expected = ASTNode::binary(
            ASTNode::binary(ASTNode::Variable, Operator::Add, number(1.0)),
            Operator::Multiply,
            ASTNode::binary(ASTNode::Variable, Operator::Subtract, number(1.0)),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_number_literals() {
        let cases = [
            ("12", 12.0),
            ("1.5", 1.5),
            (".5", 0.5),
            ("2.", 2.0),
            ("1e-3", 0.001),
            ("2E3", 2000.0),
        ];
        for (input, value) in cases {
            assert_eq!(
                ExpressionParser::parse_expression(input).unwrap(),
                number(value),
                "Input '{}'",
                input
            );
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(
            ExpressionParser::parse_expression("pi").unwrap(),
            number(std::f64::consts::PI)
        );
        assert_eq!(
            ExpressionParser::parse_expression("E").unwrap(),
            number(std::f64::consts::E)
        );
    }

    #[test]
    fn test_excess_whitespace() {
        let ast = ExpressionParser::parse_expression("   5 *  x ^ 3   +\t2 * x  ").unwrap();
        assert_eq!(
            ast,
            ExpressionParser::parse_expression("5*x^3+2*x").unwrap()
        );
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(
            ExpressionParser::parse_expression("x+y"),
            Err(ParseError::UnknownIdentifier("y".to_string()))
        );
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            ExpressionParser::parse_expression("sqrt(x)"),
            Err(ParseError::UnknownFunction("sqrt".to_string()))
        );
    }

    #[test]
    fn test_invalid_syntax() {
        let inputs = vec![
            "",
            "   ",
            "2x",
            "x +",
            "* x",
            "(x + 1",
            "x + 1)",
            "sin x",
            "sin()",
            "sin(x, 2)",
            "x % 2",
            "x ^^ 2",
            "x @ 2",
            "1..2",
        ];

        for input in inputs {
            let result = ExpressionParser::parse_expression(input);
            assert!(
                matches!(result, Err(ParseError::Syntax(_))),
                "Input '{}' should fail to parse, got {:?}",
                input,
                result
            );
        }
    }
}
