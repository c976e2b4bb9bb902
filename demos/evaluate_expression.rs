use function_plotter::{evaluate, Expression};

fn main() {
    pretty_env_logger::init();

    let cases = [
        ("5*x^3 + 2*x", 2.0),
        ("2*sin(x)+3*cos(x)", 0.0),
        ("2*log(x)+3*exp(x)", 1.0),
        ("1/x", 0.0),
        ("2^3^x", 2.0),
        ("x+y", 1.0),
    ];

    for (expression, x) in cases {
        match evaluate(expression, x) {
            Ok(Some(y)) => println!("{} at x = {}: {}", expression, x, y),
            Ok(None) => println!("{} at x = {}: undefined", expression, x),
            Err(err) => println!("{}: {}", expression, err),
        }
    }

    // parse once, evaluate many times
    let expression = Expression::parse("2*x^2+3*x-4").expect("Failed to parse");
    for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
        match expression.evaluate_at(x) {
            Ok(y) => println!("{} at x = {}: {}", expression, x, y),
            Err(err) => println!("{} at x = {}: {}", expression, x, err),
        }
    }
}
