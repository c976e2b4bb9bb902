use function_plotter::{FunctionPlotter, LineStyle, PlotSettings, SvgSurface};
use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: plot_function <function> <x_min> <x_max> [output.svg]");
        return ExitCode::FAILURE;
    }
    let output = args.get(3).map(String::as_str).unwrap_or("plot.svg");

    let line = LineStyle {
        color: (200, 0, 0),
        ..LineStyle::default()
    };
    let plotter = FunctionPlotter::new(PlotSettings::default().with_line(line));
    let mut surface = SvgSurface::default();

    match plotter.plot(&args[0], &args[1], &args[2], &mut surface) {
        Ok(count) => {
            if let Err(err) = fs::write(output, surface.document()) {
                eprintln!("Error: could not write {}: {}", output, err);
                return ExitCode::FAILURE;
            }
            println!(
                "Plotted {} points to {} (step {})",
                count,
                output,
                plotter.settings().step
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error:\n{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
