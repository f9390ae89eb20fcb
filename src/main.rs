use std::{fs, io, process::ExitCode};

use clap::Parser;
use pratt_calc::{
    Calculator,
    config::{DEFAULT_MAX_DEPTH, Settings},
    session::{self, render_report},
    util::format::DEFAULT_PRECISION,
};
use tracing::{Level, warn};

/// pratt-calc evaluates arithmetic expressions, with implicit multiplication,
/// factorials, constants and functions.
///
/// Without an expression or file it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-blank line of a file instead.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<String>,

    /// Decimal places printed for results.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Deepest nesting followed before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Seed for `rand`, for reproducible draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Logs more to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate once.
    expression: Option<String>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings::default().with_precision(self.precision)
                           .with_max_depth(self.max_depth)
                           .with_seed(self.seed)
    }

    const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Prints the result of `expr` to stdout, or its errors to stderr.
///
/// Returns whether evaluation succeeded.
fn evaluate_and_print(calc: &mut Calculator, expr: &str) -> bool {
    match calc.evaluate(expr) {
        Ok(value) => {
            println!("{}", calc.format(value));
            true
        },
        Err(report) => {
            eprintln!("{}",
                      render_report(expr, &report, calc.settings().max_reported_errors));
            false
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_max_level(args.log_level())
                             .init();

    let mut calc = Calculator::with_settings(args.settings());

    if let Some(path) = &args.file {
        let Ok(contents) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };

        let mut all_ok = true;
        for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
            all_ok &= evaluate_and_print(&mut calc, line);
        }
        return if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    if let Some(expr) = &args.expression {
        return if evaluate_and_print(&mut calc, expr) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = session::run(&mut calc, stdin.lock(), &mut stdout) {
        warn!(error = %e, "session ended on an I/O error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
