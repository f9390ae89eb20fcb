use std::{
    fmt::Write as _,
    io::{self, BufRead, Write},
};

use tracing::{debug, info};

use crate::{
    Calculator,
    error::{ErrorReport, Position},
    interpreter::function::core::symbol_names,
};

const GREETING: &str =
    "Type 'help' for help, 'clear' to clear the screen, or 'exit' to exit the program.";
const PROMPT: &str = "> ";
const FAREWELL: &str = "Goodbye!";
/// Clears the terminal and moves the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A session command typed instead of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Clear,
    Help,
}

impl Command {
    /// Recognizes a command anywhere in the line, ignoring case.
    ///
    /// `exit` wins over `clear`, which wins over `help`.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::session::Command;
    ///
    /// assert_eq!(Command::parse("EXIT"), Some(Command::Exit));
    /// assert_eq!(Command::parse("please help"), Some(Command::Help));
    /// assert_eq!(Command::parse("exp + 1"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.to_lowercase();
        if line.contains("exit") {
            Some(Self::Exit)
        } else if line.contains("clear") {
            Some(Self::Clear)
        } else if line.contains("help") {
            Some(Self::Help)
        } else {
            None
        }
    }
}

/// Renders at most `limit` errors of `report` for display.
///
/// Errors pointing at a character echo the input with a caret under it.
/// Errors pointing at a token name the token index.
///
/// # Example
/// ```
/// use pratt_calc::{evaluate, session::render_report};
///
/// let report = evaluate("1 $ 2").unwrap_err();
/// assert_eq!(render_report("1 $ 2", &report, 10),
///            "Error: Invalid character: '$' (character code: 36).\n  1 $ 2\n    ^");
/// ```
#[must_use]
pub fn render_report(expr: &str, report: &ErrorReport, limit: usize) -> String {
    let echo: String = expr.chars()
                           .map(|c| if c.is_whitespace() || c == '\0' { ' ' } else { c })
                           .collect();
    let mut text = String::new();

    for (i, error) in report.errors().iter().take(limit).enumerate() {
        if i > 0 {
            text.push('\n');
        }
        match error.position() {
            Some(Position::Char(column)) => {
                let _ = write!(text, "Error: {error}\n  {echo}\n  {:column$}^", "");
            },
            Some(Position::Token(index)) => {
                let _ = write!(text, "Error at token {index}: {error}");
            },
            None => {
                let _ = write!(text, "Error: {error}");
            },
        }
    }

    if report.len() > limit {
        let _ = write!(text, "\n... and {} more", report.len() - limit);
    }
    text
}

/// The help manual, listing operators, constants and functions.
#[must_use]
pub fn help_manual() -> String {
    let mut text = String::from("Calculator Help Manual\n----------------------\n");
    text.push_str("OPERATIONS\n");
    text.push_str("- Results are printed with up to 9 decimal places by default.\n");
    text.push_str("- Operations supported:\n");
    for (name, symbol) in [("Addition", "+"),
                           ("Subtraction", "-"),
                           ("Multiplication", "*"),
                           ("Division", "/"),
                           ("Remainder", "%"),
                           ("Exponentiation", "^"),
                           ("Factorial", "!"),
                           ("Parentheses", "()")]
    {
        let _ = writeln!(text, "\t- {name:<15}[{symbol}]");
    }
    text.push_str("- Writing two operands next to each other multiplies them: 2pi, 3(4).\n");
    text.push_str("- Trigonometric functions work in degrees.\n");
    text.push_str("- Symbols: ");
    text.push_str(&symbol_names().collect::<Vec<_>>().join(", "));
    text.push('\n');
    text.push_str("OTHER COMMANDS\n");
    text.push_str("- Any line containing 'help' shows this manual.\n");
    text.push_str("- Any line containing 'clear' clears the screen.\n");
    text.push_str("- Any line containing 'exit' ends the session.");
    text
}

/// Evaluates `expr` and returns the text to show for it.
#[must_use]
pub fn answer(calc: &mut Calculator, expr: &str) -> String {
    match calc.evaluate(expr) {
        Ok(value) => calc.format(value),
        Err(report) => render_report(expr, &report, calc.settings().max_reported_errors),
    }
}

/// Runs an interactive session until `exit` or the end of `input`.
///
/// Every line is either a command or an expression. Blank lines are skipped.
///
/// # Errors
/// Returns any I/O error raised by `input` or `output`.
pub fn run<R: BufRead, W: Write>(calc: &mut Calculator, input: R, output: &mut W) -> io::Result<()> {
    writeln!(output, "{GREETING}")?;
    info!("session started");

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let expr = line.trim();
        if expr.is_empty() {
            continue;
        }

        match Command::parse(expr) {
            Some(Command::Exit) => {
                writeln!(output, "{FAREWELL}")?;
                break;
            },
            Some(Command::Clear) => write!(output, "{CLEAR_SCREEN}")?,
            Some(Command::Help) => writeln!(output, "{}", help_manual())?,
            None => {
                debug!(expr, "evaluating");
                writeln!(output, "{}\n", answer(calc, expr))?;
            },
        }
    }

    info!("session ended");
    Ok(())
}
