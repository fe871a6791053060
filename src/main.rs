use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing::{debug, warn};

use calc_history::calculator::{
    CalcResult, Calculator, Operation, copy_to_clipboard, evaluate_expression,
    looks_like_expression, parse_operand,
};
use calc_history::config::Config;
use calc_history::logging;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(
    name = "calc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Four-function decimal calculator with history"
)]
struct Cli {
    /// Path to a custom config.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Copy the result to the clipboard
    #[arg(long, global = true)]
    copy: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two numbers
    Add(Operands),
    /// Subtract B from A
    Subtract(Operands),
    /// Multiply two numbers
    Multiply(Operands),
    /// Divide A by B
    Divide(Operands),
    /// Evaluate an expression such as "2 + 3"
    Eval { expression: String },
    /// Read expressions from stdin, one per line
    Repl,
}

#[derive(Args)]
struct Operands {
    #[arg(allow_negative_numbers = true)]
    a: String,
    #[arg(allow_negative_numbers = true)]
    b: String,
}

/// Copies a result somewhere; the system clipboard outside of tests.
type Copier = Box<dyn Fn(&str) -> calc_history::error::Result<()>>;

struct Session {
    calculator: Calculator,
    config: Config,
    json: bool,
    copy: bool,
    copier: Copier,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(&config.logging);

    let mut session = Session::new(config, cli.json, cli.copy);
    let status = session.execute(
        cli.command,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(ExitCode::from(status))
}

impl Session {
    fn new(config: Config, json: bool, copy: bool) -> Self {
        Self {
            calculator: Calculator::new(),
            copy: copy || config.clipboard.copy_results,
            json,
            config,
            copier: Box::new(copy_to_clipboard),
        }
    }

    /// Run one command and return the process exit status.
    fn execute<R: BufRead, W: Write, E: Write>(
        &mut self,
        command: Commands,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<u8> {
        let result = match command {
            Commands::Add(operands) => self.run_operation(Operation::Add, &operands)?,
            Commands::Subtract(operands) => self.run_operation(Operation::Subtract, &operands)?,
            Commands::Multiply(operands) => self.run_operation(Operation::Multiply, &operands)?,
            Commands::Divide(operands) => self.run_operation(Operation::Divide, &operands)?,
            Commands::Eval { expression } => self
                .evaluate(&expression)
                .with_context(|| format!("Invalid expression: {expression}"))?,
            Commands::Repl => {
                self.repl(input, out, err)?;
                return Ok(EXIT_SUCCESS);
            }
        };

        self.emit(&result, out, err)?;
        Ok(if result.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        })
    }

    fn run_operation(&mut self, operation: Operation, operands: &Operands) -> Result<CalcResult> {
        let a = parse_operand(&operands.a)
            .with_context(|| format!("Invalid operand: {}", operands.a))?;
        let b = parse_operand(&operands.b)
            .with_context(|| format!("Invalid operand: {}", operands.b))?;

        let expression = format!("{} {} {}", a, operation.symbol(), b);
        let outcome = self.calculator.calculate(a, b, operation);
        Ok(CalcResult::from_outcome(
            expression,
            outcome,
            &self.config.display,
        ))
    }

    fn evaluate(&mut self, input: &str) -> Option<CalcResult> {
        if !looks_like_expression(input) {
            debug!(input, "input does not look like an expression");
            return None;
        }
        evaluate_expression(&mut self.calculator, input, &self.config.display)
    }

    /// Print a result and copy it if requested.
    fn emit<W: Write, E: Write>(&self, result: &CalcResult, out: &mut W, err: &mut E) -> Result<()> {
        if self.json {
            let value = match result {
                CalcResult::Success {
                    expression,
                    clipboard_result,
                    ..
                } => json!({ "expression": expression, "result": clipboard_result }),
                CalcResult::Error {
                    expression,
                    message,
                } => json!({ "expression": expression, "error": message }),
            };
            writeln!(out, "{value}")?;
        } else if result.is_success() {
            writeln!(out, "{}", result.display())?;
        } else {
            writeln!(err, "error: {}", result.display())?;
        }

        if self.copy
            && let Some(text) = result.clipboard()
            && let Err(e) = (self.copier)(text)
        {
            warn!("{e}");
        }

        Ok(())
    }

    fn print_history<W: Write>(&self, out: &mut W) -> Result<()> {
        let history = self.calculator.history();

        if self.json {
            // One JSON value per line, like results
            writeln!(out, "{}", serde_json::to_string(history)?)?;
            return Ok(());
        }

        if history.is_empty() {
            writeln!(out, "(no calculations)")?;
        }
        for (i, calculation) in history.iter().enumerate() {
            let outcome = match calculation.perform() {
                Ok(value) => value.normalize().to_string(),
                Err(e) => e.short_message().to_string(),
            };
            writeln!(out, "{:>3}. {} = {}", i + 1, calculation, outcome)?;
        }

        Ok(())
    }

    fn repl<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let input = line.trim();

            match input {
                "" => continue,
                "quit" | "exit" => break,
                "history" => self.print_history(out)?,
                "clear" => self.calculator.clear_history(),
                _ => match self.evaluate(input) {
                    Some(result) => self.emit(&result, out, err)?,
                    None => writeln!(err, "error: not an expression: {input}")?,
                },
            }
        }

        Ok(())
    }
}
