use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use numerus::{
    config::{BASIC_MAX_VALUE, Config, EXTENDED_MAX_VALUE, RomanPolicy},
    interpreter::evaluator::Evaluator,
};
use tracing_subscriber::EnvFilter;

/// Word that ends an interactive session.
const EXIT_COMMAND: &str = "exit";

/// numerus is a calculator for expressions like `VII + III` or `10 - 3`.
/// Results are written in the numeral system of the operands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Largest numeral accepted as an operand or Roman result.
    #[arg(short, long,
          default_value_t = BASIC_MAX_VALUE,
          value_parser = clap::value_parser!(i64).range(1..=EXTENDED_MAX_VALUE))]
    max_value: i64,

    /// How Roman operands are recognised.
    #[arg(short, long, value_enum, default_value_t = RomanPolicy::Strict)]
    roman: RomanPolicy,

    /// Shorthand for `--max-value 3999 --roman permissive`.
    #[arg(short, long, conflicts_with_all = ["max_value", "roman"])]
    extended: bool,

    /// Expression to evaluate once. Without it, lines are read from standard
    /// input until `exit`.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let config = if args.extended {
        Config::extended()
    } else {
        match Config::new(args.max_value, args.roman) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    };
    let evaluator = Evaluator::new(config);

    if let Some(expression) = args.expression {
        return match evaluator.evaluate(&expression) {
            Ok(result) => {
                println!("{result}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = run_session(&evaluator, io::stdin().lock(), &mut io::stdout().lock()) {
        eprintln!("Failed to read or write the session: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Evaluates lines from `input` until `exit` or end of input.
///
/// Results go to `output`; errors go to standard error and never end the
/// session. Blank lines are skipped.
fn run_session(evaluator: &Evaluator,
               input: impl BufRead,
               output: &mut impl Write)
               -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == EXIT_COMMAND {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match evaluator.evaluate(line) {
            Ok(result) => writeln!(output, "{result}")?,
            Err(e) => {
                tracing::debug!(line, error = %e, "evaluation failed");
                eprintln!("{e}");
            },
        }
    }
    output.flush()
}
