//! Quiz shuffle CLI: prints the seeded option order of a quiz file as JSON.
//!
//! This binary delegates to `quiz_shuffle::cli` for parsing and shuffling,
//! keeping the CLI behaviour testable without spawning a process. Log output
//! goes to stderr and is filtered through `RUST_LOG`.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use quiz_shuffle::cli::{CliError, ParseOutcome, parse_args, render_output, run, write_error};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "quiz shuffle failed");
            if let Err(write_err) = write_error(&mut io::stderr().lock(), &err) {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn run_cli() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let shuffled = run(&options)?;
            let output = render_output(&shuffled, options.pretty())?;
            write_output(&output);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: quiz-shuffle --quiz <path> [options]\n",
        "\n",
        "Options:\n",
        "  --quiz <path>        Path to the quiz JSON file\n",
        "  --question <id>      Only shuffle the question with this id\n",
        "  --seed <seed>        Seed every question with this value instead of its id\n",
        "  --pretty             Pretty-print the JSON output\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_output(output: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{output}") {
        drop(err);
    }
}
