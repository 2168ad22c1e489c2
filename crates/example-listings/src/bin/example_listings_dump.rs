//! Listing dump CLI for producing demo listing sets as JSON.
//!
//! This binary delegates to `example_listings::dump_cli` for parsing and dump
//! logic, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use example_listings::dump_cli::{DumpError, ParseOutcome, parse_args, run_dump, success_message};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DumpError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let summary = run_dump(&options)?;
            let message = success_message(&summary, options.out_path());
            write_success(&message);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: example-listings-dump --out <path> [options]\n",
        "\n",
        "Options:\n",
        "  --out <path>    Path to the JSON file to write\n",
        "  --count <n>     Number of listings to generate (defaults to 426)\n",
        "  --seed <seed>   RNG seed value (defaults to random)\n",
        "  -h, --help      Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_success(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
