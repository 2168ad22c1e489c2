//! CLI support for dumping a generated listing set to JSON.
//!
//! This module provides parsing and dump helpers for the listing dump CLI.
//! The binary delegates to these functions so they can be exercised in tests
//! without spawning a subprocess.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;

use crate::atomic_io::write_atomic;
use crate::catalog::Catalog;
use crate::generator::{DEFAULT_LISTING_COUNT, SeedPlan, generate_listings};

pub use crate::error::DumpError;

/// Parsed options for the listing dump CLI.
#[derive(Debug, Clone)]
pub struct Options {
    out_path: Utf8PathBuf,
    count: Option<usize>,
    seed: Option<u64>,
}

impl Options {
    /// Returns the output path supplied for the dump.
    ///
    /// # Example
    ///
    /// ```
    /// use example_listings::dump_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--out".to_owned(), "listings.json".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert!(options.out_path().ends_with("listings.json"));
    /// ```
    #[must_use]
    pub fn out_path(&self) -> &Utf8Path {
        &self.out_path
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of a completed dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    /// RNG seed the listings were generated from.
    pub seed: u64,
    /// Number of listings written.
    pub listing_count: usize,
}

/// Parses CLI arguments into a dump plan.
///
/// # Errors
///
/// Returns [`DumpError`] when required flags are missing or values cannot be
/// parsed.
///
/// # Example
///
/// ```
/// use example_listings::dump_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--out".to_owned(),
///     "listings.json".to_owned(),
///     "--seed".to_owned(),
///     "42".to_owned(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, DumpError>
where
    I: Iterator<Item = String>,
{
    let mut out_path: Option<Utf8PathBuf> = None;
    let mut count: Option<usize> = None;
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--out" => {
                let value = next_value(&mut args, "--out")?;
                out_path = Some(Utf8PathBuf::from(value));
            }
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                count = Some(parse_number(&value, "--count")?);
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            _ => return Err(DumpError::UnknownArgument { value: arg }),
        }
    }

    let resolved_out_path = out_path.ok_or(DumpError::MissingOutPath)?;
    Ok(ParseOutcome::Options(Options {
        out_path: resolved_out_path,
        count,
        seed,
    }))
}

/// Generates listings per the options and writes them to the output file.
///
/// The built-in Afghan marketplace catalog supplies the provinces and
/// archetypes. When no seed is supplied one is drawn from OS entropy; the
/// chosen seed is reported in the summary so a run can be reproduced.
///
/// # Errors
///
/// Returns [`DumpError`] when generation, serialisation, or the file write
/// fails.
pub fn run_dump(options: &Options) -> Result<DumpSummary, DumpError> {
    let catalog = Catalog::afghan_marketplace();
    let listing_count = options.count.unwrap_or(DEFAULT_LISTING_COUNT);
    let plan = match options.seed {
        Some(seed) => SeedPlan::new(seed, listing_count),
        None => SeedPlan::from_entropy(listing_count),
    };

    let listings = generate_listings(&catalog, &plan)?;
    let payload =
        serde_json::to_string_pretty(&listings).map_err(|err| DumpError::Serialize {
            message: err.to_string(),
        })?;

    write_payload(options.out_path(), &payload)?;

    Ok(DumpSummary {
        seed: plan.seed(),
        listing_count: listings.len(),
    })
}

/// Formats the success message emitted by the CLI.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use example_listings::dump_cli::{DumpSummary, success_message};
///
/// let summary = DumpSummary {
///     seed: 42,
///     listing_count: 426,
/// };
/// let message = success_message(&summary, Utf8Path::new("listings.json"));
///
/// assert!(message.contains("426"));
/// ```
#[must_use]
pub fn success_message(summary: &DumpSummary, out_path: &Utf8Path) -> String {
    format!(
        "Wrote {} listings (seed={}) to {out_path}",
        summary.listing_count, summary.seed,
    )
}

fn write_payload(out_path: &Utf8Path, payload: &str) -> Result<(), DumpError> {
    let parent = match out_path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = out_path.file_name().ok_or_else(|| DumpError::Write {
        path: out_path.to_path_buf(),
        message: "output path must name a file".to_owned(),
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        DumpError::Write {
            path: out_path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    write_atomic(&dir, Utf8Path::new(file_name), payload)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, DumpError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(DumpError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, DumpError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| DumpError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
