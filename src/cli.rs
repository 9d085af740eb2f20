//! Command line interface
//!
//! Reads `n` from standard input (or the first positional argument) and prints
//! `b^(n-2)` and `b * b^(n-2) * (n-1)`, one per line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::errors;
use crate::formula::{self, Arithmetic, Report, DEFAULT_BASE};
use crate::input;
use crate::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "sqpow")]
#[command(about = "Computes 4^(n-2) and 4 * 4^(n-2) * (n-1) by recursive squaring")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Value of n. Read from standard input when omitted
    #[arg(value_name = "N")]
    pub n: Option<i64>,

    /// Integer semantics used for the computation
    #[arg(short, long, value_enum, default_value = "checked")]
    pub arithmetic: Arithmetic,

    /// Base of the power, also used as the leading factor of the product
    #[arg(short, long, value_name = "B", default_value_t = DEFAULT_BASE)]
    pub base: i64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,
}

/// Output format for the evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Power and product on two lines (default)
    #[default]
    Text,
    /// A single JSON object for scripting
    Json,
}

pub fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(&cli, stdin.lock(), stdout.lock())
}

/// Runs one evaluation against the given input and output streams
pub fn execute<R: BufRead, W: Write>(cli: &Cli, reader: R, mut out: W) -> Result<()> {
    let n = match cli.n {
        Some(n) => n,
        None => input::read_integer(reader).context("Failed to read n from standard input")?,
    };

    let report = formula::evaluate(n, cli.base, cli.arithmetic).map_err(|e| {
        let hint = match (&e, cli.arithmetic) {
            (errors::Error::Overflow { .. }, Arithmetic::Checked) => "; try --arithmetic big",
            _ => "",
        };
        let context = format!("Cannot evaluate the formula for n = {}{}", n, hint);
        anyhow::Error::new(e).context(context)
    })?;

    render(&report, cli.output_format, &mut out).context("Failed to write output")?;
    Ok(())
}

pub fn render<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> errors::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
