//! pgc-drv - Command-line driver for the pgc scanner
//!
//! Scans one source file and prints its tokens. Lexical errors are printed
//! to stderr as diagnostics; they only fail the run with `--deny-illegal`.
//! A source that cannot be opened always fails the run.

pub mod error;
pub mod render;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use pgc_lex::Lexer;
use pgc_util::Handler;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use error::DriverError;
pub use render::{Category, Format};

/// pgc - scanner for the playground language
///
/// Reads a source file and prints one line per token.
#[derive(Parser, Debug)]
#[command(name = "pgc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a source file and print its tokens", long_about = None)]
pub struct Cli {
    /// Source file to scan
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "PGC_VERBOSE")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long, env = "PGC_NO_COLOR")]
    pub no_color: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Exit with an error if the source contains illegal tokens
    #[arg(long)]
    pub deny_illegal: bool,
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output. `RUST_LOG`
/// overrides the level picked from `verbose`.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<(), DriverError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))
}

/// Scans `source` and writes its tokens to `out` in the given format.
///
/// Lexical errors end up in `handler`.
///
/// # Errors
///
/// Fails if the source cannot be opened or `out` cannot be written.
pub fn scan<W: Write>(
    source: &Path,
    format: Format,
    out: &mut W,
    handler: &Handler,
) -> anyhow::Result<()> {
    let mut lexer = Lexer::open(source, handler)?;
    debug!(source = %source.display(), ?format, "scanning");

    let written = match format {
        Format::Text => render::write_text(&mut *out, &mut lexer),
        Format::Json => render::write_json(&mut *out, &mut lexer),
    };
    written
        .and_then(|()| out.flush())
        .context("failed to write tokens")
}

/// Runs the driver: scan, print tokens to stdout and diagnostics to stderr.
///
/// # Errors
///
/// Fails on any [`scan`] error, and with [`DriverError::IllegalTokens`]
/// when `--deny-illegal` is set and the source has illegal tokens.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let handler = Handler::new();
    {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        scan(&cli.source, cli.format, &mut out, &handler)?;
    }

    for diagnostic in handler.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    let illegal = handler.error_count();
    if illegal > 0 {
        info!(count = illegal, "source contains illegal tokens");
        if cli.deny_illegal {
            return Err(DriverError::IllegalTokens(illegal).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("input.pg");
        fs::write(&path, contents).unwrap();
        path
    }

    fn scan_to_string(source: &Path, format: Format, handler: &Handler) -> String {
        let mut out = Vec::new();
        scan(source, format, &mut out, handler).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_parse_source() {
        let cli = Cli::parse_from(["pgc", "prog.pg"]);
        assert_eq!(cli.source, PathBuf::from("prog.pg"));
        assert_eq!(cli.format, Format::Text);
        assert!(!cli.deny_illegal);
    }

    #[test]
    fn test_cli_parse_format_json() {
        let cli = Cli::parse_from(["pgc", "--format", "json", "prog.pg"]);
        assert_eq!(cli.format, Format::Json);
        let cli = Cli::parse_from(["pgc", "-f", "text", "prog.pg"]);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(["pgc", "-v", "--no-color", "--deny-illegal", "prog.pg"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.deny_illegal);
    }

    #[test]
    fn test_cli_requires_source() {
        assert!(Cli::try_parse_from(["pgc"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pgc", "--format", "xml", "prog.pg"]).is_err());
    }

    #[test]
    fn test_scan_text() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "var x := 12;\n");
        let handler = Handler::new();
        assert_eq!(
            scan_to_string(&path, Format::Text, &handler),
            "lexem:\"var\"\nident:\"x\"\nlexem:\":=\"\nnumber:\"12\"\nlexem:\";\"\n"
        );
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_scan_json() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "name := \"pgc\"");
        let handler = Handler::new();
        let output = scan_to_string(&path, Format::Json, &handler);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[2]["category"], "string");
        assert_eq!(value[2]["literal"], "pgc");
        assert_eq!(value[2]["column"], 9);
    }

    #[test]
    fn test_scan_collects_diagnostics() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "x # \"open");
        let handler = Handler::new();
        let output = scan_to_string(&path, Format::Text, &handler);
        assert_eq!(
            output,
            "ident:\"x\"\n#: error, invalid lexem\nopen: error, invalid lexem\n"
        );
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_scan_missing_source() {
        let dir = TempDir::new().unwrap();
        let handler = Handler::new();
        let err = scan(
            &dir.path().join("nope.pg"),
            Format::Text,
            &mut Vec::new(),
            &handler,
        )
        .unwrap_err();
        assert!(err.to_string().contains("nope.pg"));
    }
}
