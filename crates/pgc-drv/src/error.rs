//! Error types for the pgc driver.
//!
//! Library failures (a missing source file, a write error) travel as
//! `anyhow::Error`; this enum covers the conditions the driver itself
//! decides are fatal.

use thiserror::Error;

/// Fatal conditions raised by the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// `--deny-illegal` was given and the source held illegal tokens.
    #[error("source contains {0} illegal token(s)")]
    IllegalTokens(usize),
}
