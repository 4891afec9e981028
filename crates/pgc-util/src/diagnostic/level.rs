//! Diagnostic severity levels.

use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use pgc_util::diagnostic::Level;
///
/// assert!(Level::Error.is_error());
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Malformed input. Scanning continues, but the caller may treat the
    /// run as failed.
    Error,
    /// Suspicious but accepted input
    Warning,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the lowercase name used when rendering
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
