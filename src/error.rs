//! Build-time error taxonomy.
//!
//! Per-glyph misses are not errors: a codepoint the face cannot render
//! is simply absent from the store and the batch continues. This enum
//! covers the failures that abort a build.

use std::fmt;
use std::path::PathBuf;

/// Fatal build failures.
#[derive(Debug)]
pub enum BuildError {
    /// The font face could not be opened or parsed.
    FontLoad { path: PathBuf, reason: String },
    /// A requested codepoint does not fit the sparse layout's 16-bit
    /// codepoint table.
    CoverageOverflow { codepoint: u32 },
    /// The build configuration is unusable.
    Config(String),
    /// Reading the configuration or writing an artifact failed.
    Io(std::io::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontLoad { path, reason } => {
                write!(f, "failed to load font {}: {reason}", path.display())
            }
            Self::CoverageOverflow { codepoint } => {
                write!(
                    f,
                    "codepoint U+{codepoint:04X} exceeds the sparse layout's 16-bit table"
                )
            }
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
