//! Error types for the audit runner

use thiserror::Error;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Main error type for audit operations
///
/// Per-directory audit failures never surface here; they are folded into the
/// error accumulator so a scan always runs to completion. These variants
/// cover startup problems and command launches only.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to launch `{command}`: {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}
