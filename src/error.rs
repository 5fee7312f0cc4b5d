//! Error type for configuration construction
//!
//! There is one failure family: an externally sourced grammar document that
//! cannot be located, read, or understood, plus the shape check on the
//! options file. Errors propagate to the host unchanged; there is no retry
//! and no partial configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building the highlighting configuration
#[derive(Debug, Error)]
pub enum SetupError {
    /// The grammar document could not be located
    #[error("grammar document not found: {}", .path.display())]
    GrammarNotFound { path: PathBuf },

    /// The grammar document exists but could not be read
    #[error("failed to read grammar document {}: {source}", .path.display())]
    GrammarRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The grammar document is not a usable TextMate grammar
    #[error("failed to parse grammar document {}: {reason}", .path.display())]
    GrammarParse { path: PathBuf, reason: String },

    /// The setup options are present but malformed
    #[error("invalid setup options: {reason}")]
    InvalidOptions { reason: String },
}
