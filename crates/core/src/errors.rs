//! Error types for the docsync core library.
//!
//! Fetching and writing each have their own error type derived with
//! `thiserror`, and a top-level [`SyncError`] enum unifies them for callers
//! that want a single error type. The `Display` text of every variant is the
//! operator-facing message printed in the sync report.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for a single entry's sync attempt.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Errors from downloading a file from the raw content host.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {:.1} seconds", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    /// Transport-level failure: DNS, refused connection, TLS.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote path does not exist (HTTP 404).
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Access denied or rate limited (HTTP 403 / 429).
    #[error("GitHub API rate limit exceeded. Please try again later.")]
    RateLimited { status: u16 },

    /// Any other non-success status code.
    #[error("Failed to fetch file: HTTP {status}")]
    HttpStatus { status: u16 },

    /// Anything the classifier does not recognise.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Classify a `reqwest` failure onto the fetch taxonomy.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout }
        } else if err.is_connect() || err.is_request() || err.is_body() {
            Self::Network(error_chain(&err))
        } else {
            Self::Unexpected(error_chain(&err))
        }
    }
}

// ---------------------------------------------------------------------------
// Write errors
// ---------------------------------------------------------------------------

/// Errors from writing a fetched file into the project tree.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The process lacks permission to create the file or its parents.
    #[error("Permission denied: {}", .dest.display())]
    PermissionDenied { dest: PathBuf },

    /// Any other I/O failure (disk full, invalid path, not a directory).
    #[error("Failed to write {}: {source}", .dest.display())]
    Io {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// Map an I/O error raised while writing `dest` onto the taxonomy.
    pub fn from_io(dest: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let dest = dest.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { dest },
            _ => Self::Io { dest, source },
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from validating the compiled-in sync configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The entry table is empty.
    #[error("no files configured for synchronization")]
    NoEntries,

    /// A config value is invalid.
    #[error("invalid configuration value for '{field}': {detail}")]
    InvalidValue { field: String, detail: String },
}

/// Render an error and its `source()` chain as `outer: inner: root`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        current = cause.source();
    }
    rendered
}
