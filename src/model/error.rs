//! Error types for the cdv application.
//!
//! A small `thiserror` hierarchy: [`AppError`] at the top, with
//! [`FetchError`] covering the one genuine runtime failure mode — the
//! initial feed load. Fetch failures are terminal for the session: the
//! error message is rendered and no retry is attempted. Everything
//! downstream of a successful load (filter, sort, paginate) is total
//! and cannot fail.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Domain errors convert via `From`, so shell code can propagate with
/// `?` without manual mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// The directory feed could not be loaded.
    ///
    /// Surfaced to the user as the error placeholder; the session keeps
    /// running with an empty list and the failure message on screen.
    #[error("Failed to load directory feed: {0}")]
    Fetch(#[from] FetchError),

    /// No feed source was given on the command line or in the config.
    #[error("No feed source: pass a URL or file path, or set feed_url in the config file")]
    NoFeed,

    /// Terminal or TUI rendering error (crossterm/ratatui layer).
    /// Fatal: without a working terminal the viewer cannot run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures loading the company feed.
///
/// Exactly one load attempt is made per session, so every variant is
/// terminal. Each carries a human-readable message (status code or
/// underlying error text) for the error placeholder.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The feed endpoint answered with a non-success HTTP status.
    #[error("HTTP error: status {status}")]
    HttpStatus {
        /// The status code returned by the server.
        status: u16,
    },

    /// Transport-level failure: DNS, connect, TLS, or mid-body I/O.
    #[error("Request failed: {message}")]
    Transport {
        /// Error text from the HTTP client.
        message: String,
    },

    /// The response body was not a valid directory document.
    ///
    /// Note the inverse case: a syntactically valid document *without*
    /// a `companies` field parses to an empty list and is not an error.
    #[error("Malformed feed body: {message}")]
    MalformedBody {
        /// Error text from the JSON parser.
        message: String,
    },

    /// A local feed file could not be read.
    #[error("Failed to read feed file {path:?}: {message}")]
    FileRead {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error text.
        message: String,
    },
}
