//! Directory feed sources.
//!
//! The feed is loaded exactly once per session, either over HTTP or
//! from a local JSON file. Both variants expose the same non-blocking
//! `poll()` so the event loop can render a loading state while the
//! fetch is in flight.

use crate::model::{Company, FetchError};

pub mod file;
pub mod http;

pub use file::FileFeed;
pub use http::HttpFeed;

/// Unified one-shot feed source.
///
/// Sum type enforces exactly one variant; `poll()` yields the single
/// load result at most once.
#[derive(Debug)]
pub enum DirectoryFeed {
    /// HTTP feed, fetched on a background thread.
    Http(HttpFeed),
    /// Local JSON file, read on first poll.
    File(FileFeed),
}

impl DirectoryFeed {
    /// Poll for the load result.
    ///
    /// Non-blocking. Returns `None` while the fetch is still in flight
    /// and after the result has already been delivered; returns
    /// `Some(result)` exactly once.
    pub fn poll(&mut self) -> Option<Result<Vec<Company>, FetchError>> {
        match self {
            DirectoryFeed::Http(feed) => feed.poll(),
            DirectoryFeed::File(feed) => feed.poll(),
        }
    }
}

/// Pick the feed variant for a source argument.
///
/// `http://` and `https://` prefixes select the HTTP feed; anything
/// else is treated as a local file path.
pub fn detect_feed(source: &str) -> DirectoryFeed {
    if source.starts_with("http://") || source.starts_with("https://") {
        DirectoryFeed::Http(HttpFeed::spawn(source.to_string()))
    } else {
        DirectoryFeed::File(FileFeed::new(source))
    }
}
