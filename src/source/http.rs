//! HTTP feed source.
//!
//! One blocking GET on a background thread, handed back over an mpsc
//! channel so the TUI event loop can keep rendering the loading state
//! without suspending. No retry, no caching: one attempt per session.

use crate::model::{Company, FetchError};
use crate::parser;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, info};

/// In-flight (or completed) HTTP feed fetch.
#[derive(Debug)]
pub struct HttpFeed {
    receiver: Receiver<Result<Vec<Company>, FetchError>>,
    delivered: bool,
}

impl HttpFeed {
    /// Start fetching `url` on a background thread.
    pub fn spawn(url: String) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            info!(url = %url, "Fetching directory feed");
            let result = fetch_directory(&url);
            // Receiver may be gone if the app quit during the fetch.
            let _ = sender.send(result);
        });
        Self {
            receiver,
            delivered: false,
        }
    }

    /// Poll for the fetch result; yields it at most once.
    pub fn poll(&mut self) -> Option<Result<Vec<Company>, FetchError>> {
        if self.delivered {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.delivered = true;
                debug!(ok = result.is_ok(), "Feed fetch completed");
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.delivered = true;
                Some(Err(FetchError::Transport {
                    message: "feed fetch thread exited before responding".to_string(),
                }))
            }
        }
    }
}

/// Perform the single GET and parse the body.
///
/// # Errors
///
/// - [`FetchError::Transport`] for connect/TLS/body I/O failures
/// - [`FetchError::HttpStatus`] for non-2xx responses
/// - [`FetchError::MalformedBody`] when the body is not a directory document
fn fetch_directory(url: &str) -> Result<Vec<Company>, FetchError> {
    let response = reqwest::blocking::get(url).map_err(|e| FetchError::Transport {
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(|e| FetchError::Transport {
        message: e.to_string(),
    })?;

    parser::parse_directory(&body)
}
