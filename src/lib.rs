//! Company Directory Viewer (cdv)
//!
//! TUI for browsing a company directory feed: search by name, filter by
//! industry / location / minimum employee count, sort, and page through
//! the results.
//!
//! The crate follows a Pure Core / Impure Shell split: `model`, `query`,
//! and `state` are pure and synchronous; `source` and `view` own the
//! I/O (one feed fetch per session, terminal rendering).

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod query;
pub mod source;
pub mod state;
pub mod view;

// Re-export main loop integration
pub mod integration;

#[cfg(test)]
mod test_harness;
