//! Feed document parsing.
//!
//! The directory feed is a single JSON document of the form
//! `{ "companies": [Company, ...] }`. Parsing happens once, at the
//! source boundary; everything downstream works on typed records.

use crate::model::{Company, FetchError};
use serde::Deserialize;

/// Wire shape of the feed document.
///
/// A document without a `companies` field parses to an empty list.
/// That is a valid (if useless) feed, not an error.
#[derive(Debug, Deserialize)]
struct DirectoryDocument {
    #[serde(default)]
    companies: Vec<Company>,
}

/// Parse a feed body into company records.
///
/// # Errors
///
/// Returns [`FetchError::MalformedBody`] when the body is not valid
/// JSON or a record is missing a required field.
pub fn parse_directory(body: &str) -> Result<Vec<Company>, FetchError> {
    let document: DirectoryDocument =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedBody {
            message: e.to_string(),
        })?;
    Ok(document.companies)
}
