//! Company records from the directory feed.

use serde::Deserialize;
use std::fmt;

/// Unique company identifier, stable across fetches.
///
/// Feeds in the wild carry either a JSON string or an integer id;
/// both are accepted and kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum CompanyId {
    /// String identifier, e.g. `"acme-corp"`.
    Text(String),
    /// Integer identifier, e.g. `42`.
    Number(i64),
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyId::Text(s) => f.write_str(s),
            CompanyId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A single company record. Immutable once parsed; the pipeline only
/// ever produces new lists, never mutates these in place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Stable unique identifier.
    pub id: CompanyId,
    /// Display name; search matching and the default sort key.
    pub name: String,
    /// Categorical industry label (exact-match filtering).
    pub industry: String,
    /// Categorical location label (exact-match filtering).
    pub location: String,
    /// Headcount, non-negative.
    pub employees: u64,
    /// Year the company was founded.
    pub founded_year: i32,
    /// Free-text description shown on the detail row.
    #[serde(default)]
    pub description: String,
    /// Optional website URL.
    #[serde(default)]
    pub website: Option<String>,
}
