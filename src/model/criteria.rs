//! Filter criteria and sort specification.
//!
//! `FilterCriteria` is the combined industry/location/minimum-employee
//! filter state; `SortSpec` is a (key, direction) pair. Both are pure
//! data with defaults matching a freshly opened directory.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Combined filter state applied after the name search.
///
/// `None` for industry/location means "all" (no narrowing);
/// `min_employees == 0` means no minimum.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FilterCriteria {
    /// Keep only this exact industry; `None` keeps all.
    #[serde(default)]
    pub industry: Option<String>,
    /// Keep only this exact location; `None` keeps all.
    #[serde(default)]
    pub location: Option<String>,
    /// Keep only companies with at least this many employees.
    #[serde(default)]
    pub min_employees: u64,
}

impl FilterCriteria {
    /// True when no criterion narrows the list (the default state).
    pub fn is_default(&self) -> bool {
        self.industry.is_none() && self.location.is_none() && self.min_employees == 0
    }
}

/// Key the directory is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Company name (string compare).
    Name,
    /// Headcount (numeric compare).
    Employees,
    /// Founding year (numeric compare).
    FoundedYear,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    /// Ascending.
    Asc,
    /// Descending (comparison reversed; ties keep their order).
    Desc,
}

/// A (key, direction) pair selecting the directory ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Key to order by.
    pub key: SortKey,
    /// Direction.
    pub dir: SortDir,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            dir: SortDir::Asc,
        }
    }
}

/// The six sort options offered by the UI, in menu order.
pub const SORT_OPTIONS: [SortSpec; 6] = [
    SortSpec { key: SortKey::Name, dir: SortDir::Asc },
    SortSpec { key: SortKey::Name, dir: SortDir::Desc },
    SortSpec { key: SortKey::Employees, dir: SortDir::Desc },
    SortSpec { key: SortKey::Employees, dir: SortDir::Asc },
    SortSpec { key: SortKey::FoundedYear, dir: SortDir::Desc },
    SortSpec { key: SortKey::FoundedYear, dir: SortDir::Asc },
];

/// A sort token was not one of the six known options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "invalid sort spec '{0}', expected one of: name-asc, name-desc, \
     employees-asc, employees-desc, founded-asc, founded-desc"
)]
pub struct InvalidSortSpec(pub String);

impl SortSpec {
    /// Parse a combined `key-direction` token (`"employees-desc"` etc.),
    /// as used by the CLI `--sort` flag and the config file.
    pub fn parse(token: &str) -> Result<Self, InvalidSortSpec> {
        let spec = match token {
            "name-asc" => SortSpec { key: SortKey::Name, dir: SortDir::Asc },
            "name-desc" => SortSpec { key: SortKey::Name, dir: SortDir::Desc },
            "employees-asc" => SortSpec { key: SortKey::Employees, dir: SortDir::Asc },
            "employees-desc" => SortSpec { key: SortKey::Employees, dir: SortDir::Desc },
            "founded-asc" => SortSpec { key: SortKey::FoundedYear, dir: SortDir::Asc },
            "founded-desc" => SortSpec { key: SortKey::FoundedYear, dir: SortDir::Desc },
            other => return Err(InvalidSortSpec(other.to_string())),
        };
        Ok(spec)
    }

    /// Render back to the combined token form.
    pub fn as_token(&self) -> &'static str {
        match (self.key, self.dir) {
            (SortKey::Name, SortDir::Asc) => "name-asc",
            (SortKey::Name, SortDir::Desc) => "name-desc",
            (SortKey::Employees, SortDir::Asc) => "employees-asc",
            (SortKey::Employees, SortDir::Desc) => "employees-desc",
            (SortKey::FoundedYear, SortDir::Asc) => "founded-asc",
            (SortKey::FoundedYear, SortDir::Desc) => "founded-desc",
        }
    }

    /// Next option in the UI menu order, wrapping at the end.
    pub fn cycled(&self) -> SortSpec {
        let pos = SORT_OPTIONS.iter().position(|s| s == self).unwrap_or(0);
        SORT_OPTIONS[(pos + 1) % SORT_OPTIONS.len()]
    }

    /// Same key, opposite direction.
    pub fn reversed(&self) -> SortSpec {
        SortSpec {
            key: self.key,
            dir: match self.dir {
                SortDir::Asc => SortDir::Desc,
                SortDir::Desc => SortDir::Asc,
            },
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match (self.key, self.dir) {
            (SortKey::Name, SortDir::Asc) => "Name (A-Z)",
            (SortKey::Name, SortDir::Desc) => "Name (Z-A)",
            (SortKey::Employees, SortDir::Desc) => "Employees (High-Low)",
            (SortKey::Employees, SortDir::Asc) => "Employees (Low-High)",
            (SortKey::FoundedYear, SortDir::Desc) => "Founded (New-Old)",
            (SortKey::FoundedYear, SortDir::Asc) => "Founded (Old-New)",
        };
        f.write_str(label)
    }
}
