//! Shared builders for unit tests.

use crate::model::{Company, CompanyId};

/// Build a company with the fields the pipeline cares about.
/// The id is derived from the name; description/website stay empty.
pub fn company(
    name: &str,
    industry: &str,
    location: &str,
    employees: u64,
    founded_year: i32,
) -> Company {
    Company {
        id: CompanyId::Text(name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        industry: industry.to_string(),
        location: location.to_string(),
        employees,
        founded_year,
        description: String::new(),
        website: None,
    }
}

/// A small fixed directory used across state and query tests.
pub fn sample_directory() -> Vec<Company> {
    vec![
        company("Acme", "Tech", "NY", 50, 1999),
        company("Zenith", "Tech", "LA", 500, 2010),
        company("Borealis", "Energy", "TX", 1200, 1985),
        company("Cedar Retail", "Retail", "NY", 80, 2015),
        company("Delta Energy", "Energy", "TX", 40, 2001),
    ]
}
