//! Name search and criteria filtering.

use crate::model::{Company, FilterCriteria};

/// Narrow a company list by search query and filter criteria.
///
/// Steps applied in order, each narrowing the previous result:
/// 1. name contains the query, case-insensitively (empty query matches all)
/// 2. exact industry match, when an industry is selected
/// 3. exact location match, when a location is selected
/// 4. `employees >= min_employees`, when a minimum is set
///
/// The filter is stable: surviving companies keep their input order.
/// Total over all inputs; an unmatched query yields an empty list.
pub fn filter(
    companies: &[Company],
    search_query: &str,
    criteria: &FilterCriteria,
) -> Vec<Company> {
    let query_lower = search_query.to_lowercase();

    companies
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&query_lower))
        .filter(|c| match &criteria.industry {
            Some(industry) => &c.industry == industry,
            None => true,
        })
        .filter(|c| match &criteria.location {
            Some(location) => &c.location == location,
            None => true,
        })
        .filter(|c| criteria.min_employees == 0 || c.employees >= criteria.min_employees)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
