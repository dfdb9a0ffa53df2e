//! Keyed ordering of company lists.

use crate::model::{Company, SortDir, SortKey, SortSpec};
use std::cmp::Ordering;

/// The comparable value a sort key extracts from a company.
#[derive(Debug, Clone, Copy)]
enum SortValue<'a> {
    Text(&'a str),
    Number(i64),
}

fn sort_value(company: &Company, key: SortKey) -> SortValue<'_> {
    match key {
        SortKey::Name => SortValue::Text(&company.name),
        SortKey::Employees => SortValue::Number(company.employees as i64),
        SortKey::FoundedYear => SortValue::Number(i64::from(company.founded_year)),
    }
}

/// Compare two sort values.
///
/// Strings order case-insensitively; numbers numerically. A
/// heterogeneous pair compares equal — a defined fallback, not an
/// error. Any single key extracts one value shape, so the fallback arm
/// is unreachable today, but it keeps the comparator total if a key
/// with mixed value shapes is ever added.
fn compare_values(a: SortValue<'_>, b: SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (SortValue::Number(a), SortValue::Number(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Order a company list by the given spec, returning a new list.
///
/// The sort is stable: companies with equal keys keep their relative
/// (post-filter) order, which keeps pagination deterministic. `Desc`
/// reverses the comparison, not the list, so ties keep their order in
/// both directions.
pub fn sort(companies: &[Company], spec: SortSpec) -> Vec<Company> {
    let mut sorted = companies.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_values(sort_value(a, spec.key), sort_value(b, spec.key));
        match spec.dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
