//! Fixed-size pagination.

use crate::model::Company;

/// One page of results plus the page count for the whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// The companies on the requested page (empty when out of range).
    pub items: Vec<Company>,
    /// Total number of pages: `ceil(len / page_size)`. Zero when the
    /// list is empty; callers treat 0 and 1 alike as "no pagination
    /// controls needed".
    pub total_pages: usize,
}

/// Slice out page `page` (1-based) of `page_size` items.
///
/// Returns the slice `[(page-1)*page_size, page*page_size)`. Pages
/// outside `1..=total_pages` (including page 0) yield an empty slice;
/// no clamping happens here — the shell keeps the user in range by
/// disabling the controls at the bounds instead.
pub fn paginate(companies: &[Company], page_size: usize, page: usize) -> Page {
    if page_size == 0 {
        return Page { items: Vec::new(), total_pages: 0 };
    }

    let total_pages = companies.len().div_ceil(page_size);

    let items = match page.checked_sub(1) {
        None => Vec::new(), // page 0: out of range, not clamped
        Some(zero_based) => {
            let start = zero_based.saturating_mul(page_size);
            if start >= companies.len() {
                Vec::new()
            } else {
                let end = (start + page_size).min(companies.len());
                companies[start..end].to_vec()
            }
        }
    };

    Page { items, total_pages }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
