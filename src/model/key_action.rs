//! Semantic key actions.
//!
//! The view layer translates raw key events into these actions via
//! [`crate::config::KeyBindings`]; [`crate::integration::apply_action`]
//! turns them into state transitions.

/// An action the user can trigger from the keyboard in browse mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Start editing the search query.
    EditSearch,
    /// Start editing the minimum-employees filter.
    EditMinEmployees,
    /// Cycle the industry filter: All -> each distinct industry -> All.
    CycleIndustry,
    /// Cycle the location filter: All -> each distinct location -> All.
    CycleLocation,
    /// Cycle through the six sort options in menu order.
    CycleSort,
    /// Flip the current sort direction.
    ReverseSort,
    /// Go to the next page (no-op on the last page).
    NextPage,
    /// Go to the previous page (no-op on page 1).
    PrevPage,
    /// Move row selection down within the current page.
    SelectNext,
    /// Move row selection up within the current page.
    SelectPrev,
    /// Restore search, filters, sort, and page to their defaults.
    Reset,
}
