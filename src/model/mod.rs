//! Domain model types (pure).
//!
//! All types in this module are pure data; parsing happens at the feed
//! boundary and everything downstream works on these records.

pub mod company;
pub mod criteria;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use company::{Company, CompanyId};
pub use criteria::{FilterCriteria, InvalidSortSpec, SortDir, SortKey, SortSpec, SORT_OPTIONS};
pub use error::{AppError, FetchError};
pub use key_action::KeyAction;
