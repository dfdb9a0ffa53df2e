//! The pure query pipeline: filter, sort, paginate.
//!
//! Three side-effect-free transforms over company lists. Each produces
//! a new list and never mutates its input, so the state layer can
//! re-run the whole pipeline on every state change.

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::filter;
pub use page::{paginate, Page};
pub use sort::sort;
