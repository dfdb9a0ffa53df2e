//! Application state and transitions (pure).

pub mod app_state;
pub mod editor;

pub use app_state::{AppState, DirectoryView, InputMode, LoadState};
pub use editor::LineEditor;
