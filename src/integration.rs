//! Pure event-loop glue.
//!
//! Translates semantic [`KeyAction`]s into `AppState` mutations. Lives
//! outside the view so the whole browse-mode behavior is testable
//! without a terminal.

use crate::model::{FilterCriteria, KeyAction};
use crate::state::{AppState, InputMode, LineEditor};

/// Outcome of applying a key action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// State may have changed; keep running.
    Continue,
    /// The user asked to quit.
    Quit,
}

/// Apply a browse-mode key action to the state.
///
/// Page navigation respects the disabled-controls rule: `NextPage` and
/// `PrevPage` are no-ops at the bounds, which is the only thing that
/// keeps the page in range (the paginator itself never clamps).
pub fn apply_action(state: &mut AppState, action: KeyAction) -> Applied {
    match action {
        KeyAction::Quit => return Applied::Quit,

        KeyAction::EditSearch => {
            state.mode = InputMode::EditSearch(LineEditor::with_text(state.search_query()));
        }
        KeyAction::EditMinEmployees => {
            let current = state.filters().min_employees;
            let seed = if current == 0 { String::new() } else { current.to_string() };
            state.mode = InputMode::EditMinEmployees(LineEditor::with_text(seed));
        }

        KeyAction::CycleIndustry => {
            let options = state.industries();
            let next = cycle_option(&options, state.filters().industry.as_deref());
            state.set_filters(FilterCriteria {
                industry: next,
                ..state.filters().clone()
            });
        }
        KeyAction::CycleLocation => {
            let options = state.locations();
            let next = cycle_option(&options, state.filters().location.as_deref());
            state.set_filters(FilterCriteria {
                location: next,
                ..state.filters().clone()
            });
        }

        KeyAction::CycleSort => state.set_sort(state.sort().cycled()),
        KeyAction::ReverseSort => state.set_sort(state.sort().reversed()),

        KeyAction::NextPage => {
            let total = state.directory_view().total_pages;
            if state.current_page() < total {
                state.set_page(state.current_page() + 1);
            }
        }
        KeyAction::PrevPage => {
            if state.current_page() > 1 {
                state.set_page(state.current_page() - 1);
            }
        }

        KeyAction::SelectNext => {
            let visible = state.directory_view().items.len();
            if visible > 0 && state.selected + 1 < visible {
                state.selected += 1;
            }
        }
        KeyAction::SelectPrev => {
            state.selected = state.selected.saturating_sub(1);
        }

        KeyAction::Reset => state.reset(),
    }
    Applied::Continue
}

/// Advance a filter option: All -> options[0] -> ... -> last -> All.
fn cycle_option(options: &[String], current: Option<&str>) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => match options.iter().position(|o| o == value) {
            Some(pos) if pos + 1 < options.len() => Some(options[pos + 1].clone()),
            // Last option, or a value no longer in the list: back to All.
            _ => None,
        },
    }
}

/// A committed edit, extracted from the active editor so the mutable
/// borrow of the mode ends before the state mutators run.
enum Edit {
    Search(String),
    MinEmployees(u64),
}

/// Feed a typed character into the active editor and push the result
/// into the state. Search accepts anything; the min-employees editor
/// accepts digits only (a blank value means no minimum, matching the
/// original's empty-input-is-zero behavior).
pub fn apply_edit_char(state: &mut AppState, ch: char) {
    let committed = match &mut state.mode {
        InputMode::EditSearch(editor) => {
            editor.insert(ch);
            Some(Edit::Search(editor.text().to_string()))
        }
        InputMode::EditMinEmployees(editor) => {
            if ch.is_ascii_digit() {
                editor.insert(ch);
                Some(Edit::MinEmployees(parse_min_employees(editor.text())))
            } else {
                None
            }
        }
        InputMode::Browse => None,
    };
    commit_edit(state, committed);
}

/// Backspace in the active editor, pushing the result into the state.
pub fn apply_edit_backspace(state: &mut AppState) {
    let committed = match &mut state.mode {
        InputMode::EditSearch(editor) => {
            editor.backspace();
            Some(Edit::Search(editor.text().to_string()))
        }
        InputMode::EditMinEmployees(editor) => {
            editor.backspace();
            Some(Edit::MinEmployees(parse_min_employees(editor.text())))
        }
        InputMode::Browse => None,
    };
    commit_edit(state, committed);
}

fn commit_edit(state: &mut AppState, edit: Option<Edit>) {
    match edit {
        Some(Edit::Search(query)) => state.set_search(query),
        Some(Edit::MinEmployees(min)) => state.set_filters(FilterCriteria {
            min_employees: min,
            ..state.filters().clone()
        }),
        None => {}
    }
}

/// Leave edit mode, keeping whatever was committed per keystroke.
pub fn finish_edit(state: &mut AppState) {
    state.mode = InputMode::Browse;
}

fn parse_min_employees(text: &str) -> u64 {
    text.parse().unwrap_or(0)
}
