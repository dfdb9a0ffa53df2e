use super::*;
use crate::model::{SortDir, SortKey};
use crate::test_harness::{company, sample_directory};

fn ready_state() -> AppState {
    let mut state = AppState::new(8);
    state.apply_feed_result(Ok(sample_directory()));
    state
}

// ===== Load state =====

#[test]
fn new_state_is_loading_with_defaults() {
    let state = AppState::new(8);
    assert_eq!(*state.load(), LoadState::Loading);
    assert!(state.companies().is_empty());
    assert_eq!(state.search_query(), "");
    assert!(state.filters().is_default());
    assert_eq!(state.sort(), SortSpec::default());
    assert_eq!(state.current_page(), 1);
}

#[test]
fn successful_feed_becomes_ready() {
    let state = ready_state();
    assert_eq!(*state.load(), LoadState::Ready);
    assert_eq!(state.companies().len(), 5);
}

#[test]
fn failed_feed_keeps_empty_list_and_message() {
    let mut state = AppState::new(8);
    state.apply_feed_result(Err(crate::model::FetchError::HttpStatus { status: 500 }));

    match state.load() {
        LoadState::Failed { message } => {
            assert!(!message.is_empty());
            assert!(message.contains("500"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(state.companies().is_empty());

    // The pipeline still runs over the empty list without panicking.
    let view = state.directory_view();
    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 0);
}

#[test]
fn empty_feed_is_ready_not_failed() {
    let mut state = AppState::new(8);
    state.apply_feed_result(Ok(Vec::new()));
    assert_eq!(*state.load(), LoadState::Ready);
    assert_eq!(state.directory_view().total_pages, 0);
}

// ===== Page reset rule =====

#[test]
fn set_search_resets_page_to_one() {
    let mut state = ready_state();
    state.set_page(3);
    state.set_search("acme");
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.search_query(), "acme");
}

#[test]
fn set_filters_resets_page_to_one() {
    let mut state = ready_state();
    state.set_page(2);
    state.set_filters(FilterCriteria {
        industry: Some("Tech".to_string()),
        ..FilterCriteria::default()
    });
    assert_eq!(state.current_page(), 1);
}

#[test]
fn set_sort_resets_page_to_one() {
    let mut state = ready_state();
    state.set_page(2);
    state.set_sort(SortSpec { key: SortKey::Employees, dir: SortDir::Desc });
    assert_eq!(state.current_page(), 1);
}

#[test]
fn set_page_touches_nothing_else() {
    let mut state = ready_state();
    state.set_search("e");
    state.set_filters(FilterCriteria {
        industry: Some("Tech".to_string()),
        ..FilterCriteria::default()
    });
    state.set_sort(SortSpec { key: SortKey::FoundedYear, dir: SortDir::Desc });

    state.set_page(2);

    assert_eq!(state.current_page(), 2);
    assert_eq!(state.search_query(), "e");
    assert_eq!(state.filters().industry.as_deref(), Some("Tech"));
    assert_eq!(
        state.sort(),
        SortSpec { key: SortKey::FoundedYear, dir: SortDir::Desc }
    );
}

#[test]
fn set_page_does_not_clamp() {
    let mut state = ready_state();
    state.set_page(99);
    assert_eq!(state.current_page(), 99);
    // Out-of-range page renders as an empty slice.
    assert!(state.directory_view().items.is_empty());
}

#[test]
fn reset_restores_all_defaults() {
    let mut state = ready_state();
    state.set_search("zen");
    state.set_filters(FilterCriteria {
        location: Some("LA".to_string()),
        min_employees: 10,
        ..FilterCriteria::default()
    });
    state.set_sort(SortSpec { key: SortKey::Employees, dir: SortDir::Asc });
    state.set_page(2);

    state.reset();

    assert_eq!(state.search_query(), "");
    assert!(state.filters().is_default());
    assert_eq!(state.sort(), SortSpec::default());
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.companies().len(), 5, "loaded data survives reset");
}

// ===== Directory view =====

#[test]
fn view_runs_the_full_pipeline() {
    let mut state = ready_state();
    state.set_filters(FilterCriteria {
        industry: Some("Tech".to_string()),
        ..FilterCriteria::default()
    });
    state.set_sort(SortSpec { key: SortKey::Employees, dir: SortDir::Desc });

    let view = state.directory_view();
    let names: Vec<&str> = view.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Zenith", "Acme"]);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
}

#[test]
fn min_employees_scenario() {
    // min employees 100 on [Acme 50, Zenith 500] -> [Zenith]
    let mut state = AppState::new(8);
    state.apply_feed_result(Ok(vec![
        company("Acme", "Tech", "NY", 50, 1999),
        company("Zenith", "Tech", "LA", 500, 2010),
    ]));
    state.set_filters(FilterCriteria {
        min_employees: 100,
        ..FilterCriteria::default()
    });

    let view = state.directory_view();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].name, "Zenith");
}

#[test]
fn view_pages_with_configured_size() {
    let mut state = AppState::new(2);
    state.apply_feed_result(Ok(sample_directory()));

    let view = state.directory_view();
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.total_pages, 3);

    state.set_page(3);
    let view = state.directory_view();
    assert_eq!(view.items.len(), 1, "last page holds the remainder");
}

#[test]
fn distinct_lists_come_from_full_unfiltered_directory() {
    let mut state = ready_state();
    // Narrow the visible set hard; option lists must not shrink.
    state.set_search("no match at all");

    let view = state.directory_view();
    assert!(view.items.is_empty());
    assert_eq!(view.industries, ["Energy", "Retail", "Tech"]);
    assert_eq!(view.locations, ["LA", "NY", "TX"]);
}

#[test]
fn distinct_lists_are_sorted_and_deduplicated() {
    let mut state = AppState::new(8);
    state.apply_feed_result(Ok(vec![
        company("B", "Tech", "NY", 1, 2000),
        company("A", "Tech", "NY", 1, 2000),
        company("C", "Energy", "TX", 1, 2000),
    ]));

    assert_eq!(state.industries(), ["Energy", "Tech"]);
    assert_eq!(state.locations(), ["NY", "TX"]);
}

#[test]
fn mutators_reset_row_selection() {
    let mut state = ready_state();
    state.selected = 3;
    state.set_search("e");
    assert_eq!(state.selected, 0);

    state.selected = 2;
    state.set_page(2);
    assert_eq!(state.selected, 0);
}
