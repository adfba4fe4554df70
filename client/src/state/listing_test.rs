use super::*;

fn page_of(items: &[&str], page: u32, total_pages: u32) -> Page<String> {
    Page { items: items.iter().map(|s| (*s).to_owned()).collect(), page, total_pages }
}

// =============================================================
// Responsive limit
// =============================================================

#[test]
fn limit_switches_at_breakpoint() {
    assert_eq!(limit_for_width(1023.9), MOBILE_PAGE_SIZE);
    assert_eq!(limit_for_width(1024.0), DESKTOP_PAGE_SIZE);
    assert_eq!(limit_for_width(1920.0), DESKTOP_PAGE_SIZE);
    assert_eq!(limit_for_width(375.0), MOBILE_PAGE_SIZE);
}

// =============================================================
// Page math
// =============================================================

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(13, 12), 2);
    assert_eq!(total_pages(12, 12), 1);
    assert_eq!(total_pages(25, 6), 5);
}

#[test]
fn total_pages_never_below_one() {
    assert_eq!(total_pages(0, 12), 1);
    assert_eq!(total_pages(10, 0), 1);
}

#[test]
fn page_from_response_prefers_total_pages() {
    let resp = PagedResponse { data: vec!["a".to_owned()], total: Some(100), total_pages: Some(3) };
    let page = Page::from_response(resp, 2, 10);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);
}

#[test]
fn page_from_response_derives_from_total() {
    let resp = PagedResponse { data: Vec::<String>::new(), total: Some(21), total_pages: None };
    assert_eq!(Page::from_response(resp, 1, 10).total_pages, 3);
}

#[test]
fn page_from_response_defaults_to_one_page() {
    let resp = PagedResponse { data: Vec::<String>::new(), total: None, total_pages: None };
    assert_eq!(Page::from_response(resp, 1, 10).total_pages, 1);
}

// =============================================================
// Query key
// =============================================================

#[test]
fn doctor_query_inert_without_limit() {
    let search = SearchState::default();
    assert_eq!(DoctorQuery::key(1, None, &search), None);
}

#[test]
fn doctor_query_captures_filters() {
    let search = SearchState { query: "ann".to_owned(), specialization: "Cardiology".to_owned() };
    let key = DoctorQuery::key(2, Some(12), &search).unwrap();
    assert_eq!(
        key,
        DoctorQuery { page: 2, limit: 12, query: "ann".to_owned(), specialization: "Cardiology".to_owned() }
    );
}

#[test]
fn doctor_query_key_changes_with_any_field() {
    let search = SearchState::default();
    let base = DoctorQuery::key(1, Some(6), &search);
    assert_ne!(base, DoctorQuery::key(2, Some(6), &search));
    assert_ne!(base, DoctorQuery::key(1, Some(12), &search));
    let filtered = SearchState { query: String::new(), specialization: "ENT".to_owned() };
    assert_ne!(base, DoctorQuery::key(1, Some(6), &filtered));
}

// =============================================================
// ListingState
// =============================================================

#[test]
fn listing_default_is_first_page() {
    let state = ListingState::<String>::default();
    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages, 1);
    assert!(!state.loading);
    assert!(!state.can_prev());
    assert!(!state.can_next());
}

#[test]
fn finish_replaces_items_instead_of_appending() {
    let mut state = ListingState::default();
    let seq = state.begin();
    assert!(state.finish(seq, Ok(page_of(&["a", "b"], 1, 2))));
    let seq = state.begin();
    assert!(state.finish(seq, Ok(page_of(&["c"], 2, 2))));
    assert_eq!(state.items, vec!["c".to_owned()]);
    assert_eq!(state.page, 2);
    assert!(!state.loading);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = ListingState::default();
    let old = state.begin();
    let new = state.begin();
    assert!(state.finish(new, Ok(page_of(&["newest"], 1, 1))));
    assert!(!state.finish(old, Ok(page_of(&["stale"], 1, 1))));
    assert_eq!(state.items, vec!["newest".to_owned()]);
}

#[test]
fn stale_response_does_not_clear_loading() {
    let mut state = ListingState::<String>::default();
    let old = state.begin();
    let _new = state.begin();
    state.finish(old, Ok(page_of(&["stale"], 1, 1)));
    assert!(state.loading);
}

#[test]
fn error_keeps_previous_items() {
    let mut state = ListingState::default();
    let seq = state.begin();
    state.finish(seq, Ok(page_of(&["a"], 1, 1)));
    let seq = state.begin();
    assert!(state.error.is_none());
    state.finish(seq, Err("Failed to load doctors".to_owned()));
    assert_eq!(state.error.as_deref(), Some("Failed to load doctors"));
    assert_eq!(state.items, vec!["a".to_owned()]);
    assert!(!state.loading);
}

#[test]
fn go_to_clamps_to_known_range() {
    let mut state = ListingState::<String>::default();
    state.total_pages = 3;
    assert!(state.go_to(3));
    assert!(!state.go_to(9));
    assert_eq!(state.page, 3);
    assert!(state.go_to(0));
    assert_eq!(state.page, 1);
}

#[test]
fn prev_next_bounds() {
    let mut state = ListingState::<String>::default();
    state.total_pages = 2;
    assert!(state.can_next());
    state.go_to(2);
    assert!(state.can_prev());
    assert!(!state.can_next());
    state.reset_page();
    assert_eq!(state.page, 1);
}
