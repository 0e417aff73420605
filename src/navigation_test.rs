use super::*;
use crate::app::{build_registry, render_path};

#[test]
fn single_navigation_applies() {
    let mut nav = Navigator::new();
    let ticket = nav.begin("/creators");
    assert!(nav.is_current(&ticket));
    assert_eq!(nav.complete(ticket, "view"), Some("view"));
    assert_eq!(nav.current_path(), Some("/creators"));
}

#[test]
fn newer_navigation_supersedes_older_render() {
    let mut nav = Navigator::new();
    let first = nav.begin("/profile/1");
    let second = nav.begin("/profile/2");
    assert!(!nav.is_current(&first));

    assert_eq!(nav.complete(second, 2), Some(2));
    assert_eq!(nav.complete(first, 1), None);
    assert_eq!(nav.current_path(), Some("/profile/2"));
}

#[test]
fn stale_completion_leaves_state_untouched() {
    let mut nav = Navigator::new();
    let first = nav.begin("/creators");
    let _second = nav.begin("/preview/abc");

    assert_eq!(nav.complete(first, ()), None);
    assert_eq!(nav.current_path(), None);
}

#[test]
fn tickets_are_sequenced() {
    let mut nav = Navigator::new();
    let a = nav.begin("/a");
    let b = nav.begin("/b");
    assert!(b.seq() > a.seq());
    assert_eq!(b.path(), "/b");
}

#[test]
fn last_navigation_wins_with_real_pages() {
    let registry = build_registry().unwrap();
    let mut nav = Navigator::new();

    let slow = nav.begin("/profile/42");
    let fast = nav.begin("/missing");

    let fast_page = render_path(&registry, fast.path());
    let applied = nav.complete(fast, fast_page).expect("latest navigation applies");
    assert_eq!(applied.status, axum::http::StatusCode::NOT_FOUND);

    let slow_page = render_path(&registry, slow.path());
    assert!(nav.complete(slow, slow_page).is_none());
    assert_eq!(nav.current_path(), Some("/missing"));
}
