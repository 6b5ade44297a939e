//! Session state machine tests for fcd
//!
//! Drive the interactive state machine with synthetic input events and check
//! the selection window invariants: wrapping stays inside the visible range,
//! a fully erased query restores discovery order, and an empty window yields
//! the no-selection sentinel.

use fcd::app::keymap::InputEvent;
use fcd::app::session::{Session, Transition};
use fcd::config::Config;

fn corpus() -> Vec<String> {
    ["/a/b/foo.txt", "/a/bar.txt", "/a/foobar"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn type_query(session: &mut Session, query: &str) {
    for c in query.chars() {
        session.apply(InputEvent::Insert(c));
    }
}

#[test]
fn typing_then_erasing_restores_identity() {
    let config = Config::default();
    let mut session = Session::new(&config, corpus());

    type_query(&mut session, "foo");
    assert_eq!(session.results().len(), 2);

    for _ in 0..3 {
        session.apply(InputEvent::Erase);
    }
    assert_eq!(session.query(), "");
    assert_eq!(session.results(), corpus().as_slice());
}

#[test]
fn selection_wraps_within_visible_range() {
    let config = Config::default();
    let mut session = Session::new(&config, corpus());
    let n = session.visible_len() as isize;
    assert_eq!(n, 3);

    session.apply(InputEvent::MovePrev);
    assert_eq!(session.selection(), n - 1);

    session.apply(InputEvent::MoveNext);
    assert_eq!(session.selection(), 0);

    for _ in 0..10 {
        session.apply(InputEvent::MoveNext);
        assert!((0..n).contains(&session.selection()));
    }
}

#[test]
fn insert_resets_selection_erase_does_not() {
    let config = Config::default();
    let mut session = Session::new(&config, corpus());

    session.apply(InputEvent::MoveNext);
    assert_eq!(session.selection(), 1);

    session.apply(InputEvent::Insert('a'));
    assert_eq!(session.selection(), 0);

    session.apply(InputEvent::MoveNext);
    session.apply(InputEvent::Erase);
    assert_eq!(session.selection(), 1);
}

#[test]
fn shrinking_window_to_zero_yields_no_selection() {
    let config = Config::default();
    let mut session = Session::new(&config, corpus());
    assert!(session.selected().is_some());

    for _ in 0..20 {
        session.apply(InputEvent::Shrink);
    }
    assert_eq!(session.visible_len(), 0);
    assert!(session.selected().is_none());

    // Floor holds: one grow makes exactly one entry visible again.
    session.apply(InputEvent::Grow);
    assert_eq!(session.visible_len(), 1);
    assert!(session.selected().is_some());
}

#[test]
fn empty_corpus_has_no_selection() {
    let config = Config::default();
    let mut session = Session::new(&config, Vec::new());

    assert!(session.selected().is_none());
    assert!(matches!(
        session.apply(InputEvent::Confirm),
        Transition::Confirmed
    ));
    assert!(session.selected().is_none());
}

#[test]
fn confirm_finalizes_current_selection() {
    let config = Config::default();
    let mut session = Session::new(&config, corpus());

    type_query(&mut session, "foo");
    session.apply(InputEvent::MoveNext);

    assert!(matches!(
        session.apply(InputEvent::Confirm),
        Transition::Confirmed
    ));
    assert_eq!(session.selected(), Some("/a/b/foo.txt"));
}

#[test]
fn cancel_leaves_without_selection_path() {
    let config = Config::default();
    let mut session = Session::new(&config, corpus());

    assert!(matches!(
        session.apply(InputEvent::Cancel),
        Transition::Cancelled
    ));
}
