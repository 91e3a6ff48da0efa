//! Unit Tests for History Navigation
//!
//! Walk the cursor state machine of `HistoryBuffer`.

use launchterm::HistoryBuffer;

fn buffer(lines: &[&str]) -> HistoryBuffer {
    let mut history = HistoryBuffer::new();
    for line in lines {
        history.record(*line);
    }
    history
}

#[test]
fn test_reference_sequence() {
    let mut history = buffer(&["a", "b"]);
    assert_eq!(history.recall_previous(), Some("b"));
    assert_eq!(history.recall_previous(), Some("a"));
    assert_eq!(history.recall_previous(), Some("a"));
    assert_eq!(history.recall_next(), Some("b"));
    assert_eq!(history.recall_next(), Some(""));
    assert!(!history.is_browsing());
}

#[test]
fn test_single_entry() {
    let mut history = buffer(&["only"]);
    assert_eq!(history.recall_previous(), Some("only"));
    assert_eq!(history.recall_previous(), Some("only"));
    assert_eq!(history.recall_next(), Some(""));
    assert_eq!(history.cursor(), None);
}

#[test]
fn test_previous_after_reset_starts_from_newest() {
    let mut history = buffer(&["a", "b", "c"]);
    history.recall_previous();
    history.recall_previous();
    history.recall_next();
    assert_eq!(history.recall_next(), Some(""));
    assert!(!history.is_browsing());
    assert_eq!(history.recall_previous(), Some("c"));
}

#[test]
fn test_next_after_reset_starts_from_oldest() {
    let mut history = buffer(&["a", "b", "c"]);
    history.recall_previous();
    history.recall_previous();
    history.recall_next();
    assert_eq!(history.recall_next(), Some(""));

    assert_eq!(history.recall_next(), Some("a"));
    assert_eq!(history.cursor(), Some(0));
    assert_eq!(history.recall_previous(), Some("a"));
    assert_eq!(history.recall_next(), Some("b"));
}

#[test]
fn test_reset_cursor() {
    let mut history = buffer(&["a", "b"]);
    history.recall_previous();
    history.reset_cursor();
    assert_eq!(history.cursor(), None);
    assert_eq!(history.len(), 2);
}

#[test]
fn test_duplicates_and_blanks_are_kept() {
    let history = buffer(&["date", "date", "   ", "Date"]);
    assert_eq!(history.entries(), ["date", "date", "   ", "Date"]);
}

#[test]
fn test_empty_buffer() {
    let mut history = HistoryBuffer::new();
    assert_eq!(history.recall_previous(), None);
    assert_eq!(history.recall_next(), None);
    assert!(history.is_empty());
    assert_eq!(history.last(), None);
}
