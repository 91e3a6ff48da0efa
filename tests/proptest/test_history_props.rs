//! Property-based tests for history navigation

use launchterm::HistoryBuffer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Record(String),
    Previous,
    Next,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z ]{0,6}".prop_map(Op::Record),
        Just(Op::Previous),
        Just(Op::Next),
    ]
}

proptest! {
    #[test]
    fn test_cursor_always_valid(ops in prop::collection::vec(op(), 0..64)) {
        let mut history = HistoryBuffer::new();
        let mut recorded = 0usize;

        for op in ops {
            match op {
                Op::Record(line) => {
                    history.record(line);
                    recorded += 1;
                    prop_assert_eq!(history.cursor(), None);
                }
                Op::Previous => {
                    history.recall_previous();
                }
                Op::Next => {
                    history.recall_next();
                }
            }
            if let Some(pos) = history.cursor() {
                prop_assert!(pos < history.len());
            }
        }
        // Append-only
        prop_assert_eq!(history.len(), recorded);
    }

    #[test]
    fn test_previous_walks_back_to_oldest(lines in prop::collection::vec("[a-z]{1,5}", 1..10)) {
        let mut history = HistoryBuffer::new();
        for line in &lines {
            history.record(line.clone());
        }

        for expected in lines.iter().rev() {
            prop_assert_eq!(history.recall_previous(), Some(expected.as_str()));
        }
        prop_assert_eq!(history.recall_previous(), Some(lines[0].as_str()));
        prop_assert_eq!(history.cursor(), Some(0));
    }
}
