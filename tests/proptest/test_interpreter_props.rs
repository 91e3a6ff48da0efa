//! Property-based tests for the command interpreter

#[path = "../test_utils/mod.rs"]
mod test_utils;

use launchterm::commands::Outcome;
use proptest::prelude::*;
use test_utils::{recording_interpreter, KEYWORDS};

fn keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(KEYWORDS.to_vec())
}

/// Randomly upper/lower-case each character
fn mixed_case(word: &str, mask: &[bool]) -> String {
    word.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn test_interpret_doesnt_panic(s in "\\PC*") {
        let (interpreter, _) = recording_interpreter();
        let result = interpreter.interpret(&s);
        prop_assert!(!result.display_text.is_empty());
    }

    #[test]
    fn test_registered_keywords_any_case(
        word in keyword(),
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let (interpreter, _) = recording_interpreter();
        let line = mixed_case(word, &mask);
        let result = interpreter.interpret(&line);
        prop_assert!(!result.display_text.starts_with("Unknown command"));
    }

    #[test]
    fn test_case_variants_give_same_text(
        word in "(help|cls|open|exit)",
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let (interpreter, _) = recording_interpreter();
        prop_assert_eq!(
            interpreter.interpret(&mixed_case(&word, &mask)),
            interpreter.interpret(&word)
        );
    }

    #[test]
    fn test_unregistered_words_are_unknown(word in "[a-z]{1,12}", padding in "[ \t]{0,3}") {
        prop_assume!(!KEYWORDS.contains(&word.as_str()));
        let (interpreter, launcher) = recording_interpreter();
        let line = format!("{}{}{}", padding, word, padding);
        let result = interpreter.interpret(&line);

        prop_assert_eq!(result.outcome, Outcome::Error);
        prop_assert!(result.display_text.contains(&line));
        prop_assert!(launcher.requests().is_empty());
    }

    #[test]
    fn test_open_always_has_scheme(host in "[a-z0-9]{1,12}(\\.[a-z]{2,5}){1,2}") {
        let (interpreter, _) = recording_interpreter();
        let result = interpreter.interpret(&format!("open {}", host));
        prop_assert_eq!(result.display_text, format!("Opening https://{}...", host));
    }
}
