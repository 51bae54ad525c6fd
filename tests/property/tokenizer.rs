//! Tokenizer output shape.

use folio::util::{is_stop_word, prepare, prepare_with_limit};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 éüñ,.'-]{0,60}").unwrap()
}

proptest! {
    #[test]
    fn prop_tokens_are_clean(text in text_strategy(), limit in 2usize..25) {
        for token in prepare_with_limit(&text, limit) {
            prop_assert!(token.chars().count() > 1);
            prop_assert!(token.chars().count() <= limit);
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn prop_no_stop_words_survive(text in text_strategy()) {
        for token in prepare(&text) {
            prop_assert!(!is_stop_word(&token), "stop word {} kept", token);
        }
    }

    #[test]
    fn prop_prepare_is_idempotent(text in text_strategy()) {
        let once = prepare(&text);
        prop_assert_eq!(prepare(&once.join(" ")), once);
    }
}
