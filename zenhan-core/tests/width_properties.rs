//! Property tests for width conversion

use proptest::prelude::*;
use zenhan_core::tables::is_half_width;
use zenhan_core::{extract_digits, to_full_width, to_half_width};

/// Strings over printable ASCII and half-width katakana
fn half_width_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            proptest::char::range(' ', '~'),
            proptest::char::range('\u{FF61}', '\u{FF9F}'),
        ],
        0..48,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn full_width_is_stable_through_half_width(text in half_width_text()) {
        let full = to_full_width(&text);
        prop_assert_eq!(to_full_width(&to_half_width(&full)), full);
    }

    #[test]
    fn half_width_output_is_half_width(text in "\\PC*") {
        let half = to_half_width(&text);
        prop_assert!(half.chars().all(is_half_width), "{:?} -> {:?}", text, half);
    }

    #[test]
    fn full_width_output_has_no_half_width(text in "\\PC*") {
        let full = to_full_width(&text);
        prop_assert!(!full.chars().any(is_half_width), "{:?} -> {:?}", text, full);
    }

    #[test]
    fn half_width_is_idempotent(text in "\\PC*") {
        let once = to_half_width(&text);
        prop_assert_eq!(to_half_width(&once), once.clone());
    }

    #[test]
    fn extracted_digits_are_ascii_digits(text in "\\PC*") {
        prop_assert!(extract_digits(&text).bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn test_mixed_sentence() {
    assert_eq!(
        to_half_width("カタカナ　ＡＢＣ－１２３！"),
        "ｶﾀｶﾅ ABC-123!"
    );
    assert_eq!(
        to_full_width("ｶﾀｶﾅ ABC-123!"),
        "カタカナ　ＡＢＣ－１２３！"
    );
}

#[test]
fn test_kanji_survive_full_width_but_not_half_width() {
    assert_eq!(to_full_width("東京ﾀﾜｰ"), "東京タワー");
    assert_eq!(to_half_width("東京タワー"), "ﾀﾜｰ");
}
