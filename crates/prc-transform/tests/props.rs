//! Property tests for the per-value normalizers and the encoder.

use std::collections::BTreeMap;

use prc_model::CellValue;
use prc_transform::{encode_binary, standardize_phone};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ten_digits_always_canonicalize(digits in "[0-9]{10}") {
        let spaced = format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]);
        let expected = CellValue::text(format!(
            "{}-{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..]
        ));
        prop_assert_eq!(
            standardize_phone(&CellValue::text(digits.as_str())),
            expected.clone()
        );
        prop_assert_eq!(standardize_phone(&CellValue::text(spaced)), expected);
    }

    #[test]
    fn wrong_digit_counts_preserve_the_input(raw in "[0-9]{0,9}|[0-9]{11,14}") {
        let input = CellValue::text(raw.as_str());
        prop_assert_eq!(standardize_phone(&input), input.clone());
    }

    #[test]
    fn phone_normalization_is_idempotent(raw in "\\PC{0,20}") {
        let once = standardize_phone(&CellValue::text(raw.as_str()));
        let twice = standardize_phone(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn encode_binary_is_total(raw in "\\PC{0,12}") {
        let mapping = BTreeMap::from([("Yes".to_string(), 1i64), ("No".to_string(), 0i64)]);
        let encoded = encode_binary(&CellValue::text(raw.as_str()), &mapping);
        let allowed = [
            CellValue::Number(1.0),
            CellValue::Number(0.0),
            CellValue::Missing,
        ];
        prop_assert!(allowed.contains(&encoded));
    }
}
