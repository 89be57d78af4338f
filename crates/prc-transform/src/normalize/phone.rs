//! Phone-number canonicalization.

use prc_model::CellValue;

/// Canonicalize a phone cell to `DDD-DDD-DDDD`.
///
/// Every non-digit character is stripped; exactly ten remaining digits are
/// reformatted with 3-3-4 grouping. Anything else — too few digits, too
/// many, or none — is returned as the original unmodified input so malformed
/// numbers stay visible for manual review. Missing passes through.
pub fn standardize_phone(value: &CellValue) -> CellValue {
    let CellValue::Text(raw) = value else {
        return value.clone();
    };
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        CellValue::Text(format!(
            "{}-{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..]
        ))
    } else {
        value.clone()
    }
}
