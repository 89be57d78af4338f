//! Date standardization against an ordered candidate format list.
//!
//! Ambiguous strings are resolved by priority: the first format that parses
//! wins, even when a later format would also parse. A string no candidate
//! format accepts is coerced to missing rather than kept or rejected — the
//! loss is counted in the stage report.

use chrono::NaiveDate;

use prc_model::CellValue;

/// Returns true for strict, zero-padded `YYYY-MM-DD` naming a real calendar
/// date. Canonical input is accepted as-is so a cleaned table passes through
/// the normalizer unchanged.
pub fn is_canonical_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits = [0, 1, 2, 3, 5, 6, 8, 9];
    if !digits.iter().all(|&i| bytes[i].is_ascii_digit()) {
        return false;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Standardize a date cell to canonical `YYYY-MM-DD` text.
///
/// Missing input stays missing. The trimmed value is tried against each
/// candidate format in order; the first success is formatted zero-padded
/// with a four-digit year. When nothing parses the value becomes missing.
pub fn standardize_date<S: AsRef<str>>(value: &CellValue, formats: &[S]) -> CellValue {
    let rendered;
    let raw = match value {
        CellValue::Missing => return CellValue::Missing,
        CellValue::Text(s) => s.trim(),
        CellValue::Number(_) => {
            rendered = value.render();
            rendered.as_str()
        }
    };
    if is_canonical_date(raw) {
        return CellValue::text(raw);
    }
    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format.as_ref()) {
            return CellValue::Text(date.format("%Y-%m-%d").to_string());
        }
    }
    CellValue::Missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use prc_model::DEFAULT_DATE_FORMATS;

    fn standardize(raw: &str) -> CellValue {
        standardize_date(&CellValue::text(raw), &DEFAULT_DATE_FORMATS)
    }

    #[test]
    fn ambiguous_slash_date_resolves_month_first() {
        // both %m/%d/%Y and a later format could parse this; the first wins
        assert_eq!(standardize("03/04/2020"), CellValue::text("2020-03-04"));
    }

    #[test]
    fn hyphenated_date_parses_day_first() {
        assert_eq!(standardize("25-12-2019"), CellValue::text("2019-12-25"));
    }

    #[test]
    fn year_first_slash_date_parses() {
        assert_eq!(standardize("2020/07/15"), CellValue::text("2020-07-15"));
    }

    #[test]
    fn unpadded_input_is_zero_padded() {
        assert_eq!(standardize("3/4/2020"), CellValue::text("2020-03-04"));
    }

    #[test]
    fn unparseable_becomes_missing() {
        assert_eq!(standardize("13/13/2020"), CellValue::Missing);
        assert_eq!(standardize("not a date"), CellValue::Missing);
        assert_eq!(standardize(""), CellValue::Missing);
    }

    #[test]
    fn canonical_input_is_preserved() {
        assert_eq!(standardize("2020-03-04"), CellValue::text("2020-03-04"));
    }

    #[test]
    fn missing_passes_through() {
        assert_eq!(
            standardize_date(&CellValue::Missing, &DEFAULT_DATE_FORMATS),
            CellValue::Missing
        );
    }
}
