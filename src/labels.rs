//! Header label encoding for the grid.
//!
//! Column headers use the spreadsheet alphabetic scheme: a bijective
//! base-26 encoding with no zero digit, so A..Z, AA..AZ, BA.. and so on.
//! Row headers are plain 1-based decimal.

/// Encode a positive ordinal into bijective base-26 letters.
///
/// `1 -> "A"`, `26 -> "Z"`, `27 -> "AA"`, `52 -> "AZ"`, `53 -> "BA"`.
/// Returns an empty string for `n <= 0`; the encoding has no
/// representation for zero or negatives.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_alpha(n: i64) -> String {
    if n <= 0 {
        return String::new();
    }
    let mut result = String::new();
    let mut n = n;
    while n > 0 {
        n -= 1;
        let c = char::from(b'A' + (n % 26) as u8);
        result.insert(0, c);
        n /= 26;
    }
    result
}

/// Decode bijective base-26 letters back to the ordinal.
///
/// Inverse of [`encode_alpha`] on positive integers. Returns `None` for an
/// empty string or any non-alphabetic character.
pub fn decode_alpha(label: &str) -> Option<i64> {
    if label.is_empty() {
        return None;
    }
    let mut n: i64 = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = i64::from(ch.to_ascii_uppercase() as u32 - 'A' as u32) + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n)
}

/// Label for a 0-based column index: 0 -> "A", 25 -> "Z", 26 -> "AA".
pub fn column_label(col: u32) -> String {
    encode_alpha(i64::from(col) + 1)
}

/// Label for a 0-based row index: 0 -> "1".
pub fn row_label(row: u32) -> String {
    (row + 1).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, "A")]
    #[test_case(2, "B")]
    #[test_case(26, "Z")]
    #[test_case(27, "AA")]
    #[test_case(52, "AZ")]
    #[test_case(53, "BA")]
    #[test_case(702, "ZZ")]
    #[test_case(703, "AAA")]
    fn encode_known_values(n: i64, expected: &str) {
        assert_eq!(encode_alpha(n), expected);
    }

    #[test]
    fn encode_guards_non_positive() {
        assert_eq!(encode_alpha(0), "");
        assert_eq!(encode_alpha(-5), "");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode_alpha(""), None);
        assert_eq!(decode_alpha("A1"), None);
    }

    #[test]
    fn roundtrip_is_bijective() {
        for n in 1..=100_000 {
            assert_eq!(decode_alpha(&encode_alpha(n)), Some(n), "n = {n}");
        }
    }

    #[test]
    fn column_and_row_labels_are_one_based() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(26), "AA");
        assert_eq!(row_label(0), "1");
        assert_eq!(row_label(41), "42");
    }
}
