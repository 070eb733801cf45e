//! Base-2 numeral to unsigned integer.

use crate::config::OverflowMode;
use crate::error::BinaryError;

/// Interprets `input` as a base-2 numeral, most-significant digit first.
///
/// Empty input is accepted and yields 0. Any character other than `'0'` or
/// `'1'` aborts the conversion; no partial value is returned.
pub fn bin_to_dec(input: &str, overflow: OverflowMode) -> Result<u64, BinaryError> {
    let mut acc: u64 = 0;
    let mut digits = 0usize;

    for (position, ch) in input.chars().enumerate() {
        digits = position + 1;
        let digit = match ch {
            '0' => 0,
            '1' => 1,
            other => {
                return Err(BinaryError::InvalidDigit {
                    digit: other,
                    position,
                })
            }
        };

        acc = match overflow {
            OverflowMode::Wrap => acc.wrapping_shl(1) | digit,
            OverflowMode::Reject => acc
                .checked_mul(2)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| BinaryError::Overflow {
                    digits: input.chars().count(),
                })?,
        };
    }

    tracing::debug!(
        target: "archtools.binary",
        digits,
        value = acc,
        ?overflow,
        "converted binary numeral"
    );
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(s: &str) -> Result<u64, BinaryError> {
        bin_to_dec(s, OverflowMode::Wrap)
    }

    #[test]
    fn known_values() {
        assert_eq!(wrap("1011"), Ok(11));
        assert_eq!(wrap("0"), Ok(0));
        assert_eq!(wrap("1"), Ok(1));
        assert_eq!(wrap("11111111"), Ok(255));
        assert_eq!(wrap("0000101"), Ok(5));
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(wrap(""), Ok(0));
        assert_eq!(bin_to_dec("", OverflowMode::Reject), Ok(0));
    }

    #[test]
    fn matches_positional_sum() {
        for s in ["1", "10", "110", "100101", "1111000011110000", "0101010101"] {
            let n = s.len();
            let expected: u64 = s
                .bytes()
                .enumerate()
                .map(|(i, b)| u64::from(b - b'0') << (n - 1 - i))
                .sum();
            assert_eq!(wrap(s), Ok(expected), "input {s}");
        }
    }

    #[test]
    fn invalid_digit_reports_position() {
        assert_eq!(
            wrap("102"),
            Err(BinaryError::InvalidDigit {
                digit: '2',
                position: 2
            })
        );
        assert_eq!(
            wrap(" 1"),
            Err(BinaryError::InvalidDigit {
                digit: ' ',
                position: 0
            })
        );
    }

    #[test]
    fn first_failure_left_to_right_wins() {
        let s = format!("{}x", "1".repeat(70));
        assert!(matches!(
            bin_to_dec(&s, OverflowMode::Reject),
            Err(BinaryError::Overflow { .. })
        ));
        let s = format!("x{}", "1".repeat(70));
        assert!(matches!(
            bin_to_dec(&s, OverflowMode::Reject),
            Err(BinaryError::InvalidDigit { position: 0, .. })
        ));
    }

    #[test]
    fn sixty_four_bits_fit() {
        let s = "1".repeat(64);
        assert_eq!(bin_to_dec(&s, OverflowMode::Reject), Ok(u64::MAX));
        assert_eq!(wrap(&s), Ok(u64::MAX));
    }

    #[test]
    fn overflow_wraps_or_rejects() {
        let s = "1".repeat(65);
        assert_eq!(wrap(&s), Ok(u64::MAX));

        let s = format!("1{}", "0".repeat(64));
        assert_eq!(wrap(&s), Ok(0));
        assert_eq!(
            bin_to_dec(&s, OverflowMode::Reject),
            Err(BinaryError::Overflow { digits: 65 })
        );
    }

    #[test]
    fn long_reject_input_stays_linear() {
        let s = "0".repeat(200_000);
        let started = std::time::Instant::now();
        assert_eq!(bin_to_dec(&s, OverflowMode::Reject), Ok(0));
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn overflow_digits_count_chars() {
        let s = format!("1{}", "0".repeat(64));
        match bin_to_dec(&s, OverflowMode::Reject) {
            Err(BinaryError::Overflow { digits }) => assert_eq!(digits, s.chars().count()),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
