//! Numeric formatting for re-display.

/// Convert a finite f64 to the shortest decimal string that parses back to
/// the same value (ryu). Integer values print without the `.0` marker, and
/// no thousands separators are inserted.
///
/// Callers must only pass finite values; the evaluator rejects NaN and
/// infinity before any result reaches formatting.
pub fn format_decimal(value: f64) -> String {
    debug_assert!(value.is_finite());
    let mut buffer = ryu::Buffer::new();
    let formatted = buffer.format_finite(value);
    formatted.strip_suffix(".0").unwrap_or(formatted).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_decimal_marker() {
        assert_eq!(format_decimal(14.0), "14");
        assert_eq!(format_decimal(0.0), "0");
        assert_eq!(format_decimal(-3.0), "-3");
    }

    #[test]
    fn test_fractions_keep_shortest_form() {
        assert_eq!(format_decimal(4.5), "4.5");
        assert_eq!(format_decimal(0.1), "0.1");
        assert_eq!(format_decimal(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_round_trip() {
        let values = [
            0.0,
            1.0,
            -1.0,
            14.0,
            0.1,
            1.0 / 3.0,
            0.1 + 0.2,
            123_456_789.123,
            1e30,
            -2.5e-10,
            f64::MAX,
            f64::MIN_POSITIVE,
        ];
        for value in values {
            let parsed: f64 = format_decimal(value).parse().unwrap();
            assert_eq!(parsed, value, "round-trip failed for {}", value);
        }
    }
}
