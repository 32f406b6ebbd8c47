//! Integer cells.
//!
//! Spreadsheets export whole numbers as `5`, `5.0` or ` 5 `. Every integer
//! field in the engine JSON is a string holding a plain integer.

/// Parse a numeric cell, truncating any fraction toward zero.
pub fn parse_int(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let f: f64 = value.parse().ok()?;
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !f.is_finite() || f.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(f.trunc() as i64)
}

/// Render a numeric cell as an integer string, or `default` if it isn't one.
pub fn int_field(value: &str, default: &str) -> String {
    parse_int(value).map_or_else(|| default.to_string(), |n| n.to_string())
}

/// Render a numeric cell as an integer string, or `None` if it isn't one.
pub fn strict_int(value: &str) -> Option<String> {
    parse_int(value).map(|n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("5"), Some(5));
        assert_eq!(parse_int(" 5.0 "), Some(5));
        assert_eq!(parse_int("5.9"), Some(5));
        assert_eq!(parse_int("-2.7"), Some(-2));
        assert_eq!(parse_int("1e3"), Some(1000));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("inf"), None);
        assert_eq!(parse_int("NaN"), None);
    }

    #[test]
    fn test_int_field_defaults() {
        assert_eq!(int_field("3.0", "0"), "3");
        assert_eq!(int_field("", "99"), "99");
        assert_eq!(int_field("x", "0"), "0");
    }

    #[test]
    fn test_strict_int() {
        assert_eq!(strict_int("1077936130.0").as_deref(), Some("1077936130"));
        assert_eq!(strict_int(" "), None);
    }
}
