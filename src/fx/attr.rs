//! Markup attribute parsing
//!
//! Attribute values are parsed leniently, the way browsers parse integer
//! attributes: leading whitespace and an optional sign, then the longest run
//! of digits. Trailing junk is ignored (`"250ms"` reads as 250).

/// Parse the integer prefix of an attribute value
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Per-element delay in ms; absent, unparseable and negative values mean 0
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(parse_int)
        .map(|ms| ms.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int("250"), Some(250));
        assert_eq!(parse_int("  42px"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+3"), Some(3));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn test_delay_defaults_to_zero() {
        assert_eq!(parse_delay(None), 0);
        assert_eq!(parse_delay(Some("soon")), 0);
        assert_eq!(parse_delay(Some("-100")), 0);
        assert_eq!(parse_delay(Some("300")), 300);
    }
}
