//! Numeric cleaning for statement amounts

use parsewright_domain::Cell;

/// Clean a raw amount field
///
/// Thousands separators are stripped and parenthesized values become negative.
/// Zero, non-finite and unparseable values map to `Missing`.
///
/// # Examples
///
/// ```
/// use parsewright_domain::Cell;
/// use parsewright_extractor::clean_amount;
///
/// assert_eq!(clean_amount("1,935.30"), Cell::Number(1935.3));
/// assert_eq!(clean_amount("(250.00)"), Cell::Number(-250.0));
/// assert_eq!(clean_amount("0.00"), Cell::Missing);
/// assert_eq!(clean_amount("n/a"), Cell::Missing);
/// ```
pub fn clean_amount(raw: &str) -> Cell {
    let cleaned = raw.replace(',', "").replace('(', "-").replace(')', "");
    match cleaned.trim().parse::<f64>() {
        Ok(value) if value == 0.0 || !value.is_finite() => Cell::Missing,
        Ok(value) => Cell::Number(value),
        Err(_) => Cell::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_padded_amounts() {
        assert_eq!(clean_amount("42"), Cell::Number(42.0));
        assert_eq!(clean_amount("  7,001.5 "), Cell::Number(7001.5));
    }

    #[test]
    fn test_negative_forms() {
        assert_eq!(clean_amount("-12.5"), Cell::Number(-12.5));
        assert_eq!(clean_amount("(1,000)"), Cell::Number(-1000.0));
    }

    #[test]
    fn test_zero_and_garbage_are_missing() {
        assert_eq!(clean_amount(""), Cell::Missing);
        assert_eq!(clean_amount("-0"), Cell::Missing);
        assert_eq!(clean_amount("Cr"), Cell::Missing);
        assert_eq!(clean_amount("inf"), Cell::Missing);
    }
}
