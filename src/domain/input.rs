//! Permissive parsing of the calculator's text fields.
//!
//! Users type amounts the Brazilian way (`12,50`). The first comma is read as
//! the decimal point and the longest numeric prefix wins, so `"12abc"` is 12.
//! Text without a numeric prefix counts as zero, which the engine then treats
//! as "no value yet".

/// Parses the numeric prefix of `text`, returning `None` when there is none.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replacen(',', ".", 1);
    let prefix = numeric_prefix(&normalized);
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Same as [`parse_decimal`] but coerces unparseable text to zero.
pub fn parse_or_zero(text: &str) -> f64 {
    parse_decimal(text).unwrap_or(0.0)
}

fn numeric_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut end = 0;
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let mut digits = idx - int_start;
    if digits > 0 {
        end = idx;
    }

    if idx < bytes.len() && bytes[idx] == b'.' {
        idx += 1;
        let frac_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        digits += idx - frac_start;
        if digits > 0 {
            end = idx;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it.
    if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        let mut exp_idx = idx + 1;
        if matches!(bytes.get(exp_idx), Some(b'+') | Some(b'-')) {
            exp_idx += 1;
        }
        let exp_digits_start = exp_idx;
        while exp_idx < bytes.len() && bytes[exp_idx].is_ascii_digit() {
            exp_idx += 1;
        }
        if exp_idx > exp_digits_start {
            end = exp_idx;
        }
    }

    &input[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_decimal() {
        assert_eq!(parse_decimal("12,50"), Some(12.5));
        assert_eq!(parse_decimal(" 0,99 "), Some(0.99));
    }

    #[test]
    fn parses_dot_decimal() {
        assert_eq!(parse_decimal("181.82"), Some(181.82));
    }

    #[test]
    fn only_first_comma_becomes_decimal_point() {
        assert_eq!(parse_decimal("1,5,7"), Some(1.5));
    }

    #[test]
    fn thousands_separator_truncates_like_parse_float() {
        assert_eq!(parse_decimal("1.234,56"), Some(1.234));
    }

    #[test]
    fn honours_numeric_prefix() {
        assert_eq!(parse_decimal("12abc"), Some(12.0));
        assert_eq!(parse_decimal("15%"), Some(15.0));
        assert_eq!(parse_decimal("2e3x"), Some(2000.0));
        assert_eq!(parse_decimal("2e"), Some(2.0));
    }

    #[test]
    fn leading_decimal_point_is_accepted() {
        assert_eq!(parse_decimal(",5"), Some(0.5));
        assert_eq!(parse_decimal("-.25"), Some(-0.25));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("R$ 10"), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("."), None);
    }

    #[test]
    fn overflow_is_not_a_number() {
        assert_eq!(parse_decimal("1e400"), None);
    }

    #[test]
    fn unparseable_text_coerces_to_zero() {
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("7"), 7.0);
    }
}
