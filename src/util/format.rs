//! pt-BR display helpers for money and percentages.

const CURRENCY_SYMBOL: &str = "R$";

/// Formats `value` as Brazilian reais: `R$ 1.234,56`, negatives as `-R$ 25,00`.
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return format!("{CURRENCY_SYMBOL} --");
    }

    // Rounding through a string keeps amounts beyond u64 range exact.
    let rendered = format!("{:.2}", value.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    let sign = if value < 0.0 && rendered != "0.00" { "-" } else { "" };

    format!("{sign}{CURRENCY_SYMBOL} {},{fraction}", group_thousands(whole))
}

/// Formats a percentage with a fixed number of decimals, e.g. `81.8%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "--%".to_string();
    }
    let rendered = format!("{value:.decimals$}");
    // "-0.0" reads as a bug to users.
    if rendered.trim_start_matches('-').chars().all(|ch| ch == '0' || ch == '.') {
        return format!("{:.decimals$}%", 0.0);
    }
    format!("{rendered}%")
}

/// Echoes a percentage the way the user typed it in a label, e.g. `15%` or `7.5%`.
pub fn format_input_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value}%")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(5.5), "R$ 5,50");
        assert_eq!(format_brl(181.818_181), "R$ 181,82");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_brl(1000.004), "R$ 1.000,00");
    }

    #[test]
    fn negatives_lead_with_minus() {
        assert_eq!(format_brl(-25.0), "-R$ 25,00");
        assert_eq!(format_brl(-0.001), "R$ 0,00");
    }

    #[test]
    fn rounding_carries_into_whole_part() {
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
    }

    #[test]
    fn amounts_beyond_integer_range_stay_exact() {
        assert_eq!(format_brl(1e20), "R$ 100.000.000.000.000.000.000,00");
        assert_eq!(format_brl(-2e18), "-R$ 2.000.000.000.000.000.000,00");
    }

    #[test]
    fn non_finite_amounts_render_placeholder() {
        assert_eq!(format_brl(f64::NAN), "R$ --");
    }

    #[test]
    fn percentages_use_fixed_decimals() {
        assert_eq!(format_percent(81.818_18, 1), "81.8%");
        assert_eq!(format_percent(25.0, 2), "25.00%");
        assert_eq!(format_percent(-12.345, 1), "-12.3%");
    }

    #[test]
    fn negative_zero_percent_is_plain_zero() {
        assert_eq!(format_percent(-0.01, 1), "0.0%");
    }

    #[test]
    fn input_percent_drops_trailing_zeroes() {
        assert_eq!(format_input_percent(15.0), "15%");
        assert_eq!(format_input_percent(7.5), "7.5%");
    }
}
