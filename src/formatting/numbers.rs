//! Currency and number display in en-US style.
//!
//! Rounding happens only here. Calculators keep full precision.

/// `$` amount with thousands separators and no fractional digits, rounded
/// half away from zero. Negative amounts render as `-$1,234`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let rounded = amount.round();
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// Thousands separators with at most two fractional digits; trailing zeros
/// are dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = group_thousands(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    if value < 0.0 && out != "0" {
        out.insert(0, '-');
    }
    out
}

/// One decimal place followed by `%`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    let fixed = format!("{value:.1}");
    let trimmed = fixed.strip_suffix(".0").unwrap_or(&fixed);
    format!("{trimmed}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(45_000.0), "$45,000");
        assert_eq!(format_currency(540_000.0), "$540,000");
        assert_eq!(format_currency(2_801_160.4), "$2,801,160");
        assert_eq!(format_currency(1_234.5), "$1,235");
        assert_eq!(format_currency(-1_234.0), "-$1,234");
    }

    #[test]
    fn test_format_currency_negative_rounding_to_zero() {
        assert_eq!(format_currency(-0.4), "$0");
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4_348.8), "4,348.8");
        assert_eq!(format_number(11.75), "11.75");
        assert_eq!(format_number(1_000_000.0), "1,000,000");
        assert_eq!(format_number(8.499999999999998), "8.5");
        assert_eq!(format_number(-2_500.25), "-2,500.25");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(64.27), "64.3%");
        assert_eq!(format_percent(20.0), "20%");
    }
}
