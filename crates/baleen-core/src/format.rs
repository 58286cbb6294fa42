//! Number formatting for statistics display.
//!
//! Output matches the default `en-US` number format: `,` groups thousands and
//! fractions keep at most three digits with trailing zeros dropped.

/// Format an integer with thousands separators (`1234567` -> `1,234,567`).
#[must_use]
pub fn number_format(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a real number with thousands separators and at most three
/// fraction digits (`1234.5678` -> `1,234.568`).
///
/// Non-finite values render as `NaN`, `∞`, or `-∞`.
#[must_use]
pub fn decimal_format(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }

    let rendered = format!("{:.3}", value.abs());
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if value.is_sign_negative() && rendered.chars().any(|ch| matches!(ch, '1'..='9')) {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(12_345, "12,345")]
    #[case(1_234_567, "1,234,567")]
    #[case(u64::MAX, "18,446,744,073,709,551,615")]
    fn integers(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(number_format(value), expected);
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(25.0, "25")]
    #[case(25.5, "25.5")]
    #[case(1234.5678, "1,234.568")]
    #[case(-1234.5, "-1,234.5")]
    #[case(-0.0001, "0")]
    #[case(0.125, "0.125")]
    fn decimals(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(decimal_format(value), expected);
    }

    #[test]
    fn non_finite_decimals() {
        assert_eq!(decimal_format(f64::NAN), "NaN");
        assert_eq!(decimal_format(f64::INFINITY), "∞");
        assert_eq!(decimal_format(f64::NEG_INFINITY), "-∞");
    }
}
