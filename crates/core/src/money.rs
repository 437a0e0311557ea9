//! Money and percentage formatting.
//!
//! Amounts are exact `Decimal` values in South African rand. Model outputs
//! arrive as `f64` and are converted once at the boundary.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Convert a model output to money, rounded to cents.
///
/// Non-finite input maps to zero.
pub fn decimal_from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().round_dp(2)
}

/// Convert money to `f64` for use as a model feature.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Render whole rand with thousands separators, e.g. `R4,500`.
pub fn format_rand(amount: Decimal) -> String {
    let rounded = amount.round();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-R{grouped}")
    } else {
        format!("R{grouped}")
    }
}

/// Render a ratio as a percentage, e.g. `0.85` → `85%`, `0.03` (1 dp) → `3.0%`.
pub fn format_percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

/// Like [`format_percent`] with an explicit `+` for non-negative values.
pub fn format_signed_percent(ratio: f64, decimals: usize) -> String {
    let sign = if ratio >= 0.0 { "+" } else { "" };
    format!("{sign}{}", format_percent(ratio, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rand_groups_thousands() {
        assert_eq!(format_rand(dec!(4500)), "R4,500");
        assert_eq!(format_rand(dec!(950)), "R950");
        assert_eq!(format_rand(dec!(1234567.49)), "R1,234,567");
        assert_eq!(format_rand(dec!(0)), "R0");
        assert_eq!(format_rand(dec!(-4300)), "-R4,300");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.85, 0), "85%");
        assert_eq!(format_signed_percent(0.03, 1), "+3.0%");
        assert_eq!(format_signed_percent(-0.021, 1), "-2.1%");
        assert_eq!(format_signed_percent(0.0, 1), "+0.0%");
    }

    #[test]
    fn f64_conversion_rounds_to_cents() {
        assert_eq!(decimal_from_f64(4500.0), dec!(4500));
        assert_eq!(decimal_from_f64(1.005_1), dec!(1.01));
        assert_eq!(decimal_from_f64(f64::NAN), Decimal::ZERO);
    }
}
