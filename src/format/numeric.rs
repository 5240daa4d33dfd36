//! Fixed-point decimal rendering.
//!
//! The number of decimal places comes from a format pattern: everything after
//! the separator counts as one place, so `"0.000"` means three decimals and a
//! pattern without a separator means none.
//!
//! # Examples
//!
//! ```
//! use netrec_fmt::RawValue;
//! use netrec_fmt::format::numeric;
//!
//! assert_eq!(numeric::fixed_decimal(&RawValue::Number(3.14159), "0.00", '.'), "3.14");
//! assert_eq!(numeric::fixed_decimal(&RawValue::Number(3.14159), "000", '.'), "3");
//! assert_eq!(numeric::percent(&RawValue::Number(0.4567), "0.0"), "45.7%");
//! ```

use crate::value::RawValue;

/// Upper bound on rendered decimal places.
pub const MAX_DECIMAL_PLACES: usize = 100;

/// Number of decimal places a pattern asks for.
///
/// Counts the characters after the first `separator`. Without a separator the
/// answer is zero.
///
/// # Examples
///
/// ```
/// use netrec_fmt::format::numeric::decimal_places;
///
/// assert_eq!(decimal_places("0.000", '.'), 3);
/// assert_eq!(decimal_places("0.", '.'), 0);
/// assert_eq!(decimal_places("000", '.'), 0);
/// assert_eq!(decimal_places("0,00", ','), 2);
/// ```
pub fn decimal_places(spec: &str, separator: char) -> usize {
    match spec.chars().position(|c| c == separator) {
        Some(idx) => (spec.chars().count() - idx - 1).min(MAX_DECIMAL_PLACES),
        None => 0,
    }
}

/// Render a value with the decimal places described by `spec`.
///
/// Only [`RawValue::Number`] is numeric here; anything else renders `NaN`.
pub fn fixed_decimal(value: &RawValue, spec: &str, separator: char) -> String {
    match value.as_f64() {
        Some(v) => to_fixed(v, decimal_places(spec, separator)),
        None => "NaN".to_string(),
    }
}

/// Render `value * 100` with the places from `spec`, followed by `%`.
///
/// Numeric text and booleans are coerced; other values render `NaN%`.
/// Callers handle `Null` before reaching this function.
pub fn percent(value: &RawValue, spec: &str) -> String {
    let scaled = value.to_number() * 100.0;
    format!("{}%", to_fixed(scaled, decimal_places(spec, '.')))
}

/// Format a float with exactly `places` decimal digits.
///
/// Rounds half away from zero. Ties can only occur when the binary value is
/// exactly representable with `places + 1` decimal digits, so they are
/// detected on the exact expansion and resolved by string increment rather
/// than by floating-point arithmetic.
///
/// # Examples
///
/// ```
/// use netrec_fmt::format::numeric::to_fixed;
///
/// assert_eq!(to_fixed(2.5, 0), "3");
/// assert_eq!(to_fixed(-2.5, 0), "-3");
/// assert_eq!(to_fixed(1.005, 2), "1.00"); // 1.005 is stored as 1.00499...
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// assert_eq!(to_fixed(f64::NAN, 2), "NaN");
/// ```
pub fn to_fixed(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let places = places.min(MAX_DECIMAL_PLACES);
    let negative = value < 0.0;
    let abs = value.abs();

    let digits = match exact_tie(abs, places) {
        Some(expansion) => round_up_tie(&expansion),
        None => format!("{:.*}", places, abs),
    };

    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Return the exact `places + 1` digit expansion if `abs` sits exactly halfway
/// between two `places`-digit neighbours.
fn exact_tie(abs: f64, places: usize) -> Option<String> {
    let extra = places + 1;
    // abs * 2^extra is an integer iff abs has at most `extra` fractional bits,
    // which is exactly when the `extra`-digit decimal expansion is exact.
    let scaled = abs * 2f64.powi(extra as i32);
    if !scaled.is_finite() || scaled.fract() != 0.0 {
        return None;
    }
    let expansion = format!("{:.*}", extra, abs);
    expansion.ends_with('5').then_some(expansion)
}

/// Drop the trailing `5` of an exact expansion and round the rest up.
fn round_up_tie(expansion: &str) -> String {
    let mut digits: Vec<u8> = expansion.as_bytes()[..expansion.len() - 1].to_vec();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }

    let mut carry = true;
    for d in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        match *d {
            b'.' => continue,
            b'9' => *d = b'0',
            _ => {
                *d += 1;
                carry = false;
            }
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    // Only ASCII digits and '.' were produced above.
    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Decimal place counting
    // ========================================================================

    #[test]
    fn test_places_from_pattern() {
        assert_eq!(decimal_places("0.00", '.'), 2);
        assert_eq!(decimal_places("#,##0.0", '.'), 1);
        assert_eq!(decimal_places("", '.'), 0);
        assert_eq!(decimal_places(".", '.'), 0);
    }

    #[test]
    fn test_places_are_capped() {
        let spec = format!("0.{}", "0".repeat(500));
        assert_eq!(decimal_places(&spec, '.'), MAX_DECIMAL_PLACES);
    }

    // ========================================================================
    // fixed_decimal
    // ========================================================================

    #[test]
    fn test_fixed_decimal_reference_values() {
        assert_eq!(fixed_decimal(&RawValue::Number(3.14159), "0.00", '.'), "3.14");
        assert_eq!(fixed_decimal(&RawValue::Number(3.14159), "000", '.'), "3");
    }

    #[test]
    fn test_fixed_decimal_pads_fraction() {
        assert_eq!(fixed_decimal(&RawValue::Number(2.0), "0.000", '.'), "2.000");
        assert_eq!(fixed_decimal(&RawValue::Number(-0.5), "0.0", '.'), "-0.5");
    }

    #[test]
    fn test_fixed_decimal_non_numeric_is_nan() {
        assert_eq!(fixed_decimal(&RawValue::from("3.1"), "0.0", '.'), "NaN");
        assert_eq!(fixed_decimal(&RawValue::Null, "0.0", '.'), "NaN");
        assert_eq!(fixed_decimal(&RawValue::Bool(true), "0.0", '.'), "NaN");
        assert_eq!(fixed_decimal(&RawValue::List(vec![1.0]), "0.0", '.'), "NaN");
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(1.5, 0), "2");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.5, 0), "-1");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(99.95, 1), "100.0");
    }

    #[test]
    fn test_near_ties_use_exact_binary_value() {
        // 0.15 is stored slightly below 0.15
        assert_eq!(to_fixed(0.15, 1), "0.1");
        // 0.35 is stored slightly below 0.35
        assert_eq!(to_fixed(0.35, 1), "0.3");
        // 2.675 is stored slightly below 2.675
        assert_eq!(to_fixed(2.675, 2), "2.67");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_tiny_negative_keeps_sign() {
        assert_eq!(to_fixed(-0.0001, 2), "-0.00");
    }

    #[test]
    fn test_large_values_render_all_digits() {
        assert_eq!(to_fixed(1e21, 0), "1000000000000000000000");
        assert_eq!(to_fixed(123456789.0, 1), "123456789.0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_fixed(f64::INFINITY, 1), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 1), "-Infinity");
        assert_eq!(to_fixed(f64::NAN, 0), "NaN");
    }

    // ========================================================================
    // Percent
    // ========================================================================

    #[test]
    fn test_percent_scales_by_hundred() {
        assert_eq!(percent(&RawValue::Number(0.5), ""), "50%");
        assert_eq!(percent(&RawValue::Number(0.12345), "0.00"), "12.35%");
        assert_eq!(percent(&RawValue::Number(1.0), "0.0"), "100.0%");
    }

    #[test]
    fn test_percent_coerces_text() {
        assert_eq!(percent(&RawValue::from("0.25"), "0"), "25%");
        assert_eq!(percent(&RawValue::from("n/a"), "0"), "NaN%");
    }
}
