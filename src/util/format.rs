/// Default number of significant digits, matching C's `%g`.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats a number the way C's `%.{precision}g` does.
///
/// The value is rounded to `precision` significant digits. It is written in
/// plain decimal notation when its decimal exponent lies in
/// `-4..precision`, and in scientific notation with a signed, two-digit
/// exponent otherwise. Trailing zeros, and a trailing decimal point, are
/// removed. A precision of `0` is treated as `1`.
///
/// # Example
/// ```
/// use reckon::util::format::format_general;
///
/// assert_eq!(format_general(14.0, 6), "14");
/// assert_eq!(format_general(0.1 + 0.2, 6), "0.3");
/// assert_eq!(format_general(2.0 / 3.0, 6), "0.666667");
/// assert_eq!(format_general(1_000_000.0, 6), "1e+06");
/// assert_eq!(format_general(0.000_012_5, 6), "1.25e-05");
/// assert_eq!(format_general(2.0 / 3.0, 3), "0.667");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return scientific;
    };
    let significant = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= significant {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(significant - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strips trailing zeros after a decimal point, then the point itself.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
