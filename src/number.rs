//! Fixed-point display of measurements.

/// Format `value` with `digits` decimals, rounding exact halves away from
/// zero the way the page's number fields always have (`22.25` shows as
/// `"22.3"`, `0.125` as `"0.13"`).
///
/// `format!("{:.N}")` already rounds the exact binary value correctly; it only
/// differs on exact ties, where it picks the even digit. A tie at `digits`
/// decimals is an odd multiple of `2^-(digits + 1)`, which can be tested
/// without rounding error. Such values are nudged one ulp outward first.
pub fn to_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, nudge_tie(value, digits))
}

fn nudge_tie(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let scaled = value * 2f64.powi(digits as i32 + 1);
    if scaled.fract() == 0.0 && scaled.rem_euclid(2.0) == 1.0 {
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    }
}
