//! Numeric helpers shared by the calculators

/// Round half toward positive infinity (`floor(x + 0.5)`).
///
/// Matches the dashboard's rounding for both signs: 2.5 → 3, -2.5 → -2.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `numerator / denominator`, or `None` when the result would not be finite
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let ratio = numerator / denominator;
    ratio.is_finite().then_some(ratio)
}

/// Percentage change from `reference` to `value`, `None` when reference is zero
pub fn percent_change(value: f64, reference: f64) -> Option<f64> {
    safe_ratio(value - reference, reference).map(|r| r * 100.0)
}
