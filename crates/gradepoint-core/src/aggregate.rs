//! Credit-weighted averaging.
//!
//! Semester GPA and overall CGPA are both weighted means; the zero-weight
//! rule and the rounding of visible values live here so the two levels
//! cannot diverge.

/// Weighted mean of `(weight, value)` pairs, rounded to two decimals.
///
/// Returns `None` when the weights sum to zero, including for an empty
/// input.
pub fn try_weighted_average<I>(items: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (weight_sum, weighted_sum) = items
        .into_iter()
        .fold((0.0f64, 0.0f64), |(w, ws), (weight, value)| {
            (w + weight, ws + weight * value)
        });

    if weight_sum == 0.0 {
        return None;
    }

    Some(round2(weighted_sum / weight_sum))
}

/// Weighted mean of `(weight, value)` pairs, rounded to two decimals.
///
/// Yields exactly `0.0` when the weights sum to zero. That is a policy for
/// "nothing to average", not a computed score.
pub fn weighted_average<I>(items: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    try_weighted_average(items).unwrap_or(0.0)
}

/// Round to two decimal places, halves to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
