//! Assertion utilities for testing.
//!
//! Helpers for comparing the floating-point statistics returned by the API.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a result is within expected bounds (inclusive).
pub fn assert_in_range(actual: f64, min: f64, max: f64) {
    assert!(
        actual >= min && actual <= max,
        "Value not in range: actual = {}, min = {}, max = {}",
        actual,
        min,
        max
    );
}

/// Pull `(min, max, avg)` out of a temperature stats response.
///
/// Returns `None` for any statistic that was `null`.
pub fn stats_triple(json: &serde_json::Value) -> (Option<f64>, Option<f64>, Option<f64>) {
    let array = json.as_array().expect("stats response is not an array");
    assert_eq!(array.len(), 3, "stats response must hold three objects");

    (
        array[0]["Min Temperature"].as_f64(),
        array[1]["Max Temperature"].as_f64(),
        array[2]["Avg Temperature"].as_f64(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(75.0, 75.0000000001, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_in_range() {
        assert_in_range(5.0, 0.0, 10.0);
        assert_in_range(0.0, 0.0, 10.0);
        assert_in_range(10.0, 0.0, 10.0);
    }

    #[test]
    fn test_stats_triple() {
        let json = serde_json::json!([
            {"Min Temperature": 70.0},
            {"Max Temperature": null},
            {"Avg Temperature": 75.0}
        ]);
        assert_eq!(stats_triple(&json), (Some(70.0), None, Some(75.0)));
    }
}
