/// Relative tolerance used by the Express and Economy recommendation branches.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Relative tolerance used when comparing composite scores for Standard orders.
pub const BALANCED_TOLERANCE: f64 = 0.03;

/// Two values are equal within `tolerance` if both are zero, or if neither is
/// zero and their difference relative to the larger one stays within it.
pub fn approximately_equal(a: f64, b: f64, tolerance: f64) -> bool {
    if a == 0.0 && b == 0.0 {
        return true;
    }

    if a == 0.0 || b == 0.0 {
        return false;
    }

    (a - b).abs() / a.max(b) <= tolerance
}
