/// Midpoint assigned to every value of a column without variance.
pub const NO_VARIANCE_NORMALIZED: f64 = 0.5;

pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        return NO_VARIANCE_NORMALIZED;
    }

    (value - min) / (max - min)
}

/// Min-max normalizes a whole column into `[0, 1]`.
pub fn normalize_column(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    values
        .iter()
        .map(|&value| normalize(value, min, max))
        .collect()
}
