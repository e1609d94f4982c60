pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[inline]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(8500.0000001), 8500.0);
        assert_eq!(round2(462.449999), 462.45);
        assert_eq!(round2(-1.234), -1.23);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.448333, 4), 0.4483);
        assert_eq!(round_to(12.25, 1), 12.3);
    }
}
