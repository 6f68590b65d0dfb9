//! Small descriptive helpers shared by the analysis modules.

/// Arithmetic mean, `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    Some(values.iter().sum::<f64>() / n)
}

/// Sample variance (n - 1 denominator), `None` below two observations.
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    #[allow(clippy::cast_precision_loss)]
    let denominator = (values.len() - 1) as f64;
    Some(values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / denominator)
}

/// Round half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_variance() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(sample_variance(&[5.0]), None);
        let variance = sample_variance(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((variance - 1.666_666_666_666_666_7).abs() < 1e-12);
    }

    #[test]
    fn rounding() {
        assert!((round_to(0.126_4, 2) - 0.13).abs() < 1e-12);
        assert!((round_to(97.555, 1) - 97.6).abs() < 1e-12);
        assert!((round_to(-1.234_5, 3) + 1.235).abs() < 1e-12);
    }
}
