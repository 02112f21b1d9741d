//! Statistics Calculator Module
//! Numeric kernel for the normalizer: rounding, moments, z-scores.

use statrs::statistics::Statistics;

/// Round to 2 decimal places, the dataset's display precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean of the finite entries of a column.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().copied().filter(|v| v.is_finite()).mean()
}

/// Sample (n-1) standard deviation of the finite entries of a column.
pub fn sample_std(values: &[f64]) -> f64 {
    values.iter().copied().filter(|v| v.is_finite()).std_dev()
}

/// Replace each value with its z-score against the column distribution,
/// rounded to 2 decimals. Missing entries stay missing. A column with fewer
/// than two present values, or zero deviation, has nothing to standardize
/// against and degrades to missing entirely.
pub fn zscore_in_place(values: &mut [f64]) {
    let present = values.iter().filter(|v| v.is_finite()).count();
    if present < 2 {
        for v in values.iter_mut() {
            *v = f64::NAN;
        }
        return;
    }

    let m = mean(values);
    let s = sample_std(values);
    for v in values.iter_mut() {
        *v = if v.is_finite() && s > 0.0 {
            round2((*v - m) / s)
        } else {
            f64::NAN
        };
    }
}

/// Finite min/max of a value stream. `None` when nothing is finite.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut out: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        match &mut out {
            Some((lo, hi)) => {
                if v < *lo {
                    *lo = v;
                }
                if v > *hi {
                    *hi = v;
                }
            }
            None => out = Some((v, v)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.456), 3.46);
        assert_eq!(round2(2.0), 2.0);
        assert_eq!(round2(-0.714), -0.71);
        assert!(round2(f64::NAN).is_nan());
    }

    #[test]
    fn test_moments_ignore_missing() {
        let values = [1.0, f64::NAN, 2.0, 3.0];
        assert_eq!(mean(&values), 2.0);
        assert_eq!(sample_std(&values), 1.0);
    }

    #[test]
    fn test_zscore_basic() {
        let mut values = [500.0, 1000.0, 1500.0];
        zscore_in_place(&mut values);
        assert_eq!(values, [-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zscore_keeps_missing_entries_missing() {
        let mut values = [1.0, f64::NAN, 3.0];
        zscore_in_place(&mut values);
        assert_eq!(values[0], -0.71);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 0.71);
    }

    #[test]
    fn test_zscore_degenerate_columns_become_missing() {
        // Zero deviation: every value equals the mean.
        let mut flat = [4.0, 4.0, 4.0];
        zscore_in_place(&mut flat);
        assert!(flat.iter().all(|v| v.is_nan()));

        // Fewer than two present values: sample deviation is undefined.
        let mut lonely = [4.0, f64::NAN];
        zscore_in_place(&mut lonely);
        assert!(lonely.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_extent() {
        assert_eq!(extent([1.5, -2.0, f64::NAN, 0.3]), Some((-2.0, 1.5)));
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(extent(std::iter::empty()), None);
    }
}
