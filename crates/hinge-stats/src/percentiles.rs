//! Order statistics over sorted data.
//!
//! Percentiles use linear interpolation between the two order statistics that
//! bracket the real-valued rank `(p / 100) * (n - 1)`. The 0th and 100th
//! percentiles are returned exactly as the minimum and maximum.

use serde::Serialize;

use crate::error::DomainError;

/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use hinge_stats::StatsEngine;
///
/// let engine = StatsEngine::new([10.0, 20.0, 30.0, 40.0]).unwrap();
/// let percentiles = engine.percentiles(&[25.0, 50.0, 75.0]).unwrap();
///
/// assert_eq!(percentiles.get(25.0), Some(17.5));
/// assert_eq!(percentiles.get(50.0), Some(25.0));
/// assert_eq!(percentiles.get(90.0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PercentileOutOfRange`] for the first point outside `[0, 100]`.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is empty or not sorted in ascending order.
    pub fn from_sorted(
        sorted_values: &[f64],
        percentile_points: &[f64],
    ) -> Result<Self, DomainError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| percentile_of_sorted(sorted_values, p).map(|value| (p, value)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Computes a single linearly interpolated percentile from sorted data.
///
/// # Errors
///
/// Returns [`DomainError::PercentileOutOfRange`] if `percentile` is outside
/// `[0, 100]` (or NaN).
///
/// # Panics
///
/// Panics if `sorted_values` is empty.
///
/// # Examples
///
/// ```
/// use hinge_stats::percentiles::percentile_of_sorted;
///
/// let values = [15.0, 20.0, 35.0, 40.0, 50.0];
/// assert_eq!(percentile_of_sorted(&values, 25.0), Ok(20.0));
/// assert!((percentile_of_sorted(&values, 40.0).unwrap() - 29.0).abs() < 1e-9);
/// assert!(percentile_of_sorted(&values, 120.0).is_err());
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
pub fn percentile_of_sorted(sorted_values: &[f64], percentile: f64) -> Result<f64, DomainError> {
    if !(0.0..=100.0).contains(&percentile) {
        return Err(DomainError::PercentileOutOfRange { percentile });
    }
    let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
        panic!("cannot compute a percentile of an empty slice");
    };

    // exact extremes, no rounding through the rank
    if percentile == 0.0 {
        return Ok(min);
    }
    if percentile == 100.0 {
        return Ok(max);
    }

    let rank = (percentile / 100.0) * (sorted_values.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(sorted_values[lower]);
    }

    let weight = rank - rank.floor();
    Ok((1.0 - weight) * sorted_values[lower] + weight * sorted_values[upper])
}

/// Median of sorted data: the middle element, or the mean of the two central
/// elements when the length is even.
///
/// # Panics
///
/// Panics if `sorted_values` is empty.
#[must_use]
pub fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    assert!(
        !sorted_values.is_empty(),
        "cannot compute the median of an empty slice"
    );

    let mid = sorted_values.len() / 2;
    if sorted_values.len() % 2 == 1 {
        sorted_values[mid]
    } else {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_exact_rank() {
        // rank = 0.5 * 4 = 2
        let values = [15.0, 20.0, 35.0, 40.0, 50.0];
        assert_eq!(percentile_of_sorted(&values, 50.0), Ok(35.0));
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile_of_sorted(&values, 25.0), Ok(17.5));
        assert_eq!(percentile_of_sorted(&values, 50.0), Ok(25.0));
    }

    #[test]
    fn test_percentile_bounds() {
        let values = [3.0, 6.0, 9.0];
        assert_eq!(percentile_of_sorted(&values, 0.0), Ok(3.0));
        assert_eq!(percentile_of_sorted(&values, 100.0), Ok(9.0));
    }

    #[test]
    fn test_percentile_single_value() {
        for p in [0.0, 12.5, 50.0, 99.9, 100.0] {
            assert_eq!(percentile_of_sorted(&[42.0], p), Ok(42.0));
        }
    }

    #[test]
    fn test_percentile_rejects_out_of_range() {
        let values = [1.0, 2.0];
        for p in [-0.1, 100.1, 120.0, f64::NAN] {
            let err = percentile_of_sorted(&values, p).unwrap_err();
            assert!(matches!(err, DomainError::PercentileOutOfRange { .. }));
        }
    }

    #[test]
    fn test_median_of_sorted() {
        assert_eq!(median_of_sorted(&[7.0, 9.0, 10.0, 12.0, 15.0]), 10.0);
        assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median_of_sorted(&[5.0]), 5.0);
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn test_median_of_empty_panics() {
        let _ = median_of_sorted(&[]);
    }

    #[test]
    fn test_percentiles_collection() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let percentiles = Percentiles::from_sorted(&values, &[0.0, 25.0, 100.0]).unwrap();
        assert_eq!(
            percentiles.as_slice(),
            &[(0.0, 10.0), (25.0, 17.5), (100.0, 40.0)]
        );
        assert_eq!(percentiles.iter().count(), 3);
        assert_eq!(percentiles.get(25.0), Some(17.5));
        assert_eq!(percentiles.get(75.0), None);
    }

    #[test]
    fn test_percentiles_collection_rejects_bad_point() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(
            Percentiles::from_sorted(&values, &[50.0, 150.0]),
            Err(DomainError::PercentileOutOfRange { percentile: 150.0 })
        );
    }
}
