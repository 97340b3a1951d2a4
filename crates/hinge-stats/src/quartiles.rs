use serde::Serialize;

use crate::percentiles::median_of_sorted;

/// First, second and third quartiles of a dataset, computed with Tukey hinges.
///
/// Q2 is the median. Q1 and Q3 are the medians of the lower and upper halves
/// of the sorted data; when the length is odd the median element belongs to
/// neither half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Computes Tukey hinges from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is empty or not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hinge_stats::quartiles::Quartiles;
    ///
    /// let sorted = [6.0, 7.0, 15.0, 39.0, 40.0, 41.0, 42.0, 43.0, 47.0, 49.0];
    /// let quartiles = Quartiles::from_sorted(&sorted);
    /// assert_eq!(quartiles.as_array(), [15.0, 40.5, 43.0]);
    /// assert_eq!(quartiles.iqr(), 28.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let n = sorted_values.len();
        if n == 1 {
            let value = sorted_values[0];
            return Self {
                q1: value,
                q2: value,
                q3: value,
            };
        }

        let mid = n / 2;
        let lower = &sorted_values[..mid];
        let upper = if n % 2 == 0 {
            &sorted_values[mid..]
        } else {
            &sorted_values[mid + 1..]
        };

        Self {
            q1: median_of_sorted(lower),
            q2: median_of_sorted(sorted_values),
            q3: median_of_sorted(upper),
        }
    }

    /// Interquartile range, `Q3 - Q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    #[must_use]
    pub fn as_array(&self) -> [f64; 3] {
        [self.q1, self.q2, self.q3]
    }
}

impl From<Quartiles> for (f64, f64, f64) {
    fn from(quartiles: Quartiles) -> Self {
        (quartiles.q1, quartiles.q2, quartiles.q3)
    }
}
