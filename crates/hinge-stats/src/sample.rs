//! The validated dataset every statistic is computed from.
//!
//! Construction input is filtered through [`SampleValue`]: each element is
//! either converted to a finite `f64` or silently dropped. Dropping (instead of
//! rejecting the whole input) is the ingestion policy of this crate, so a
//! collection such as `["4", "n/a", "7"]` yields a two-element sample. Only an
//! input with no finite numeric element at all is rejected.

use crate::error::InvalidInputError;

/// A value that may be ingested into a [`Sample`].
///
/// Returns `None` for anything that is not a finite real number; such
/// elements are dropped during construction.
///
/// # Examples
///
/// ```
/// use hinge_stats::sample::SampleValue;
///
/// assert_eq!(3_i32.to_finite(), Some(3.0));
/// assert_eq!(" 2.5 ".to_finite(), Some(2.5));
/// assert_eq!("abc".to_finite(), None);
/// assert_eq!(f64::NAN.to_finite(), None);
/// assert_eq!(None::<f64>.to_finite(), None);
/// ```
pub trait SampleValue {
    fn to_finite(self) -> Option<f64>;
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl SampleValue for f64 {
    fn to_finite(self) -> Option<f64> {
        finite(self)
    }
}

macro_rules! impl_lossless {
    ($($ty:ty),*) => {
        $(
            impl SampleValue for $ty {
                fn to_finite(self) -> Option<f64> {
                    finite(f64::from(self))
                }
            }
        )*
    };
}

impl_lossless!(f32, i8, i16, i32, u8, u16, u32);

macro_rules! impl_wide_int {
    ($($ty:ty),*) => {
        $(
            impl SampleValue for $ty {
                #[expect(clippy::cast_precision_loss)]
                fn to_finite(self) -> Option<f64> {
                    finite(self as f64)
                }
            }
        )*
    };
}

impl_wide_int!(i64, u64, i128, u128, isize, usize);

macro_rules! impl_by_ref {
    ($($ty:ty),*) => {
        $(
            impl SampleValue for &$ty {
                fn to_finite(self) -> Option<f64> {
                    (*self).to_finite()
                }
            }
        )*
    };
}

impl_by_ref!(f64, f32, i8, i16, i32, u8, u16, u32, i64, u64, i128, u128, isize, usize);

impl SampleValue for &str {
    fn to_finite(self) -> Option<f64> {
        self.trim().parse::<f64>().ok().and_then(finite)
    }
}

impl SampleValue for &String {
    fn to_finite(self) -> Option<f64> {
        self.as_str().to_finite()
    }
}

impl SampleValue for String {
    fn to_finite(self) -> Option<f64> {
        self.as_str().to_finite()
    }
}

impl<T> SampleValue for Option<T>
where
    T: SampleValue,
{
    fn to_finite(self) -> Option<f64> {
        self.and_then(SampleValue::to_finite)
    }
}

/// An immutable, non-empty sequence of finite real numbers.
///
/// Insertion order of the retained elements is preserved. The sequence is
/// never mutated after construction; order statistics work on a sorted copy
/// obtained from [`Sample::sorted`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Builds a sample from arbitrary input, keeping only finite numeric elements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] when no element survives filtering.
    ///
    /// # Examples
    ///
    /// ```
    /// use hinge_stats::sample::Sample;
    ///
    /// let sample = Sample::new(["4", "n/a", "7"]).unwrap();
    /// assert_eq!(sample.values(), &[4.0, 7.0]);
    ///
    /// assert!(Sample::new(Vec::<f64>::new()).is_err());
    /// ```
    pub fn new<I>(values: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator,
        I::Item: SampleValue,
    {
        let values = values
            .into_iter()
            .filter_map(SampleValue::to_finite)
            .collect::<Vec<_>>();
        if values.is_empty() {
            return Err(InvalidInputError);
        }
        Ok(Self { values })
    }

    /// The retained values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of retained values; always at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// `count()` as a float, for use as a divisor.
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn count_f64(&self) -> f64 {
        self.values.len() as f64
    }

    /// Returns an ascending copy of the values.
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_non_numeric_entries() {
        let sample = Sample::new(["8", "twelve", "", "10", " 15 "]).unwrap();
        assert_eq!(sample.values(), &[8.0, 10.0, 15.0]);
        assert_eq!(sample.count(), 3);
    }

    #[test]
    fn test_drops_non_finite_values() {
        let sample = Sample::new([1.0, f64::NAN, f64::INFINITY, 2.0, f64::NEG_INFINITY]).unwrap();
        assert_eq!(sample.values(), &[1.0, 2.0]);

        let sample = Sample::new(["inf", "NaN", "3"]).unwrap();
        assert_eq!(sample.values(), &[3.0]);
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let sample = Sample::new([Some(5_i32), None, Some(-2)]).unwrap();
        assert_eq!(sample.values(), &[5.0, -2.0]);
    }

    #[test]
    fn test_empty_or_all_invalid_input_is_rejected() {
        assert_eq!(Sample::new(Vec::<f64>::new()), Err(InvalidInputError));
        assert_eq!(Sample::new(["a", "b"]), Err(InvalidInputError));
        assert_eq!(Sample::new([f64::NAN]), Err(InvalidInputError));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let input = [9_u8, 1, 5, 1];
        let sample = Sample::new(&input).unwrap();
        assert_eq!(sample.values(), &[9.0, 1.0, 5.0, 1.0]);
        assert_eq!(sample.sorted(), vec![1.0, 1.0, 5.0, 9.0]);
        // sorting works on a copy
        assert_eq!(sample.values(), &[9.0, 1.0, 5.0, 1.0]);
    }

    #[test]
    fn test_owned_and_borrowed_strings() {
        let owned = vec!["1.5".to_string(), "x".to_string(), "2.5".to_string()];
        let borrowed = Sample::new(&owned).unwrap();
        let consumed = Sample::new(owned).unwrap();
        assert_eq!(borrowed, consumed);
        assert_eq!(consumed.values(), &[1.5, 2.5]);
    }
}
