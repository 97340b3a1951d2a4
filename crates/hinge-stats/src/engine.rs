//! The statistics engine.
//!
//! [`StatsEngine`] owns a validated [`Sample`] and answers every query by
//! recomputing from it. Queries that need order statistics sort a private
//! copy, so the engine never changes after construction and may be shared
//! freely between threads.

use crate::{
    error::{DomainError, InvalidInputError},
    percentiles::{self, Percentiles},
    quartiles::Quartiles,
    sample::{Sample, SampleValue},
};

/// Which denominator a dispersion measure uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Variance {
    /// Divide by `n`; the data is the whole population.
    #[default]
    Population,
    /// Divide by `n - 1` (Bessel's correction); the data is drawn from a larger population.
    Sample,
}

impl From<bool> for Variance {
    /// `true` selects the sample statistic.
    fn from(sample: bool) -> Self {
        if sample { Self::Sample } else { Self::Population }
    }
}

/// Descriptive statistics over an immutable, non-empty dataset.
///
/// # Examples
///
/// ```
/// use hinge_stats::{StatsEngine, Variance};
///
/// let engine = StatsEngine::new([2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
/// assert_eq!(engine.mean(), 5.0);
/// assert_eq!(engine.median(), 4.5);
/// assert_eq!(engine.mode(), vec![4.0]);
/// assert_eq!(engine.variance(Variance::Population), Ok(4.0));
/// assert_eq!(engine.standard_deviation(Variance::Population), Ok(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StatsEngine {
    sample: Sample,
}

impl From<Sample> for StatsEngine {
    fn from(sample: Sample) -> Self {
        Self { sample }
    }
}

impl StatsEngine {
    /// Validates `values` and builds an engine over the finite numeric elements.
    ///
    /// Non-numeric and non-finite elements are dropped (see [`Sample`]).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] when no finite numeric element remains.
    pub fn new<I>(values: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator,
        I::Item: SampleValue,
    {
        Sample::new(values).map(Self::from)
    }

    #[must_use]
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Number of observations, at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sample.count()
    }

    fn values(&self) -> &[f64] {
        self.sample.values()
    }

    fn n(&self) -> f64 {
        self.sample.count_f64()
    }

    /// Arithmetic mean, `sum / n`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.values().iter().sum::<f64>() / self.n()
    }

    /// Middle value of the sorted data, or the mean of the two central values.
    #[must_use]
    pub fn median(&self) -> f64 {
        percentiles::median_of_sorted(&self.sample.sorted())
    }

    /// Every value sharing the highest frequency, ascending and without duplicates.
    ///
    /// Returns an empty vector when no value repeats, including for a
    /// single-element sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use hinge_stats::StatsEngine;
    ///
    /// let engine = StatsEngine::new([2, 3, 2, 3, 4]).unwrap();
    /// assert_eq!(engine.mode(), vec![2.0, 3.0]);
    ///
    /// let engine = StatsEngine::new([10, 11, 12]).unwrap();
    /// assert!(engine.mode().is_empty());
    /// ```
    #[must_use]
    pub fn mode(&self) -> Vec<f64> {
        let sorted = self.sample.sorted();
        // equal values are adjacent once sorted
        let runs = sorted
            .chunk_by(|a, b| a == b)
            .map(|run| (run[0], run.len()))
            .collect::<Vec<_>>();

        let max_frequency = runs.iter().map(|&(_, count)| count).max().unwrap_or(0);
        if max_frequency <= 1 {
            return vec![];
        }

        runs.into_iter()
            .filter(|&(_, count)| count == max_frequency)
            .map(|(value, _)| value)
            .collect()
    }

    /// Geometric mean, computed in the log domain as `exp(mean(ln x))`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveValue`] if any value is zero or negative.
    pub fn geometric_mean(&self) -> Result<f64, DomainError> {
        self.require_positive("geometric mean")?;
        let log_sum = self.values().iter().map(|v| v.ln()).sum::<f64>();
        Ok((log_sum / self.n()).exp())
    }

    /// Harmonic mean, `n / sum(1 / x)`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveValue`] if any value is zero or negative.
    pub fn harmonic_mean(&self) -> Result<f64, DomainError> {
        self.require_positive("harmonic mean")?;
        let inverse_sum = self.values().iter().map(|v| v.recip()).sum::<f64>();
        Ok(self.n() / inverse_sum)
    }

    fn require_positive(&self, measure: &'static str) -> Result<(), DomainError> {
        match self.values().iter().find(|&&v| v <= 0.0) {
            Some(&value) => Err(DomainError::NonPositiveValue { measure, value }),
            None => Ok(()),
        }
    }

    /// Mean after discarding `floor(n * percent / 100)` values from each end of
    /// the sorted data.
    ///
    /// With fewer than three values nothing can be trimmed meaningfully and the
    /// arithmetic mean is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TrimPercentOutOfRange`] unless `0 <= percent < 50`,
    /// and [`DomainError::TrimRemovesAll`] if no value would remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use hinge_stats::StatsEngine;
    ///
    /// let engine = StatsEngine::new([1, 2, 3, 100]).unwrap();
    /// assert_eq!(engine.trimmed_mean(25.0), Ok(2.5));
    /// assert!(engine.trimmed_mean(60.0).is_err());
    /// ```
    #[expect(
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss
    )]
    pub fn trimmed_mean(&self, percent: f64) -> Result<f64, DomainError> {
        if !(0.0..50.0).contains(&percent) {
            return Err(DomainError::TrimPercentOutOfRange { percent });
        }

        let count = self.count();
        if count < 3 {
            return Ok(self.mean());
        }

        let sorted = self.sample.sorted();
        let k = (self.n() * percent / 100.0).floor() as usize;
        if 2 * k >= count {
            return Err(DomainError::TrimRemovesAll { percent, count });
        }

        let kept = &sorted[k..count - k];
        Ok(kept.iter().sum::<f64>() / kept.len() as f64)
    }

    /// Largest minus smallest value.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max_value() - self.min_value()
    }

    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.values().iter().copied().fold(f64::INFINITY, f64::min)
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.values().iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Quartiles by the Tukey hinge method.
    ///
    /// # Examples
    ///
    /// ```
    /// use hinge_stats::StatsEngine;
    ///
    /// let engine = StatsEngine::new([6, 47, 49, 15, 42, 41, 7, 39, 43, 40]).unwrap();
    /// let quartiles = engine.quartiles();
    /// assert_eq!((quartiles.q1, quartiles.q2, quartiles.q3), (15.0, 40.5, 43.0));
    /// assert_eq!(engine.iqr(), 28.0);
    /// ```
    #[must_use]
    pub fn quartiles(&self) -> Quartiles {
        Quartiles::from_sorted(&self.sample.sorted())
    }

    /// Interquartile range, `Q3 - Q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.quartiles().iqr()
    }

    /// Population or sample variance around the mean.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InsufficientData`] for the sample variance of a
    /// single observation.
    pub fn variance(&self, kind: Variance) -> Result<f64, DomainError> {
        let count = self.count();
        if kind.is_sample() && count < 2 {
            return Err(DomainError::InsufficientData {
                measure: "sample variance",
                required: 2,
                count,
            });
        }
        if count == 1 {
            return Ok(0.0);
        }

        let mean = self.mean();
        let sum_squares = self
            .values()
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>();
        let denominator = match kind {
            Variance::Population => self.n(),
            Variance::Sample => self.n() - 1.0,
        };
        Ok(sum_squares / denominator)
    }

    /// Square root of [`variance`](Self::variance).
    ///
    /// # Errors
    ///
    /// Fails exactly when `variance(kind)` fails.
    pub fn standard_deviation(&self, kind: Variance) -> Result<f64, DomainError> {
        self.variance(kind).map(f64::sqrt)
    }

    /// Standard error of the mean, the sample standard deviation over `sqrt(n)`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InsufficientData`] with fewer than two observations.
    pub fn standard_error(&self) -> Result<f64, DomainError> {
        let count = self.count();
        if count < 2 {
            return Err(DomainError::InsufficientData {
                measure: "standard error",
                required: 2,
                count,
            });
        }
        Ok(self.standard_deviation(Variance::Sample)? / self.n().sqrt())
    }

    /// Mean of the absolute deviations from the mean.
    #[must_use]
    pub fn mean_absolute_deviation(&self) -> f64 {
        let mean = self.mean();
        self.values().iter().map(|v| (v - mean).abs()).sum::<f64>() / self.n()
    }

    /// The `p`-th percentile by linear interpolation between order statistics.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PercentileOutOfRange`] unless `0 <= p <= 100`.
    pub fn percentile(&self, p: f64) -> Result<f64, DomainError> {
        percentiles::percentile_of_sorted(&self.sample.sorted(), p)
    }

    /// Several percentiles from a single sort.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PercentileOutOfRange`] for the first point outside `[0, 100]`.
    pub fn percentiles(&self, points: &[f64]) -> Result<Percentiles, DomainError> {
        Percentiles::from_sorted(&self.sample.sorted(), points)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating finite f64 vectors of reasonable size.
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn count_matches_finite_entries(data in finite_vec(1, 50), junk in 0_usize..5) {
            let mut tokens = data.iter().map(ToString::to_string).collect::<Vec<_>>();
            tokens.extend((0..junk).map(|i| format!("junk{i}")));
            let engine = StatsEngine::new(&tokens).unwrap();
            prop_assert_eq!(engine.count(), data.len());
        }

        #[test]
        fn queries_are_idempotent(data in finite_vec(1, 50), p in 0.0_f64..=100.0) {
            let engine = StatsEngine::new(&data).unwrap();
            prop_assert_eq!(engine.mean(), engine.mean());
            prop_assert_eq!(engine.median(), engine.median());
            prop_assert_eq!(engine.mode(), engine.mode());
            prop_assert_eq!(engine.quartiles(), engine.quartiles());
            prop_assert_eq!(engine.percentile(p), engine.percentile(p));
            prop_assert_eq!(engine.trimmed_mean(10.0), engine.trimmed_mean(10.0));
            prop_assert_eq!(engine.sample().values(), data.as_slice());
        }

        #[test]
        fn iqr_is_q3_minus_q1(data in finite_vec(1, 50)) {
            let engine = StatsEngine::new(&data).unwrap();
            let quartiles = engine.quartiles();
            prop_assert_eq!(engine.iqr(), quartiles.q3 - quartiles.q1);
            prop_assert!(quartiles.q1 <= quartiles.q2 && quartiles.q2 <= quartiles.q3);
        }

        #[test]
        fn std_dev_is_sqrt_of_variance(data in finite_vec(1, 50)) {
            let engine = StatsEngine::new(&data).unwrap();
            for kind in [Variance::Population, Variance::Sample] {
                prop_assert_eq!(
                    engine.standard_deviation(kind),
                    engine.variance(kind).map(f64::sqrt)
                );
            }
        }

        #[test]
        fn percentile_stays_within_bounds(data in finite_vec(1, 50), p in 0.0_f64..=100.0) {
            let engine = StatsEngine::new(&data).unwrap();
            let value = engine.percentile(p).unwrap();
            let (min, max) = (engine.min_value(), engine.max_value());
            let tolerance = 1e-9 * min.abs().max(max.abs()).max(1.0);
            prop_assert!(min - tolerance <= value && value <= max + tolerance);
        }

        #[test]
        fn median_is_fiftieth_percentile(data in finite_vec(1, 50)) {
            let engine = StatsEngine::new(&data).unwrap();
            let median = engine.median();
            let p50 = engine.percentile(50.0).unwrap();
            prop_assert!((median - p50).abs() <= 1e-9 * median.abs().max(1.0));
        }

        #[test]
        fn mean_inequality_for_positive_data(data in proptest::collection::vec(0.01_f64..1e4, 1..=50)) {
            let engine = StatsEngine::new(&data).unwrap();
            let arithmetic = engine.mean();
            let geometric = engine.geometric_mean().unwrap();
            let harmonic = engine.harmonic_mean().unwrap();
            let tolerance = 1e-9 * arithmetic;
            prop_assert!(harmonic <= geometric + tolerance);
            prop_assert!(geometric <= arithmetic + tolerance);
        }
    }
}
