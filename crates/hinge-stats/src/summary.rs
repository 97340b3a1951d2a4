use serde::Serialize;

use crate::{
    engine::{StatsEngine, Variance},
    error::DomainError,
    percentiles::Percentiles,
    quartiles::Quartiles,
};

/// Every measure of a dataset, computed in one pass over the engine.
///
/// Measures that are undefined for the data itself (the geometric mean of a
/// sample containing zero, the sample variance of a single value, ...) are
/// `None`. Invalid arguments are still errors.
///
/// # Examples
///
/// ```
/// use hinge_stats::{StatsEngine, summary::Summary};
///
/// let engine = StatsEngine::new([2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
/// let summary = Summary::new(&engine, 10.0, &[25.0, 50.0, 75.0]).unwrap();
///
/// assert_eq!(summary.count, 8);
/// assert_eq!(summary.mean, 5.0);
/// assert_eq!(summary.population_variance, 4.0);
/// assert_eq!(summary.percentiles.get(50.0), Some(4.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    /// Modal values, empty when nothing repeats.
    pub mode: Vec<f64>,
    pub geometric_mean: Option<f64>,
    pub harmonic_mean: Option<f64>,
    /// Trim percentage applied to each tail for `trimmed_mean`.
    pub trim_percent: f64,
    pub trimmed_mean: f64,
    pub quartiles: Quartiles,
    pub iqr: f64,
    pub population_variance: f64,
    pub sample_variance: Option<f64>,
    pub population_std_dev: f64,
    pub sample_std_dev: Option<f64>,
    pub standard_error: Option<f64>,
    pub mean_absolute_deviation: f64,
    pub percentiles: Percentiles,
}

impl Summary {
    /// Computes the summary of `engine`.
    ///
    /// # Arguments
    ///
    /// * `engine` - The dataset to summarize
    /// * `trim_percent` - Percentage trimmed from each tail for the trimmed mean
    /// * `percentile_points` - The percentile points to compute (e.g., [25.0, 50.0, 75.0])
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if `trim_percent` or any percentile point is out of range.
    pub fn new(
        engine: &StatsEngine,
        trim_percent: f64,
        percentile_points: &[f64],
    ) -> Result<Self, DomainError> {
        let trimmed_mean = engine.trimmed_mean(trim_percent)?;
        let percentiles = engine.percentiles(percentile_points)?;
        let quartiles = engine.quartiles();

        Ok(Self {
            count: engine.count(),
            min: engine.min_value(),
            max: engine.max_value(),
            range: engine.range(),
            mean: engine.mean(),
            median: engine.median(),
            mode: engine.mode(),
            geometric_mean: engine.geometric_mean().ok(),
            harmonic_mean: engine.harmonic_mean().ok(),
            trim_percent,
            trimmed_mean,
            quartiles,
            iqr: quartiles.iqr(),
            population_variance: engine.variance(Variance::Population)?,
            sample_variance: engine.variance(Variance::Sample).ok(),
            population_std_dev: engine.standard_deviation(Variance::Population)?,
            sample_std_dev: engine.standard_deviation(Variance::Sample).ok(),
            standard_error: engine.standard_error().ok(),
            mean_absolute_deviation: engine.mean_absolute_deviation(),
            percentiles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_summary() {
        let engine = StatsEngine::new([42]).unwrap();
        let summary = Summary::new(&engine, 25.0, &[0.0, 100.0]).unwrap();

        assert_eq!(summary.count, 1);
        assert_eq!(summary.range, 0.0);
        assert!(summary.mode.is_empty());
        assert!(summary.geometric_mean.is_some_and(|g| (g - 42.0).abs() < 1e-12));
        assert_eq!(summary.trimmed_mean, 42.0);
        assert_eq!(summary.quartiles.as_array(), [42.0, 42.0, 42.0]);
        assert_eq!(summary.iqr, 0.0);
        assert_eq!(summary.population_variance, 0.0);
        assert_eq!(summary.sample_variance, None);
        assert_eq!(summary.sample_std_dev, None);
        assert_eq!(summary.standard_error, None);
        assert_eq!(summary.mean_absolute_deviation, 0.0);
        assert_eq!(summary.percentiles.as_slice(), &[(0.0, 42.0), (100.0, 42.0)]);
    }

    #[test]
    fn test_undefined_means_are_none() {
        let engine = StatsEngine::new([5, 0, 2]).unwrap();
        let summary = Summary::new(&engine, 0.0, &[]).unwrap();
        assert_eq!(summary.geometric_mean, None);
        assert_eq!(summary.harmonic_mean, None);
        assert_eq!(summary.min, 0.0);
    }

    #[test]
    fn test_argument_errors_propagate() {
        let engine = StatsEngine::new([1, 2, 3]).unwrap();
        assert_eq!(
            Summary::new(&engine, 55.0, &[]),
            Err(DomainError::TrimPercentOutOfRange { percent: 55.0 })
        );
        assert_eq!(
            Summary::new(&engine, 10.0, &[50.0, 120.0]),
            Err(DomainError::PercentileOutOfRange { percentile: 120.0 })
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let engine = StatsEngine::new([1, 3, 2, 4]).unwrap();
        let summary = Summary::new(&engine, 0.0, &[50.0]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["count"], 4);
        assert_eq!(json["median"], 2.5);
        assert_eq!(json["quartiles"]["q1"], 1.5);
        assert_eq!(json["quartiles"]["q3"], 3.5);
        assert_eq!(json["mode"], serde_json::json!([]));
        assert_eq!(json["percentiles"], serde_json::json!([[50.0, 2.5]]));
    }
}
