//! Descriptive statistics over a finite, immutable dataset.
//!
//! This crate provides a single statistics engine together with the order
//! statistic helpers it is built from:
//!
//! - **Central tendency**: arithmetic, geometric, harmonic and trimmed means, median, mode
//! - **Dispersion**: range, variance, standard deviation, standard error, mean absolute deviation
//! - **Rank-based measures**: Tukey-hinge quartiles, interquartile range, interpolated percentiles
//!
//! # Modules
//!
//! - [`sample`]: Typed ingestion and the validated dataset
//! - [`engine`]: The [`StatsEngine`] answering every query
//! - [`percentiles`]: Median and linearly interpolated percentiles over sorted data
//! - [`quartiles`]: Tukey hinges
//! - [`summary`]: Every measure of a dataset at once
//! - [`error`]: Construction and domain errors
//!
//! # Examples
//!
//! ## Querying the engine
//!
//! ```
//! use hinge_stats::{StatsEngine, Variance};
//!
//! let engine = StatsEngine::new([8, 12, 10, 15]).unwrap();
//! assert_eq!(engine.mean(), 11.25);
//! assert_eq!(engine.median(), 11.0);
//! assert_eq!(engine.range(), 7.0);
//! assert!(engine.variance(Variance::Sample).is_ok());
//! ```
//!
//! ## Ingesting heterogeneous input
//!
//! Anything that is not a finite number is dropped; only an input without a
//! single number is rejected.
//!
//! ```
//! use hinge_stats::StatsEngine;
//!
//! let engine = StatsEngine::new(["4", "7", "n/a", "1"]).unwrap();
//! assert_eq!(engine.count(), 3);
//!
//! assert!(StatsEngine::new(["n/a"]).is_err());
//! ```
//!
//! ## Handling domain errors
//!
//! ```
//! use hinge_stats::{DomainError, StatsEngine};
//!
//! let engine = StatsEngine::new([5.0, 0.0, 2.0]).unwrap();
//! assert!(matches!(
//!     engine.geometric_mean(),
//!     Err(DomainError::NonPositiveValue { .. })
//! ));
//! ```

pub use self::{
    engine::{StatsEngine, Variance},
    error::{DomainError, InvalidInputError, StatsError},
    quartiles::Quartiles,
    sample::{Sample, SampleValue},
};

pub mod engine;
pub mod error;
pub mod percentiles;
pub mod quartiles;
pub mod sample;
pub mod summary;
