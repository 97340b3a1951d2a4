//! Error types reported by the statistics engine.
//!
//! Construction fails with [`InvalidInputError`]; queries whose mathematical
//! precondition does not hold for the current sample or arguments fail with
//! [`DomainError`]. Neither is ever retried internally.

/// No finite numeric value was left after filtering the construction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("the dataset must contain at least one numeric value")]
pub struct InvalidInputError;

/// A query was asked for a measure that is undefined for the current sample or arguments.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DomainError {
    /// A mean defined only for strictly positive data saw a zero or negative value.
    #[display("{measure} requires all values to be greater than zero (found {value})")]
    NonPositiveValue { measure: &'static str, value: f64 },
    /// The trim percentage is outside `0 <= percent < 50`.
    #[display("trim percent must be in the range 0 <= p < 50 (got {percent})")]
    TrimPercentOutOfRange { percent: f64 },
    /// Trimming would discard every observation.
    #[display("trimming {percent}% from each tail removes all {count} values")]
    TrimRemovesAll { percent: f64, count: usize },
    /// The percentile is outside `0 <= p <= 100`.
    #[display("percentile must be between 0 and 100 (got {percentile})")]
    PercentileOutOfRange { percentile: f64 },
    /// The measure needs more observations than the sample holds.
    #[display("{measure} requires at least {required} observations (got {count})")]
    InsufficientData {
        measure: &'static str,
        required: usize,
        count: usize,
    },
}

/// Either kind of failure, for callers that construct and query in one step.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum StatsError {
    #[display("invalid input: {_0}")]
    InvalidInput(InvalidInputError),
    #[display("domain error: {_0}")]
    Domain(DomainError),
}
