use clap::{Parser, Subcommand};
use hinge_stats::Variance;

use self::{
    measure::{DispersionArg, PercentileArg, TrimmedMeanArg},
    summary::SummaryArg,
};
use crate::input::InputArg;

mod measure;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which statistic to compute
    #[command(subcommand)]
    measure: Measure,
}

#[derive(Debug, Clone, Subcommand)]
enum Measure {
    /// Every statistic at once
    Summary(#[clap(flatten)] SummaryArg),
    /// Arithmetic mean
    Mean(#[clap(flatten)] InputArg),
    /// Median (average of the two central values for even counts)
    Median(#[clap(flatten)] InputArg),
    /// Most frequent value(s); empty when no value repeats
    Mode(#[clap(flatten)] InputArg),
    /// Geometric mean of strictly positive values
    GeometricMean(#[clap(flatten)] InputArg),
    /// Harmonic mean of strictly positive values
    HarmonicMean(#[clap(flatten)] InputArg),
    /// Mean after trimming a percentage from each tail
    TrimmedMean(#[clap(flatten)] TrimmedMeanArg),
    /// Maximum minus minimum
    Range(#[clap(flatten)] InputArg),
    /// Tukey-hinge quartiles and interquartile range
    Quartiles(#[clap(flatten)] InputArg),
    /// Population or sample variance
    Variance(#[clap(flatten)] DispersionArg),
    /// Population or sample standard deviation
    StdDev(#[clap(flatten)] DispersionArg),
    /// Standard error of the mean
    StdError(#[clap(flatten)] InputArg),
    /// Mean absolute deviation
    Mad(#[clap(flatten)] InputArg),
    /// Linearly interpolated percentiles
    Percentile(#[clap(flatten)] PercentileArg),
    /// Smallest and largest value
    MinMax(#[clap(flatten)] InputArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match &args.measure {
        Measure::Summary(arg) => summary::run(arg)?,
        Measure::Mean(input) => measure::run(input, |engine, report| {
            report.push("Mean", "mean", engine.mean())
        })?,
        Measure::Median(input) => measure::run(input, |engine, report| {
            report.push("Median", "median", engine.median())
        })?,
        Measure::Mode(input) => measure::run(input, |engine, report| {
            report.push("Mode", "mode", engine.mode())
        })?,
        Measure::GeometricMean(input) => measure::run(input, |engine, report| {
            report.push("Geometric mean", "geometric_mean", engine.geometric_mean()?)
        })?,
        Measure::HarmonicMean(input) => measure::run(input, |engine, report| {
            report.push("Harmonic mean", "harmonic_mean", engine.harmonic_mean()?)
        })?,
        Measure::TrimmedMean(arg) => measure::run(&arg.input, |engine, report| {
            report.push(
                format!("Trimmed mean ({}% per tail)", arg.percent),
                "trimmed_mean",
                engine.trimmed_mean(arg.percent)?,
            )
        })?,
        Measure::Range(input) => measure::run(input, |engine, report| {
            report.push("Range", "range", engine.range())
        })?,
        Measure::Quartiles(input) => measure::run(input, |engine, report| {
            let quartiles = engine.quartiles();
            report.push("Q1", "q1", quartiles.q1)?;
            report.push("Q2 (median)", "q2", quartiles.q2)?;
            report.push("Q3", "q3", quartiles.q3)?;
            report.push("IQR", "iqr", quartiles.iqr())
        })?,
        Measure::Variance(arg) => measure::run(&arg.input, |engine, report| {
            let (label, key) = match arg.kind() {
                Variance::Population => ("Population variance", "population_variance"),
                Variance::Sample => ("Sample variance", "sample_variance"),
            };
            report.push(label, key, engine.variance(arg.kind())?)
        })?,
        Measure::StdDev(arg) => measure::run(&arg.input, |engine, report| {
            let (label, key) = match arg.kind() {
                Variance::Population => ("Population standard deviation", "population_std_dev"),
                Variance::Sample => ("Sample standard deviation", "sample_std_dev"),
            };
            report.push(label, key, engine.standard_deviation(arg.kind())?)
        })?,
        Measure::StdError(input) => measure::run(input, |engine, report| {
            report.push("Standard error", "standard_error", engine.standard_error()?)
        })?,
        Measure::Mad(input) => measure::run(input, |engine, report| {
            report.push(
                "Mean absolute deviation",
                "mean_absolute_deviation",
                engine.mean_absolute_deviation(),
            )
        })?,
        Measure::Percentile(arg) => measure::run(&arg.input, |engine, report| {
            for &p in &arg.points {
                let value = engine.percentile(p)?;
                report.push(format!("{p}th percentile"), format!("p{p}"), value)?;
            }
            Ok(())
        })?,
        Measure::MinMax(input) => measure::run(input, |engine, report| {
            report.push("Min", "min", engine.min_value())?;
            report.push("Max", "max", engine.max_value())
        })?,
    }
    Ok(())
}
