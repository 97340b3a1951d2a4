use clap::Args;
use hinge_stats::{StatsEngine, Variance};

use crate::{input::InputArg, report::Report, util::Output};

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct TrimmedMeanArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Percentage trimmed from each tail (0 <= p < 50)
    #[arg(long, default_value_t = 10.0)]
    pub percent: f64,
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct DispersionArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Use the sample statistic (n - 1 denominator) instead of the population one
    #[arg(long)]
    pub sample: bool,
}

impl DispersionArg {
    pub(crate) fn kind(&self) -> Variance {
        Variance::from(self.sample)
    }
}

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct PercentileArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Percentiles to compute (comma-separated, 0 <= p <= 100)
    #[arg(short, long = "percentile", value_delimiter = ',', required = true)]
    pub points: Vec<f64>,
}

/// Loads the input, lets `compute` fill a report, and writes it out.
pub(crate) fn run<F>(input: &InputArg, compute: F) -> anyhow::Result<()>
where
    F: FnOnce(&StatsEngine, &mut Report) -> anyhow::Result<()>,
{
    let engine = input.load()?;
    let report = build_report(&engine, compute)?;
    let mut output = Output::from_output_path(input.output.clone())?;
    report.write(&mut output, input.json)
}

fn build_report<F>(engine: &StatsEngine, compute: F) -> anyhow::Result<Report>
where
    F: FnOnce(&StatsEngine, &mut Report) -> anyhow::Result<()>,
{
    let mut report = Report::new(engine.sample().values());
    compute(engine, &mut report)?;
    Ok(report)
}
