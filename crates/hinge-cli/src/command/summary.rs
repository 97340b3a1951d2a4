use clap::Args;
use hinge_stats::{StatsEngine, summary::Summary};
use serde::Serialize;

use crate::{input::InputArg, report::Report, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Percentage trimmed from each tail for the trimmed mean
    #[arg(long, default_value_t = 10.0)]
    pub trim_percent: f64,

    /// Percentiles to report (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [5.0, 25.0, 50.0, 75.0, 95.0])]
    pub percentiles: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct SummaryOutput<'a> {
    data: &'a [f64],
    #[serde(flatten)]
    summary: &'a Summary,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let engine = arg.input.load()?;
    let summary = Summary::new(&engine, arg.trim_percent, &arg.percentiles)?;

    let mut output = Output::from_output_path(arg.input.output.clone())?;
    if arg.input.json {
        output.write_json(&SummaryOutput {
            data: engine.sample().values(),
            summary: &summary,
        })
    } else {
        summary_report(&engine, &summary)?.write(&mut output, false)
    }
}

fn summary_report(engine: &StatsEngine, summary: &Summary) -> anyhow::Result<Report> {
    let mut report = Report::new(engine.sample().values());
    report.push("Count", "count", summary.count)?;
    report.push("Min", "min", summary.min)?;
    report.push("Max", "max", summary.max)?;
    report.push("Range", "range", summary.range)?;
    report.push("Mean", "mean", summary.mean)?;
    report.push("Median", "median", summary.median)?;
    report.push("Mode", "mode", &summary.mode)?;
    report.push("Geometric mean", "geometric_mean", summary.geometric_mean)?;
    report.push("Harmonic mean", "harmonic_mean", summary.harmonic_mean)?;
    report.push(
        format!("Trimmed mean ({}% per tail)", summary.trim_percent),
        "trimmed_mean",
        summary.trimmed_mean,
    )?;
    report.push("Q1", "q1", summary.quartiles.q1)?;
    report.push("Q2 (median)", "q2", summary.quartiles.q2)?;
    report.push("Q3", "q3", summary.quartiles.q3)?;
    report.push("IQR", "iqr", summary.iqr)?;
    report.push(
        "Population variance",
        "population_variance",
        summary.population_variance,
    )?;
    report.push("Sample variance", "sample_variance", summary.sample_variance)?;
    report.push(
        "Population standard deviation",
        "population_std_dev",
        summary.population_std_dev,
    )?;
    report.push(
        "Sample standard deviation",
        "sample_std_dev",
        summary.sample_std_dev,
    )?;
    report.push("Standard error", "standard_error", summary.standard_error)?;
    report.push(
        "Mean absolute deviation",
        "mean_absolute_deviation",
        summary.mean_absolute_deviation,
    )?;
    for (p, value) in summary.percentiles.iter() {
        report.push(format!("{p}th percentile"), format!("p{p}"), value)?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_report_single_value() {
        let engine = StatsEngine::new([42]).unwrap();
        let summary = Summary::new(&engine, 10.0, &[50.0]).unwrap();
        let text = summary_report(&engine, &summary).unwrap().to_text();

        assert!(text.starts_with("Data (json): [42.0]\nCount: 1\n"));
        assert!(text.contains("Mode: []\n"));
        assert!(text.contains("Sample variance: n/a\n"));
        assert!(text.contains("Standard error: n/a\n"));
        assert!(text.ends_with("50th percentile: 42.0\n"));
    }

    #[test]
    fn test_summary_json_is_flat() {
        let engine = StatsEngine::new([1, 2, 3, 4]).unwrap();
        let summary = Summary::new(&engine, 0.0, &[]).unwrap();
        let json = serde_json::to_value(SummaryOutput {
            data: engine.sample().values(),
            summary: &summary,
        })
        .unwrap();

        assert_eq!(json["data"], serde_json::json!([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(json["median"], 2.5);
        assert_eq!(json["iqr"], 2.0);
    }
}
