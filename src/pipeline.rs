use std::path::PathBuf;

use serde::Serialize;

use crate::{
    categorical,
    config::ReportConfig,
    dataset::{MeasurementTable, ScalingTable},
    errors::ReportError,
    scaling, speedup,
};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ReportArtifacts {
    pub categorical_chart: PathBuf,
    pub scaling_chart: PathBuf,
}

/// Render the bar chart, print the speedup report to stdout, then render the
/// scaling chart. Any failure aborts the remaining steps and propagates.
pub fn run_report(
    measurements: &MeasurementTable,
    scaling_table: &ScalingTable,
    cfg: &ReportConfig,
) -> Result<ReportArtifacts, ReportError> {
    let bar_chart = categorical::build_bar_chart(measurements, &cfg.categorical);
    let categorical_chart = categorical::render_bar_chart(&bar_chart, &cfg.categorical)?;

    let factors = speedup::speedup_factors(measurements);
    print!("{}", speedup::format_speedup_report(&factors));

    let line_chart = scaling::build_scaling_chart(scaling_table, &cfg.scaling);
    let scaling_chart = scaling::render_scaling_chart(&line_chart, &cfg.scaling)?;

    Ok(ReportArtifacts {
        categorical_chart,
        scaling_chart,
    })
}
