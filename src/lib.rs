//! Chart and console reporting for an Ising-model benchmark campaign.
//! Run the `spinbench` binary to write both SVG charts and print speedup factors.

pub mod canvas;
pub mod categorical;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod pipeline;
pub mod scaling;
pub mod speedup;
pub mod units;

pub use crate::config::ReportConfig;
pub use crate::dataset::{
    MeasurementEntry, MeasurementTable, ReferenceLine, ScalingSeries, ScalingTable,
};
pub use crate::errors::ReportError;
pub use crate::pipeline::{ReportArtifacts, run_report};
