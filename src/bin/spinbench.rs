use std::process;

use spinbench::{
    MeasurementTable, ReportConfig, ReportError, ScalingTable, dataset, pipeline,
};

fn main() {
    let (measurements, scaling) = match load_tables() {
        Ok(tables) => tables,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let cfg = ReportConfig::default();
    if let Err(err) = pipeline::run_report(&measurements, &scaling, &cfg) {
        eprintln!("report failed: {err}");
        process::exit(1);
    }
}

fn load_tables() -> Result<(MeasurementTable, ScalingTable), ReportError> {
    Ok((dataset::ising_measurements()?, dataset::ising_scaling()?))
}
