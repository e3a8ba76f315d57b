use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MeasurementEntry {
    pub label: String,
    pub throughput: f64,
    pub description: String,
}

/// Ordered measurement rows; the first entry is the speedup baseline.
/// Deserializing runs the same validation as [`MeasurementTable::new`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "MeasurementTableData")]
pub struct MeasurementTable {
    entries: Vec<MeasurementEntry>,
}

impl MeasurementTable {
    pub fn new(entries: Vec<MeasurementEntry>) -> Result<Self, ReportError> {
        if entries.is_empty() {
            return Err(ReportError::invalid_data(
                "measurement table must not be empty",
            ));
        }
        for entry in &entries {
            validate_label(&entry.label)?;
            validate_throughput(&entry.label, entry.throughput)?;
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[MeasurementEntry] {
        &self.entries
    }

    pub fn baseline(&self) -> &MeasurementEntry {
        &self.entries[0]
    }
}

#[derive(Deserialize)]
struct MeasurementTableData {
    entries: Vec<MeasurementEntry>,
}

impl TryFrom<MeasurementTableData> for MeasurementTable {
    type Error = ReportError;

    fn try_from(data: MeasurementTableData) -> Result<Self, Self::Error> {
        MeasurementTable::new(data.entries)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScalingSeries {
    pub name: String,
    pub samples: Vec<(u32, f64)>,
}

/// Constant single-thread level drawn across the scaling chart.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub throughput: f64,
}

/// One or more thread-scaling series plus the reference level. The first
/// series is primary: it defines the x-axis domain and anchors the
/// idealized-linear curve, so it must cover thread counts 1..=n without gaps.
/// Deserializing runs the same validation as [`ScalingTable::new`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ScalingTableData")]
pub struct ScalingTable {
    reference: ReferenceLine,
    series: Vec<ScalingSeries>,
}

impl ScalingTable {
    pub fn new(
        reference: ReferenceLine,
        series: Vec<ScalingSeries>,
    ) -> Result<Self, ReportError> {
        if series.is_empty() {
            return Err(ReportError::invalid_data(
                "scaling table needs at least one series",
            ));
        }
        validate_label(&reference.label)?;
        validate_throughput(&reference.label, reference.throughput)?;
        for one in &series {
            validate_series(one)?;
        }
        let primary = &series[0];
        for (idx, &(threads, _)) in primary.samples.iter().enumerate() {
            if threads as usize != idx + 1 {
                return Err(ReportError::invalid_data(format!(
                    "primary series {} must cover thread counts contiguously from 1",
                    primary.name
                )));
            }
        }
        Ok(Self { reference, series })
    }

    pub fn reference(&self) -> &ReferenceLine {
        &self.reference
    }

    pub fn primary(&self) -> &ScalingSeries {
        &self.series[0]
    }

    pub fn series(&self) -> &[ScalingSeries] {
        &self.series
    }
}

#[derive(Deserialize)]
struct ScalingTableData {
    reference: ReferenceLine,
    series: Vec<ScalingSeries>,
}

impl TryFrom<ScalingTableData> for ScalingTable {
    type Error = ReportError;

    fn try_from(data: ScalingTableData) -> Result<Self, Self::Error> {
        ScalingTable::new(data.reference, data.series)
    }
}

const XORSHIRO_FLIPS_PER_SEC: f64 = 3.25e8;

/// Spin-flip throughput of each optimization stage, baseline first.
pub fn ising_measurements() -> Result<MeasurementTable, ReportError> {
    MeasurementTable::new(vec![
        entry(
            "Basic implementation, 1 thread",
            1.62e7,
            "Base version with basic RNG",
        ),
        entry(
            "Checkerboard pattern, 1 thread",
            1.64e8,
            "Checkerboard updates",
        ),
        entry("Exp lookup, 1 thread", 2.05e8, "Exp lookup"),
        entry(
            "Xorshiro RNG, 1 thread",
            XORSHIRO_FLIPS_PER_SEC,
            "Fast Xorshiro random number generator",
        ),
        entry("Simple threading, 14 threads", 8.45e8, "Multithreading"),
        entry(
            "Bit-parallel (64 sims), 14 threads",
            7.37e9,
            "64 parallel simulations using bit operations",
        ),
        entry("Troyer, 14 threads", 2.84e9, "Troyer"),
    ])
}

/// Thread-scaling series of the simple multithreaded variant, with the best
/// single-threaded variant as the reference level.
pub fn ising_scaling() -> Result<ScalingTable, ReportError> {
    let throughputs = [
        1.01e8, 1.88e8, 2.78e8, 3.59e8, 2.99e8, 3.73e8, 4.24e8, 4.49e8, 4.93e8, 4.92e8, 5.39e8,
        5.55e8, 6.44e8, 8.45e8,
    ];
    ScalingTable::new(
        ReferenceLine {
            label: "Xorshiro".to_string(),
            throughput: XORSHIRO_FLIPS_PER_SEC,
        },
        vec![series("Simple Multithreading", &throughputs)],
    )
}

/// Thread-scaling series of the bit-parallel variant. Kept out of the default
/// scaling table: its magnitude flattens the threading curve on a linear axis.
pub fn bit_parallel_scaling() -> ScalingSeries {
    let throughputs = [
        3.41e9, 4.86e9, 5.81e9, 6.34e9, 5.63e9, 6.22e9, 6.33e9, 6.59e9, 6.86e9, 7.28e9, 6.95e9,
        6.96e9, 6.77e9, 7.37e9,
    ];
    series("Bit-parallel (64 sims)", &throughputs)
}

fn entry(label: &str, throughput: f64, description: &str) -> MeasurementEntry {
    MeasurementEntry {
        label: label.to_string(),
        throughput,
        description: description.to_string(),
    }
}

fn series(name: &str, throughputs: &[f64]) -> ScalingSeries {
    ScalingSeries {
        name: name.to_string(),
        samples: throughputs
            .iter()
            .enumerate()
            .map(|(idx, &throughput)| (idx as u32 + 1, throughput))
            .collect(),
    }
}

fn validate_label(label: &str) -> Result<(), ReportError> {
    if label.trim().is_empty() {
        return Err(ReportError::invalid_data("label must be set"));
    }
    Ok(())
}

fn validate_throughput(label: &str, value: f64) -> Result<(), ReportError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ReportError::invalid_data(format!(
            "throughput for {label} must be positive and finite"
        )));
    }
    Ok(())
}

fn validate_series(series: &ScalingSeries) -> Result<(), ReportError> {
    validate_label(&series.name)?;
    if series.samples.is_empty() {
        return Err(ReportError::invalid_data(format!(
            "series {} has no samples",
            series.name
        )));
    }
    let mut previous = 0u32;
    for &(threads, throughput) in &series.samples {
        if threads == 0 {
            return Err(ReportError::invalid_data(format!(
                "series {} has a zero thread count",
                series.name
            )));
        }
        if threads <= previous {
            return Err(ReportError::invalid_data(format!(
                "series {} thread counts must be strictly increasing",
                series.name
            )));
        }
        validate_throughput(&series.name, throughput)?;
        previous = threads;
    }
    Ok(())
}
