//! Fixed presentation settings for the two chart artifacts.
//!
//! Values mirror the measurement campaign's published charts; callers override
//! paths (usually via [`ReportConfig::in_dir`]) rather than styling.

use std::path::{Path, PathBuf};

use crate::units::NANOS_PER_SEC;

pub const BAR_CHART_FILE: &str = "ising_optimization_progress.svg";
pub const SCALING_CHART_FILE: &str = "threading_performance.svg";

#[derive(Clone, Debug)]
pub struct CategoricalChartConfig {
    pub path: PathBuf,
    pub dimensions: (u32, u32),
    pub title: String,
    pub y_desc: String,
    /// Divisor applied to raw throughputs before plotting. The bar chart shows
    /// spin flips per nanosecond while the scaling chart stays in flips per
    /// second; the asymmetry is intentional and lives here, not in the data.
    pub unit_scale: f64,
    /// Bar width as a fraction of one category slot.
    pub bar_width: f64,
}

impl Default for CategoricalChartConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(BAR_CHART_FILE),
            dimensions: (2000, 1200),
            title: "Ising Model Performance Optimization Progress, CPU M4 Pro with 14 cores"
                .to_string(),
            y_desc: "Spin Flips per Nanosecond".to_string(),
            unit_scale: NANOS_PER_SEC,
            bar_width: 0.7,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScalingChartConfig {
    pub path: PathBuf,
    pub dimensions: (u32, u32),
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub unit_scale: f64,
}

impl Default for ScalingChartConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(SCALING_CHART_FILE),
            dimensions: (1000, 600),
            title: "Performance vs Threads".to_string(),
            x_desc: "Number of Threads".to_string(),
            y_desc: "Spin Flips per Second".to_string(),
            unit_scale: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReportConfig {
    pub categorical: CategoricalChartConfig,
    pub scaling: ScalingChartConfig,
}

impl ReportConfig {
    /// Default configuration with both artifacts re-rooted into `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let mut cfg = Self::default();
        cfg.categorical.path = dir.as_ref().join(BAR_CHART_FILE);
        cfg.scaling.path = dir.as_ref().join(SCALING_CHART_FILE);
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_and_scales() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.categorical.path, PathBuf::from(BAR_CHART_FILE));
        assert_eq!(cfg.scaling.path, PathBuf::from(SCALING_CHART_FILE));
        assert_eq!(cfg.categorical.unit_scale, NANOS_PER_SEC);
        assert_eq!(cfg.scaling.unit_scale, 1.0);
    }

    #[test]
    fn test_in_dir_reroots_both_artifacts() {
        let cfg = ReportConfig::in_dir("/tmp/report");
        assert_eq!(
            cfg.categorical.path,
            PathBuf::from("/tmp/report").join(BAR_CHART_FILE)
        );
        assert_eq!(
            cfg.scaling.path,
            PathBuf::from("/tmp/report").join(SCALING_CHART_FILE)
        );
    }
}
