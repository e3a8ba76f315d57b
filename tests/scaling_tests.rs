use spinbench::config::ScalingChartConfig;
use spinbench::dataset::{self, ReferenceLine, ScalingSeries, ScalingTable};
use spinbench::scaling::{build_scaling_chart, render_scaling_chart};
use tempfile::tempdir;

fn reference() -> ReferenceLine {
    ReferenceLine {
        label: "Ref".into(),
        throughput: 3.0e8,
    }
}

fn series(name: &str, samples: &[(u32, f64)]) -> ScalingSeries {
    ScalingSeries {
        name: name.into(),
        samples: samples.to_vec(),
    }
}

#[test]
fn test_ideal_curve_is_first_sample_times_threads() {
    let cfg = ScalingChartConfig::default();
    let chart = build_scaling_chart(&dataset::ising_scaling().unwrap(), &cfg);
    let first = chart.measured[0].points[0].1;
    assert_eq!(chart.ideal.points.len(), chart.x_ticks.len());
    for &(threads, value) in &chart.ideal.points {
        assert_eq!(value, first * threads as f64);
    }
}

#[test]
fn test_x_ticks_match_primary_domain() {
    let cfg = ScalingChartConfig::default();
    let table = dataset::ising_scaling().unwrap();
    let chart = build_scaling_chart(&table, &cfg);
    let domain: Vec<u32> = table.primary().samples.iter().map(|&(t, _)| t).collect();
    assert_eq!(chart.x_ticks, domain);
    assert_eq!(chart.x_ticks.len(), 14);
}

#[test]
fn test_reference_level_spans_domain() {
    let cfg = ScalingChartConfig::default();
    let table = dataset::ising_scaling().unwrap();
    let chart = build_scaling_chart(&table, &cfg);
    assert_eq!(chart.reference.throughput, table.reference().throughput);
    assert!(chart.x_range.0 < chart.x_ticks[0] as f64);
    assert!(chart.x_range.1 > chart.x_ticks[chart.x_ticks.len() - 1] as f64);
}

#[test]
fn test_perfect_doubling_matches_ideal() {
    let cfg = ScalingChartConfig::default();
    let table =
        ScalingTable::new(reference(), vec![series("S", &[(1, 1.0e8), (2, 2.0e8)])]).unwrap();
    let chart = build_scaling_chart(&table, &cfg);
    assert_eq!(chart.measured[0].points, chart.ideal.points);
}

#[test]
fn test_multi_series_chart_keeps_all_series() {
    let cfg = ScalingChartConfig::default();
    let base = dataset::ising_scaling().unwrap();
    let mut all = base.series().to_vec();
    all.push(dataset::bit_parallel_scaling());
    let table = ScalingTable::new(base.reference().clone(), all).unwrap();
    let chart = build_scaling_chart(&table, &cfg);
    assert_eq!(chart.measured.len(), 2);
    assert_eq!(chart.measured[1].name, "Bit-parallel (64 sims)");
    assert!(chart.y_range.1 > 7.37e9);
}

#[test]
fn test_single_sample_domain_renders() {
    let dir = tempdir().unwrap();
    let mut cfg = ScalingChartConfig::default();
    cfg.path = dir.path().join("single.svg");
    let table = ScalingTable::new(reference(), vec![series("S", &[(1, 1.0e8)])]).unwrap();
    let chart = build_scaling_chart(&table, &cfg);
    assert_eq!(chart.x_ticks, vec![1]);
    assert!(chart.x_range.0 < 1.0 && chart.x_range.1 > 1.0);
    let path = render_scaling_chart(&chart, &cfg).unwrap();
    assert!(path.exists());
}

#[test]
fn test_render_writes_svg_with_legend_labels() {
    let dir = tempdir().unwrap();
    let mut cfg = ScalingChartConfig::default();
    cfg.path = dir.path().join("scaling.svg");
    let chart = build_scaling_chart(&dataset::ising_scaling().unwrap(), &cfg);
    let path = render_scaling_chart(&chart, &cfg).unwrap();
    let svg = std::fs::read_to_string(path).unwrap();
    assert!(svg.contains("Performance vs Threads"));
    assert!(svg.contains("Xorshiro"));
    assert!(svg.contains("Simple Multithreading"));
    assert!(svg.contains("Linear improvement"));
}
