use crate::dataset::MeasurementTable;

pub const REPORT_HEADER: &str = "Speedup factors compared to baseline:";

/// One (label, ratio-to-baseline) pair per non-baseline entry, in table order.
pub fn speedup_factors(table: &MeasurementTable) -> Vec<(String, f64)> {
    let baseline = table.baseline().throughput;
    table
        .entries()
        .iter()
        .skip(1)
        .map(|entry| (entry.label.clone(), entry.throughput / baseline))
        .collect()
}

pub fn format_speedup_report(factors: &[(String, f64)]) -> String {
    let mut report = String::new();
    report.push_str(REPORT_HEADER);
    report.push('\n');
    for (label, factor) in factors {
        report.push_str(&format!("{label}: {factor:.1}x faster\n"));
    }
    report
}
