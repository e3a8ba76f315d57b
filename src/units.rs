/// Scale factor between spin flips per second and spin flips per nanosecond.
pub const NANOS_PER_SEC: f64 = 1e9;

pub fn normalize_value(value: f64, scale_factor: f64) -> f64 {
    value / scale_factor
}

pub fn normalize(values: &[f64], scale_factor: f64) -> Vec<f64> {
    values
        .iter()
        .map(|value| normalize_value(*value, scale_factor))
        .collect()
}
