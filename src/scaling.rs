use std::path::PathBuf;

use plotters::prelude::*;
use serde::Serialize;

use crate::canvas::{
    AXIS_LABEL_FONT_SIZE, ChartCanvas, LEGEND_FONT_SIZE, SERIES_COLORS, TICK_LABEL_FONT_SIZE,
    TITLE_FONT_SIZE,
};
use crate::config::ScalingChartConfig;
use crate::dataset::{ReferenceLine, ScalingTable};
use crate::errors::ReportError;
use crate::units;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Curve {
    pub name: String,
    pub points: Vec<(u32, f64)>,
}

/// Plot-ready scaling chart. `x_ticks` is the primary series' thread domain;
/// the ideal curve holds `first_sample * k` at every thread count `k`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ScalingChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub x_ticks: Vec<u32>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub reference: ReferenceLine,
    pub measured: Vec<Curve>,
    pub ideal: Curve,
}

pub fn build_scaling_chart(table: &ScalingTable, cfg: &ScalingChartConfig) -> ScalingChart {
    let primary = table.primary();
    let x_ticks: Vec<u32> = primary
        .samples
        .iter()
        .map(|&(threads, _)| threads)
        .collect();

    let measured: Vec<Curve> = table
        .series()
        .iter()
        .map(|series| Curve {
            name: series.name.clone(),
            points: series
                .samples
                .iter()
                .map(|&(threads, value)| (threads, units::normalize_value(value, cfg.unit_scale)))
                .collect(),
        })
        .collect();

    let first_sample = measured[0].points[0].1;
    let ideal = Curve {
        name: "Linear improvement".to_string(),
        points: x_ticks
            .iter()
            .map(|&threads| (threads, first_sample * threads as f64))
            .collect(),
    };

    let reference = ReferenceLine {
        label: table.reference().label.clone(),
        throughput: units::normalize_value(table.reference().throughput, cfg.unit_scale),
    };

    let mut max_value = reference.throughput;
    for curve in measured.iter().chain(std::iter::once(&ideal)) {
        for &(_, value) in &curve.points {
            max_value = max_value.max(value);
        }
    }

    let first_tick = x_ticks[0] as f64;
    let last_tick = x_ticks[x_ticks.len() - 1] as f64;

    ScalingChart {
        title: cfg.title.clone(),
        x_desc: cfg.x_desc.clone(),
        y_desc: cfg.y_desc.clone(),
        x_ticks,
        x_range: (first_tick - 0.5, last_tick + 0.5),
        y_range: (0.0, max_value * 1.1),
        reference,
        measured,
        ideal,
    }
}

pub fn render_scaling_chart(
    chart_data: &ScalingChart,
    cfg: &ScalingChartConfig,
) -> Result<PathBuf, ReportError> {
    let mut canvas = ChartCanvas::new(&cfg.path, cfg.dimensions);
    {
        let root = canvas.surface()?;
        let (x_min, x_max) = chart_data.x_range;
        let (y_min, y_max) = chart_data.y_range;

        let mut chart = ChartBuilder::on(&root)
            .caption(&chart_data.title, ("sans-serif", TITLE_FONT_SIZE))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| ReportError::render(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(chart_data.x_ticks.len())
            .x_label_formatter(&|x| {
                let tick = x.round() as u32;
                if chart_data.x_ticks.contains(&tick) && (x - tick as f64).abs() < 0.3 {
                    format!("{tick}")
                } else {
                    String::new()
                }
            })
            .y_labels(8)
            .y_label_formatter(&|y| format_throughput_tick(*y))
            .y_desc(&chart_data.y_desc)
            .x_desc(&chart_data.x_desc)
            .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
            .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
            .draw()
            .map_err(|e| ReportError::render(e.to_string()))?;

        // Constant single-thread reference across the whole domain.
        let ref_color = SERIES_COLORS[0];
        let level = chart_data.reference.throughput;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x_min, level), (x_max, level)],
                ref_color.stroke_width(2),
            )))
            .map_err(|e| ReportError::render(e.to_string()))?
            .label(chart_data.reference.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], ref_color.stroke_width(2))
            });

        for (idx, curve) in chart_data.measured.iter().enumerate() {
            let color = measured_series_color(idx);
            let points: Vec<(f64, f64)> = curve
                .points
                .iter()
                .map(|&(threads, value)| (threads as f64, value))
                .collect();

            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))
                .map_err(|e| ReportError::render(e.to_string()))?
                .label(curve.name.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                });

            chart
                .draw_series(PointSeries::of_element(
                    points,
                    5,
                    color.filled(),
                    &|coord, size, style| {
                        EmptyElement::at(coord) + Circle::new((0, 0), size, style)
                    },
                ))
                .map_err(|e| ReportError::render(e.to_string()))?;
        }

        let ideal_color = SERIES_COLORS[3];
        let ideal_points: Vec<(f64, f64)> = chart_data
            .ideal
            .points
            .iter()
            .map(|&(threads, value)| (threads as f64, value))
            .collect();

        chart
            .draw_series(DashedLineSeries::new(
                ideal_points.clone(),
                8,
                6,
                ideal_color.stroke_width(2),
            ))
            .map_err(|e| ReportError::render(e.to_string()))?
            .label(chart_data.ideal.name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], ideal_color.stroke_width(2))
            });

        chart
            .draw_series(PointSeries::of_element(
                ideal_points,
                5,
                ideal_color.filled(),
                &|coord, size, style| EmptyElement::at(coord) + Cross::new((0, 0), size, style),
            ))
            .map_err(|e| ReportError::render(e.to_string()))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", LEGEND_FONT_SIZE))
            .draw()
            .map_err(|e| ReportError::render(e.to_string()))?;

        root.present()
            .map_err(|e| ReportError::render(e.to_string()))?;
    }
    canvas.finalize()
}

fn format_throughput_tick(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}G", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.0}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.0}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

fn measured_series_color(idx: usize) -> RGBColor {
    // Slots 0 and 3 are taken by the reference line and the ideal curve.
    SERIES_COLORS[1 + idx % (SERIES_COLORS.len() - 2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_colors_skip_reference_and_ideal_slots() {
        let reference = SERIES_COLORS[0];
        let ideal = SERIES_COLORS[3];
        for idx in 0..8 {
            let color = measured_series_color(idx);
            let rgb = (color.0, color.1, color.2);
            assert_ne!(rgb, (reference.0, reference.1, reference.2));
            assert_ne!(rgb, (ideal.0, ideal.1, ideal.2));
        }
    }
}
