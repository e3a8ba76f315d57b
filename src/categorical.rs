use std::path::PathBuf;

use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;

use crate::canvas::{
    AXIS_LABEL_FONT_SIZE, ChartCanvas, DATA_LABEL_FONT_SIZE, SERIES_COLORS, TICK_LABEL_FONT_SIZE,
    TITLE_FONT_SIZE,
};
use crate::config::CategoricalChartConfig;
use crate::dataset::MeasurementTable;
use crate::errors::ReportError;
use crate::units;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub annotation: String,
}

/// Plot-ready bar chart: one bar per measurement row, in table order, with
/// values already normalized for display.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_desc: String,
    pub bars: Vec<Bar>,
    pub y_range: (f64, f64),
}

pub fn build_bar_chart(table: &MeasurementTable, cfg: &CategoricalChartConfig) -> BarChart {
    let bars: Vec<Bar> = table
        .entries()
        .iter()
        .map(|entry| {
            let value = units::normalize_value(entry.throughput, cfg.unit_scale);
            Bar {
                label: entry.label.clone(),
                value,
                annotation: format!("{value:.3}"),
            }
        })
        .collect();
    let min_value = bars
        .iter()
        .map(|bar| bar.value)
        .fold(f64::MAX, |a, b| a.min(b));
    let max_value = bars
        .iter()
        .map(|bar| bar.value)
        .fold(0.0_f64, |a, b| a.max(b));
    BarChart {
        title: cfg.title.clone(),
        y_desc: cfg.y_desc.clone(),
        bars,
        // Log-scale bounds with headroom for the annotations above the bars.
        y_range: (min_value * 0.5, max_value * 2.0),
    }
}

pub fn render_bar_chart(
    chart_data: &BarChart,
    cfg: &CategoricalChartConfig,
) -> Result<PathBuf, ReportError> {
    let mut canvas = ChartCanvas::new(&cfg.path, cfg.dimensions);
    {
        let root = canvas.surface()?;
        let bar_count = chart_data.bars.len();
        let (y_min, y_max) = chart_data.y_range;

        let mut chart = ChartBuilder::on(&root)
            .caption(&chart_data.title, ("sans-serif", TITLE_FONT_SIZE))
            .margin(20)
            .x_label_area_size(300)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5..(bar_count as f64 - 0.5), (y_min..y_max).log_scale())
            .map_err(|e| ReportError::render(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bar_count)
            .x_label_formatter(&|x| {
                let idx = x.round() as usize;
                if idx < bar_count && (x - idx as f64).abs() < 0.3 {
                    chart_data.bars[idx].label.clone()
                } else {
                    String::new()
                }
            })
            .y_labels(8)
            .y_label_formatter(&|y| format_log_tick(*y))
            .y_desc(&chart_data.y_desc)
            .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
            .x_label_style(
                ("sans-serif", DATA_LABEL_FONT_SIZE)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
            .draw()
            .map_err(|e| ReportError::render(e.to_string()))?;

        let color = SERIES_COLORS[0];
        for (idx, bar) in chart_data.bars.iter().enumerate() {
            let x_center = idx as f64;
            let x_left = x_center - cfg.bar_width / 2.0;
            let x_right = x_center + cfg.bar_width / 2.0;

            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x_left, y_min), (x_right, bar.value)],
                    color.filled(),
                )))
                .map_err(|e| ReportError::render(e.to_string()))?;

            chart
                .draw_series(std::iter::once(Text::new(
                    bar.annotation.clone(),
                    (x_center, bar.value * 1.15),
                    ("sans-serif", DATA_LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))
                .map_err(|e| ReportError::render(e.to_string()))?;
        }

        root.present()
            .map_err(|e| ReportError::render(e.to_string()))?;
    }
    canvas.finalize()
}

fn format_log_tick(value: f64) -> String {
    if value <= 0.0 {
        return String::new();
    }
    // Label only powers of ten; log axes get noisy otherwise.
    let log10 = value.log10();
    let nearest = log10.round();
    if (log10 - nearest).abs() < 1e-6 {
        format!("{value}")
    } else {
        String::new()
    }
}
