//! Owned drawing surface for one chart artifact.
//!
//! Each render acquires its own [`ChartCanvas`], draws, and calls
//! [`ChartCanvas::finalize`] to write the SVG. Nothing is shared between
//! renders, so a second chart can never inherit axes or titles from the first.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::errors::ReportError;

pub const TITLE_FONT_SIZE: u32 = 44;
pub const AXIS_LABEL_FONT_SIZE: u32 = 26;
pub const TICK_LABEL_FONT_SIZE: u32 = 20;
pub const LEGEND_FONT_SIZE: u32 = 20;
pub const DATA_LABEL_FONT_SIZE: u32 = 16;

pub const SERIES_COLORS: &[RGBColor] = &[
    RGBColor(66, 133, 244),
    RGBColor(52, 168, 83),
    RGBColor(251, 188, 5),
    RGBColor(234, 67, 53),
];

pub struct ChartCanvas {
    path: PathBuf,
    dimensions: (u32, u32),
    svg: String,
}

impl ChartCanvas {
    pub fn new<P: AsRef<Path>>(path: P, dimensions: (u32, u32)) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            dimensions,
            svg: String::new(),
        }
    }

    /// White-filled drawing area over the in-memory SVG buffer. Call once per
    /// canvas, and present or drop the area before `finalize`.
    pub fn surface(&mut self) -> Result<DrawingArea<SVGBackend<'_>, Shift>, ReportError> {
        let area = SVGBackend::with_string(&mut self.svg, self.dimensions).into_drawing_area();
        area.fill(&WHITE)
            .map_err(|e| ReportError::render(e.to_string()))?;
        Ok(area)
    }

    /// Write the rendered document to the artifact path.
    pub fn finalize(self) -> Result<PathBuf, ReportError> {
        fs::write(&self.path, self.svg.as_bytes())
            .map_err(|e| ReportError::render(e.to_string()))?;
        Ok(self.path)
    }
}
