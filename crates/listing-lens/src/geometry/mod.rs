//! Pixel geometry of a rendered listing.
//!
//! [`calibrate`] measures the listing once; [`pixel_to_text`] and
//! [`text_to_rect`] convert between pointer pixels and text positions using
//! the measured [`GeometryMetrics`].

mod calibrate;
mod mapper;

use serde::Serialize;

pub use calibrate::{CalibrationError, calibrate, parse_css_px};
pub use mapper::{pixel_to_text, text_to_rect};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            x,
            y,
        }
    }
}

/// Axis-aligned rectangle, in the same sense as a DOM client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Measured rendering constants of one listing. Never changes after
/// calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryMetrics {
    glyph_width: f64,
    header_height: f64,
    gutter_width: f64,
    line_height: f64,
}

impl GeometryMetrics {
    /// Validate raw measurements: glyph width and line height must be
    /// finite and positive, header height and gutter width finite and
    /// non-negative.
    pub fn new(
        glyph_width: f64,
        header_height: f64,
        gutter_width: f64,
        line_height: f64,
    ) -> Result<Self, CalibrationError> {
        let positive = [("glyph width", glyph_width), ("line height", line_height)];
        let non_negative = [("header height", header_height), ("gutter width", gutter_width)];
        for (metric, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalibrationError::DegenerateMetric {
                    metric,
                    value,
                });
            }
        }
        for (metric, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalibrationError::DegenerateMetric {
                    metric,
                    value,
                });
            }
        }
        Ok(Self {
            glyph_width,
            header_height,
            gutter_width,
            line_height,
        })
    }

    pub fn glyph_width(&self) -> f64 {
        self.glyph_width
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    pub fn gutter_width(&self) -> f64 {
        self.gutter_width
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }
}
