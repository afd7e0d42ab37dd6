use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{GeometryMetrics, Rect};
use crate::host::{ListingElement, ListingSurface};

const PADDING_PROPERTY: &str = "padding-left";

static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum CalibrationError {
    MissingElement(ListingElement),
    EmptyReferenceText,
    InvalidPadding(String),
    DegenerateMetric {
        metric: &'static str,
        value: f64,
    },
}

impl Display for CalibrationError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::MissingElement(element) => write!(f, "listing has no {element} to measure"),
            Self::EmptyReferenceText => f.write_str("reference span has no text to measure glyph width"),
            Self::InvalidPadding(value) => write!(f, "cannot parse {PADDING_PROPERTY} value {value:?}"),
            Self::DegenerateMetric {
                metric,
                value,
            } => write!(f, "measured {metric} {value} is not usable"),
        }
    }
}

impl std::error::Error for CalibrationError {}

/// Measure the listing once. Any missing reference element is fatal.
pub fn calibrate(surface: &impl ListingSurface) -> Result<GeometryMetrics, CalibrationError> {
    let reference = measure(surface, ListingElement::ReferenceSpan)?;
    let reference_text = surface
        .inner_text(ListingElement::ReferenceSpan)
        .ok_or(CalibrationError::MissingElement(ListingElement::ReferenceSpan))?;
    let glyph_count = reference_text.chars().count();
    if glyph_count == 0 {
        return Err(CalibrationError::EmptyReferenceText);
    }

    let header = measure(surface, ListingElement::Header)?;
    let gutter = measure(surface, ListingElement::LineGutter(0))?;
    let first_line = measure(surface, ListingElement::LineContent(0))?;
    let padding = surface.computed_style(ListingElement::LineContent(0), PADDING_PROPERTY).unwrap_or_default();
    let padding_px = parse_css_px(&padding).ok_or(CalibrationError::InvalidPadding(padding))?;

    let metrics = GeometryMetrics::new(
        reference.width / glyph_count as f64,
        header.height,
        gutter.width + padding_px,
        first_line.height,
    )?;
    debug!(
        glyph_width = metrics.glyph_width(),
        header_height = metrics.header_height(),
        gutter_width = metrics.gutter_width(),
        line_height = metrics.line_height(),
        "calibrated listing geometry"
    );
    Ok(metrics)
}

/// Leading integer of a CSS length, `parseInt` style: `"12.7px"` is 12,
/// `"px"` is `None`.
pub fn parse_css_px(value: &str) -> Option<f64> {
    let digits = LEADING_INTEGER.captures(value)?.get(1)?.as_str();
    digits.parse::<i64>().ok().map(|px| px as f64)
}

fn measure(
    surface: &impl ListingSurface,
    element: ListingElement,
) -> Result<Rect, CalibrationError> {
    surface.rect_of(element).ok_or(CalibrationError::MissingElement(element))
}

#[cfg(test)]
#[path = "../../tests/src/geometry/calibrate_tests.rs"]
mod tests;
