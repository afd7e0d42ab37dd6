use super::{GeometryMetrics, Point, Rect};
use crate::text_pos::TextPosition;

/// Added to each quotient before flooring so that a rect's own top-left
/// corner, computed with decimal metrics, never lands one ulp short of its
/// cell.
const SNAP: f64 = 1e-9;

/// Map a client-space pointer to the text position under it.
///
/// `surface_origin` is the client top-left of the listing table at the time
/// of the click. Both coordinates are clamped at zero; there is no upper
/// clamp, so clicks past the text must be rejected by the offset lookup.
pub fn pixel_to_text(
    point: Point,
    surface_origin: Point,
    metrics: &GeometryMetrics,
) -> TextPosition {
    let character = ((point.x - surface_origin.x - metrics.gutter_width()) / metrics.glyph_width() + SNAP).floor();
    let line = ((point.y - surface_origin.y) / metrics.line_height() + SNAP).floor();
    TextPosition::new(clamp_index(line), clamp_index(character))
}

/// Map a run of `width` glyphs starting at `position` to its overlay rect.
///
/// The rect lives in the highlight container's frame, which starts at the
/// top of the header; it is always exactly one line tall.
pub fn text_to_rect(
    position: TextPosition,
    width: usize,
    metrics: &GeometryMetrics,
) -> Rect {
    Rect::new(
        position.character as f64 * metrics.glyph_width() + metrics.gutter_width(),
        position.line as f64 * metrics.line_height() + metrics.header_height(),
        width as f64 * metrics.glyph_width(),
        metrics.line_height(),
    )
}

// Saturating float-to-int cast: NaN and negatives become 0.
fn clamp_index(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value as u32
    }
}

#[cfg(test)]
#[path = "../../tests/src/geometry/mapper_tests.rs"]
mod tests;
