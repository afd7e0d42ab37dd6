//! Contract with the surface that renders the listing.
//!
//! The core never searches a document tree: everything it needs from the
//! host goes through [`ListingSurface`] for measurement and navigation, and
//! through [`crate::overlay::OverlayLayer`] for drawing.

pub mod headless;

use std::fmt::{Display, Formatter};

use crate::geometry::Rect;

/// Addressable parts of a rendered listing. Line indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingElement {
    Header,
    Table,
    /// First text run inside the table, used to measure glyph width.
    ReferenceSpan,
    LineGutter(usize),
    LineContent(usize),
}

impl Display for ListingElement {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Table => f.write_str("table"),
            Self::ReferenceSpan => f.write_str("reference span"),
            Self::LineGutter(line) => write!(f, "gutter cell of line {}", line + 1),
            Self::LineContent(line) => write!(f, "content cell of line {}", line + 1),
        }
    }
}

pub trait ListingSurface {
    /// Rendered client rect of `element`, measured from actual layout.
    fn rect_of(
        &self,
        element: ListingElement,
    ) -> Option<Rect>;

    /// Rendered text of `element`. For [`ListingElement::Table`] this is the
    /// whole listing, one line per row.
    fn inner_text(
        &self,
        element: ListingElement,
    ) -> Option<String>;

    /// Computed CSS value of `property` on `element`, e.g. `"12px"`.
    fn computed_style(
        &self,
        element: ListingElement,
        property: &str,
    ) -> Option<String>;

    /// Jump the view to a line anchor such as `#L12`.
    fn navigate_to_anchor(
        &mut self,
        anchor: &str,
    );
}
