//! Highlight overlay drawn over the listing.
//!
//! The renderer owns its container handle; it never looks the container up
//! in the host, and it never touches listing content.

use serde::Serialize;

use crate::config::HighlightSettings;
use crate::geometry::{GeometryMetrics, Rect, text_to_rect};
use crate::text_pos::TextPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightKind {
    Definition,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRequest {
    pub position: TextPosition,
    /// Length of the run, in glyphs.
    pub width: usize,
    pub kind: HighlightKind,
}

/// One positioned element handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightElement {
    pub class_name: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightClasses {
    pub container: String,
    pub item: String,
    pub usage: String,
    pub definition: String,
}

impl Default for HighlightClasses {
    fn default() -> Self {
        Self::from(&HighlightSettings::default())
    }
}

impl From<&HighlightSettings> for HighlightClasses {
    fn from(settings: &HighlightSettings) -> Self {
        Self {
            container: settings.container_class.clone(),
            item: settings.item_class.clone(),
            usage: settings.usage_class.clone(),
            definition: settings.definition_class.clone(),
        }
    }
}

impl HighlightClasses {
    /// Class attribute of a highlight element: the base item class followed by
    /// the class of its kind.
    pub fn element_class(
        &self,
        kind: HighlightKind,
    ) -> String {
        let kind_class = match kind {
            HighlightKind::Definition => &self.definition,
            HighlightKind::Usage => &self.usage,
        };
        format!("{} {}", self.item, kind_class)
    }
}

/// Host side of the overlay: one container, attached under the header, with
/// positioned children.
pub trait OverlayLayer {
    type Container;

    fn create_container(
        &mut self,
        class_name: &str,
    ) -> Self::Container;

    fn attach_to_header(
        &mut self,
        container: &Self::Container,
    );

    fn append_highlight(
        &mut self,
        container: &Self::Container,
        element: HighlightElement,
    );

    /// Remove every child of `container`.
    fn clear_container(
        &mut self,
        container: &Self::Container,
    );
}

pub struct OverlayRenderer<L: OverlayLayer> {
    layer: L,
    metrics: GeometryMetrics,
    classes: HighlightClasses,
    container: Option<L::Container>,
}

impl<L: OverlayLayer> OverlayRenderer<L> {
    pub fn new(
        layer: L,
        metrics: GeometryMetrics,
        classes: HighlightClasses,
    ) -> Self {
        Self {
            layer,
            metrics,
            classes,
            container: None,
        }
    }

    /// Empty the container. A no-op before the first draw.
    pub fn clear(&mut self) {
        if let Some(container) = &self.container {
            self.layer.clear_container(container);
        }
    }

    /// Append one element per request. The container is created and
    /// attached on the first call only.
    pub fn draw(
        &mut self,
        requests: &[HighlightRequest],
    ) {
        if self.container.is_none() {
            let container = self.layer.create_container(&self.classes.container);
            self.layer.attach_to_header(&container);
            self.container = Some(container);
        }
        let Some(container) = &self.container else {
            return;
        };
        for request in requests {
            let element = HighlightElement {
                class_name: self.classes.element_class(request.kind),
                rect: text_to_rect(request.position, request.width, &self.metrics),
            };
            self.layer.append_highlight(container, element);
        }
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    pub fn metrics(&self) -> &GeometryMetrics {
        &self.metrics
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }
}

#[cfg(test)]
#[path = "../../tests/src/overlay/renderer_tests.rs"]
mod tests;
