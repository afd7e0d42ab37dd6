//! In-memory listing host.
//!
//! [`HeadlessListing`] lays a listing out on a fixed monospace grid the way a
//! code view renders it: a header band above a table whose rows are a gutter
//! cell followed by a padded content cell. [`RecordingOverlay`] keeps the
//! overlay tree the renderer builds so it can be inspected or printed.

use std::fmt::Write as _;

use super::{ListingElement, ListingSurface};
use crate::geometry::{Point, Rect, parse_css_px};
use crate::overlay::{HighlightElement, OverlayLayer};
use crate::text_pos::TextPosition;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessGeometry {
    pub glyph_width: f64,
    pub line_height: f64,
    pub header_height: f64,
    pub gutter_cell_width: f64,
    /// Computed `padding-left` of content cells, as CSS text.
    pub content_padding_left: String,
    /// Client top-left of the table.
    pub origin: Point,
}

impl Default for HeadlessGeometry {
    fn default() -> Self {
        Self {
            glyph_width: 8.0,
            line_height: 18.0,
            header_height: 40.0,
            gutter_cell_width: 20.0,
            content_padding_left: "10px".to_string(),
            origin: Point::new(0.0, 40.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessListing {
    lines: Vec<String>,
    geometry: HeadlessGeometry,
    location_hash: Option<String>,
}

impl HeadlessListing {
    pub fn new(
        text: &str,
        geometry: HeadlessGeometry,
    ) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            geometry,
            location_hash: None,
        }
    }

    pub fn geometry(&self) -> &HeadlessGeometry {
        &self.geometry
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Last anchor navigated to, e.g. `#L3`.
    pub fn location_hash(&self) -> Option<&str> {
        self.location_hash.as_deref()
    }

    /// Client point at the centre of the glyph cell for `position`, in
    /// tab-expanded columns.
    pub fn client_point_for(
        &self,
        position: TextPosition,
    ) -> Point {
        let g = &self.geometry;
        let padding = parse_css_px(&g.content_padding_left).unwrap_or(0.0);
        Point::new(
            g.origin.x + g.gutter_cell_width + padding + (position.character as f64 + 0.5) * g.glyph_width,
            g.origin.y + (position.line as f64 + 0.5) * g.line_height,
        )
    }

    fn table_width(&self) -> f64 {
        let widest = self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let padding = parse_css_px(&self.geometry.content_padding_left).unwrap_or(0.0);
        self.geometry.gutter_cell_width + padding + widest as f64 * self.geometry.glyph_width
    }

    fn row_top(
        &self,
        line: usize,
    ) -> f64 {
        self.geometry.origin.y + line as f64 * self.geometry.line_height
    }

    /// First run of non-whitespace text in the table, with its line and
    /// starting column.
    fn reference_run(&self) -> Option<(usize, usize, &str)> {
        self.lines.iter().enumerate().find_map(|(line, text)| {
            let trimmed = text.trim_start();
            let run = trimmed.split_whitespace().next()?;
            let column = text[..text.len() - trimmed.len()].chars().count();
            Some((line, column, run))
        })
    }
}

impl ListingSurface for HeadlessListing {
    fn rect_of(
        &self,
        element: ListingElement,
    ) -> Option<Rect> {
        let g = &self.geometry;
        match element {
            ListingElement::Header => {
                Some(Rect::new(g.origin.x, g.origin.y - g.header_height, self.table_width(), g.header_height))
            },
            ListingElement::Table => Some(Rect::new(
                g.origin.x,
                g.origin.y,
                self.table_width(),
                self.lines.len() as f64 * g.line_height,
            )),
            ListingElement::ReferenceSpan => {
                let (line, column, run) = self.reference_run()?;
                let padding = parse_css_px(&g.content_padding_left).unwrap_or(0.0);
                Some(Rect::new(
                    g.origin.x + g.gutter_cell_width + padding + column as f64 * g.glyph_width,
                    self.row_top(line),
                    run.chars().count() as f64 * g.glyph_width,
                    g.line_height,
                ))
            },
            ListingElement::LineGutter(line) if line < self.lines.len() => {
                Some(Rect::new(g.origin.x, self.row_top(line), g.gutter_cell_width, g.line_height))
            },
            ListingElement::LineContent(line) if line < self.lines.len() => Some(Rect::new(
                g.origin.x + g.gutter_cell_width,
                self.row_top(line),
                self.table_width() - g.gutter_cell_width,
                g.line_height,
            )),
            ListingElement::LineGutter(_) | ListingElement::LineContent(_) => None,
        }
    }

    fn inner_text(
        &self,
        element: ListingElement,
    ) -> Option<String> {
        match element {
            ListingElement::Header => Some(String::new()),
            ListingElement::Table => Some(self.lines.join("\n")),
            ListingElement::ReferenceSpan => self.reference_run().map(|(_, _, run)| run.to_string()),
            ListingElement::LineGutter(line) if line < self.lines.len() => Some((line + 1).to_string()),
            ListingElement::LineContent(line) => self.lines.get(line).cloned(),
            ListingElement::LineGutter(_) => None,
        }
    }

    fn computed_style(
        &self,
        element: ListingElement,
        property: &str,
    ) -> Option<String> {
        match (element, property) {
            (ListingElement::LineContent(line), "padding-left") if line < self.lines.len() => {
                Some(self.geometry.content_padding_left.clone())
            },
            _ => None,
        }
    }

    fn navigate_to_anchor(
        &mut self,
        anchor: &str,
    ) {
        self.location_hash = Some(anchor.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedContainer {
    pub class_name: String,
    /// How many times the container was attached under the header.
    pub attachments: usize,
    pub children: Vec<HighlightElement>,
}

/// Overlay layer that records the tree instead of drawing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingOverlay {
    containers: Vec<RecordedContainer>,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn containers(&self) -> &[RecordedContainer] {
        &self.containers
    }

    /// Children currently shown, across every attached container.
    pub fn highlights(&self) -> Vec<&HighlightElement> {
        self.containers.iter().filter(|c| c.attachments > 0).flat_map(|c| c.children.iter()).collect()
    }

    /// Markup-like dump of the attached overlay tree.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        for container in self.containers.iter().filter(|c| c.attachments > 0) {
            let _ = writeln!(out, "<div class=\"{}\">", container.class_name);
            for child in &container.children {
                let r = child.rect;
                let _ = writeln!(
                    out,
                    "  <div class=\"{}\" style=\"left:{}px;top:{}px;width:{}px;height:{}px\"/>",
                    child.class_name, r.left, r.top, r.width, r.height
                );
            }
            let _ = writeln!(out, "</div>");
        }
        out
    }

    fn container_mut(
        &mut self,
        id: &ContainerId,
    ) -> Option<&mut RecordedContainer> {
        self.containers.get_mut(id.0)
    }
}

impl OverlayLayer for RecordingOverlay {
    type Container = ContainerId;

    fn create_container(
        &mut self,
        class_name: &str,
    ) -> ContainerId {
        self.containers.push(RecordedContainer {
            class_name: class_name.to_string(),
            attachments: 0,
            children: Vec::new(),
        });
        ContainerId(self.containers.len() - 1)
    }

    fn attach_to_header(
        &mut self,
        container: &ContainerId,
    ) {
        if let Some(c) = self.container_mut(container) {
            c.attachments += 1;
        }
    }

    fn append_highlight(
        &mut self,
        container: &ContainerId,
        element: HighlightElement,
    ) {
        if let Some(c) = self.container_mut(container) {
            c.children.push(element);
        }
    }

    fn clear_container(
        &mut self,
        container: &ContainerId,
    ) {
        if let Some(c) = self.container_mut(container) {
            c.children.clear();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/host/headless_tests.rs"]
mod tests;
