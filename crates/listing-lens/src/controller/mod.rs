//! Click cycle: clear, map the pointer, query the analysis, render.
//!
//! The controller holds only the analysis handle and the renderer. Each click
//! runs the whole cycle synchronously and always starts by clearing, so a new
//! click supersedes whatever the previous one drew.

use serde::Serialize;
use tracing::{debug, debug_span, trace};

use crate::analysis::{AnalysisResult, SourceAnalysis};
use crate::config::LensSettings;
use crate::geometry::{Point, pixel_to_text};
use crate::overlay::{HighlightKind, HighlightRequest, OverlayLayer, OverlayRenderer};
use crate::text_pos::TextPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickPhase {
    Idle,
    Clearing,
    Mapping,
    Querying,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    /// Pointer position in client coordinates.
    pub client: Point,
    /// Client top-left of the listing table when the click happened.
    pub surface_origin: Point,
    /// Navigation qualifier (meta key).
    pub modifier: bool,
    /// The click ended a non-empty text selection.
    pub has_selection: bool,
}

impl PointerClick {
    pub fn at(
        client: Point,
        surface_origin: Point,
    ) -> Self {
        Self {
            client,
            surface_origin,
            modifier: false,
            has_selection: false,
        }
    }

    pub fn with_modifier(mut self) -> Self {
        self.modifier = true;
        self
    }

    pub fn with_selection(mut self) -> Self {
        self.has_selection = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ClickOutcome {
    /// The click maps outside the listing text; nothing is drawn.
    #[serde(rename_all = "camelCase")]
    OutOfRange {
        position: TextPosition,
    },
    /// The click ended a selection and was ignored after clearing.
    SelectionIgnored,
    /// The host could not locate the listing table for this click.
    SurfaceUnavailable,
    #[serde(rename_all = "camelCase")]
    Rendered {
        position: TextPosition,
        offset: usize,
        definition: Option<TextPosition>,
        /// Definition line to jump to, set on modifier clicks only.
        navigate_to: Option<TextPosition>,
        highlights: usize,
    },
}

impl ClickOutcome {
    pub fn highlight_count(&self) -> usize {
        match self {
            Self::Rendered {
                highlights,
                ..
            } => *highlights,
            Self::OutOfRange {
                ..
            }
            | Self::SelectionIgnored
            | Self::SurfaceUnavailable => 0,
        }
    }

    pub fn navigate_to(&self) -> Option<TextPosition> {
        match self {
            Self::Rendered {
                navigate_to,
                ..
            } => *navigate_to,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub mark_definition: bool,
    pub navigate_on_modifier: bool,
    pub ignore_selection_clicks: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from(&LensSettings::default())
    }
}

impl From<&LensSettings> for ControllerOptions {
    fn from(settings: &LensSettings) -> Self {
        Self {
            mark_definition: settings.highlight.mark_definition,
            navigate_on_modifier: settings.interaction.navigate_on_modifier,
            ignore_selection_clicks: settings.interaction.ignore_selection_clicks,
        }
    }
}

pub struct InteractionController<A: SourceAnalysis, L: OverlayLayer> {
    analysis: A,
    renderer: OverlayRenderer<L>,
    options: ControllerOptions,
    phase: ClickPhase,
}

impl<A: SourceAnalysis, L: OverlayLayer> InteractionController<A, L> {
    pub fn new(
        analysis: A,
        renderer: OverlayRenderer<L>,
        options: ControllerOptions,
    ) -> Self {
        Self {
            analysis,
            renderer,
            options,
            phase: ClickPhase::Idle,
        }
    }

    pub fn handle_click(
        &mut self,
        click: PointerClick,
    ) -> ClickOutcome {
        let span = debug_span!("click", x = click.client.x, y = click.client.y, modifier = click.modifier);
        let _guard = span.enter();

        self.enter(ClickPhase::Clearing);
        self.renderer.clear();
        if self.options.ignore_selection_clicks && click.has_selection {
            debug!("click ends a selection, ignored");
            self.enter(ClickPhase::Idle);
            return ClickOutcome::SelectionIgnored;
        }

        self.enter(ClickPhase::Mapping);
        let position = pixel_to_text(click.client, click.surface_origin, self.renderer.metrics());
        let offset = match self.analysis.offset_of(position) {
            Ok(offset) => offset,
            Err(err) => {
                debug!("{err}, click ignored");
                self.enter(ClickPhase::Idle);
                return ClickOutcome::OutOfRange {
                    position,
                };
            },
        };

        self.enter(ClickPhase::Querying);
        let AnalysisResult {
            definition_position,
            occurrences,
        } = self.analysis.analyze(offset);
        let navigate_to = definition_position.filter(|_| click.modifier && self.options.navigate_on_modifier);
        let definition_offset = if self.options.mark_definition {
            definition_position.and_then(|p| self.analysis.offset_of(p).ok())
        } else {
            None
        };
        let requests: Vec<HighlightRequest> = occurrences
            .iter()
            .map(|span| HighlightRequest {
                position: self.analysis.position_of(span.start),
                width: span.length,
                kind: if definition_offset == Some(span.start) {
                    HighlightKind::Definition
                } else {
                    HighlightKind::Usage
                },
            })
            .collect();
        debug!(offset, occurrences = requests.len(), definition = ?definition_position, "queried symbol");

        self.enter(ClickPhase::Rendering);
        self.renderer.draw(&requests);
        self.enter(ClickPhase::Idle);

        ClickOutcome::Rendered {
            position,
            offset,
            definition: definition_position,
            navigate_to,
            highlights: requests.len(),
        }
    }

    /// Clear the overlay outside of a click cycle.
    pub fn reset(&mut self) {
        self.renderer.clear();
        self.enter(ClickPhase::Idle);
    }

    pub fn phase(&self) -> ClickPhase {
        self.phase
    }

    pub fn analysis(&self) -> &A {
        &self.analysis
    }

    pub fn renderer(&self) -> &OverlayRenderer<L> {
        &self.renderer
    }

    fn enter(
        &mut self,
        next: ClickPhase,
    ) {
        trace!(from = ?self.phase, to = ?next, "click phase");
        self.phase = next;
    }
}

#[cfg(test)]
#[path = "../../tests/src/controller/controller_tests.rs"]
mod tests;
