use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{LexicalAnalysis, ScriptSnapshot};
use crate::config::{InteractionSettings, LensSettings};
use crate::controller::{ClickOutcome, ControllerOptions, InteractionController, PointerClick};
use crate::geometry::{CalibrationError, GeometryMetrics, Point, calibrate};
use crate::host::{ListingElement, ListingSurface};
use crate::overlay::{HighlightClasses, OverlayLayer, OverlayRenderer};

/// Pointer click as the host reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostClick {
    pub client: Point,
    pub modifier: bool,
    pub has_selection: bool,
}

impl HostClick {
    pub fn at(client: Point) -> Self {
        Self {
            client,
            modifier: false,
            has_selection: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickReport {
    #[serde(flatten)]
    pub outcome: ClickOutcome,
    /// Anchor handed to the host for navigation, if any.
    pub anchor: Option<String>,
}

/// A listing with the overlay attached.
///
/// Only exists once calibration has succeeded; a listing that cannot be
/// measured never gets a click handler.
pub struct ListingSession<S: ListingSurface, L: OverlayLayer> {
    surface: S,
    controller: InteractionController<LexicalAnalysis, L>,
    interaction: InteractionSettings,
}

impl<S: ListingSurface, L: OverlayLayer> ListingSession<S, L> {
    pub fn attach(
        surface: S,
        layer: L,
        settings: &LensSettings,
    ) -> Result<Self, CalibrationError> {
        let metrics = calibrate(&surface)?;
        let text = surface
            .inner_text(ListingElement::Table)
            .ok_or(CalibrationError::MissingElement(ListingElement::Table))?;
        let snapshot =
            ScriptSnapshot::from_listing_text(settings.analysis.file_name.clone(), &text, settings.analysis.tab_width);
        let analysis = LexicalAnalysis::new(snapshot);
        info!(
            file = %analysis.file_name(),
            lines = analysis.buffer().line_count(),
            symbols = analysis.symbols().symbols().len(),
            "listing overlay attached"
        );

        let renderer = OverlayRenderer::new(layer, metrics, HighlightClasses::from(&settings.highlight));
        Ok(Self {
            surface,
            controller: InteractionController::new(analysis, renderer, ControllerOptions::from(settings)),
            interaction: settings.interaction.clone(),
        })
    }

    pub fn on_click(
        &mut self,
        click: HostClick,
    ) -> ClickReport {
        let Some(table) = self.surface.rect_of(ListingElement::Table) else {
            warn!("listing table is gone, click ignored");
            self.controller.reset();
            return ClickReport {
                outcome: ClickOutcome::SurfaceUnavailable,
                anchor: None,
            };
        };

        let outcome = self.controller.handle_click(PointerClick {
            client: click.client,
            surface_origin: table.top_left(),
            modifier: click.modifier,
            has_selection: click.has_selection,
        });

        let anchor = outcome.navigate_to().map(|target| self.interaction.anchor_for_line(target.line));
        if let Some(anchor) = &anchor {
            info!(anchor = %anchor, "navigating to definition");
            self.surface.navigate_to_anchor(anchor);
        }
        ClickReport {
            outcome,
            anchor,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn analysis(&self) -> &LexicalAnalysis {
        self.controller.analysis()
    }

    pub fn metrics(&self) -> &GeometryMetrics {
        self.controller.renderer().metrics()
    }

    pub fn layer(&self) -> &L {
        self.controller.renderer().layer()
    }
}
