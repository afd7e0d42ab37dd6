pub mod analysis;
pub mod config;
pub mod controller;
pub mod document;
pub mod geometry;
pub mod host;
pub mod overlay;
pub mod session;
pub mod syntax;
pub mod text_pos;

pub use analysis::{AnalysisError, AnalysisResult, LexicalAnalysis, ScriptSnapshot, SourceAnalysis};
pub use config::{LensSettings, SettingsError};
pub use controller::{ClickOutcome, ClickPhase, ControllerOptions, InteractionController, PointerClick};
pub use geometry::{CalibrationError, GeometryMetrics, Point, Rect, calibrate, pixel_to_text, text_to_rect};
pub use host::headless::{HeadlessGeometry, HeadlessListing, RecordingOverlay};
pub use host::{ListingElement, ListingSurface};
pub use overlay::{HighlightClasses, HighlightElement, HighlightKind, HighlightRequest, OverlayLayer, OverlayRenderer};
pub use session::{ClickReport, HostClick, ListingSession};
pub use text_pos::{DEFAULT_TAB_WIDTH, TextPosition, TextSpan, expand_tabs};
