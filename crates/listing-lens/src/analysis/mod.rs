//! Symbol analysis over the flattened listing text.
//!
//! [`SourceAnalysis`] is the only surface the interaction layer talks to.
//! [`LexicalAnalysis`] is the scope-aware engine shipped with the crate;
//! any other engine (a full incremental analyzer, a precomputed index) can
//! stand in by implementing the same four operations.

pub(crate) mod binder;
mod lexical;
mod symbol_table;

use std::fmt::{Display, Formatter};

pub use lexical::LexicalAnalysis;
pub use symbol_table::{Symbol, SymbolId, SymbolKind, SymbolTable};

use crate::text_pos::{DEFAULT_TAB_WIDTH, TextPosition, TextSpan, expand_tabs};

/// Whole-buffer text handed to an analysis engine under one synthetic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSnapshot {
    pub file_name: String,
    pub text: String,
}

impl ScriptSnapshot {
    /// Build a snapshot from raw listing text, expanding tabs first.
    pub fn from_listing_text(
        file_name: impl Into<String>,
        raw: &str,
        tab_width: usize,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            text: expand_tabs(raw, tab_width),
        }
    }
}

impl From<&str> for ScriptSnapshot {
    fn from(raw: &str) -> Self {
        Self::from_listing_text("listing.ts", raw, DEFAULT_TAB_WIDTH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    PositionOutOfRange {
        position: TextPosition,
    },
}

impl Display for AnalysisError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::PositionOutOfRange {
                position,
            } => {
                write!(f, "position {}:{} is outside the listing text", position.line, position.character)
            },
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Everything one click needs to know about the symbol at an offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    pub definition_position: Option<TextPosition>,
    pub occurrences: Vec<TextSpan>,
}

pub trait SourceAnalysis {
    fn offset_of(
        &self,
        position: TextPosition,
    ) -> Result<usize, AnalysisError>;

    fn position_of(
        &self,
        offset: usize,
    ) -> TextPosition;

    /// First reported definition of the symbol at `offset`.
    fn definition_at(
        &self,
        offset: usize,
    ) -> Option<TextPosition>;

    /// Every occurrence of the symbol at `offset`, left-to-right,
    /// top-to-bottom. Empty when no symbol is there.
    fn occurrences_at(
        &self,
        offset: usize,
    ) -> Vec<TextSpan>;

    fn analyze(
        &self,
        offset: usize,
    ) -> AnalysisResult {
        AnalysisResult {
            definition_position: self.definition_at(offset),
            occurrences: self.occurrences_at(offset),
        }
    }
}
