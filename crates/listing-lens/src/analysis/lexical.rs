use tracing::debug;

use super::binder;
use super::symbol_table::SymbolTable;
use super::{AnalysisError, ScriptSnapshot, SourceAnalysis};
use crate::document::TextBuffer;
use crate::syntax::significant_tokens;
use crate::text_pos::{TextPosition, TextSpan};

/// Scope-aware symbol resolution built from the token stream alone.
///
/// The whole listing is analysed once on construction; every query after
/// that is a lookup.
#[derive(Debug)]
pub struct LexicalAnalysis {
    file_name: String,
    buffer: TextBuffer,
    table: SymbolTable,
}

impl LexicalAnalysis {
    pub fn new(snapshot: ScriptSnapshot) -> Self {
        let ScriptSnapshot {
            file_name,
            text,
        } = snapshot;
        let buffer = TextBuffer::new(text);
        let tokens = significant_tokens(buffer.text());
        let binding = binder::bind(buffer.text(), &tokens);
        let table = SymbolTable::build(&buffer, &tokens, &binding);
        debug!(
            file = %file_name,
            lines = buffer.line_count(),
            tokens = tokens.len(),
            scopes = binding.scopes.len(),
            symbols = table.symbols().len(),
            "analysed listing"
        );
        Self {
            file_name,
            buffer,
            table,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.table
    }
}

impl SourceAnalysis for LexicalAnalysis {
    fn offset_of(
        &self,
        position: TextPosition,
    ) -> Result<usize, AnalysisError> {
        self.buffer.offset_of(position)
    }

    fn position_of(
        &self,
        offset: usize,
    ) -> TextPosition {
        self.buffer.position_of(offset)
    }

    fn definition_at(
        &self,
        offset: usize,
    ) -> Option<TextPosition> {
        let definition = self.table.symbol_at(offset)?.definition?;
        Some(self.buffer.position_of(definition.start))
    }

    fn occurrences_at(
        &self,
        offset: usize,
    ) -> Vec<TextSpan> {
        self.table.symbol_at(offset).map(|symbol| symbol.occurrences.clone()).unwrap_or_default()
    }
}
