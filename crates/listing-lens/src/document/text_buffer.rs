use crate::analysis::AnalysisError;
use crate::text_pos::{TextPosition, TextSpan};

// ── TextBuffer ──────────────────────────────────────────────────────────────

/// The whole listing flattened into one tab-expanded string.
///
/// Every offset handed out by this type counts chars, not bytes.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    text: String,
    /// Char offset of the first char of every line.
    line_starts: Vec<usize>,
    /// Byte offset of every char; empty when the text is pure ASCII.
    char_bytes: Vec<usize>,
    char_len: usize,
}

impl TextBuffer {
    pub fn new(text: String) -> Self {
        let char_bytes = if text.is_ascii() {
            Vec::new()
        } else {
            text.char_indices().map(|(byte, _)| byte).collect()
        };
        let line_starts = Self::compute_line_starts(&text);
        let char_len = if char_bytes.is_empty() {
            text.len()
        } else {
            char_bytes.len()
        };
        Self {
            text,
            line_starts,
            char_bytes,
            char_len,
        }
    }

    // ── queries ─────────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the buffer in chars.
    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 0-based line without its line terminator.
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = self.line_starts.get(line + 1).copied().unwrap_or(self.char_len);
        let slice = &self.text[self.byte_of(start)..self.byte_of(end)];
        Some(slice.trim_end_matches('\n').trim_end_matches('\r'))
    }

    /// Convert a line/character position into a char offset.
    ///
    /// `character` may sit one past the last char of the line; anything
    /// further, or a line past the end, is out of range.
    pub fn offset_of(
        &self,
        position: TextPosition,
    ) -> Result<usize, AnalysisError> {
        let out_of_range = AnalysisError::PositionOutOfRange {
            position,
        };
        let line = position.line as usize;
        let Some(line_text) = self.line_text(line) else {
            return Err(out_of_range);
        };
        let character = position.character as usize;
        if character > line_text.chars().count() {
            return Err(out_of_range);
        }
        Ok(self.line_starts[line] + character)
    }

    /// Convert a char offset back into a position, clamping past the end.
    pub fn position_of(
        &self,
        offset: usize,
    ) -> TextPosition {
        let offset = offset.min(self.char_len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        TextPosition::new(line as u32, (offset - self.line_starts[line]) as u32)
    }

    /// Text covered by a span, clamped to the buffer.
    pub fn slice(
        &self,
        span: TextSpan,
    ) -> &str {
        let start = span.start.min(self.char_len);
        let end = span.end().min(self.char_len);
        &self.text[self.byte_of(start)..self.byte_of(end)]
    }

    /// Translate a byte offset produced by the lexer into a char offset.
    pub(crate) fn char_of_byte(
        &self,
        byte: usize,
    ) -> usize {
        if self.char_bytes.is_empty() {
            return byte.min(self.char_len);
        }
        match self.char_bytes.binary_search(&byte) {
            Ok(exact) => exact,
            Err(ins) => ins,
        }
    }

    // ── internal helpers ────────────────────────────────────────────────

    fn byte_of(
        &self,
        char_offset: usize,
    ) -> usize {
        if self.char_bytes.is_empty() {
            return char_offset.min(self.text.len());
        }
        self.char_bytes.get(char_offset).copied().unwrap_or(self.text.len())
    }

    fn compute_line_starts(text: &str) -> Vec<usize> {
        let mut starts = vec![0usize];
        for (index, ch) in text.chars().enumerate() {
            if ch == '\n' {
                starts.push(index + 1);
            }
        }
        starts
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/text_buffer_tests.rs"]
mod tests;
