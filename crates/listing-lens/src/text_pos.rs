use serde::Serialize;

/// Width, in columns, a tab occupies once the listing text is flattened.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Zero-based line/character location in the tab-expanded listing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct TextPosition {
    pub line: u32,
    pub character: u32,
}

impl TextPosition {
    pub const fn new(
        line: u32,
        character: u32,
    ) -> Self {
        Self {
            line,
            character,
        }
    }
}

/// Contiguous run of chars in the flattened buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub const fn new(
        start: usize,
        length: usize,
    ) -> Self {
        Self {
            start,
            length,
        }
    }

    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// Whether `offset` falls on one of the span's chars.
    pub const fn contains(
        &self,
        offset: usize,
    ) -> bool {
        offset >= self.start && offset < self.end()
    }
}

/// Replace every tab with `tab_width` spaces.
///
/// This is a flat replacement, not tab-stop alignment, so columns in the
/// result match what the analysis backend counts.
pub fn expand_tabs(
    text: &str,
    tab_width: usize,
) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    let spaces = " ".repeat(tab_width);
    text.replace('\t', &spaces)
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
