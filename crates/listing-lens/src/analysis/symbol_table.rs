use std::collections::HashMap;

use crate::analysis::binder::{Binding, DeclId, NameRole};
use crate::document::TextBuffer;
use crate::syntax::Token;
use crate::text_pos::TextSpan;

pub type SymbolId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Resolved to a declaration in the listing.
    Local,
    /// A name no scope declares.
    Global,
    /// A property, method or enum member name.
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub definition: Option<TextSpan>,
    /// Every identifier token naming this symbol, in ascending offset order.
    pub occurrences: Vec<TextSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum SymbolKey {
    Binding(DeclId),
    Global(String),
    Member(String),
}

/// Resolved symbols of one listing, indexed by identifier span.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    /// Identifier spans sorted by start offset.
    names: Vec<(TextSpan, SymbolId)>,
}

impl SymbolTable {
    pub(crate) fn build(
        buffer: &TextBuffer,
        tokens: &[Token],
        binding: &Binding,
    ) -> Self {
        let mut table = Self::default();
        let mut ids: HashMap<SymbolKey, SymbolId> = HashMap::new();

        for (index, token) in tokens.iter().enumerate() {
            let Some(role) = binding.roles[index] else {
                continue;
            };
            let name = &buffer.text()[token.bytes.clone()];
            let start = buffer.char_of_byte(token.bytes.start);
            let span = TextSpan::new(start, buffer.char_of_byte(token.bytes.end) - start);

            let (key, kind, defines) = match role {
                NameRole::Declaration(decl) => (SymbolKey::Binding(decl), SymbolKind::Local, false),
                NameRole::Reference => match binding.resolve(index, name) {
                    Some(decl) => (SymbolKey::Binding(decl), SymbolKind::Local, false),
                    None => (SymbolKey::Global(name.to_string()), SymbolKind::Global, false),
                },
                NameRole::Member {
                    declares,
                } => (SymbolKey::Member(name.to_string()), SymbolKind::Member, declares),
            };

            let id = *ids.entry(key.clone()).or_insert_with(|| {
                let definition = match key {
                    SymbolKey::Binding(decl) => {
                        let token = &tokens[binding.declarations[decl].token];
                        let start = buffer.char_of_byte(token.bytes.start);
                        Some(TextSpan::new(start, buffer.char_of_byte(token.bytes.end) - start))
                    },
                    _ => None,
                };
                table.symbols.push(Symbol {
                    name: name.to_string(),
                    kind,
                    definition,
                    occurrences: Vec::new(),
                });
                table.symbols.len() - 1
            });

            let symbol = &mut table.symbols[id];
            if defines && symbol.definition.is_none() {
                symbol.definition = Some(span);
            }
            symbol.occurrences.push(span);
            table.names.push((span, id));
        }

        table
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Symbol whose identifier covers `offset`.
    pub fn symbol_at(
        &self,
        offset: usize,
    ) -> Option<&Symbol> {
        let after = self.names.partition_point(|(span, _)| span.start <= offset);
        let (span, id) = self.names.get(after.checked_sub(1)?)?;
        span.contains(offset).then(|| &self.symbols[*id])
    }

    /// First symbol with the given name, mostly useful in tests and logs.
    pub fn find(
        &self,
        name: &str,
    ) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/src/analysis/symbol_table_tests.rs"]
mod tests;
