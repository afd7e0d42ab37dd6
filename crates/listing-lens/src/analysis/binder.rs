//! Scope construction and name binding over a flat token stream.
//!
//! Scopes are token ranges. They are collected first, then linked into a
//! tree, then every word token is given a [`NameRole`].

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use crate::syntax::{Token, TokenKind};

pub(crate) type ScopeId = usize;
pub(crate) type DeclId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ScopeKind {
    Module,
    Block,
    ObjectLiteral,
    MemberBody,
    Function,
    Catch,
    For,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Params {
    None,
    /// Tokens strictly between `open` and `close`.
    List {
        open: usize,
        close: usize,
    },
    Single(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct Scope {
    pub(crate) kind: ScopeKind,
    /// First and last token index covered, inclusive.
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) parent: Option<ScopeId>,
    params: Params,
}

impl Scope {
    fn new(
        kind: ScopeKind,
        start: usize,
        end: usize,
        params: Params,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            parent: None,
            params,
        }
    }
}

/// A declared name; its scope is the key it was entered under in
/// `Binding::by_scope`.
#[derive(Debug, Clone)]
pub(crate) struct Declaration {
    /// Token index of the declaring identifier.
    pub(crate) token: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameRole {
    Declaration(DeclId),
    Reference,
    Member {
        declares: bool,
    },
}

#[derive(Debug)]
pub(crate) struct Binding {
    pub(crate) scopes: Vec<Scope>,
    pub(crate) declarations: Vec<Declaration>,
    pub(crate) roles: Vec<Option<NameRole>>,
    pub(crate) innermost: Vec<ScopeId>,
    by_scope: HashMap<(ScopeId, String), DeclId>,
}

impl Binding {
    /// Resolve `name` as seen from token `token`, walking outwards.
    pub(crate) fn resolve(
        &self,
        token: usize,
        name: &str,
    ) -> Option<DeclId> {
        let mut scope = self.innermost.get(token).copied();
        while let Some(id) = scope {
            if let Some(&decl) = self.by_scope.get(&(id, name.to_string())) {
                return Some(decl);
            }
            scope = self.scopes[id].parent;
        }
        None
    }
}

pub(crate) fn bind(
    source: &str,
    tokens: &[Token],
) -> Binding {
    let mut binder = Binder::new(source, tokens);
    binder.collect_scopes();
    binder.link_scopes();
    binder.bind_parameters();
    binder.bind_names();
    Binding {
        scopes: binder.scopes,
        declarations: binder.declarations,
        roles: binder.roles,
        innermost: binder.innermost,
        by_scope: binder.by_scope,
    }
}

struct Binder<'a> {
    source: &'a str,
    tokens: &'a [Token],
    matching: Vec<Option<usize>>,
    scopes: Vec<Scope>,
    innermost: Vec<ScopeId>,
    declarations: Vec<Declaration>,
    by_scope: HashMap<(ScopeId, String), DeclId>,
    roles: Vec<Option<NameRole>>,
}

impl<'a> Binder<'a> {
    fn new(
        source: &'a str,
        tokens: &'a [Token],
    ) -> Self {
        Self {
            source,
            tokens,
            matching: match_brackets(tokens),
            scopes: Vec::new(),
            innermost: vec![0; tokens.len()],
            declarations: Vec::new(),
            by_scope: HashMap::new(),
            roles: vec![None; tokens.len()],
        }
    }

    // ── token helpers ───────────────────────────────────────────────────

    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn kind(
        &self,
        index: usize,
    ) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    fn is(
        &self,
        index: usize,
        kind: TokenKind,
    ) -> bool {
        self.kind(index) == Some(kind)
    }

    fn text(
        &self,
        index: usize,
    ) -> &'a str {
        self.tokens.get(index).map(|t| &self.source[t.bytes.clone()]).unwrap_or("")
    }

    fn is_word(
        &self,
        index: usize,
    ) -> bool {
        self.kind(index).is_some_and(TokenKind::is_word)
    }

    /// Identifiers plus contextual keywords, which may name a binding.
    fn is_binding_name(
        &self,
        index: usize,
    ) -> bool {
        self.kind(index).is_some_and(|k| k == TokenKind::Ident || k.is_contextual())
    }

    /// Whether the word at `index` is used as a name rather than a keyword.
    fn is_name_here(
        &self,
        index: usize,
    ) -> bool {
        match self.kind(index) {
            Some(TokenKind::Ident) => true,
            Some(kind) if kind.is_contextual() => {
                !self.kind(index + 1).is_some_and(|next| next.is_word() || next.is_literal())
            },
            _ => false,
        }
    }

    fn is_operator(
        &self,
        index: usize,
        text: &str,
    ) -> bool {
        self.is(index, TokenKind::Operator) && self.text(index) == text
    }

    /// First index at or after `from` that is at bracket depth zero and
    /// either satisfies `stop` or closes an enclosing group.
    fn scan_depth0(
        &self,
        from: usize,
        limit: usize,
        stop: impl Fn(TokenKind) -> bool,
    ) -> usize {
        let mut index = from;
        while index < limit {
            let Some(kind) = self.kind(index) else {
                break;
            };
            if stop(kind) || kind.is_close() {
                return index;
            }
            if kind.is_open()
                && let Some(close) = self.matching[index]
            {
                index = close + 1;
                continue;
            }
            index += 1;
        }
        limit
    }

    /// Like [`Self::scan_depth0`] but commas inside `<...>` type arguments
    /// do not count until an `=` has been seen.
    fn skip_declarator_tail(
        &self,
        from: usize,
        limit: usize,
        stop: impl Fn(TokenKind) -> bool,
    ) -> usize {
        let mut index = from;
        let mut angle = 0usize;
        let mut in_initializer = false;
        while index < limit {
            let Some(kind) = self.kind(index) else {
                break;
            };
            match kind {
                TokenKind::Equal => in_initializer = true,
                TokenKind::Operator if !in_initializer => match self.text(index) {
                    "<" => angle += 1,
                    ">" => angle = angle.saturating_sub(1),
                    ">>" => angle = angle.saturating_sub(2),
                    _ => {},
                },
                _ => {},
            }
            if kind.is_close() || (angle == 0 && stop(kind)) {
                return index;
            }
            if kind.is_open()
                && let Some(close) = self.matching[index]
            {
                index = close + 1;
                continue;
            }
            index += 1;
        }
        limit
    }

    fn block_after(
        &self,
        index: usize,
    ) -> Option<usize> {
        if self.is(index + 1, TokenKind::LBrace) {
            self.matching[index + 1]
        } else {
            None
        }
    }

    /// Match the body of a function whose parameter list closes at `close`,
    /// skipping a `: ReturnType` annotation.
    fn function_body_after(
        &self,
        close: usize,
    ) -> Option<usize> {
        if !self.is(close + 1, TokenKind::Colon) {
            return self.block_after(close);
        }
        let brace = self.scan_depth0(close + 2, self.len(), |k| {
            matches!(k, TokenKind::LBrace | TokenKind::Semicolon | TokenKind::FatArrow | TokenKind::Equal)
        });
        if self.is(brace, TokenKind::LBrace) {
            self.matching[brace]
        } else {
            None
        }
    }

    // ── scopes ──────────────────────────────────────────────────────────

    fn collect_scopes(&mut self) {
        let n = self.len();
        self.scopes.push(Scope::new(ScopeKind::Module, 0, n.saturating_sub(1), Params::None));

        let member_braces: HashSet<usize> = (0..n)
            .filter(|&i| {
                matches!(self.kind(i), Some(TokenKind::KwClass | TokenKind::KwInterface | TokenKind::KwEnum))
            })
            .filter_map(|i| {
                let brace = self.scan_depth0(i + 1, n, |k| {
                    matches!(k, TokenKind::LBrace | TokenKind::Semicolon | TokenKind::Equal)
                });
                self.is(brace, TokenKind::LBrace).then_some(brace)
            })
            .collect();

        for i in 0..n {
            match self.kind(i) {
                Some(TokenKind::LBrace) => {
                    if let Some(close) = self.matching[i] {
                        let kind = if member_braces.contains(&i) {
                            ScopeKind::MemberBody
                        } else if self.opens_object_literal(i) {
                            ScopeKind::ObjectLiteral
                        } else {
                            ScopeKind::Block
                        };
                        self.scopes.push(Scope::new(kind, i, close, Params::None));
                    }
                },
                Some(TokenKind::LParen) => {
                    if let Some(close) = self.matching[i] {
                        self.collect_parenthesized(i, close);
                    }
                },
                Some(TokenKind::FatArrow) => self.collect_arrow(i),
                _ => {},
            }
        }
    }

    fn opens_object_literal(
        &self,
        brace: usize,
    ) -> bool {
        let Some(prev) = brace.checked_sub(1).and_then(|p| self.kind(p)) else {
            return false;
        };
        matches!(
            prev,
            TokenKind::Equal
                | TokenKind::LParen
                | TokenKind::Comma
                | TokenKind::Colon
                | TokenKind::LBracket
                | TokenKind::Question
                | TokenKind::Operator
                | TokenKind::KwReturn
        )
    }

    fn collect_parenthesized(
        &mut self,
        open: usize,
        close: usize,
    ) {
        let Some(before) = open.checked_sub(1) else {
            return;
        };
        let params = Params::List {
            open,
            close,
        };
        match self.kind(before) {
            Some(TokenKind::KwCatch) => {
                if let Some(body_close) = self.block_after(close) {
                    self.scopes.push(Scope::new(ScopeKind::Catch, open, body_close, params));
                }
            },
            Some(TokenKind::KwFor) => {
                let end = match self.block_after(close) {
                    Some(body_close) => body_close,
                    None => {
                        self.scan_depth0(close + 1, self.len(), |k| k == TokenKind::Semicolon).min(self.len() - 1)
                    },
                };
                self.scopes.push(Scope::new(ScopeKind::For, open, end, Params::None));
            },
            Some(TokenKind::KwFunction) => self.push_function(open, close),
            _ if self.is_binding_name(before) => self.push_function(open, close),
            _ => {},
        }
    }

    fn push_function(
        &mut self,
        open: usize,
        close: usize,
    ) {
        if let Some(body_close) = self.function_body_after(close) {
            self.scopes.push(Scope::new(
                ScopeKind::Function,
                open,
                body_close,
                Params::List {
                    open,
                    close,
                },
            ));
        }
    }

    fn collect_arrow(
        &mut self,
        arrow: usize,
    ) {
        let Some(prev) = arrow.checked_sub(1) else {
            return;
        };
        let paren_params = |close: usize| {
            self.matching[close].map(|open| {
                (
                    open,
                    Params::List {
                        open,
                        close,
                    },
                )
            })
        };
        let header = if self.is(prev, TokenKind::RParen) {
            paren_params(prev)
        } else if self.is_binding_name(prev) {
            // `(a): T => ...` carries a return type between `)` and `=>`.
            if prev >= 2 && self.is(prev - 1, TokenKind::Colon) && self.is(prev - 2, TokenKind::RParen) {
                paren_params(prev - 2)
            } else {
                Some((prev, Params::Single(prev)))
            }
        } else {
            None
        };
        let Some((start, params)) = header else {
            return;
        };

        let end = match self.block_after(arrow) {
            Some(body_close) => body_close,
            None => {
                let stop = self.scan_depth0(arrow + 1, self.len(), |k| {
                    matches!(k, TokenKind::Comma | TokenKind::Semicolon)
                });
                stop.saturating_sub(1).max(arrow)
            },
        };
        self.scopes.push(Scope::new(ScopeKind::Function, start, end, params));
    }

    /// Order scopes outermost-first, record parents and the innermost
    /// scope of every token.
    fn link_scopes(&mut self) {
        self.scopes.sort_by_key(|s| (s.start, Reverse(s.end), s.kind));

        let mut stack: Vec<ScopeId> = Vec::new();
        let mut next = 0usize;
        for token in 0..self.len() {
            while let Some(&top) = stack.last() {
                if self.scopes[top].end >= token {
                    break;
                }
                stack.pop();
            }
            while next < self.scopes.len() && self.scopes[next].start == token {
                self.scopes[next].parent = stack.last().copied();
                stack.push(next);
                next += 1;
            }
            self.innermost[token] = stack.last().copied().unwrap_or(0);
        }
    }

    fn function_scope_of(
        &self,
        token: usize,
    ) -> ScopeId {
        let mut scope = self.innermost.get(token).copied().unwrap_or(0);
        loop {
            let current = &self.scopes[scope];
            if matches!(current.kind, ScopeKind::Function | ScopeKind::Module) {
                return scope;
            }
            match current.parent {
                Some(parent) => scope = parent,
                None => return scope,
            }
        }
    }

    // ── declarations ────────────────────────────────────────────────────

    fn declare(
        &mut self,
        token: usize,
        scope: ScopeId,
    ) {
        let name = self.text(token).to_string();
        let declarations = &mut self.declarations;
        let id = *self.by_scope.entry((scope, name)).or_insert_with(|| {
            declarations.push(Declaration {
                token,
            });
            declarations.len() - 1
        });
        self.roles[token] = Some(NameRole::Declaration(id));
    }

    fn bind_parameters(&mut self) {
        for scope in 0..self.scopes.len() {
            let params = self.scopes[scope].params;
            match params {
                Params::None => {},
                Params::Single(token) => self.declare(token, scope),
                Params::List {
                    open,
                    close,
                } => self.bind_parameter_list(open + 1, close, scope),
            }
        }
    }

    fn bind_parameter_list(
        &mut self,
        from: usize,
        limit: usize,
        scope: ScopeId,
    ) {
        let mut index = from;
        while index < limit {
            while index < limit && matches!(self.kind(index), Some(TokenKind::Keyword | TokenKind::Ellipsis)) {
                index += 1;
            }
            index = self.bind_target(index, limit, scope);
            index = self.skip_declarator_tail(index, limit, |k| k == TokenKind::Comma) + 1;
        }
    }

    /// Bind an identifier or a destructuring pattern starting at `index`.
    /// Returns the index just past the target.
    fn bind_target(
        &mut self,
        index: usize,
        limit: usize,
        scope: ScopeId,
    ) -> usize {
        if index >= limit {
            return index;
        }
        match self.kind(index) {
            Some(TokenKind::LBrace) => {
                let close = self.matching[index].unwrap_or(limit).min(limit);
                let mut k = index + 1;
                while k < close {
                    if self.is(k, TokenKind::Ellipsis) {
                        k += 1;
                    }
                    if self.is_word(k) && self.is(k + 1, TokenKind::Colon) {
                        self.roles[k] = Some(NameRole::Member {
                            declares: false,
                        });
                        k = self.bind_target(k + 2, close, scope);
                    } else if self.is_binding_name(k) {
                        self.declare(k, scope);
                        k += 1;
                    }
                    k = self.scan_depth0(k, close, |t| t == TokenKind::Comma) + 1;
                }
                close + 1
            },
            Some(TokenKind::LBracket) => {
                let close = self.matching[index].unwrap_or(limit).min(limit);
                let mut k = index + 1;
                while k < close {
                    if self.is(k, TokenKind::Comma) {
                        k += 1;
                        continue;
                    }
                    if self.is(k, TokenKind::Ellipsis) {
                        k += 1;
                    }
                    k = self.bind_target(k, close, scope);
                    k = self.scan_depth0(k, close, |t| t == TokenKind::Comma) + 1;
                }
                close + 1
            },
            _ if self.is_binding_name(index) => {
                self.declare(index, scope);
                index + 1
            },
            _ => index + 1,
        }
    }

    // ── names ───────────────────────────────────────────────────────────

    fn bind_names(&mut self) {
        for index in 0..self.len() {
            if self.roles[index].is_some() {
                continue;
            }
            match self.kind(index) {
                Some(TokenKind::KwLet | TokenKind::KwConst | TokenKind::KwVar) => self.bind_variable_statement(index),
                Some(TokenKind::KwFunction | TokenKind::KwClass | TokenKind::KwInterface | TokenKind::KwEnum) => {
                    self.bind_named_declaration(index)
                },
                Some(TokenKind::KwType | TokenKind::KwNamespace) if self.is(index + 1, TokenKind::Ident) => {
                    self.bind_named_declaration(index)
                },
                Some(TokenKind::KwImport) => self.bind_import(index),
                _ => {},
            }
            if self.roles[index].is_none() && self.is_word(index) {
                self.classify_word(index);
            }
        }
    }

    fn bind_variable_statement(
        &mut self,
        keyword: usize,
    ) {
        if self.is(keyword + 1, TokenKind::KwEnum) {
            return;
        }
        let scope = if self.is(keyword, TokenKind::KwVar) {
            self.function_scope_of(keyword)
        } else {
            self.innermost[keyword]
        };
        let n = self.len();
        let mut index = keyword + 1;
        loop {
            index = self.bind_target(index, n, scope);
            let stop = self.skip_declarator_tail(index, n, |k| {
                matches!(k, TokenKind::Comma | TokenKind::Semicolon | TokenKind::KwOf | TokenKind::KwIn)
                    || k.starts_statement()
            });
            if self.is(stop, TokenKind::Comma) {
                index = stop + 1;
            } else {
                break;
            }
        }
    }

    fn bind_named_declaration(
        &mut self,
        keyword: usize,
    ) {
        let mut name = keyword + 1;
        if self.is_operator(name, "*") {
            name += 1;
        }
        if self.is_binding_name(name) && !self.is(name + 1, TokenKind::Dot) {
            let scope = self.innermost[keyword];
            self.declare(name, scope);
        }
    }

    fn bind_import(
        &mut self,
        keyword: usize,
    ) {
        if matches!(self.kind(keyword + 1), Some(TokenKind::LParen | TokenKind::Dot)) {
            return;
        }
        let n = self.len();
        let mut index = keyword + 1;
        if self.is(index, TokenKind::KwType) && (self.is_word(index + 1) || self.is(index + 1, TokenKind::LBrace)) {
            index += 1;
        }
        while index < n {
            match self.kind(index) {
                Some(TokenKind::LBrace) => {
                    let close = self.matching[index].unwrap_or(n - 1);
                    let mut k = index + 1;
                    while k < close {
                        if self.is(k, TokenKind::KwType) && self.is_word(k + 1) && !self.is(k + 1, TokenKind::KwAs) {
                            k += 1;
                        }
                        if self.is_word(k) && self.is(k + 1, TokenKind::KwAs) && self.is_binding_name(k + 2) {
                            self.roles[k] = Some(NameRole::Member {
                                declares: false,
                            });
                            self.declare(k + 2, 0);
                            k += 3;
                        } else if self.is_binding_name(k) {
                            self.declare(k, 0);
                            k += 1;
                        } else {
                            k += 1;
                        }
                        if self.is(k, TokenKind::Comma) {
                            k += 1;
                        }
                    }
                    index = close + 1;
                },
                Some(TokenKind::Operator) if self.text(index) == "*" => {
                    if self.is(index + 1, TokenKind::KwAs) && self.is_binding_name(index + 2) {
                        self.declare(index + 2, 0);
                        index += 3;
                    } else {
                        index += 1;
                    }
                },
                Some(TokenKind::Comma) => index += 1,
                Some(TokenKind::KwFrom) => break,
                _ if self.is_binding_name(index) => {
                    self.declare(index, 0);
                    index += 1;
                },
                _ => break,
            }
        }
    }

    fn classify_word(
        &mut self,
        index: usize,
    ) {
        if index > 0 && matches!(self.kind(index - 1), Some(TokenKind::Dot | TokenKind::QuestionDot)) {
            self.roles[index] = Some(NameRole::Member {
                declares: false,
            });
            return;
        }

        let scope = &self.scopes[self.innermost[index]];
        let (scope_kind, scope_start) = (scope.kind, scope.start);
        let next = self.kind(index + 1);
        let next_is_word = self.is_word(index + 1);
        match scope_kind {
            ScopeKind::MemberBody if self.at_member_start(index, scope_start, false) => {
                // Leading words of a member are modifiers (`static`, `get`, ...).
                if !next_is_word && next != Some(TokenKind::Dot) {
                    self.roles[index] = Some(NameRole::Member {
                        declares: true,
                    });
                }
                return;
            },
            ScopeKind::ObjectLiteral if self.at_member_start(index, scope_start, true) => {
                if next_is_word {
                    return;
                }
                if matches!(next, Some(TokenKind::Colon | TokenKind::LParen | TokenKind::Question)) {
                    self.roles[index] = Some(NameRole::Member {
                        declares: true,
                    });
                    return;
                }
            },
            _ => {},
        }

        if self.is_name_here(index) {
            self.roles[index] = Some(NameRole::Reference);
        }
    }

    fn at_member_start(
        &self,
        index: usize,
        scope_start: usize,
        object_literal: bool,
    ) -> bool {
        let mut first = index;
        while first > scope_start + 1 && self.is_word(first - 1) {
            first -= 1;
        }
        let Some(prev) = first.checked_sub(1).and_then(|p| self.kind(p)) else {
            return false;
        };
        if object_literal {
            matches!(prev, TokenKind::LBrace | TokenKind::Comma)
        } else {
            matches!(prev, TokenKind::LBrace | TokenKind::Semicolon | TokenKind::Comma | TokenKind::RBrace)
        }
    }
}

/// Pair every bracket with its partner, in both directions.
fn match_brackets(tokens: &[Token]) -> Vec<Option<usize>> {
    let mut matching = vec![None; tokens.len()];
    let mut stack: Vec<(usize, TokenKind)> = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        if token.kind.is_open() {
            stack.push((index, token.kind));
            continue;
        }
        let expected = match token.kind {
            TokenKind::RParen => TokenKind::LParen,
            TokenKind::RBrace => TokenKind::LBrace,
            TokenKind::RBracket => TokenKind::LBracket,
            _ => continue,
        };
        if let Some(depth) = stack.iter().rposition(|&(_, kind)| kind == expected) {
            let (open, _) = stack[depth];
            stack.truncate(depth);
            matching[open] = Some(index);
            matching[index] = Some(open);
        }
    }
    matching
}

#[cfg(test)]
#[path = "../../tests/src/analysis/binder_tests.rs"]
mod tests;
