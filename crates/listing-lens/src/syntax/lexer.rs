use std::ops::Range;

use logos::Logos;

use crate::syntax::kind::TokenKind;

/// A lexer that wraps `logos::Lexer`; unknown input becomes `None` kinds.
///
/// Two constructs need context logos does not have. Template literals are
/// split into chunks around each `${ ... }`, and the expression inside is
/// lexed as ordinary code. A `/` where an expression may start begins a
/// regex literal rather than a division.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    /// Unclosed `{` count inside each open `${` interpolation.
    interpolations: Vec<usize>,
    expression_start: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            interpolations: Vec::new(),
            expression_start: true,
        }
    }

    /// Consume template text up to and including the closing backtick or
    /// the next `${`. `head` is set when the chunk opened with a backtick.
    fn template_chunk(
        &mut self,
        head: bool,
    ) -> TokenKind {
        let rest = self.inner.remainder().as_bytes();
        let mut index = 0;
        let mut substitution = false;
        while index < rest.len() {
            match rest[index] {
                b'\\' => index += 2,
                b'`' => {
                    index += 1;
                    break;
                },
                b'$' if rest.get(index + 1) == Some(&b'{') => {
                    index += 2;
                    substitution = true;
                    break;
                },
                _ => index += 1,
            }
        }
        self.inner.bump(index.min(rest.len()));

        if substitution {
            self.interpolations.push(0);
        }
        match (head, substitution) {
            (true, false) => TokenKind::Template,
            (true, true) => TokenKind::TemplateHead,
            (false, true) => TokenKind::TemplateMiddle,
            (false, false) => TokenKind::TemplateTail,
        }
    }

    /// Extend the current `/` token over a whole regex literal, if one
    /// closes on this line.
    fn regex_literal(&mut self) -> bool {
        let consumed = self.inner.slice().len();
        let start = self.inner.span().start;
        let Some(len) = regex_len(&self.inner.source()[start..]) else {
            return false;
        };
        self.inner.bump(len - consumed);
        true
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (Option<TokenKind>, &'a str, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let token_result = self.inner.next()?;
        let kind = match token_result {
            Ok(TokenKind::Backtick) => Some(self.template_chunk(true)),
            Ok(TokenKind::LBrace) => {
                if let Some(open) = self.interpolations.last_mut() {
                    *open += 1;
                }
                Some(TokenKind::LBrace)
            },
            Ok(TokenKind::RBrace) => match self.interpolations.last().copied() {
                Some(0) => {
                    self.interpolations.pop();
                    Some(self.template_chunk(false))
                },
                Some(open) => {
                    if let Some(top) = self.interpolations.last_mut() {
                        *top = open - 1;
                    }
                    Some(TokenKind::RBrace)
                },
                None => Some(TokenKind::RBrace),
            },
            Ok(TokenKind::Operator) if self.expression_start && self.inner.slice().starts_with('/') => {
                Some(if self.regex_literal() { TokenKind::Regex } else { TokenKind::Operator })
            },
            other => other.ok(),
        };

        match kind {
            Some(kind) if kind.is_trivia() => {},
            Some(kind) => self.expression_start = expression_may_follow(kind, self.inner.slice()),
            None => self.expression_start = false,
        }
        Some((kind, self.inner.slice(), self.inner.span()))
    }
}

/// Whether a `/` right after this token opens a regex literal.
fn expression_may_follow(
    kind: TokenKind,
    text: &str,
) -> bool {
    match kind {
        TokenKind::LParen
        | TokenKind::LBracket
        | TokenKind::LBrace
        | TokenKind::Semicolon
        | TokenKind::Colon
        | TokenKind::Comma
        | TokenKind::Question
        | TokenKind::FatArrow
        | TokenKind::Equal
        | TokenKind::TemplateHead
        | TokenKind::TemplateMiddle
        | TokenKind::KwReturn
        | TokenKind::KwIn
        | TokenKind::KwOf => true,
        TokenKind::Operator => !matches!(text, "++" | "--"),
        TokenKind::Keyword => matches!(
            text,
            "await" | "case" | "delete" | "do" | "else" | "instanceof" | "throw" | "typeof" | "void" | "yield"
        ),
        _ => false,
    }
}

/// Byte length of the regex literal `text` starts with, flags included.
/// `None` when no unescaped `/` outside a class closes it on this line.
fn regex_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if matches!(bytes.get(1), None | Some(b'/' | b'*')) {
        return None;
    }
    let mut index = 1;
    let mut in_class = false;
    loop {
        match *bytes.get(index)? {
            b'\n' | b'\r' => return None,
            b'\\' => {
                index += 1;
                if matches!(bytes.get(index), None | Some(b'\n' | b'\r')) {
                    return None;
                }
            },
            b'[' => in_class = true,
            b']' => in_class = false,
            b'/' if !in_class => break,
            _ => {},
        }
        index += 1;
    }
    index += 1;
    while bytes.get(index).is_some_and(u8::is_ascii_alphabetic) {
        index += 1;
    }
    Some(index)
}

/// A non-trivia token with its byte range in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub bytes: Range<usize>,
}

/// Lex `input` and keep only the tokens the binder looks at.
pub fn significant_tokens(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .filter_map(|(kind, _, bytes)| {
            let kind = kind?;
            (!kind.is_trivia()).then_some(Token {
                kind,
                bytes,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src/syntax/lexer_tests.rs"]
mod tests;
