use super::*;

fn lex(input: &str) -> Vec<(Option<TokenKind>, &str)> {
    Lexer::new(input).map(|(kind, text, _)| (kind, text)).collect()
}

#[test]
fn test_declaration_keywords() {
    let tokens = lex("let letter const");
    assert_eq!(
        tokens,
        vec![
            (Some(TokenKind::KwLet), "let"),
            (Some(TokenKind::Whitespace), " "),
            (Some(TokenKind::Ident), "letter"),
            (Some(TokenKind::Whitespace), " "),
            (Some(TokenKind::KwConst), "const"),
        ]
    );
}

#[test]
fn test_punctuation_and_arrows() {
    let tokens = lex("(a) => a?.b ...c");
    assert_eq!(
        tokens,
        vec![
            (Some(TokenKind::LParen), "("),
            (Some(TokenKind::Ident), "a"),
            (Some(TokenKind::RParen), ")"),
            (Some(TokenKind::Whitespace), " "),
            (Some(TokenKind::FatArrow), "=>"),
            (Some(TokenKind::Whitespace), " "),
            (Some(TokenKind::Ident), "a"),
            (Some(TokenKind::QuestionDot), "?."),
            (Some(TokenKind::Ident), "b"),
            (Some(TokenKind::Whitespace), " "),
            (Some(TokenKind::Ellipsis), "..."),
            (Some(TokenKind::Ident), "c"),
        ]
    );
}

#[test]
fn test_equal_is_split_from_following_operator() {
    let tokens = lex("x=-1");
    assert_eq!(
        tokens,
        vec![
            (Some(TokenKind::Ident), "x"),
            (Some(TokenKind::Equal), "="),
            (Some(TokenKind::Operator), "-"),
            (Some(TokenKind::Number), "1"),
        ]
    );
}

#[test]
fn test_literals_and_comments() {
    let tokens = lex("'it\\'s' \"x\" `t` 0x1F // tail");
    let kinds: Vec<_> = tokens.iter().filter_map(|(k, _)| *k).filter(|k| !k.is_trivia()).collect();
    assert_eq!(kinds, vec![TokenKind::String, TokenKind::String, TokenKind::Template, TokenKind::Number]);
    assert_eq!(tokens.last(), Some(&(Some(TokenKind::Comment), "// tail")));
}

#[test]
fn test_template_is_split_around_substitutions() {
    let tokens = lex("`a${b}c${d}`");
    assert_eq!(
        tokens,
        vec![
            (Some(TokenKind::TemplateHead), "`a${"),
            (Some(TokenKind::Ident), "b"),
            (Some(TokenKind::TemplateMiddle), "}c${"),
            (Some(TokenKind::Ident), "d"),
            (Some(TokenKind::TemplateTail), "}`"),
        ]
    );
}

#[test]
fn test_braces_and_templates_inside_a_substitution() {
    let kinds: Vec<_> = lex("`${f({k: `x${y}`})}z`").into_iter().filter_map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::TemplateHead,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Whitespace,
            TokenKind::TemplateHead,
            TokenKind::Ident,
            TokenKind::TemplateTail,
            TokenKind::RBrace,
            TokenKind::RParen,
            TokenKind::TemplateTail,
        ]
    );
}

#[test]
fn test_escaped_substitution_stays_text() {
    let tokens = lex(r"`\${a}`");
    assert_eq!(tokens, vec![(Some(TokenKind::Template), r"`\${a}`")]);
}

#[test]
fn test_regex_literal_after_equal() {
    let tokens = significant_tokens("x = /[/]\"`/g; a / b / c");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Equal,
            TokenKind::Regex,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Operator,
            TokenKind::Ident,
            TokenKind::Operator,
            TokenKind::Ident,
        ]
    );
    assert_eq!(tokens[2].bytes, 4..12);
}

#[test]
fn test_unclosed_regex_falls_back_to_division() {
    let tokens = lex("a = /b\n");
    assert_eq!(tokens[4], (Some(TokenKind::Operator), "/"));
    assert_eq!(tokens[5], (Some(TokenKind::Ident), "b"));
}

#[test]
fn test_unknown_input_has_no_kind() {
    let tokens = lex("\\");
    assert_eq!(tokens, vec![(None, "\\")]);
}

#[test]
fn significant_tokens_skip_trivia_and_keep_byte_ranges() {
    let tokens = significant_tokens("let /* c */ x;");
    assert_eq!(
        tokens,
        vec![
            Token {
                kind: TokenKind::KwLet,
                bytes: 0..3,
            },
            Token {
                kind: TokenKind::Ident,
                bytes: 12..13,
            },
            Token {
                kind: TokenKind::Semicolon,
                bytes: 13..14,
            },
        ]
    );
}
