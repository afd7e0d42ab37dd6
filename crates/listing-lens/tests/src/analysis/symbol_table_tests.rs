use super::*;
use crate::analysis::binder::bind;
use crate::syntax::significant_tokens;

fn table(src: &str) -> SymbolTable {
    let buffer = TextBuffer::new(src.to_string());
    let tokens = significant_tokens(buffer.text());
    let binding = bind(buffer.text(), &tokens);
    SymbolTable::build(&buffer, &tokens, &binding)
}

#[test]
fn locals_carry_their_declaration_span() {
    let t = table("let x = 1;\nconsole.log(x);");
    let x = t.find("x").unwrap();
    assert_eq!(x.kind, SymbolKind::Local);
    assert_eq!(x.definition, Some(TextSpan::new(4, 1)));
    assert_eq!(x.occurrences, [TextSpan::new(4, 1), TextSpan::new(23, 1)]);
}

#[test]
fn globals_have_no_definition() {
    let t = table("console.log(1);\nconsole.warn(2);");
    let console = t.find("console").unwrap();
    assert_eq!(console.kind, SymbolKind::Global);
    assert_eq!(console.definition, None);
    assert_eq!(console.occurrences.len(), 2);
}

#[test]
fn members_are_defined_by_their_first_declaration() {
    let t = table("p.size;\nconst box = { size: 1 };\nclass A { size = 2; }");
    let size = t.find("size").unwrap();
    assert_eq!(size.kind, SymbolKind::Member);
    assert_eq!(size.occurrences.len(), 3);
    assert_eq!(size.definition, Some(size.occurrences[1]));
}

#[test]
fn spans_count_chars_not_bytes() {
    let t = table("const é = \"ü\";\nlet ok = é;");
    let ok = t.find("ok").unwrap();
    assert_eq!(ok.occurrences, [TextSpan::new(19, 2)]);
    let accented = t.find("é").unwrap();
    assert_eq!(accented.kind, SymbolKind::Local);
    assert_eq!(accented.occurrences, [TextSpan::new(6, 1), TextSpan::new(24, 1)]);
}

#[test]
fn lookup_hits_only_identifier_chars() {
    let t = table("let counter = 0;");
    assert!(t.symbol_at(3).is_none());
    assert_eq!(t.symbol_at(4).map(|s| s.name.as_str()), Some("counter"));
    assert_eq!(t.symbol_at(10).map(|s| s.name.as_str()), Some("counter"));
    assert!(t.symbol_at(11).is_none());
    assert!(t.symbol_at(500).is_none());
}
