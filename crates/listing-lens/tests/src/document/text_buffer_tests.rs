use super::*;

fn buffer(text: &str) -> TextBuffer {
    TextBuffer::new(text.to_string())
}

#[test]
fn line_starts_empty() {
    let buf = buffer("");
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.line_text(0), Some(""));
    assert!(buf.is_empty());
}

#[test]
fn line_text_strips_terminators() {
    let buf = buffer("let a;\r\nlet b;\n");
    assert_eq!(buf.line_count(), 3);
    assert_eq!(buf.line_text(0), Some("let a;"));
    assert_eq!(buf.line_text(1), Some("let b;"));
    assert_eq!(buf.line_text(2), Some(""));
    assert_eq!(buf.line_text(3), None);
}

#[test]
fn offset_roundtrip() {
    let buf = buffer("let x = 1;\nconsole.log(x);");
    let pos = TextPosition::new(1, 12);
    let off = buf.offset_of(pos).unwrap();
    assert_eq!(off, 23);
    assert_eq!(buf.position_of(off), pos);
    assert_eq!(buf.slice(TextSpan::new(off, 1)), "x");
}

#[test]
fn offset_of_line_past_end_is_out_of_range() {
    let buf = buffer("let x = 1;\nconsole.log(x);");
    let pos = TextPosition::new(2, 0);
    assert_eq!(
        buf.offset_of(pos),
        Err(AnalysisError::PositionOutOfRange {
            position: pos
        })
    );
}

#[test]
fn offset_of_character_past_line_end_is_out_of_range() {
    let buf = buffer("ab\ncd");
    assert_eq!(buf.offset_of(TextPosition::new(0, 2)), Ok(2));
    assert!(buf.offset_of(TextPosition::new(0, 3)).is_err());
}

#[test]
fn position_of_clamps_past_end() {
    let buf = buffer("ab\ncd");
    assert_eq!(buf.position_of(99), TextPosition::new(1, 2));
    assert_eq!(buf.position_of(3), TextPosition::new(1, 0));
    assert_eq!(buf.position_of(2), TextPosition::new(0, 2));
}

#[test]
fn offsets_count_chars_not_bytes() {
    let buf = buffer("é = 1;\nlet ü = é;");
    assert_eq!(buf.len(), 17);
    let off = buf.offset_of(TextPosition::new(1, 4)).unwrap();
    assert_eq!(off, 11);
    assert_eq!(buf.slice(TextSpan::new(off, 1)), "ü");
    let byte_of_u = buf.text().find('ü').unwrap();
    assert_eq!(buf.char_of_byte(byte_of_u), 11);
}
