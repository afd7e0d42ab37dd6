use super::*;

fn listing() -> HeadlessListing {
    HeadlessListing::new("  let x = 1;\nconsole.log(x);\n", HeadlessGeometry::default())
}

#[test]
fn rows_are_laid_out_under_the_header() {
    let l = listing();
    assert_eq!(l.line_count(), 2);
    assert_eq!(l.rect_of(ListingElement::Header), Some(Rect::new(0.0, 0.0, 150.0, 40.0)));
    assert_eq!(l.rect_of(ListingElement::Table), Some(Rect::new(0.0, 40.0, 150.0, 36.0)));
    assert_eq!(l.rect_of(ListingElement::LineGutter(1)), Some(Rect::new(0.0, 58.0, 20.0, 18.0)));
    assert_eq!(l.rect_of(ListingElement::LineContent(1)), Some(Rect::new(20.0, 58.0, 130.0, 18.0)));
    assert_eq!(l.rect_of(ListingElement::LineContent(2)), None);
}

#[test]
fn reference_span_is_first_text_run() {
    let l = listing();
    assert_eq!(l.inner_text(ListingElement::ReferenceSpan).as_deref(), Some("let"));
    assert_eq!(l.rect_of(ListingElement::ReferenceSpan), Some(Rect::new(46.0, 40.0, 24.0, 18.0)));
}

#[test]
fn table_text_and_cells() {
    let l = listing();
    assert_eq!(l.inner_text(ListingElement::Table).as_deref(), Some("  let x = 1;\nconsole.log(x);"));
    assert_eq!(l.inner_text(ListingElement::LineGutter(0)).as_deref(), Some("1"));
    assert_eq!(l.computed_style(ListingElement::LineContent(0), "padding-left").as_deref(), Some("10px"));
    assert_eq!(l.computed_style(ListingElement::LineContent(0), "color"), None);
}

#[test]
fn client_point_is_the_glyph_centre() {
    let l = listing();
    assert_eq!(l.client_point_for(TextPosition::new(1, 12)), Point::new(30.0 + 12.5 * 8.0, 40.0 + 1.5 * 18.0));
}

#[test]
fn navigation_records_the_anchor() {
    let mut l = listing();
    assert_eq!(l.location_hash(), None);
    l.navigate_to_anchor("#L1");
    assert_eq!(l.location_hash(), Some("#L1"));
}

#[test]
fn detached_containers_are_not_rendered() {
    let mut overlay = RecordingOverlay::new();
    let detached = overlay.create_container("ghost");
    overlay.append_highlight(&detached, HighlightElement {
        class_name: "a b".to_string(),
        rect: Rect::default(),
    });
    assert!(overlay.highlights().is_empty());
    assert_eq!(overlay.render_tree(), "");
    overlay.attach_to_header(&detached);
    assert_eq!(overlay.highlights().len(), 1);
}
