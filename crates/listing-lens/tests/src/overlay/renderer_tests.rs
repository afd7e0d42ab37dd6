use super::*;
use crate::host::headless::RecordingOverlay;

fn renderer() -> OverlayRenderer<RecordingOverlay> {
    let metrics = GeometryMetrics::new(8.0, 40.0, 30.0, 18.0).unwrap();
    OverlayRenderer::new(RecordingOverlay::new(), metrics, HighlightClasses::default())
}

fn usage(
    line: u32,
    character: u32,
    width: usize,
) -> HighlightRequest {
    HighlightRequest {
        position: TextPosition::new(line, character),
        width,
        kind: HighlightKind::Usage,
    }
}

#[test]
fn clear_before_any_draw_is_a_no_op() {
    let mut r = renderer();
    r.clear();
    r.clear();
    assert!(!r.has_container());
    assert!(r.layer().containers().is_empty());
}

#[test]
fn first_draw_creates_and_attaches_one_container() {
    let mut r = renderer();
    r.draw(&[usage(0, 4, 1)]);
    r.clear();
    r.draw(&[usage(1, 12, 1)]);
    let containers = r.layer().containers();
    assert_eq!(containers.len(), 1);
    assert_eq!(containers[0].class_name, "intelli-listing");
    assert_eq!(containers[0].attachments, 1);
    assert_eq!(containers[0].children.len(), 1);
    assert_eq!(containers[0].children[0].rect, Rect::new(126.0, 58.0, 8.0, 18.0));
}

#[test]
fn empty_draw_leaves_an_empty_container() {
    let mut r = renderer();
    r.draw(&[]);
    assert!(r.has_container());
    assert!(r.layer().highlights().is_empty());
}

#[test]
fn clear_twice_after_draw_stays_empty() {
    let mut r = renderer();
    r.draw(&[usage(0, 0, 3), usage(1, 0, 7)]);
    assert_eq!(r.layer().highlights().len(), 2);
    r.clear();
    r.clear();
    assert!(r.layer().highlights().is_empty());
}

#[test]
fn kinds_get_distinct_classes() {
    let mut r = renderer();
    let mut definition = usage(0, 4, 1);
    definition.kind = HighlightKind::Definition;
    r.draw(&[definition, usage(1, 12, 1)]);
    let classes: Vec<&str> = r.layer().highlights().iter().map(|h| h.class_name.as_str()).collect();
    assert_eq!(classes, ["intelli-listing-item intelli-listing-definition", "intelli-listing-item intelli-listing-usage"]);
}

#[test]
fn custom_classes_are_used() {
    let settings = HighlightSettings {
        container_class: "lens".to_string(),
        item_class: "lens-item".to_string(),
        usage_class: "lens-use".to_string(),
        definition_class: "lens-def".to_string(),
        mark_definition: false,
    };
    let classes = HighlightClasses::from(&settings);
    assert_eq!(classes.element_class(HighlightKind::Usage), "lens-item lens-use");
    assert_eq!(classes.element_class(HighlightKind::Definition), "lens-item lens-def");
}

#[test]
fn draw_keeps_request_order() {
    let mut r = renderer();
    r.draw(&[usage(0, 4, 1), usage(1, 12, 1), usage(3, 0, 2)]);
    let tops: Vec<f64> = r.layer().highlights().iter().map(|h| h.rect.top).collect();
    assert_eq!(tops, [40.0, 58.0, 94.0]);
}
