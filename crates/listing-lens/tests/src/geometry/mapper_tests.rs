use super::*;

fn metrics(
    glyph_width: f64,
    line_height: f64,
    gutter_width: f64,
    header_height: f64,
) -> GeometryMetrics {
    GeometryMetrics::new(glyph_width, header_height, gutter_width, line_height).unwrap()
}

fn scenario_metrics() -> GeometryMetrics {
    metrics(8.0, 18.0, 30.0, 40.0)
}

const ORIGIN: Point = Point::new(0.0, 0.0);

#[test]
fn click_on_token_maps_to_its_character() {
    let m = scenario_metrics();
    let pos = pixel_to_text(Point::new(30.0 + 8.0 * 4.0, 0.0), ORIGIN, &m);
    assert_eq!(pos, TextPosition::new(0, 4));
}

#[test]
fn click_inside_glyph_floors_to_glyph_start() {
    let m = scenario_metrics();
    let pos = pixel_to_text(Point::new(30.0 + 8.0 * 4.0 + 7.9, 18.0 + 17.9), ORIGIN, &m);
    assert_eq!(pos, TextPosition::new(1, 4));
}

#[test]
fn click_in_gutter_clamps_to_zero() {
    let m = scenario_metrics();
    assert_eq!(pixel_to_text(Point::new(0.0, 0.0), ORIGIN, &m), TextPosition::new(0, 0));
    assert_eq!(pixel_to_text(Point::new(-50.0, -50.0), ORIGIN, &m), TextPosition::new(0, 0));
}

#[test]
fn surface_origin_is_subtracted() {
    let m = scenario_metrics();
    let origin = Point::new(100.0, 250.0);
    let pos = pixel_to_text(Point::new(100.0 + 30.0 + 8.0 * 2.0, 250.0 + 18.0 * 3.0), origin, &m);
    assert_eq!(pos, TextPosition::new(3, 2));
}

#[test]
fn no_upper_clamp_is_applied() {
    let m = scenario_metrics();
    let pos = pixel_to_text(Point::new(30.0 + 8.0 * 500.0, 18.0 * 900.0), ORIGIN, &m);
    assert_eq!(pos, TextPosition::new(900, 500));
}

#[test]
fn rect_matches_scenario_rows() {
    let m = scenario_metrics();
    assert_eq!(text_to_rect(TextPosition::new(0, 4), 1, &m), Rect::new(62.0, 40.0, 8.0, 18.0));
    assert_eq!(text_to_rect(TextPosition::new(1, 12), 1, &m), Rect::new(126.0, 58.0, 8.0, 18.0));
}

#[test]
fn rect_width_scales_with_glyph_count() {
    let m = scenario_metrics();
    let rect = text_to_rect(TextPosition::new(2, 0), 7, &m);
    assert_eq!(rect.width, 56.0);
    assert_eq!(rect.height, 18.0);
    assert_eq!(rect.left, 30.0);
}

#[test]
fn rect_top_left_round_trips_to_position() {
    let grids = [metrics(8.0, 18.0, 30.0, 40.0), metrics(7.5, 17.25, 42.0, 0.0), metrics(9.0, 20.5, 0.0, 36.5)];
    for m in grids {
        // The container frame sits one header above the table.
        let origin = Point::new(0.0, m.header_height());
        for line in [0u32, 1, 2, 17, 250] {
            for character in [0u32, 1, 5, 63, 120] {
                let position = TextPosition::new(line, character);
                for width in [1usize, 4] {
                    let rect = text_to_rect(position, width, &m);
                    assert_eq!(pixel_to_text(rect.top_left(), origin, &m), position, "{m:?}");
                }
            }
        }
    }
}

#[test]
fn decimal_metrics_round_trip_every_cell() {
    let grids = [metrics(7.2, 16.8, 49.1, 43.3), metrics(8.4, 19.6, 30.3, 40.7), metrics(6.6, 15.4, 41.7, 37.1)];
    for m in grids {
        let origin = Point::new(0.0, m.header_height());
        for line in 0u32..400 {
            for character in 0u32..200 {
                let position = TextPosition::new(line, character);
                let rect = text_to_rect(position, 1, &m);
                assert_eq!(pixel_to_text(rect.top_left(), origin, &m), position, "{m:?}");
            }
        }
    }
}

#[test]
fn click_just_left_of_a_cell_stays_in_the_previous_one() {
    let m = metrics(7.2, 16.8, 49.1, 43.3);
    let rect = text_to_rect(TextPosition::new(3, 5), 1, &m);
    let origin = Point::new(0.0, m.header_height());
    let before = Point::new(rect.left - 0.01, rect.top - 0.01);
    assert_eq!(pixel_to_text(before, origin, &m), TextPosition::new(2, 4));
}

#[test]
fn degenerate_metrics_are_rejected() {
    assert!(GeometryMetrics::new(0.0, 0.0, 0.0, 18.0).is_err());
    assert!(GeometryMetrics::new(8.0, 0.0, 0.0, 0.0).is_err());
    assert!(GeometryMetrics::new(f64::NAN, 0.0, 0.0, 18.0).is_err());
    assert!(GeometryMetrics::new(8.0, -1.0, 0.0, 18.0).is_err());
    assert!(GeometryMetrics::new(8.0, 0.0, 0.0, 18.0).is_ok());
}
