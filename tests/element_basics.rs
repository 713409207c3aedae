use egui::{Pos2, Vec2};
use sketch_canvas::element::{factory, Element, StickerTemplate, Style};
use sketch_canvas::geometry::hit_testing::{hit_test, DEFAULT_HIT_TOLERANCE};

fn every_variant() -> Vec<Element> {
    let style = Style::default();
    vec![
        factory::create_freehand(vec![Pos2::new(10.0, 10.0), Pos2::new(20.0, 20.0)], &style),
        factory::create_rectangle(10.0, 10.0, 20.0, 20.0, true, &style),
        factory::create_circle(50.0, 50.0, 10.0, 5.0, true, &style),
        factory::create_line(Pos2::new(10.0, 60.0), Pos2::new(40.0, 60.0), &style),
        factory::create_arrow(Pos2::new(20.0, 50.0), Pos2::new(80.0, 50.0), &style),
        factory::create_text(Pos2::new(50.0, 50.0), "EPIC", 4.0, "sans-serif", &style),
        factory::create_sticker(&StickerTemplate::emoji("star", "⭐"), Pos2::new(70.0, 30.0), 10.0, &style),
        factory::create_image("photo.png", Pos2::new(50.0, 50.0), 40.0, 30.0, &style),
    ]
}

#[test]
fn test_hit_at_centroid_and_miss_far_away() {
    for element in every_variant() {
        assert!(
            hit_test(element.centroid(), &element, DEFAULT_HIT_TOLERANCE),
            "{} should be hit at its centroid",
            element.type_name()
        );
        let far = element.bounds().max + Vec2::splat(30.0);
        assert!(
            !hit_test(far, &element, DEFAULT_HIT_TOLERANCE),
            "{} should not be hit far outside its bounds",
            element.type_name()
        );
    }
}

#[test]
fn test_unfilled_shapes_hit_on_outline_only() {
    let style = Style::default();
    let rect = factory::create_rectangle(10.0, 10.0, 20.0, 20.0, false, &style);
    assert!(hit_test(Pos2::new(10.0, 20.0), &rect, DEFAULT_HIT_TOLERANCE));
    assert!(!hit_test(rect.centroid(), &rect, DEFAULT_HIT_TOLERANCE));

    let circle = factory::create_circle(50.0, 50.0, 10.0, 10.0, false, &style);
    assert!(hit_test(Pos2::new(60.0, 50.0), &circle, DEFAULT_HIT_TOLERANCE));
    assert!(!hit_test(circle.centroid(), &circle, DEFAULT_HIT_TOLERANCE));
}

#[test]
fn test_move_and_back_restores_coordinates() {
    let delta = Vec2::new(7.5, -3.25);
    for original in every_variant() {
        let mut element = original.clone();
        assert_eq!(element.translate(delta), delta, "{} was clamped", element.type_name());
        element.translate(-delta);
        let (before, after) = (original.bounds(), element.bounds());
        assert!((before.min - after.min).length() < 1e-4, "{}", element.type_name());
        assert!((before.max - after.max).length() < 1e-4, "{}", element.type_name());
    }
}

#[test]
fn test_translate_is_clamped_to_canvas() {
    let mut rect = factory::create_rectangle(70.0, 10.0, 20.0, 20.0, false, &Style::default());
    let applied = rect.translate(Vec2::new(50.0, 0.0));
    assert_eq!(applied, Vec2::new(10.0, 0.0));
    assert_eq!(rect.bounds().max.x, 100.0);
}

#[test]
fn test_freehand_validity() {
    let style = Style::default();
    assert!(!factory::create_freehand(vec![Pos2::new(5.0, 5.0)], &style).is_valid());
    assert!(factory::create_freehand(vec![Pos2::new(5.0, 5.0), Pos2::new(6.0, 5.0)], &style).is_valid());
    assert!(!factory::create_freehand(vec![Pos2::new(5.0, 5.0), Pos2::new(5.0, 5.0)], &style).is_valid());
}

#[test]
fn test_element_json_uses_type_tag() {
    let rect = factory::create_rectangle(10.0, 10.0, 20.0, 20.0, false, &Style::default());
    let json = serde_json::to_value(&rect).unwrap();
    assert_eq!(json["type"], "rectangle");
    assert_eq!(json["strokeWidth"], 3.0);
    assert_eq!(json["filled"], false);

    let parsed: Element = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, rect);
}
