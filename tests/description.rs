use egui::Pos2;
use sketch_canvas::description::{generate, EMPTY_DESCRIPTION};
use sketch_canvas::element::{factory, Element, Style};
use sketch_canvas::region::RegionSet;
use sketch_canvas::EditorContext;

fn epic_sketch() -> Vec<Element> {
    let style = Style::default();
    let mut rect = factory::create_rectangle(10.0, 10.0, 20.0, 20.0, false, &style);
    rect.z_index = 1;
    let mut text = factory::create_text(Pos2::new(50.0, 50.0), "EPIC", 4.0, "sans-serif", &style);
    text.z_index = 2;
    vec![rect, text]
}

#[test]
fn test_empty_input() {
    let result = generate(&[], &[]);
    assert_eq!(result.description, "No sketch annotations provided.");
    assert_eq!(result.description, EMPTY_DESCRIPTION);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn test_box_and_text_example() {
    let result = generate(&epic_sketch(), &[]);
    assert!(result.description.contains("top-left"), "{}", result.description);
    assert!(result.description.contains("\"EPIC\" in the center"), "{}", result.description);
    assert!(result.prompt_description.contains("\"EPIC\""));
    assert!(!result.prompt_description.contains("box"));
}

#[test]
fn test_text_is_placed_by_its_anchor() {
    let text = factory::create_text(Pos2::new(10.0, 34.0), "Hi", 4.0, "sans-serif", &Style::default());
    let result = generate(&[text], &[]);
    assert!(result.description.contains("\"Hi\" in the left side"), "{}", result.description);
}

#[test]
fn test_arrow_across_the_canvas() {
    let arrow = factory::create_arrow(Pos2::new(20.0, 50.0), Pos2::new(80.0, 50.0), &Style::default());
    let result = generate(&[arrow], &[]);
    assert!(result
        .description
        .contains("an arrow pointing from the left side to the right side"));
    assert!(!result.description.contains("in the left side"));
}

#[test]
fn test_regions_come_first() {
    let mut regions = RegionSet::new();
    let id = regions
        .create_from_drag(Pos2::new(30.0, 30.0), Pos2::new(70.0, 70.0))
        .unwrap();
    regions.set_label(id, "product photo");
    regions.create_from_drag(Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));

    let result = generate(&epic_sketch(), regions.regions());
    assert!(result
        .description
        .starts_with("The composition should include: product photo in the center ("));
    assert!(result.prompt_description.starts_with("The composition should include:"));
    assert!((result.confidence - 0.9).abs() < 1e-6);
}

#[test]
fn test_generation_is_deterministic() {
    let elements = epic_sketch();
    let first = generate(&elements, &[]);
    generate(&[], &[]);
    let second = generate(&elements, &[]);
    assert_eq!(first, second);
}

#[test]
fn test_elements_are_described_in_z_order() {
    let style = Style::default();
    let mut top = factory::create_text(Pos2::new(10.0, 90.0), "second", 4.0, "sans-serif", &style);
    top.z_index = 2;
    let mut bottom = factory::create_text(Pos2::new(10.0, 10.0), "first", 4.0, "sans-serif", &style);
    bottom.z_index = 1;

    let result = generate(&[top, bottom], &[]);
    let first = result.description.find("first").unwrap();
    let second = result.description.find("second").unwrap();
    assert!(first < second);
}

#[test]
fn test_editor_describes_current_canvas() {
    let mut editor = EditorContext::default();
    editor.create_region(Pos2::new(60.0, 60.0), Pos2::new(95.0, 95.0));
    let id = editor.regions().regions()[0].id;
    editor.update_regions(|regions| regions.set_label(id, "logo"));

    let result = editor.describe();
    assert!(result.description.contains("logo in the bottom-right"), "{}", result.description);
}
