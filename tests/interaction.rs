use egui::{Key, Modifiers, Pos2, Vec2};
use sketch_canvas::element::ElementKind;
use sketch_canvas::event::{EditorEvent, EventRecorder};
use sketch_canvas::input::InputEvent;
use sketch_canvas::{EditorConfig, EditorContext, EditorState, Tool};

fn down(pos: (f32, f32)) -> InputEvent {
    InputEvent::PointerDown {
        pos: Pos2::new(pos.0, pos.1),
        precision: false,
    }
}

fn moved(pos: (f32, f32)) -> InputEvent {
    InputEvent::PointerMove {
        pos: Pos2::new(pos.0, pos.1),
        precision: false,
    }
}

fn up(pos: (f32, f32)) -> InputEvent {
    InputEvent::PointerUp {
        pos: Pos2::new(pos.0, pos.1),
        precision: false,
    }
}

fn key(key: Key) -> InputEvent {
    InputEvent::KeyDown {
        key,
        modifiers: Modifiers::NONE,
    }
}

fn editor_with_box() -> EditorContext {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Rectangle);
    for event in [down((10.0, 10.0)), moved((20.0, 20.0)), up((30.0, 30.0))] {
        editor.handle_event(&event);
    }
    editor.set_tool(Tool::Select);
    editor
}

#[test]
fn test_small_drag_is_a_click() {
    let mut editor = editor_with_box();
    let before = editor.elements().to_vec();

    for event in [down((10.0, 20.0)), moved((10.3, 20.2)), up((10.3, 20.2))] {
        editor.handle_event(&event);
    }

    assert_eq!(editor.history().entries().len(), 1);
    assert_eq!(editor.elements(), &before[..]);
    assert_eq!(editor.selected(), Some(before[0].id));
}

#[test]
fn test_drag_commits_one_move_entry() {
    let mut editor = editor_with_box();
    for event in [down((10.0, 20.0)), moved((15.0, 22.0)), moved((20.0, 25.0)), up((20.0, 25.0))] {
        editor.handle_event(&event);
    }

    assert_eq!(editor.history().entries().len(), 2);
    assert_eq!(editor.history().current_action(), Some("Move element"));
    let bounds = editor.elements()[0].bounds();
    assert_eq!(bounds.min, Pos2::new(20.0, 15.0));
}

#[test]
fn test_escape_restores_pre_gesture_list() {
    let mut editor = editor_with_box();
    let before = editor.elements().to_vec();

    editor.handle_event(&down((10.0, 20.0)));
    editor.handle_event(&moved((60.0, 70.0)));
    editor.handle_event(&key(Key::Escape));
    editor.handle_event(&up((60.0, 70.0)));

    assert_eq!(editor.elements(), &before[..]);
    assert_eq!(editor.history().entries().len(), 1);
    assert_eq!(editor.state(), &EditorState::Idle);
}

#[test]
fn test_escape_while_drawing_discards_draft() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Circle);
    editor.handle_event(&down((50.0, 50.0)));
    editor.handle_event(&moved((60.0, 60.0)));
    assert!(editor.state().draft().is_some());

    editor.handle_event(&key(Key::Escape));
    assert!(editor.elements().is_empty());
    assert!(!editor.can_undo());
}

#[test]
fn test_precision_constrains_rectangle_to_square() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Rectangle);
    editor.on_pointer_down(Pos2::new(10.0, 10.0), true);
    editor.on_pointer_move(Pos2::new(40.0, 20.0), true);
    editor.on_pointer_up(Pos2::new(40.0, 20.0), true);

    let ElementKind::Rectangle(rect) = &editor.elements()[0].kind else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect.width, rect.height);
}

#[test]
fn test_freehand_needs_two_points() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Pen);
    editor.handle_event(&down((10.0, 10.0)));
    editor.handle_event(&up((10.0, 10.0)));
    assert!(editor.elements().is_empty());

    editor.handle_event(&down((10.0, 10.0)));
    editor.handle_event(&moved((15.0, 12.0)));
    editor.handle_event(&up((15.0, 12.0)));
    assert_eq!(editor.elements().len(), 1);
    assert_eq!(editor.elements()[0].type_name(), "freehand");
}

#[test]
fn test_eraser_removes_topmost_hit() {
    let mut editor = editor_with_box();
    editor.set_tool(Tool::Rectangle);
    for event in [down((5.0, 20.0)), moved((15.0, 30.0)), up((15.0, 30.0))] {
        editor.handle_event(&event);
    }
    let top = editor.elements()[1].id;

    editor.handle_event(&key(Key::E));
    assert_eq!(editor.tool(), Tool::Eraser);
    // both boxes have an edge through (10, 20); the newer one is on top
    editor.handle_event(&down((10.0, 20.0)));

    assert_eq!(editor.elements().len(), 1);
    assert!(editor.elements().iter().all(|element| element.id != top));
    assert_eq!(editor.history().entries().len(), 3);
}

#[test]
fn test_sticker_tool_stamps_immediately() {
    let mut editor = EditorContext::default();
    editor.handle_event(&key(Key::S));
    editor.handle_event(&down((40.0, 40.0)));

    assert_eq!(editor.elements().len(), 1);
    assert_eq!(editor.elements()[0].type_name(), "sticker");
    assert!(editor.state().is_idle());
}

#[test]
fn test_delete_and_escape_with_selection() {
    let mut editor = editor_with_box();
    let id = editor.elements()[0].id;

    editor.select(Some(id));
    editor.handle_event(&key(Key::Escape));
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.elements().len(), 1);

    editor.select(Some(id));
    editor.handle_event(&key(Key::Delete));
    assert!(editor.elements().is_empty());
    assert_eq!(editor.history().current_action(), Some("Delete element"));
}

#[test]
fn test_text_blur_discards_entry() {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Text);
    editor.handle_event(&down((30.0, 30.0)));
    editor.update_text_entry("draft");
    editor.set_tool(Tool::Select);

    assert!(editor.state().is_idle());
    assert!(editor.elements().is_empty());
}

#[test]
fn test_image_resize_through_corner_handle() {
    let mut editor = EditorContext::default();
    let id = editor.insert_image("photo.png", Vec2::new(1600.0, 900.0)).unwrap();
    let rect = editor.selected_element().unwrap().bounds();
    let aspect = rect.width() / rect.height();

    editor.on_pointer_down(rect.right_bottom(), false);
    assert!(matches!(editor.state(), EditorState::Resizing { .. }));
    let target = rect.right_bottom() - Vec2::splat(10.0);
    editor.on_pointer_move(target, false);
    editor.on_pointer_up(target, false);

    let resized = editor.document().find(id).unwrap().bounds();
    assert_eq!(resized.min, rect.min);
    assert!(resized.width() < rect.width());
    assert!((resized.width() / resized.height() - aspect).abs() < 1e-3);
    assert_eq!(editor.history().current_action(), Some("Resize image"));
}

#[test]
fn test_snapping_applies_to_shape_anchors() {
    let mut config = EditorConfig::default();
    config.snap.enabled = true;
    let mut editor = EditorContext::new(config);
    editor.set_tool(Tool::Rectangle);
    for event in [down((11.0, 12.0)), moved((29.0, 31.0)), up((29.0, 31.0))] {
        editor.handle_event(&event);
    }

    let bounds = editor.elements()[0].bounds();
    assert_eq!(bounds.min, Pos2::new(10.0, 10.0));
    assert_eq!(bounds.max, Pos2::new(30.0, 30.0));
}

#[test]
fn test_events_report_each_commit() {
    let mut editor = EditorContext::default();
    let recorder = EventRecorder::new();
    editor.event_bus.subscribe(Box::new(recorder.clone()));

    editor.set_tool(Tool::Line);
    for event in [down((10.0, 10.0)), moved((40.0, 10.0)), up((40.0, 10.0))] {
        editor.handle_event(&event);
    }

    let events = recorder.events();
    let added = events
        .iter()
        .filter(|event| matches!(event, EditorEvent::ElementAdded { .. }))
        .count();
    assert_eq!(added, 1);
    assert!(events.contains(&EditorEvent::ToolChanged {
        old: Tool::Select,
        new: Tool::Line
    }));
}
