use egui::Pos2;
use sketch_canvas::placement::AssetInfo;
use sketch_canvas::state::{CanvasSnapshot, FileSnapshotStore, PersistenceError, SnapshotStore};
use sketch_canvas::{EditorContext, Tool};

fn sketched_editor() -> EditorContext {
    let mut editor = EditorContext::default();
    editor.set_tool(Tool::Rectangle);
    editor.on_pointer_down(Pos2::new(10.0, 10.0), false);
    editor.on_pointer_up(Pos2::new(30.0, 30.0), false);
    editor.add_asset(&AssetInfo {
        id: "hero".to_string(),
        url: "hero.png".to_string(),
        thumbnail_url: "hero-thumb.png".to_string(),
        width: 800,
        height: 600,
        processed_url: None,
    });
    editor.create_region(Pos2::new(50.0, 50.0), Pos2::new(90.0, 90.0));
    editor
}

#[test]
fn test_snapshot_json_round_trip_restores_everything() {
    let editor = sketched_editor();
    let json = editor.snapshot().to_json().unwrap();

    let mut restored = EditorContext::default();
    restored.restore(CanvasSnapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.elements(), editor.elements());
    assert_eq!(restored.placements().placements(), editor.placements().placements());
    assert_eq!(restored.regions().regions(), editor.regions().regions());
    assert!(!restored.can_undo());
}

#[test]
fn test_undo_after_restore_returns_to_loaded_canvas() {
    let editor = sketched_editor();
    let mut restored = EditorContext::default();
    restored.restore(editor.snapshot()).unwrap();

    restored.set_tool(Tool::Sticker);
    restored.on_pointer_down(Pos2::new(70.0, 20.0), false);
    assert_eq!(restored.elements().len(), 2);

    restored.undo();
    assert_eq!(restored.elements(), editor.elements());
}

#[test]
fn test_malformed_snapshot_is_rejected() {
    assert!(matches!(
        CanvasSnapshot::from_json("{\"version\": 1, \"elements\": [{\"type\": \"blob\"}]}"),
        Err(PersistenceError::Serialization(_))
    ));

    let editor = sketched_editor();
    let mut snapshot = editor.snapshot();
    snapshot.elements.push(snapshot.elements[0].clone());
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(matches!(
        CanvasSnapshot::from_json(&json),
        Err(PersistenceError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_file_store_round_trip() {
    let dir = std::env::temp_dir().join(format!("sketch-canvas-{}", uuid::Uuid::new_v4()));
    let mut store = FileSnapshotStore::new(&dir);
    let snapshot = sketched_editor().snapshot();

    store.save("draft_1", &snapshot).unwrap();
    assert_eq!(store.names().unwrap(), vec!["draft_1".to_string()]);
    assert_eq!(store.load("draft_1").unwrap(), snapshot);
    assert!(matches!(store.load("missing"), Err(PersistenceError::Io(_))));

    std::fs::remove_dir_all(dir).unwrap();
}
