mod editor_state;
pub mod context;
mod persistence;

pub use context::EditorContext;
pub use editor_state::EditorState;
pub use persistence::{
    CanvasSnapshot, FileSnapshotStore, PersistenceError, PersistenceResult, SnapshotStore, SNAPSHOT_VERSION,
};
