mod editor_state;
pub mod context;
pub mod persistence;
pub mod scene;

pub use editor_state::{DragGesture, EditorState};
pub use context::{DrawSettings, EditorContext, Outcome, StateTransitionError, DEFAULT_SAVE_FILE};
pub use persistence::{
    load_scene,
    save_scene,
    LoadOutcome,
    PersistenceError,
    PersistenceResult,
};
pub use scene::{PointRef, Scene, Undone};
