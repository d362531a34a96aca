pub mod api;
pub mod core;
pub mod catalog;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use crate::api::game::{EngineContext, Game, GameConfig};
pub use crate::api::types::{FeedbackStyle, Screen, TextField};
pub use crate::bridge::display::{
    commands_to_json, DisplayCommand, DisplayList, DisplaySink, DEFAULT_MAX_COMMANDS,
    PROTOCOL_VERSION,
};
pub use crate::catalog::{normalize_answer, Catalog, CatalogError, PuzzleRecord};
pub use crate::core::flow::GameFlow;
pub use crate::core::tasks::{FlowTask, TaskId, TaskQueue};
pub use crate::core::time::FixedTimestep;
pub use crate::input::queue::{UiEvent, UiQueue, KEY_ENTER};
pub use crate::input::source::{InputBuffer, InputSource};
