//! Persistence and navigation layer of the OmniStudio shell.
//!
//! The studios themselves (video, image, audio editors) live outside this
//! crate. What lives here is the state they are launched from: the recent
//! projects list, the active-screen state machine, and the small set of
//! user preferences kept next to them in the same key-value medium.

pub mod dashboard;
pub mod error;
pub mod navigation;
pub mod preferences;
pub mod storage;
pub mod store;
pub mod types;

pub use dashboard::Dashboard;
pub use error::{CoreError, Result};
pub use navigation::{NavEvent, NavigationState, Shortcut};
pub use preferences::Theme;
pub use storage::{DirStore, KeyValueStore, MemoryStore};
pub use store::ProjectStore;
pub use types::{Project, ProjectId, Studio, StudioKind};
