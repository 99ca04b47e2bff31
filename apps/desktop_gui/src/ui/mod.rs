//! UI layer for the editor window: app shell, dialogs and persisted view preferences.

pub mod app;
pub mod dialogs;
pub mod preferences;

pub use app::{EditorApp, StartupConfig};
pub use preferences::{EditorPreferences, PREFERENCES_STORAGE_KEY};
