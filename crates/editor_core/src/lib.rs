//! Toolkit-independent editor state: the text buffer, its clean snapshot, local file
//! I/O and the shell operations the desktop app wires to its menu.

pub mod document;
pub mod error;
pub mod file_io;
pub mod prompt;
pub mod shell;
pub mod title;

pub use document::{Document, DocumentSource};
pub use error::EditorError;
pub use prompt::{Prompter, SaveSuggestion};
pub use shell::{EditorShell, OpenOutcome, SaveOutcome};
pub use title::{render_title, DEFAULT_WINDOW_TITLE, MODIFIED_MARKER};
