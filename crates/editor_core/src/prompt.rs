use std::path::{Path, PathBuf};

use crate::document::DocumentSource;

/// Modal interactions the shell needs from the host toolkit.
pub trait Prompter {
    /// Yes/no question shown before unsaved changes would be discarded.
    fn confirm_discard_changes(&mut self) -> bool;
    /// `None` when the user cancels the picker.
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;
    /// `None` when the user cancels the picker.
    fn pick_save_path(&mut self, suggestion: &SaveSuggestion) -> Option<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSuggestion {
    pub directory: Option<PathBuf>,
    pub file_name: String,
}

pub const UNTITLED_FILE_NAME: &str = "untitled.txt";

impl SaveSuggestion {
    pub fn for_source(source: &DocumentSource) -> Self {
        match source {
            DocumentSource::Untitled => Self {
                directory: None,
                file_name: UNTITLED_FILE_NAME.to_string(),
            },
            DocumentSource::File(path) => Self {
                directory: path.parent().map(Path::to_path_buf),
                file_name: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| UNTITLED_FILE_NAME.to_string()),
            },
            DocumentSource::Gist { filename, .. } => Self {
                directory: None,
                file_name: if filename.trim().is_empty() {
                    UNTITLED_FILE_NAME.to_string()
                } else {
                    filename.clone()
                },
            },
        }
    }
}
