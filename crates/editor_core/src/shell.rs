//! Editor shell operations: open, save, remote load and the unsaved-changes guard.
//!
//! The shell owns the [`Document`] and asks a [`Prompter`] for every modal decision,
//! so the same flow runs under the desktop toolkit and under scripted tests.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    document::{Document, DocumentSource},
    error::EditorError,
    file_io,
    prompt::{Prompter, SaveSuggestion},
    title::{render_title, DEFAULT_WINDOW_TITLE},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(PathBuf),
    /// The user kept their unsaved changes.
    Declined,
    /// The file picker was dismissed.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct EditorShell {
    document: Document,
    title_base: String,
}

impl Default for EditorShell {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_TITLE)
    }
}

impl EditorShell {
    pub fn new(title_base: impl Into<String>) -> Self {
        Self {
            document: Document::new(),
            title_base: title_base.into(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn title(&self) -> String {
        render_title(&self.title_base, &self.document)
    }

    /// Recomputes the dirty flag after an edit. Returns `true` when the title changed.
    pub fn on_text_change(&mut self) -> bool {
        self.document.on_text_changed()
    }

    pub fn can_exit(&self, prompter: &mut dyn Prompter) -> bool {
        if !self.document.is_dirty() {
            return true;
        }
        prompter.confirm_discard_changes()
    }

    pub fn open(&mut self, prompter: &mut dyn Prompter) -> Result<OpenOutcome, EditorError> {
        if !self.can_exit(prompter) {
            return Ok(OpenOutcome::Declined);
        }

        let start_dir = self
            .document
            .source()
            .file_path()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        let Some(path) = prompter.pick_open_path(start_dir.as_deref()) else {
            return Ok(OpenOutcome::Cancelled);
        };

        self.open_path(&path)?;
        Ok(OpenOutcome::Opened(path))
    }

    /// Loads `path` without the unsaved-changes guard.
    pub fn open_path(&mut self, path: &Path) -> Result<(), EditorError> {
        let content = file_io::read_text(path).inspect_err(|err| {
            warn!(path = %path.display(), "open failed: {err}");
        })?;
        info!(path = %path.display(), bytes = content.len(), "opened file");
        self.document
            .load(content, DocumentSource::File(path.to_path_buf()));
        Ok(())
    }

    pub fn save(&mut self, prompter: &mut dyn Prompter) -> Result<SaveOutcome, EditorError> {
        let suggestion = SaveSuggestion::for_source(self.document.source());
        let Some(path) = prompter.pick_save_path(&suggestion) else {
            return Ok(SaveOutcome::Cancelled);
        };

        self.save_to(&path)?;
        Ok(SaveOutcome::Saved(path))
    }

    pub fn save_to(&mut self, path: &Path) -> Result<(), EditorError> {
        file_io::write_text(path, self.document.text()).inspect_err(|err| {
            warn!(path = %path.display(), "save failed: {err}");
        })?;
        info!(
            path = %path.display(),
            bytes = self.document.text().len(),
            "saved file"
        );
        self.document
            .mark_clean(DocumentSource::File(path.to_path_buf()));
        Ok(())
    }

    /// Gate checked before prompting for a snippet id.
    pub fn begin_load_remote(&self, prompter: &mut dyn Prompter) -> bool {
        self.can_exit(prompter)
    }

    /// Replaces the buffer with fetched snippet content and resets the snapshot.
    pub fn apply_remote(&mut self, id: &str, filename: &str, content: String) {
        info!(gist_id = id, filename, bytes = content.len(), "loaded gist");
        self.document.load(
            content,
            DocumentSource::Gist {
                id: id.to_string(),
                filename: filename.to_string(),
            },
        );
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
