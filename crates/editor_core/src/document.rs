use std::path::{Path, PathBuf};

/// Where the buffer's current content was loaded from or last saved to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocumentSource {
    #[default]
    Untitled,
    File(PathBuf),
    Gist {
        id: String,
        filename: String,
    },
}

impl DocumentSource {
    pub fn label(&self) -> String {
        match self {
            Self::Untitled => "untitled".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Gist { id, filename } => format!("gist {id} ({filename})"),
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path.as_path()),
            _ => None,
        }
    }
}

/// The editable buffer plus the snapshot it is compared against.
///
/// `dirty` is kept in sync with `buffer != clean_snapshot` by every mutating method;
/// callers editing through [`Document::buffer_mut`] must follow up with
/// [`Document::on_text_changed`].
#[derive(Debug, Clone, Default)]
pub struct Document {
    buffer: String,
    clean_snapshot: String,
    dirty: bool,
    source: DocumentSource,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn clean_snapshot(&self) -> &str {
        &self.clean_snapshot
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Replaces the buffer as a user edit would, leaving the snapshot alone.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.buffer = text.into();
        self.on_text_changed()
    }

    /// Recomputes the dirty flag. Returns `true` when the flag flipped.
    pub fn on_text_changed(&mut self) -> bool {
        let dirty = self.buffer != self.clean_snapshot;
        let flipped = dirty != self.dirty;
        self.dirty = dirty;
        flipped
    }

    /// Replaces buffer and snapshot wholesale, as after a successful open or remote load.
    pub fn load(&mut self, content: String, source: DocumentSource) {
        self.clean_snapshot.clone_from(&content);
        self.buffer = content;
        self.source = source;
        self.dirty = false;
    }

    /// Captures the current buffer as the clean snapshot, as after a successful save.
    pub fn mark_clean(&mut self, source: DocumentSource) {
        self.clean_snapshot.clone_from(&self.buffer);
        self.source = source;
        self.dirty = false;
    }
}
