//! Applies worker events to the editor session on the UI thread.

use std::path::Path;

use editor_core::EditorShell;

use crate::controller::events::{UiError, UiEvent};

pub struct SessionState {
    pub shell: EditorShell,
    pub status: String,
    /// Gist id of the fetch the worker is running, if any.
    pub fetch_in_flight: Option<String>,
    /// Error waiting to be shown in the error dialog.
    pub pending_error: Option<UiError>,
}

impl SessionState {
    pub fn new(shell: EditorShell) -> Self {
        Self {
            shell,
            status: "Ready".to_string(),
            fetch_in_flight: None,
            pending_error: None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight.is_some()
    }

    /// Records a local file replacing the buffer. A pending gist fetch is
    /// abandoned, so its result is dropped when it arrives.
    pub fn file_opened(&mut self, path: &Path) {
        if let Some(gist_id) = self.fetch_in_flight.take() {
            tracing::info!(%gist_id, path = %path.display(), "abandoning gist fetch after open");
        }
        self.status = format!("Opened {}", path.display());
    }

    pub fn report_error(&mut self, err: UiError) {
        tracing::warn!(
            context = ?err.context(),
            category = ?err.category(),
            "{}",
            err.message()
        );
        self.status = err.message().to_string();
        self.pending_error = Some(err);
    }
}

pub fn apply_event(state: &mut SessionState, event: UiEvent) {
    match event {
        UiEvent::Info(message) => {
            state.status = message;
        }
        UiEvent::GistLoaded {
            gist_id,
            filename,
            content,
        } => {
            if state.fetch_in_flight.as_deref() != Some(gist_id.as_str()) {
                tracing::warn!(%gist_id, "dropping gist result nobody is waiting for");
                return;
            }
            state.fetch_in_flight = None;
            state.shell.apply_remote(&gist_id, &filename, content);
            state.status = format!("Loaded {filename} from gist {gist_id}");
        }
        UiEvent::Error(err) => {
            state.fetch_in_flight = None;
            state.report_error(err);
        }
    }
}
