//! Backend-to-UI events and the error model shown in dialogs.

use editor_core::EditorError;
use gist_client::GistError;

pub enum UiEvent {
    Info(String),
    GistLoaded {
        gist_id: String,
        filename: String,
        content: String,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    NotFound,
    RateLimited,
    Validation,
    Io,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    OpenFile,
    SaveFile,
    LoadGist,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_gist_error(err: &GistError) -> Self {
        let category = match err {
            GistError::InvalidId(_) | GistError::InvalidApiUrl { .. } => {
                UiErrorCategory::Validation
            }
            GistError::Timeout(_) | GistError::Transport(_) => UiErrorCategory::Transport,
            GistError::Status { status: 404, .. } => UiErrorCategory::NotFound,
            GistError::Status { status: 403 | 429, message }
                if message.to_ascii_lowercase().contains("rate limit") =>
            {
                UiErrorCategory::RateLimited
            }
            GistError::Status { .. } => UiErrorCategory::Unknown,
            GistError::Decode(_) | GistError::NoFiles | GistError::MissingContent(_) => {
                UiErrorCategory::Validation
            }
        };
        Self {
            category,
            context: UiErrorContext::LoadGist,
            message: format!("Could not load Gist: {err}"),
        }
    }

    pub fn from_editor_error(context: UiErrorContext, err: &EditorError) -> Self {
        let category = match err {
            EditorError::NotText { .. } => UiErrorCategory::Validation,
            EditorError::Read { .. } | EditorError::Write { .. } => UiErrorCategory::Io,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &'static str {
        match self.context {
            UiErrorContext::BackendStartup => "Startup error",
            UiErrorContext::OpenFile => "Could not open file",
            UiErrorContext::SaveFile => "Could not save file",
            UiErrorContext::LoadGist => "Error",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self.category {
            UiErrorCategory::Transport => Some("Check your network connection and retry."),
            UiErrorCategory::NotFound => Some("Check the Gist ID; secret gists need the full ID."),
            UiErrorCategory::RateLimited => {
                Some("Unauthenticated requests are rate limited; wait a while and retry.")
            }
            UiErrorCategory::Io => Some("Check the path and its permissions."),
            UiErrorCategory::Validation | UiErrorCategory::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf, time::Duration};

    use super::*;

    #[test]
    fn classifies_gist_errors() {
        let not_found = UiError::from_gist_error(&GistError::Status {
            status: 404,
            message: "Not Found".to_string(),
        });
        assert_eq!(not_found.category(), UiErrorCategory::NotFound);
        assert_eq!(not_found.context(), UiErrorContext::LoadGist);
        assert_eq!(
            not_found.message(),
            "Could not load Gist: gist service returned 404: Not Found"
        );

        let limited = UiError::from_gist_error(&GistError::Status {
            status: 403,
            message: "API rate limit exceeded".to_string(),
        });
        assert_eq!(limited.category(), UiErrorCategory::RateLimited);

        let forbidden = UiError::from_gist_error(&GistError::Status {
            status: 403,
            message: "Forbidden".to_string(),
        });
        assert_eq!(forbidden.category(), UiErrorCategory::Unknown);

        let timeout = UiError::from_gist_error(&GistError::Timeout(Duration::from_secs(15)));
        assert_eq!(timeout.category(), UiErrorCategory::Transport);
        assert!(timeout.hint().is_some());

        let empty = UiError::from_gist_error(&GistError::NoFiles);
        assert_eq!(empty.category(), UiErrorCategory::Validation);
    }

    #[test]
    fn classifies_editor_errors() {
        let err = EditorError::Write {
            path: PathBuf::from("/readonly/out.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let ui_err = UiError::from_editor_error(UiErrorContext::SaveFile, &err);
        assert_eq!(ui_err.category(), UiErrorCategory::Io);
        assert_eq!(ui_err.title(), "Could not save file");
        assert!(ui_err.message().contains("/readonly/out.txt"));
    }

    #[test]
    fn startup_errors_keep_their_category() {
        let err = UiError::new(
            UiErrorCategory::Unknown,
            UiErrorContext::BackendStartup,
            "background worker startup failure",
        );
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.title(), "Startup error");
        assert_eq!(err.message(), "background worker startup failure");
        assert!(err.hint().is_none());
    }
}
