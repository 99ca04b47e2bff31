use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{}' is not UTF-8 text", path.display())]
    NotText { path: PathBuf },
    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EditorError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::NotText { path } | Self::Write { path, .. } => path,
        }
    }
}
