//! Backend commands queued from UI to backend worker.

use gist_client::GistId;

pub enum BackendCommand {
    FetchGist { gist_id: GistId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchGist { .. } => "fetch_gist",
        }
    }
}
