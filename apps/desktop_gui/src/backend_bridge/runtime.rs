//! Runtime bridge between UI command queue and backend event intake.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use crossbeam_channel::{Receiver, Sender};
use gist_client::SnippetSource;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

/// Spawns the worker thread. It exits once every command sender is dropped.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    source: Arc<dyn SnippetSource>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorCategory::Unknown,
                    UiErrorContext::BackendStartup,
                    format!("background worker startup failure: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::debug!("background worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchGist { gist_id } => {
                        tracing::info!(gist_id = %gist_id, "backend: fetch_gist");
                        let _ = ui_tx.try_send(UiEvent::Info(format!(
                            "Fetching gist {gist_id}..."
                        )));
                        let event = match source.fetch_snippet(&gist_id).await {
                            Ok(snippet) => UiEvent::GistLoaded {
                                gist_id: snippet.gist_id,
                                filename: snippet.filename,
                                content: snippet.content,
                            },
                            Err(err) => {
                                tracing::error!(
                                    gist_id = %gist_id,
                                    "backend: fetch_gist failed: {err}"
                                );
                                UiEvent::Error(UiError::from_gist_error(&err))
                            }
                        };
                        if ui_tx.send(event).is_err() {
                            tracing::debug!("ui event receiver dropped; stopping worker");
                            break;
                        }
                    }
                }
            }
            tracing::debug!("background worker stopped");
        });
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use crossbeam_channel::bounded;
    use gist_client::{GistError, GistId, Snippet};

    use super::*;

    struct FakeSource;

    #[async_trait]
    impl SnippetSource for FakeSource {
        async fn fetch_snippet(&self, id: &GistId) -> Result<Snippet, GistError> {
            match id.as_str() {
                "good" => Ok(Snippet {
                    gist_id: id.to_string(),
                    filename: "levels.txt".to_string(),
                    content: "LEVELS\n#P*.#\n".to_string(),
                }),
                _ => Err(GistError::Timeout(Duration::from_secs(15))),
            }
        }
    }

    fn next_result(ui_rx: &Receiver<UiEvent>) -> UiEvent {
        loop {
            match ui_rx.recv_timeout(Duration::from_secs(5)).expect("worker event") {
                UiEvent::Info(_) => continue,
                event => return event,
            }
        }
    }

    fn fetch(id: &str) -> BackendCommand {
        BackendCommand::FetchGist {
            gist_id: GistId::parse(id).expect("parse").expect("id"),
        }
    }

    #[test]
    fn worker_round_trips_fetch_results() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let handle = launch(cmd_rx, ui_tx, Arc::new(FakeSource));

        cmd_tx.send(fetch("good")).expect("queue good");
        cmd_tx.send(fetch("offline")).expect("queue offline");

        match next_result(&ui_rx) {
            UiEvent::GistLoaded {
                gist_id,
                filename,
                content,
            } => {
                assert_eq!(gist_id, "good");
                assert_eq!(filename, "levels.txt");
                assert_eq!(content, "LEVELS\n#P*.#\n");
            }
            _ => panic!("expected GistLoaded"),
        }

        match next_result(&ui_rx) {
            UiEvent::Error(err) => {
                assert_eq!(err.category(), UiErrorCategory::Transport);
                assert_eq!(err.context(), UiErrorContext::LoadGist);
            }
            _ => panic!("expected Error"),
        }

        drop(cmd_tx);
        handle.join().expect("worker exits cleanly");
    }
}
