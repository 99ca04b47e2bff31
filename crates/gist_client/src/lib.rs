//! Client for the GitHub Gists API, used as a read-only source of script text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

pub mod error;
mod id;
pub mod model;

pub use error::GistError;
pub use id::GistId;
pub use model::{GistFile, GistResponse};

pub const DEFAULT_GIST_API_URL: &str = "https://api.github.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("puzzlescript-editor/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Text of one file taken from a gist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub gist_id: String,
    pub filename: String,
    pub content: String,
}

#[async_trait]
pub trait SnippetSource: Send + Sync {
    async fn fetch_snippet(&self, id: &GistId) -> Result<Snippet, GistError>;
}

#[derive(Debug, Clone)]
pub struct GistClient {
    http: Client,
    api_base: Url,
    timeout: Duration,
}

impl GistClient {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, GistError> {
        let api_base = normalize_api_base(api_base)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(GistError::Transport)?;
        Ok(Self {
            http,
            api_base,
            timeout,
        })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn gist_url(&self, id: &GistId) -> Result<Url, GistError> {
        self.api_base
            .join(&format!("gists/{id}"))
            .map_err(|err| GistError::InvalidApiUrl {
                url: self.api_base.to_string(),
                reason: err.to_string(),
            })
    }

    pub async fn fetch_gist(&self, id: &GistId) -> Result<GistResponse, GistError> {
        let url = self.gist_url(id)?;
        debug!(%url, "fetching gist");
        let body = self.get_text(url.as_str(), Some(GITHUB_JSON)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, url: &str, accept: Option<&str>) -> Result<String, GistError> {
        let mut request = self.http.get(url);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }
        let response = request.send().await.map_err(|err| self.map_transport(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GistError::Status {
                status: status.as_u16(),
                message: status_message(status, &body),
            });
        }
        response.text().await.map_err(|err| self.map_transport(err))
    }

    fn map_transport(&self, err: reqwest::Error) -> GistError {
        if err.is_timeout() {
            GistError::Timeout(self.timeout)
        } else {
            GistError::Transport(err)
        }
    }
}

#[async_trait]
impl SnippetSource for GistClient {
    async fn fetch_snippet(&self, id: &GistId) -> Result<Snippet, GistError> {
        let gist = self.fetch_gist(id).await?;
        let (key, file) = gist.first_file()?;
        let filename = file.filename.clone().unwrap_or(key);
        if gist.files.len() > 1 {
            info!(
                gist_id = %id,
                files = gist.files.len(),
                %filename,
                "gist has several files; using the first"
            );
        }

        let content = match (file.truncated, file.raw_url.as_deref(), file.content) {
            (true, Some(raw_url), _) => {
                debug!(gist_id = %id, %filename, "first file truncated; fetching raw_url");
                self.get_text(raw_url, None).await?
            }
            (true, None, Some(content)) => {
                warn!(gist_id = %id, %filename, "first file truncated without raw_url");
                content
            }
            (_, _, Some(content)) => content,
            (false, Some(raw_url), None) => self.get_text(raw_url, None).await?,
            (_, _, None) => return Err(GistError::MissingContent(filename)),
        };

        Ok(Snippet {
            gist_id: id.to_string(),
            filename,
            content,
        })
    }
}

fn normalize_api_base(raw: &str) -> Result<Url, GistError> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|err| GistError::InvalidApiUrl {
        url: trimmed.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(GistError::InvalidApiUrl {
            url: trimmed.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }
    // Url::join replaces the last segment unless the base path ends with '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn status_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
