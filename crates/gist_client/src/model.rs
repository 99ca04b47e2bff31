use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::GistError;

/// Subset of `GET /gists/{id}` the editor reads.
///
/// `files` stays an untyped, insertion-ordered map so the first entry is the first one
/// the service serialized.
#[derive(Debug, Deserialize)]
pub struct GistResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub files: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GistFile {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub raw_url: Option<String>,
}

impl GistResponse {
    /// Returns the map key and decoded entry of the first file.
    pub fn first_file(&self) -> Result<(String, GistFile), GistError> {
        let (key, value) = self.files.iter().next().ok_or(GistError::NoFiles)?;
        let file: GistFile = serde_json::from_value(value.clone())?;
        Ok((key.clone(), file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_file_keeps_service_order() {
        let body = r#"{
            "id": "abc",
            "files": {
                "zz_levels.txt": { "filename": "zz_levels.txt", "content": "first" },
                "aa_notes.md": { "filename": "aa_notes.md", "content": "second" }
            }
        }"#;
        let gist: GistResponse = serde_json::from_str(body).expect("decode");
        let (key, file) = gist.first_file().expect("first file");
        assert_eq!(key, "zz_levels.txt");
        assert_eq!(file.content.as_deref(), Some("first"));
        assert!(!file.truncated);
    }

    #[test]
    fn empty_files_is_no_files() {
        let gist: GistResponse = serde_json::from_str(r#"{"files": {}}"#).expect("decode");
        assert!(matches!(gist.first_file(), Err(GistError::NoFiles)));

        let gist: GistResponse = serde_json::from_str(r#"{"id": "x"}"#).expect("decode");
        assert!(matches!(gist.first_file(), Err(GistError::NoFiles)));
    }

    #[test]
    fn non_object_file_entry_is_decode_error() {
        let gist: GistResponse =
            serde_json::from_str(r#"{"files": {"a.txt": 42}}"#).expect("decode");
        assert!(matches!(gist.first_file(), Err(GistError::Decode(_))));
    }
}
