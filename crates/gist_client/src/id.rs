use std::fmt;

use url::Url;

use crate::error::GistError;

const MAX_ID_LEN: usize = 128;

/// A validated gist identifier, safe to splice into a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GistId(String);

impl GistId {
    /// Parses user input from the Load Gist prompt.
    ///
    /// Blank input yields `Ok(None)`. Gist page URLs such as
    /// `https://gist.github.com/someone/abc123` are reduced to their last path segment.
    pub fn parse(input: &str) -> Result<Option<Self>, GistError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let candidate = if trimmed.contains("://") {
            let url = Url::parse(trimmed).map_err(|_| GistError::InvalidId(trimmed.to_string()))?;
            url.path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                .map(str::to_string)
                .ok_or_else(|| GistError::InvalidId(trimmed.to_string()))?
        } else {
            trimmed
                .split('/')
                .filter(|s| !s.is_empty())
                .last()
                .unwrap_or(trimmed)
                .to_string()
        };
        let candidate = candidate
            .strip_suffix(".git")
            .map(str::to_string)
            .unwrap_or(candidate);

        let valid = !candidate.is_empty()
            && candidate.len() <= MAX_ID_LEN
            && candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(GistError::InvalidId(trimmed.to_string()));
        }
        Ok(Some(Self(candidate)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_none() {
        assert_eq!(GistId::parse("").expect("parse"), None);
        assert_eq!(GistId::parse("   \t").expect("parse"), None);
    }

    #[test]
    fn trims_plain_id() {
        let id = GistId::parse("  6b1a4f2c9e  ").expect("parse").expect("id");
        assert_eq!(id.as_str(), "6b1a4f2c9e");
    }

    #[test]
    fn reduces_gist_urls() {
        for input in [
            "https://gist.github.com/someone/6b1a4f2c9e",
            "https://gist.github.com/someone/6b1a4f2c9e/",
            "https://gist.github.com/6b1a4f2c9e.git",
            "gist.github.com/someone/6b1a4f2c9e",
        ] {
            let id = GistId::parse(input).expect("parse").expect("id");
            assert_eq!(id.as_str(), "6b1a4f2c9e", "input: {input}");
        }
    }

    #[test]
    fn rejects_path_and_query_characters() {
        for input in ["abc?x=1", "abc def", "..", "abc#frag", "%2e%2e"] {
            assert!(
                matches!(GistId::parse(input), Err(GistError::InvalidId(_))),
                "input: {input}"
            );
        }
    }

    #[test]
    fn rejects_overlong_ids() {
        let input = "a".repeat(MAX_ID_LEN + 1);
        assert!(GistId::parse(&input).is_err());
    }
}
