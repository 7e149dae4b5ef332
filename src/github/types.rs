// src/github/types.rs
// =============================================================================
// This module defines the data we decode from the GitHub API, plus the
// error taxonomy for the client.
//
// The GitHub API returns a lot of fields per repository - we only declare
// the ones we actually use and serde ignores the rest.
//
// Rust concepts:
// - serde derive: Automatically generate JSON (de)serialization code
// - Option<T>: For fields the API may omit or send as null
// - thiserror: Derive macro that writes Display/Error impls for our enum
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// One public repository as returned by GET /users/{owner}/repos
//
// #[derive(Serialize)] is here too so the --json output mode can re-emit
// the list after filtering and ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    /// Repository name - unique per owner, used as the lookup key
    pub name: String,
    /// Link to the repository page on github.com
    pub html_url: String,
    /// Free-text description (null for many repos, hence Option)
    pub description: Option<String>,
    /// Primary language label, e.g. "Python" (null when GitHub can't tell)
    pub language: Option<String>,
    /// Star count - never negative, so u32
    pub stargazers_count: u32,
    /// When the repository was last updated
    pub updated_at: DateTime<Utc>,
    /// True if this repo is a fork of someone else's repository
    pub fork: bool,
    /// Topic tags - the API omits this field without the mercy-preview
    /// media type, so default to an empty list instead of failing
    #[serde(default)]
    pub topics: Vec<String>,
}

// Response body of GET /repos/{owner}/{repo}/readme
//
// The interesting part is `content`: base64 text with embedded newlines
// that must be decoded before use. We keep `encoding` so the client can
// refuse anything it doesn't understand.
#[derive(Debug, Deserialize)]
pub struct ReadmePayload {
    /// Base64-encoded file content (with '\n' line breaks inside)
    pub content: String,
    /// Encoding label - "base64" in practice
    pub encoding: String,
}

// Everything that can go wrong when talking to the GitHub API
//
// The three variants map to three different user experiences:
// - Network: the whole list view shows a static failure message
// - Parse: same as Network from the user's point of view
// - NotFound: only the detail view shows a fallback, the list is untouched
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request itself failed or came back with a non-success status
    #[error("network error: {0}")]
    Network(String),

    /// We got a response but could not make sense of the body
    #[error("parse error: {0}")]
    Parse(String),

    /// The requested artifact does not exist (HTTP 404)
    #[error("not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// Helper to check for the not-found case
    ///
    /// The controller uses this to decide between the detail fallback
    /// (missing README) and the generic failure path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[serde(default)] on topics?
//    - If the JSON has no "topics" key, serde normally errors out
//    - default tells serde to use Vec::new() instead
//    - This keeps us compatible with older API responses
//
// 2. Why String inside the error variants instead of the source errors?
//    - reqwest::Error and serde_json::Error are big types
//    - We only need the message for display, so we flatten early
//    - The typed variants (Network/Parse/NotFound) carry the meaning
//
// 3. What does thiserror generate?
//    - An impl of std::fmt::Display from the #[error("...")] strings
//    - An impl of std::error::Error
//    - That makes ClientError work with anyhow and the ? operator
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_repo_without_topics() {
        // Older responses have no "topics" field at all
        let json = r#"{
            "name": "demo",
            "html_url": "https://github.com/u/demo",
            "description": null,
            "language": "Python",
            "stargazers_count": 3,
            "updated_at": "2024-06-01T12:00:00Z",
            "fork": false
        }"#;

        let repo: RepoSummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "demo");
        assert!(repo.topics.is_empty());
        assert_eq!(repo.description, None);
    }

    #[test]
    fn test_is_not_found() {
        assert!(ClientError::NotFound("readme".to_string()).is_not_found());
        assert!(!ClientError::Network("boom".to_string()).is_not_found());
    }
}
