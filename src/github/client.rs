// src/github/client.rs
// =============================================================================
// This module talks to the GitHub API.
//
// Two requests, both read-only and unauthenticated:
// - List a user's repositories (one bounded page, newest updates first)
// - Fetch one repository's README (content arrives base64-encoded)
//
// Design:
// - RepoClient is a small trait so the controller can be tested with a
//   fake client instead of the real network
// - No retries: one failed attempt surfaces a typed ClientError and the
//   caller decides what to render
//
// Rust concepts:
// - Traits with async methods: The seam between controller and network
// - Result<T, E>: Every network call can fail
// - The ? operator: Early return on error
// =============================================================================

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use url::Url;

use super::types::{ClientError, ReadmePayload, RepoSummary};

// GitHub API root - only ever combined with paths we build ourselves
const API_ROOT: &str = "https://api.github.com";

// One page is the whole story: the widget never paginates, it just asks
// for the maximum page size sorted by update recency
const PAGE_SIZE: u32 = 100;

// The interface the rest of the application programs against
//
// The real implementation below does network I/O; tests implement this
// trait with canned data and error injection.
pub trait RepoClient {
    /// Lists the owner's public repositories, newest updates first
    fn list_repos(
        &self,
        owner: &str,
    ) -> impl std::future::Future<Output = Result<Vec<RepoSummary>, ClientError>>;

    /// Fetches one repository's README, decoded to markdown text
    fn fetch_readme(
        &self,
        owner: &str,
        repo: &str,
    ) -> impl std::future::Future<Output = Result<String, ClientError>>;
}

// The real client backed by reqwest
pub struct GithubClient {
    client: Client,
    api_root: Url,
}

impl GithubClient {
    /// Creates a client with sane defaults
    ///
    /// GitHub rejects requests without a User-Agent header, so we always
    /// send one. The 10 second timeout keeps a dead network from hanging
    /// the tool forever.
    pub fn new() -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("repo-showcase/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        // API_ROOT is a constant, but parse it through the url crate
        // anyway so join() below can never produce a malformed URL
        let api_root = Url::parse(API_ROOT)
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(GithubClient { client, api_root })
    }

    /// Builds the endpoint URL for a given API path
    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.api_root
            .join(path)
            .map_err(|e| ClientError::Parse(format!("bad endpoint '{}': {}", path, e)))
    }
}

impl RepoClient for GithubClient {
    async fn list_repos(&self, owner: &str) -> Result<Vec<RepoSummary>, ClientError> {
        // GET /users/{owner}/repos?sort=updated&per_page=100
        let url = self.endpoint(&format!("/users/{}/repos", owner))?;

        let per_page = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(url)
            .query(&[("sort", "updated"), ("per_page", per_page.as_str())])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Network(format!(
                "failed to list repositories for '{}': HTTP {}",
                owner,
                status.as_u16()
            )));
        }

        // Read the body as text first so a malformed payload becomes a
        // Parse error instead of being lumped in with network failures
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let repos: Vec<RepoSummary> =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(repos)
    }

    async fn fetch_readme(&self, owner: &str, repo: &str) -> Result<String, ClientError> {
        // GET /repos/{owner}/{repo}/readme
        let url = self.endpoint(&format!("/repos/{}/{}/readme", owner, repo))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // A repo without a README is a normal condition, not a failure
            return Err(ClientError::NotFound(format!(
                "no README for {}/{}",
                owner, repo
            )));
        }
        if !status.is_success() {
            return Err(ClientError::Network(format!(
                "failed to fetch README for {}/{}: HTTP {}",
                owner,
                repo,
                status.as_u16()
            )));
        }

        let payload: ReadmePayload = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        decode_readme(&payload)
    }
}

// Decodes the base64 README payload into markdown text
//
// The API wraps the base64 text at 60 columns with '\n', which the
// standard engine rejects, so strip all whitespace before decoding.
fn decode_readme(payload: &ReadmePayload) -> Result<String, ClientError> {
    if payload.encoding != "base64" {
        return Err(ClientError::Parse(format!(
            "unexpected README encoding '{}'",
            payload.encoding
        )));
    }

    let compact: String = payload
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| ClientError::Parse(format!("invalid base64 content: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| ClientError::Parse(format!("README is not valid UTF-8: {}", e)))
}
