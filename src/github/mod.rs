// src/github/mod.rs
// =============================================================================
// This module handles all communication with the GitHub API.
//
// Submodules:
// - types: The repository/README data we decode, plus the error taxonomy
// - client: The RepoClient trait and its reqwest implementation
//
// Everything is read-only and unauthenticated: one request to list a
// user's repositories, one on-demand request per README.
//
// Rust concepts:
// - Modules: Organizing related functionality
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod client;
mod types;

// Re-export the public API so callers write `github::GithubClient`
// instead of reaching into submodules
pub use client::{GithubClient, RepoClient};
pub use types::{ClientError, RepoSummary};
