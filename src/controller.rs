// src/controller.rs
// =============================================================================
// This module owns the showcase state and wires the pipeline together:
//
//   fetch (github) -> exclude/classify (catalog) -> rank -> render
//
// The Showcase struct replaces what the original page kept in free
// globals (the fetched list, the active category, the open modal): all
// of that is explicit fields here, so multiple instances can coexist and
// tests can poke at one directly.
//
// The client is a generic parameter, not a hardcoded GithubClient. Tests
// inject a fake client with canned data and the whole pipeline runs
// without a network.
//
// One subtlety: the detail view. A fetch result must only be applied if
// the detail view is still open for that same repository - otherwise a
// slow response could clobber whatever the user switched to. open_detail
// is therefore split into "mark the view open" and "apply the result",
// and apply checks the mark (last request wins).
// =============================================================================

use crate::catalog::{classify, exclude, rank, Category};
use crate::github::{ClientError, RepoClient, RepoSummary};
use crate::render::{render_detail, render_detail_error, render_list};

// All state for one showcase instance
pub struct Showcase<C: RepoClient> {
    client: C,
    owner: String,
    pinned: Vec<String>,
    /// Fetched list, already exclusion-filtered - the single source the
    /// category views are carved out of
    repos: Vec<RepoSummary>,
    /// The one active category (selection is exclusive)
    category: Category,
    /// Name of the repository whose detail view is open, if any
    active_detail: Option<String>,
}

impl<C: RepoClient> Showcase<C> {
    pub fn new(client: C, owner: &str, pinned: Vec<String>, category: Category) -> Self {
        Showcase {
            client,
            owner: owner.to_string(),
            pinned,
            repos: Vec::new(),
            category,
            active_detail: None,
        }
    }

    /// Initial load: fetch, exclude, then render the active category
    ///
    /// A NetworkError/ParseError bubbles up to the caller, which renders
    /// a static failure message instead of the list.
    pub async fn load(&mut self) -> Result<String, ClientError> {
        let fetched = self.client.list_repos(&self.owner).await?;

        // Exclusion happens once at load time; category switches re-use
        // this filtered list without another fetch
        self.repos = exclude(&fetched, &self.pinned);

        Ok(self.render_current())
    }

    /// Switches the active category and re-renders - no re-fetch
    pub fn select_category(&mut self, category: Category) -> String {
        self.category = category;
        self.render_current()
    }

    /// The repositories currently visible (classified and ranked)
    ///
    /// Used by the --json output mode, and handy for tests.
    pub fn visible(&self) -> Vec<RepoSummary> {
        rank(classify(&self.repos, self.category))
    }

    fn render_current(&self) -> String {
        render_list(&self.owner, &self.visible(), self.category)
    }

    /// Opens the detail view for one repository and fetches its README
    ///
    /// Returns the rendered detail view, or the unavailable-fallback if
    /// the README is missing or the fetch failed. Returns None only when
    /// the view was closed while the fetch was in flight.
    pub async fn open_detail(&mut self, repo: &str) -> Option<String> {
        self.active_detail = Some(repo.to_string());

        let result = self.client.fetch_readme(&self.owner, repo).await;

        self.apply_detail(repo, result)
    }

    /// Applies a finished README fetch to the detail view
    ///
    /// The guard: if the detail view is no longer open for this repo
    /// (closed, or reopened for a different repo), the result is stale
    /// and gets dropped on the floor.
    fn apply_detail(
        &mut self,
        repo: &str,
        result: Result<String, ClientError>,
    ) -> Option<String> {
        if self.active_detail.as_deref() != Some(repo) {
            return None;
        }

        Some(match result {
            Ok(markdown) => render_detail(&self.owner, repo, &markdown),
            // Missing README and transport failure look the same to the
            // user: a fallback card with a link to the repo page
            Err(_) => render_detail_error(&self.owner, repo),
        })
    }

    /// Closes the detail view (the modal's close button / backdrop click)
    pub fn close_detail(&mut self) {
        self.active_detail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_PINNED;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;
    use std::collections::HashMap;

    // A RepoClient with canned responses and a call counter, so tests
    // can assert "no re-fetch on category switch"
    struct FakeClient {
        repos: Vec<RepoSummary>,
        readmes: HashMap<String, String>,
        list_calls: Cell<u32>,
    }

    impl FakeClient {
        fn new(repos: Vec<RepoSummary>) -> Self {
            FakeClient {
                repos,
                readmes: HashMap::new(),
                list_calls: Cell::new(0),
            }
        }
    }

    impl RepoClient for FakeClient {
        async fn list_repos(&self, _owner: &str) -> Result<Vec<RepoSummary>, ClientError> {
            self.list_calls.set(self.list_calls.get() + 1);
            Ok(self.repos.clone())
        }

        async fn fetch_readme(&self, _owner: &str, repo: &str) -> Result<String, ClientError> {
            self.readmes
                .get(repo)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(format!("no README for {}", repo)))
        }
    }

    // A client that always fails, for the failure paths
    struct BrokenClient;

    impl RepoClient for BrokenClient {
        async fn list_repos(&self, _owner: &str) -> Result<Vec<RepoSummary>, ClientError> {
            Err(ClientError::Network("connection refused".to_string()))
        }

        async fn fetch_readme(&self, _o: &str, _r: &str) -> Result<String, ClientError> {
            Err(ClientError::Network("connection refused".to_string()))
        }
    }

    fn repo(name: &str, stars: u32, fork: bool) -> RepoSummary {
        RepoSummary {
            name: name.to_string(),
            html_url: format!("https://github.com/user/{}", name),
            description: None,
            language: Some("Python".to_string()),
            stargazers_count: stars,
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            fork,
            topics: Vec::new(),
        }
    }

    fn default_pinned() -> Vec<String> {
        DEFAULT_PINNED.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_load_excludes_pinned_and_renders_the_rest() {
        // Two repos, one pinned: only the other one renders, with its
        // title case-formatted and its date formatted for display
        let client = FakeClient::new(vec![
            repo("auto-price-prediction", 5, false), // pinned
            repo("graph-tools", 2, false),
        ]);
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);

        let out = showcase.load().await.unwrap();

        assert!(out.contains("Graph Tools"));
        assert!(out.contains("Updated: 01 May 2024"));
        assert!(!out.contains("Auto Price Prediction"));
    }

    #[tokio::test]
    async fn test_load_surfaces_network_error() {
        let mut showcase = Showcase::new(BrokenClient, "user", default_pinned(), Category::All);
        let err = showcase.load().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
    }

    #[tokio::test]
    async fn test_category_switch_does_not_refetch() {
        let client = FakeClient::new(vec![repo("deep-learning-lab", 1, false)]);
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);

        showcase.load().await.unwrap();
        showcase.select_category(Category::Ai);
        showcase.select_category(Category::Web);
        showcase.select_category(Category::All);

        assert_eq!(showcase.client.list_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_category_views_filter_the_loaded_list() {
        let mut js = repo("portfolio-site", 0, false);
        js.language = Some("JavaScript".to_string());
        let client = FakeClient::new(vec![repo("deep-learning-lab", 1, false), js]);
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);
        showcase.load().await.unwrap();

        let ai = showcase.select_category(Category::Ai);
        assert!(ai.contains("Deep Learning Lab"));
        assert!(!ai.contains("Portfolio Site"));

        let web = showcase.select_category(Category::Web);
        assert!(web.contains("Portfolio Site"));
        assert!(!web.contains("Deep Learning Lab"));
    }

    #[tokio::test]
    async fn test_visible_is_ranked() {
        let client = FakeClient::new(vec![
            repo("small", 1, false),
            repo("big", 10, false),
        ]);
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);
        showcase.load().await.unwrap();

        let visible = showcase.visible();
        assert_eq!(visible[0].name, "big");
        assert_eq!(visible[1].name, "small");
    }

    #[tokio::test]
    async fn test_empty_category_renders_placeholder() {
        let client = FakeClient::new(vec![repo("deep-learning-lab", 0, false)]);
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);
        showcase.load().await.unwrap();

        let out = showcase.select_category(Category::Web);
        assert!(out.contains("No repositories found for the web category."));
    }

    #[tokio::test]
    async fn test_detail_success_renders_readme() {
        let mut client = FakeClient::new(Vec::new());
        client
            .readmes
            .insert("graph-tools".to_string(), "# Graph Tools\nDocs.".to_string());
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);

        let out = showcase.open_detail("graph-tools").await.unwrap();
        assert!(out.contains("Graph Tools"));
        assert!(out.contains("Docs."));
    }

    #[tokio::test]
    async fn test_detail_failure_renders_fallback_with_link() {
        // No README registered -> NotFound -> fallback with repo link,
        // and nothing panics or escapes
        let client = FakeClient::new(Vec::new());
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);

        let out = showcase.open_detail("ghost-repo").await.unwrap();
        assert!(out.contains("Documentation Unavailable"));
        assert!(out.contains("https://github.com/user/ghost-repo"));
    }

    #[tokio::test]
    async fn test_detail_network_failure_uses_same_fallback() {
        let mut showcase = Showcase::new(BrokenClient, "user", default_pinned(), Category::All);
        let out = showcase.open_detail("anything").await.unwrap();
        assert!(out.contains("Documentation Unavailable"));
    }

    #[tokio::test]
    async fn test_stale_detail_result_is_dropped_after_close() {
        let client = FakeClient::new(Vec::new());
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);

        // Simulate: view opened, then closed while the fetch was still
        // in flight - the late result must not be applied
        showcase.active_detail.replace("slow-repo".to_string());
        showcase.close_detail();

        let late = showcase.apply_detail("slow-repo", Ok("# Late".to_string()));
        assert!(late.is_none());
    }

    #[tokio::test]
    async fn test_stale_detail_result_is_dropped_after_switch() {
        let client = FakeClient::new(Vec::new());
        let mut showcase = Showcase::new(client, "user", default_pinned(), Category::All);

        // View reopened for a different repo before the first fetch
        // finished: only the newer repo's result may apply
        showcase.active_detail.replace("second".to_string());

        let stale = showcase.apply_detail("first", Ok("# First".to_string()));
        assert!(stale.is_none());

        let fresh = showcase.apply_detail("second", Ok("# Second".to_string()));
        assert!(fresh.is_some());
    }
}
