// src/render/list.rs
// =============================================================================
// This module renders the repository list for the terminal.
//
// The renderer is a pure function: it takes the already-filtered,
// already-ranked list and returns a String. main() decides where the
// String goes. That split keeps rendering fully unit-testable - no
// terminal capture needed.
//
// Formatting rules (mirrored from the portfolio page this tool feeds):
// - Titles: dashes become spaces, every word gets a capital first letter
// - Language tag falls back to "Research" when GitHub reports none
// - The star segment is omitted entirely at zero stars
// - Missing descriptions get a placeholder instead of an empty line
//
// Rust concepts:
// - String building with push_str and format!
// - char iteration for the title-casing rule
// =============================================================================

use crate::catalog::Category;
use crate::github::RepoSummary;

// Shown when a repository has no primary language
const LANGUAGE_FALLBACK: &str = "Research";

// Shown when a repository has no description
const DESCRIPTION_FALLBACK: &str = "A specialized research implementation.";

// Renders the whole list, or a placeholder when it is empty
//
// Parameters:
//   owner: GitHub username (used in the view-details hint)
//   repos: filtered and ranked repositories
//   category: the active category (for the empty-list wording)
pub fn render_list(owner: &str, repos: &[RepoSummary], category: Category) -> String {
    if repos.is_empty() {
        return match category {
            Category::All => "No additional public repositories found.\n".to_string(),
            other => format!("No repositories found for the {} category.\n", other.label()),
        };
    }

    let mut out = String::new();
    for repo in repos {
        out.push_str(&render_item(owner, repo));
        out.push('\n');
    }
    out
}

// Renders one repository entry
fn render_item(owner: &str, repo: &RepoSummary) -> String {
    let title = format_title(&repo.name);
    let language = repo.language.as_deref().unwrap_or(LANGUAGE_FALLBACK);
    let description = repo.description.as_deref().unwrap_or(DESCRIPTION_FALLBACK);

    // Star segment disappears at zero - a zero would just be clutter
    let stars = if repo.stargazers_count > 0 {
        format!(" • ⭐ {}", repo.stargazers_count)
    } else {
        String::new()
    };

    let updated = repo.updated_at.format("%d %b %Y");

    format!(
        "{}\n   {}\n   [{}]{} • Updated: {}\n   {}\n   ↳ details: repo-showcase readme {} {}\n",
        title, repo.html_url, language, stars, updated, description, owner, repo.name
    )
}

// Turns a raw repository name into a display title
//
// Rule: replace every '-' with a space, then capitalize the first letter
// of every word. "Word" here means a run of [A-Za-z0-9_], so digits glued
// to letters stay one word: "fifa20-clustering" -> "Fifa20 Clustering".
pub fn format_title(name: &str) -> String {
    let spaced = name.replace('-', " ");

    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;

    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            // First character of a word - uppercase it
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }

    out
}
