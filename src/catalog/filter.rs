// src/catalog/filter.rs
// =============================================================================
// This module decides which repositories make it into the showcase.
//
// Two independent steps:
// - exclude: Drop forks and "pinned" repos (already featured elsewhere,
//   so showing them again would be noise)
// - classify: Keep only repos matching the selected category, by testing
//   keywords against the repo's language, topics, name and description
//
// Both are pure functions: same input, same output, no I/O. That makes
// them trivial to test.
//
// Rust concepts:
// - Iterators with filter(): Declarative list processing
// - Slices of &str: Cheap keyword tables baked into the binary
// - Pattern matching on enums: One arm per category
// =============================================================================

use clap::ValueEnum;

use crate::github::RepoSummary;

// Repositories already featured at the top of the portfolio page.
// They are excluded here so the dynamic list only shows everything else.
pub const DEFAULT_PINNED: &[&str] = &[
    "diabetic-retinopathy-detection",
    "pneumonia-detection",
    "skin-disorder-detection",
    "face-gender-prediction",
    "handwritten-digit-recognition",
    "auto-price-prediction",
    "fifa20-clustering",
];

// Keyword tables for each category
//
// A repo belongs to a category when any keyword appears in its combined
// text (language + topics + name + description, all lowercased).
const AI_KEYWORDS: &[&str] = &[
    "python", "learning", "data", "ai", "neural", "tensorflow", "keras", "pandas",
];
const WEB_KEYWORDS: &[&str] = &[
    "javascript", "html", "css", "react", "web", "node", "frontend",
];
const RESEARCH_KEYWORDS: &[&str] = &["research", "paper"];

// The user-selectable categories
//
// ValueEnum lets clap parse `--category ai` straight into this enum.
// Categories are NOT mutually exclusive: a repo can match both Ai and
// Web, and Research deliberately acts as a catch-all (see is_match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    /// Every repository (no category filtering)
    All,
    /// Machine learning / data science projects
    Ai,
    /// Frontend and web projects
    Web,
    /// Papers, research code, and anything not clearly web-tagged
    Research,
}

impl Category {
    /// Lowercase label used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Ai => "ai",
            Category::Web => "web",
            Category::Research => "research",
        }
    }

    /// Tests one repository against this category
    fn is_match(&self, repo: &RepoSummary) -> bool {
        // Build one lowercase haystack out of every text field, so a
        // keyword can match no matter where it appears
        let text = search_text(repo);

        match self {
            Category::All => true,
            Category::Ai => contains_any(&text, AI_KEYWORDS),
            Category::Web => contains_any(&text, WEB_KEYWORDS),
            // Research is explicit keywords OR the fallback for anything
            // without a web keyword. Yes, that means an AI repo with no
            // web tags shows up under Research too - that overlap is
            // intentional, the categories are evaluated independently.
            Category::Research => {
                contains_any(&text, RESEARCH_KEYWORDS)
                    || !contains_any(&text, &["javascript", "css", "html"])
            }
        }
    }
}

// Removes pinned repositories and forks
//
// Parameters:
//   repos: the fetched list (borrowed, we clone the survivors)
//   pinned: names to exclude
//
// Order of the remaining entries is preserved.
pub fn exclude(repos: &[RepoSummary], pinned: &[String]) -> Vec<RepoSummary> {
    repos
        .iter()
        .filter(|repo| !repo.fork && !pinned.iter().any(|p| p == &repo.name))
        .cloned()
        .collect()
}

// Keeps only repositories matching the category
//
// Category::All is the identity: same elements, same order.
pub fn classify(repos: &[RepoSummary], category: Category) -> Vec<RepoSummary> {
    repos
        .iter()
        .filter(|repo| category.is_match(repo))
        .cloned()
        .collect()
}

// Concatenates a repo's text fields into one lowercase search string
fn search_text(repo: &RepoSummary) -> String {
    let lang = repo.language.as_deref().unwrap_or("");
    let topics = repo.topics.join(" ");
    let desc = repo.description.as_deref().unwrap_or("");

    format!("{} {} {} {}", lang, topics, repo.name, desc).to_lowercase()
}

// True if any keyword from the table appears in the haystack
fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw))
}
