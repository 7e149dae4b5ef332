// src/catalog/rank.rs
// =============================================================================
// This module orders the showcase: most-starred repositories first, and
// among equals, the most recently updated first.
//
// Vec::sort_by is a stable sort, so entries tied on both keys keep their
// input order. The GitHub listing already arrives newest-first, which
// means ties stay in a sensible order for free.
//
// Rust concepts:
// - Ordering and cmp(): Building a comparator out of two keys
// - then_with(): Chaining a secondary key onto a primary comparison
// =============================================================================

use crate::github::RepoSummary;

// Sorts repositories by (stars desc, updated_at desc)
//
// Takes the Vec by value and hands it back sorted, so call sites can
// chain it after exclude/classify.
pub fn rank(mut repos: Vec<RepoSummary>) -> Vec<RepoSummary> {
    repos.sort_by(|a, b| {
        // b vs a (not a vs b) to get descending order
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    repos
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str, stars: u32, day: u32) -> RepoSummary {
        RepoSummary {
            name: name.to_string(),
            html_url: format!("https://github.com/user/{}", name),
            description: None,
            language: None,
            stargazers_count: stars,
            updated_at: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
            fork: false,
            topics: Vec::new(),
        }
    }

    fn names(repos: &[RepoSummary]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_rank_by_stars_descending() {
        let ranked = rank(vec![repo("low", 1, 1), repo("high", 9, 1), repo("mid", 5, 1)]);
        assert_eq!(names(&ranked), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_ties_broken_by_update_date() {
        let ranked = rank(vec![repo("older", 3, 2), repo("newer", 3, 20)]);
        assert_eq!(names(&ranked), vec!["newer", "older"]);
    }

    #[test]
    fn test_rank_is_stable_on_full_ties() {
        // Same stars, same date: input order must survive
        let ranked = rank(vec![repo("first", 2, 5), repo("second", 2, 5), repo("third", 2, 5)]);
        assert_eq!(names(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_adjacent_pairs_are_ordered() {
        // The defining property: every adjacent pair is non-increasing
        // on stars, and non-increasing on date when stars tie
        let ranked = rank(vec![
            repo("a", 0, 10),
            repo("b", 7, 1),
            repo("c", 7, 28),
            repo("d", 2, 15),
            repo("e", 0, 11),
        ]);

        for pair in ranked.windows(2) {
            let (x, y) = (&pair[0], &pair[1]);
            assert!(x.stargazers_count >= y.stargazers_count);
            if x.stargazers_count == y.stargazers_count {
                assert!(x.updated_at >= y.updated_at);
            }
        }
    }
}
