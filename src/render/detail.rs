// src/render/detail.rs
// =============================================================================
// This module renders a repository's README for the terminal (the CLI
// equivalent of the portfolio page's documentation modal).
//
// We use pulldown-cmark to walk the markdown as a stream of events and
// build plain terminal text from them:
// - Headings keep their '#' markers (they read fine in a terminal)
// - Code blocks are indented and labeled with their language - actual
//   syntax coloring is left to the terminal/pager, not our job
// - Links render as "text (url)" so the URL survives the round trip
//
// There is also a fallback view for repositories whose README cannot be
// fetched, pointing the user at the GitHub page instead.
//
// Rust concepts:
// - Iterating parser events and matching on them
// - CowStr: pulldown-cmark's borrowed-or-owned string type
// =============================================================================

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag};

use super::list::format_title;

// Renders the detail view for a successfully fetched README
pub fn render_detail(owner: &str, repo: &str, markdown: &str) -> String {
    let title = format_title(repo);
    let rule = "=".repeat(title.len().max(20));

    format!(
        "{}\n{}\n{}\n\nView on GitHub: https://github.com/{}/{}\n",
        title,
        rule,
        markdown_to_text(markdown).trim_end(),
        owner,
        repo
    )
}

// Renders the fallback when the README is missing or the fetch failed
//
// This mirrors the modal's "Documentation Unavailable" card: a short
// explanation plus a link to the canonical page, never an error dump.
pub fn render_detail_error(owner: &str, repo: &str) -> String {
    format!(
        "Documentation Unavailable\n\
         Could not load README.md for this repository.\n\
         View on GitHub: https://github.com/{}/{}\n",
        owner, repo
    )
}

// Converts markdown to plain terminal text
fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();

    // Inside a code block we indent every line instead of flowing text
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                ensure_blank_line(&mut out);
                for _ in 0..heading_depth(level) {
                    out.push('#');
                }
                out.push(' ');
            }
            Event::End(Tag::Heading(..)) => out.push('\n'),

            Event::Start(Tag::Paragraph) => ensure_blank_line(&mut out),
            Event::End(Tag::Paragraph) => out.push('\n'),

            Event::Start(Tag::CodeBlock(kind)) => {
                ensure_blank_line(&mut out);
                // Label fenced blocks with their language so the reader
                // knows what they are looking at
                if let CodeBlockKind::Fenced(lang) = &kind {
                    if !lang.is_empty() {
                        out.push_str(&format!("--- {} ---\n", lang));
                    }
                }
                in_code_block = true;
            }
            Event::End(Tag::CodeBlock(_)) => {
                in_code_block = false;
            }

            Event::Start(Tag::Item) => out.push_str("  • "),
            Event::End(Tag::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }

            // The link text arrives as Text events in between, so we
            // only need to append the destination at the end
            Event::End(Tag::Link(_, dest, _)) => {
                out.push_str(&format!(" ({})", dest));
            }

            Event::Text(text) => {
                if in_code_block {
                    // Indent each code line by four spaces
                    for line in text.lines() {
                        out.push_str("    ");
                        out.push_str(line);
                        out.push('\n');
                    }
                } else {
                    out.push_str(&text);
                }
            }
            Event::Code(code) => {
                out.push('`');
                out.push_str(&code);
                out.push('`');
            }

            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                ensure_blank_line(&mut out);
                out.push_str("----------------------------------------\n");
            }

            // Tables, footnotes, html blocks: skip rather than garble
            _ => {}
        }
    }

    out
}

// Maps pulldown-cmark's heading level to a number of '#' characters
fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

// Pushes a separating blank line unless we are at the start or already
// have one
fn ensure_blank_line(out: &mut String) {
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}
