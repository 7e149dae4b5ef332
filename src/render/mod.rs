// src/render/mod.rs
// =============================================================================
// This module turns repository data into user-facing text.
//
// Submodules:
// - list: The repository list view (titles, tags, stars, dates)
// - detail: The README detail view and its unavailable-fallback
//
// Both renderers return Strings instead of printing, so tests can assert
// on the exact output and main() stays in charge of where output goes.
// =============================================================================

mod detail;
mod list;

// Re-export public items from submodules
pub use detail::{render_detail, render_detail_error};
pub use list::{format_title, render_list};
