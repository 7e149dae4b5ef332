// src/catalog/mod.rs
// =============================================================================
// This module contains the pure list-shaping logic: which repositories
// show up, and in what order.
//
// Submodules:
// - filter: Pinned/fork exclusion and category classification
// - rank: Stable two-key ordering (stars, then update recency)
//
// Nothing in here does I/O - the controller feeds these functions the
// fetched list and hands the result to the renderer.
// =============================================================================

mod filter;
mod rank;

// Re-export public items from submodules
pub use filter::{classify, exclude, Category, DEFAULT_PINNED};
pub use rank::rank;
