// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

use crate::catalog::Category;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-showcase",
    version = "0.1.0",
    about = "Showcase a GitHub user's public repositories in the terminal",
    long_about = "repo-showcase fetches a user's public repositories, filters out forks and \
                  already-featured projects, ranks the rest by stars and recency, and renders \
                  them as a project list. It can also fetch and render one repository's README."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (list, readme)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a user's public repositories, filtered and ranked
    ///
    /// Example: repo-showcase list vaishnavak2001 --category ai
    List {
        /// GitHub username whose repositories to showcase
        ///
        /// This is a positional argument (required, no flag needed)
        owner: String,

        /// Category to filter by (all, ai, web, research)
        ///
        /// Categories match keywords against a repo's language, topics,
        /// name and description. "all" disables category filtering.
        #[arg(long, value_enum, default_value = "all")]
        category: Category,

        /// Output the filtered, ranked list as JSON instead of text
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,

        /// Extra repository names to exclude (repeatable)
        ///
        /// These are added on top of the built-in pinned list. Example:
        /// --pinned my-old-demo --pinned another-repo
        #[arg(long = "pinned")]
        pinned: Vec<String>,
    },

    /// Fetch and render one repository's README
    ///
    /// Example: repo-showcase readme vaishnavak2001 face-gender-prediction
    Readme {
        /// GitHub username owning the repository
        owner: String,

        /// Repository name whose README to fetch
        repo: String,
    },
}
