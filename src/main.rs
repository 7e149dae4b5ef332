// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Wire the real GitHub client into the showcase controller
// 4. Print the rendered output and exit with a proper code
//    (0 = success, 1 = repositories could not be loaded, 2 = error)
//
// Rust concepts used:
// - async/await: Network requests suspend instead of blocking
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod catalog;      // src/catalog/ - exclusion, categories, ranking
mod cli;          // src/cli.rs - command-line parsing
mod controller;   // src/controller.rs - showcase state and pipeline wiring
mod github;       // src/github/ - GitHub API client
mod render;       // src/render/ - list and detail renderers

// Import items we need from our modules
use catalog::{Category, DEFAULT_PINNED};
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use controller::Showcase;
use github::GithubClient;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = output rendered successfully
//   Ok(1) = repository listing failed (failure message rendered instead)
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::List {
            owner,
            category,
            json,
            pinned,
        } => handle_list(&owner, category, json, pinned).await,
        Commands::Readme { owner, repo } => handle_readme(&owner, &repo).await,
    }
}

// Handles the 'list' subcommand
//
// Pipeline: fetch -> exclude -> classify -> rank -> render.
// All of it lives in the Showcase controller; this handler only builds
// the client, feeds in the arguments, and prints whatever comes back.
async fn handle_list(
    owner: &str,
    category: Category,
    json: bool,
    extra_pinned: Vec<String>,
) -> Result<i32> {
    println!("🔍 Fetching repositories for {}...", owner);

    // The built-in pinned list plus anything passed via --pinned
    let mut pinned: Vec<String> = DEFAULT_PINNED.iter().map(|s| s.to_string()).collect();
    pinned.extend(extra_pinned);

    let client = GithubClient::new()?;
    let mut showcase = Showcase::new(client, owner, pinned, category);

    // One fetch. Category switches after this point would re-use the
    // fetched list, which is exactly what the controller tests assert.
    let rendered = match showcase.load().await {
        Ok(rendered) => rendered,
        Err(e) => {
            // Network and parse failures get the same static message the
            // portfolio page shows in place of its loading indicator
            eprintln!("Warning: {}", e);
            println!("Failed to load repositories. Please check GitHub directly.");
            return Ok(1);
        }
    };

    if json {
        // Machine-readable mode: emit the filtered, ranked list as JSON
        let json_output = serde_json::to_string_pretty(&showcase.visible())?;
        println!("{}", json_output);
    } else {
        println!("📄 Showing {} project(s)\n", showcase.visible().len());
        print!("{}", rendered);
    }

    Ok(0)
}

// Handles the 'readme' subcommand
//
// Fetches one repository's README and renders it. A missing README (or
// a failed fetch) renders the fallback card - that is a normal outcome,
// so the exit code stays 0.
async fn handle_readme(owner: &str, repo: &str) -> Result<i32> {
    println!("📖 Loading documentation for {}/{}...\n", owner, repo);

    let client = GithubClient::new()?;
    let mut showcase = Showcase::new(client, owner, Vec::new(), Category::All);

    // open_detail returns None only if the view was closed mid-fetch,
    // which cannot happen in this sequential handler
    if let Some(rendered) = showcase.open_detail(repo).await {
        print!("{}", rendered);
    }

    Ok(0)
}
