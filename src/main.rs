//! # docchat-render - chat message rendering for a RAG assistant
//!
//! Turns backend answer payloads into the HTML fragments shown by the chat widget:
//! formatted answer text, reference links into the document store, timing, and
//! side-by-side model comparisons.

mod cli;
mod core;
mod render;
mod run;

use clap::Parser;
use dotenv::dotenv;

/// Main application entry point
///
/// Handles:
/// - Environment configuration via dotenv
/// - CLI argument parsing and logging setup
/// - Subcommand dispatch
///
/// # Errors
/// Exits with status 1 if configuration loading or the command fails.
fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let mut config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if let Some(dir) = &args.data_dir {
        config.data_directory = dir.clone();
    }

    if let Err(e) = run::dispatch(&args, &config) {
        log::debug!("Command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
