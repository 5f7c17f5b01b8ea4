//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::request::DEFAULT_MODEL;

const AFTER_HELP: &str = "\
EXAMPLES:
  docchat-render answer reply.json          Render a /query response as a chat message
  curl ... | docchat-render answer -        Read the response body from stdin
  docchat-render compare both.json          Render a /compare response as model cards
  docchat-render user \"What is TCA?\"        Render the user's own message
  docchat-render request \"What is TCA?\"     Show the request that would be posted
  docchat-render request --processdocs      Show the document re-indexing request
  docchat-render config                     Show config file path and effective values
  docchat-render completions bash           Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render RAG assistant answers, references, and model comparisons as HTML",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the document directory used for reference links
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a /query response body as a bot message
    Answer {
        /// JSON file to read ('-' or omitted reads stdin)
        file: Option<PathBuf>,
    },
    /// Render a /compare response body as one card per model
    Compare {
        /// JSON file to read ('-' or omitted reads stdin)
        file: Option<PathBuf>,
        /// Model keys in display order (defaults to the configured models)
        #[arg(long, value_delimiter = ',')]
        models: Option<Vec<String>>,
    },
    /// Render a user query as a chat message
    User {
        /// Query text
        text: String,
    },
    /// Print the endpoint and JSON body for a query without sending it
    Request {
        /// Query text
        #[arg(required_unless_present = "processdocs")]
        query: Option<String>,
        /// Show the document re-indexing request instead of a query
        #[arg(long, conflicts_with_all = ["query", "model"])]
        processdocs: bool,
        /// Model to ask ('compare-both' routes to the compare endpoint)
        #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
        model: String,
    },
    /// Show config file path and effective configuration
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
