//! Application run modes: logger init and subcommand dispatch.

use std::io;

use clap::CommandFactory;

use crate::cli::{self, Args, Commands};
use crate::core;
use crate::core::config::Config;
use crate::core::error::RenderError;

/// Initialize env_logger on stderr so stdout carries only markup.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Run the selected subcommand.
pub fn dispatch(args: &Args, config: &Config) -> Result<(), RenderError> {
    match &args.command {
        Commands::Answer { file } => core::cli::run_answer(config, file.as_deref()),
        Commands::Compare { file, models } => {
            core::cli::run_compare(config, file.as_deref(), models.as_deref())
        }
        Commands::User { text } => {
            core::cli::run_user(text);
            Ok(())
        }
        Commands::Request {
            processdocs: true, ..
        } => {
            core::cli::run_processdocs(config);
            Ok(())
        }
        Commands::Request { query, model, .. } => {
            core::cli::run_request(config, query.as_deref().unwrap_or_default(), model)
        }
        Commands::Config => {
            core::cli::run_config(config);
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut io::stdout());
            Ok(())
        }
    }
}
