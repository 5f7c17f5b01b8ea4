//! CLI-only commands: render payloads, show a request, print config.
//!
//! Markup goes to stdout; diagnostics go through the logger to stderr.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::core::config::Config;
use crate::core::error::RenderError;
use crate::core::paths;
use crate::core::payload::{self, AnswerPayload};
use crate::core::request::{QueryRequest, Route};
use crate::render;

/// Read a response body from `file`, or from stdin when absent or `-`.
pub fn read_input(file: Option<&Path>) -> Result<String, RenderError> {
    match file {
        Some(path) if path != Path::new("-") => {
            log::debug!("Reading payload from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Run the `answer` command: render a `/query` body as a bot message.
pub fn run_answer(config: &Config, file: Option<&Path>) -> Result<(), RenderError> {
    let body = payload::parse_json(&read_input(file)?)?;
    let answer = AnswerPayload::from_json(&body);
    println!("{}", render::render_bot_message(&answer, config));
    Ok(())
}

/// Run the `compare` command: render a `/compare` body with one card per model.
pub fn run_compare(
    config: &Config,
    file: Option<&Path>,
    models: Option<&[String]>,
) -> Result<(), RenderError> {
    let body = payload::parse_json(&read_input(file)?)?;
    let results = payload::comparison_from_json(&body);
    let keys = models.unwrap_or(config.compare_models.as_slice());
    println!(
        "{}",
        render::render_comparison_message(&results, keys, config)?
    );
    Ok(())
}

/// Run the `user` command: render the user's query as a chat message.
pub fn run_user(text: &str) {
    println!("{}", render::render_user_message(text));
}

/// Run the `request` command: print the endpoint and JSON body for a query.
pub fn run_request(config: &Config, query: &str, model: &str) -> Result<(), RenderError> {
    let request = QueryRequest::new(query, model)?;
    let endpoint = request.route().endpoint(config);
    println!("POST {}", endpoint);
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

/// Run `request --processdocs`: print the re-indexing endpoint. The job takes no body.
pub fn run_processdocs(config: &Config) {
    println!("POST {}", Route::ProcessDocs.endpoint(config));
}

/// Run the `config` command: display the config file path and effective values.
pub fn run_config(config: &Config) {
    let config_file = paths::config_file()
        .map(|p| {
            let status = if p.exists() { "" } else { " (not found)" };
            format!("{}{}", p.display(), status)
        })
        .unwrap_or_else(|| "—".to_string());

    println!("Config file:    {}", config_file);
    println!("Data directory: {}", config.data_directory);
    println!("Query:          {}", config.query_endpoint);
    println!("Compare:        {}", config.compare_endpoint);
    println!("Process docs:   {}", config.processdocs_endpoint);
    println!("Models:         {}", config.compare_models.join(", "));
}
