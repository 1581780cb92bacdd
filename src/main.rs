// Command-line entry point for the direct research responder.
//
// `research <query> [session_id]` prints the response as indented JSON on
// stdout. Every argument is taken verbatim, hyphens included; the config file
// comes from SUNA_RESEARCH_CONFIG or the default location. Log lines go to
// stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use suna_research::research::StaticSource;
use suna_research::{
    CONFIG_ENV, LOGGER_NAME, ResearchResponder, TargetLogger, USAGE, init_logging,
    load_yaml_config, resolve_config_path,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "research", disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Answer a research query with three structured results as JSON", long_about = None)]
struct Cli {
    /// `<query> [session_id]`; anything after the session id is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut args = cli.args.into_iter();

    let Some(query) = args.next() else {
        println!("{USAGE}");
        return Ok(ExitCode::from(1));
    };
    let session_id = args.next();

    let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = load_yaml_config(explicit.as_deref())?;
    init_logging(&config.logging);

    match resolve_config_path(explicit.as_deref()) {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using default configuration"),
    }

    let responder = ResearchResponder::new(StaticSource, TargetLogger::new(LOGGER_NAME));
    let response = responder.perform_research(&query, session_id.as_deref());

    // Failure responses are still printed and exit 0; callers inspect the payload
    let json = response
        .to_json_pretty()
        .context("Failed to serialize research response")?;
    println!("{json}");

    Ok(ExitCode::SUCCESS)
}
