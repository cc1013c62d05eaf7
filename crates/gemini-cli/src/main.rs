/*
[INPUT]:  CLI arguments, optional configuration file, GEMINI_* environment
[OUTPUT]: JSON results of Gemini API calls on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gemini_cli::{CliConfig, Command, run};

#[derive(Parser, Debug)]
#[command(name = "gemini-cli", version, about = "Gemini REST API command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Talk to the sandbox regardless of configuration
    #[arg(long)]
    sandbox: bool,
    /// Validate configuration and exit without calling the API
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    if args.sandbox {
        config.sandbox = true;
    }
    info!(
        environment = ?config.environment(),
        credentials = config.has_credentials(),
        "configuration loaded"
    );

    let client = config.build_client()?;

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        let summary = json!({
            "environment": config.environment(),
            "base_url": client.base_url().as_str(),
            "credentials": config.has_credentials(),
            "http": config.http,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let Some(command) = args.command else {
        bail!("no command given; see --help");
    };
    if command.is_private() && !config.has_credentials() {
        bail!("{command:?} needs api_key and api_secret (config file or GEMINI_API_KEY / GEMINI_API_SECRET)");
    }

    debug!(?command, "running command");
    let value = run(&client, command).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
