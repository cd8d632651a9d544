use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commit_relay::config::Config;
use commit_relay::llm::ModelRegistry;
use commit_relay::server;

#[derive(Parser)]
#[command(name = "commit-relay")]
#[command(about = "HTTP relay that turns code diffs into commit messages", long_about = None)]
struct Cli {
    /// Path to a config file (default: <config dir>/commit-relay/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP relay (default)
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List the known model identifiers
    Models,
    /// Inspect configuration
    Config {
        /// Show the effective configuration
        #[arg(short, long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commit_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::start_server(config).await?;
        }
        Commands::Models => {
            print_models();
        }
        Commands::Config { show } => {
            handle_config(&config, show)?;
        }
    }

    Ok(())
}

fn print_models() {
    let registry = ModelRegistry::builtin();
    for (category, models) in registry.categories() {
        println!("{}:", category);
        for model in models {
            let marker = if *model == registry.default_model() { " (default)" } else { "" };
            println!("  {}{}", model, marker);
        }
    }
}

fn handle_config(config: &Config, show: bool) -> Result<()> {
    if show {
        println!("Current configuration:");
        println!("{}", toml::to_string_pretty(config)?);
        let key_state = if config.has_api_key() { "set" } else { "not set" };
        println!("# api key: {}", key_state);
        return Ok(());
    }

    println!("Configuration file: {:?}", Config::config_path()?);
    println!("Use --show to view the effective configuration.");

    Ok(())
}
