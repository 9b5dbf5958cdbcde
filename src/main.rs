use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod config;
mod views;

use commands::{interactive, ConfigCommand, PetCommand};
use config::Config;
use moodpet_core::{Controller, HttpClient};

#[derive(Parser)]
#[command(name = "moodpet")]
#[command(version)]
#[command(about = "Track your moods and raise a virtual pet", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Pet(PetCommand),

    /// Start an interactive session
    Interactive,

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodpet=warn,moodpet_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for init command
    let cli_config_path = cli.config.clone();

    // Load configuration
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Pet(cmd)) => {
            let mut controller = new_controller(&config);
            cmd.run(&mut controller).await?;
        }
        Some(Commands::Interactive) => {
            let mut controller = new_controller(&config);
            interactive::run(&mut controller).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config, cli_config_path)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn new_controller(config: &Config) -> Controller<HttpClient> {
    tracing::debug!(
        "Using backend {} (from {})",
        config.api_url.value,
        config.api_url.source
    );
    Controller::new(
        HttpClient::new(config.api_url.value.clone()),
        config.session_settings(),
    )
}
