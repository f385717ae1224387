use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "entraflow")]
#[command(about = "Forwards Entra ID diagnostic logs to Log Analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process one batch of event messages (files, or stdin lines)
    Run {
        /// Event payload files, one message per file
        event_files: Vec<PathBuf>,
    },
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entraflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Default behavior is to run on stdin
    let command = cli.command.unwrap_or(Commands::Run {
        event_files: Vec::new(),
    });

    match command {
        Commands::Run { event_files } => {
            entraflow::cli::run::run(event_files).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Check => {
                entraflow::cli::config::check();
            }
        },
    }

    Ok(())
}
