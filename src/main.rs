use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// menuplan - weekly menu generation
#[derive(Parser)]
#[command(name = "menuplan")]
#[command(about = "Generate weekly menus from a recipe book", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Import recipes from a JSON array file
    Import {
        file: PathBuf,
    },
    /// Generate a weekly plan and print it as JSON
    Generate {
        /// JSON planning request, every field optional
        #[arg(long)]
        request: Option<PathBuf>,

        /// Week identifier such as 2025-W10 (overrides the request)
        #[arg(long)]
        week: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = menuplan::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    menuplan::observability::init_observability(
        "menuplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::database::migrate(&config).await,
        Commands::Reset => cli::database::reset(&config).await,
        Commands::Import { file } => cli::database::import(&config, file).await,
        Commands::Generate { request, week } => cli::plan::generate(&config, request, week).await,
    }
}
