use anyhow::Result;
use clap::{Parser, Subcommand};
use safeplate::cli::{self as commands, CheckArgs, SearchArgs};

/// safeplate - allergy-aware menu checks and restaurant search
#[derive(Parser)]
#[command(name = "safeplate")]
#[command(about = "Allergy-aware menu checks and restaurant search", long_about = None)]
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
    /// Classify one menu item against an allergy profile
    Check(CheckArgs),
    /// Rank the dataset's restaurants for a keyword
    Search(SearchArgs),
    /// Load the dataset and print its counts
    Dataset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = safeplate::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    safeplate::observability::init_observability(
        "safeplate",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => commands::serve(config, host, port).await,
        Commands::Check(args) => commands::check(&config, &args),
        Commands::Search(args) => commands::search(&config, &args),
        Commands::Dataset => commands::dataset(&config),
    }
}
