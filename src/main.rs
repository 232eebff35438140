use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use civ_winrates::api::state::AppState;
use civ_winrates::api::{build_router, cors_layer};
use civ_winrates::calculate::WinrateSummary;
use civ_winrates::config::AppConfig;
use civ_winrates::models::CivLookup;

#[derive(Parser)]
#[command(name = "civ-winrates")]
#[command(about = "Per-civilization win rates from match history files")]
#[command(version)]
struct Cli {
    /// Path to configuration file (used only if it exists)
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute win rates and start the API server
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compute win rates and print them
    Report {
        /// Print the same JSON the API serves
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn print_table(summary: &WinrateSummary) {
    if summary.is_empty() {
        println!("No ranked matches found.");
        return;
    }

    let width = summary
        .rows()
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Civilization".len());

    println!("{:>3}  {:<width$}  {:>8}  {:>7}", "#", "Civilization", "Win %", "Games");
    for (i, row) in summary.rows().iter().enumerate() {
        println!(
            "{:>3}  {:<width$}  {:>8.2}  {:>7}",
            i + 1,
            row.name,
            row.winrate,
            row.games
        );
    }
    println!(
        "\n{} civilizations, {} games",
        summary.len(),
        summary.total_games()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_tracing(&config.log_level, cli.json_logs);

    tracing::info!("Starting civ-winrates v{}", env!("CARGO_PKG_VERSION"));

    let storage = config.storage();
    let summary = WinrateSummary::build(&storage, &CivLookup::builtin()).with_context(|| {
        format!(
            "Failed to compute win rates from {}",
            storage.data_dir.display()
        )
    })?;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let cors = cors_layer(&config.server.cors_origin)
                .with_context(|| format!("Invalid CORS origin: {}", config.server.cors_origin))?;

            let app = build_router(AppState::new(summary)).layer(cors);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Dashboard: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Report { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(summary.rows())?);
            } else {
                print_table(&summary);
            }
        }
    }

    Ok(())
}
