mod api;
mod cli;
mod config;
mod error;
mod geo;
mod logic;
mod models;

use api::AppState;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use geo::GeoIndex;
use logic::RuleBasedAdvisor;
use models::FarmProfile;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; -v flags override the default filter
    let default_filter = match cli.verbose {
        0 => "agrimitra=info,tower_http=info",
        1 => "agrimitra=debug,tower_http=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Some(Commands::Init) => {
            let (_, path) = Config::setup_interactive()?;
            println!("Ready. Start the server with `agrimitra -c {}`", path.display());
            Ok(())
        }
        Some(Commands::Check) => check(cli.config),
        Some(Commands::Rules) => {
            for (id, name) in RuleBasedAdvisor::new().list_rules() {
                println!("{:24} {}", id, name);
            }
            Ok(())
        }
        Some(Commands::Advise { input }) => advise(&input),
        None => serve(cli.config).await,
    }
}

fn load_config(config_override: Option<std::path::PathBuf>) -> anyhow::Result<Config> {
    if !Config::exists(config_override.as_ref()) {
        eprintln!("No configuration found.");
        eprintln!("Run `agrimitra init` or copy config/config.yaml.example to config/config.yaml");
        std::process::exit(1);
    }

    match Config::load(config_override) {
        Ok(c) => Ok(c),
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

fn check(config_override: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_override)?;
    println!("Config OK ({})", config.server.bind_address());

    let geo = GeoIndex::load(&config.geo.data_path)?;
    println!(
        "Geo data OK ({} states, {} districts)",
        geo.state_count(),
        geo.district_count()
    );

    Ok(())
}

/// Offline advisor run: read a farm profile from a JSON file and print the
/// advisory records. Skips the state/district validation the HTTP handler
/// performs.
fn advise(input: &std::path::Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)?;
    let profile: FarmProfile = serde_json::from_str(&raw)?;

    let records = RuleBasedAdvisor::new().generate(&profile);
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}

async fn serve(config_override: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_override)?;

    let geo = GeoIndex::load(&config.geo.data_path)?;
    tracing::info!(
        states = geo.state_count(),
        districts = geo.district_count(),
        "loaded geographic reference data"
    );

    let app = api::router(AppState::new(geo));

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("AgriMitra advisory service listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
