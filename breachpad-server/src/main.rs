// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Breachpad — deliberately vulnerable blog backend
//
//  API:       axum (posts, comments, search, health)
//  WAF feed:  ModSecurity error-log parser, polled by the dashboard
//  Store:     in-memory maps + JSON state file, seeded at startup
//
//  This server exists to be attacked in a lab. Do not expose it.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use breachpad_api::server::AppState;
use breachpad_core::BreachpadConfig;
use breachpad_store::{BlogStore, SeedData};
use breachpad_waf::WafLogParser;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "breachpad", version, about = "Breachpad — vulnerable blog backend with WAF dashboard feed")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "breachpad.yaml")]
    config: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    warn!("Breachpad is a teaching target with intentional weaknesses — keep it off production networks");

    // ── Config ──
    let config = if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading config file");
        BreachpadConfig::load(&cli.config)?
    } else {
        info!("No config file found, using defaults");
        BreachpadConfig::default()
    };

    // ── Store: explicit init + injected seed ──
    let seed = if let Some(path) = &config.store.seed_file {
        info!(path = %path.display(), "Loading seed definitions");
        let text = std::fs::read_to_string(path)?;
        serde_yaml::from_str::<SeedData>(&text)?
    } else if config.store.seed {
        SeedData::default()
    } else {
        SeedData::none()
    };
    let store = BlogStore::init(config.store.state_file.clone(), &seed);
    let stats = store.stats();
    info!(%stats, "Blog store ready");

    // ── Shared API state ──
    let state = Arc::new(AppState {
        store,
        waf_parser: WafLogParser::new(),
        waf_log_path: config.waf.log_path.clone(),
    });

    info!(
        addr = %config.server.addr,
        waf_log = %config.waf.log_path.display(),
        "Breachpad is ready — serving API"
    );

    breachpad_api::server::start(config.server, state).await?;

    info!("Breachpad stopped");
    Ok(())
}
