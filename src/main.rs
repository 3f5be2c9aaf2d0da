//! Main entry point for the matchboard client
//!
//! A thin CLI over the library: leaderboard, active-match feed, match
//! detail, match creation, and a long-running keep-alive mode with
//! graceful shutdown.

use anyhow::Result;
use clap::{Parser, Subcommand};
use matchboard::api::client::ApiClientConfig;
use matchboard::api::{HttpScoreboardApi, ScoreboardApi};
use matchboard::config::AppConfig;
use matchboard::feed;
use matchboard::keepalive::KeepAlive;
use matchboard::leaderboard::build_leaderboard;
use matchboard::types::NewMatch;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// Matchboard - match-tracking scoreboard client
#[derive(Parser)]
#[command(
    name = "matchboard",
    version,
    about = "Client for a match-tracking scoreboard API",
    long_about = "Matchboard fetches players, matches, and per-match statistics from a \
                 remote scoreboard API and aggregates them client-side: ranked \
                 leaderboards per game, the active-match feed, and match details. \
                 It can also run a background keep-alive pinger to stop the backing \
                 server from idling."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// API base URL override
    #[arg(long, value_name = "URL", help = "Override scoreboard API base URL")]
    api_url: Option<String>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without calling the API")]
    dry_run: bool,

    /// Emit JSON instead of formatted text
    #[arg(long, help = "Emit results as pretty-printed JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the ranked leaderboard for a game
    Leaderboard {
        /// Game identifier, matched exactly against match records
        #[arg(short, long, value_name = "GAME")]
        game: String,
    },
    /// List currently active matches with their rosters
    Matches,
    /// Show one match with its per-player stat lines
    Match {
        /// Match id
        id: i64,
    },
    /// Create a new match
    CreateMatch {
        /// Game identifier
        #[arg(short, long, value_name = "GAME")]
        game: String,
        /// Team A player ids, comma separated
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        team_a: Vec<i64>,
        /// Team B player ids, comma separated
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        team_b: Vec<i64>,
    },
    /// Run the keep-alive pinger until interrupted
    Serve,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(api_url) = &args.api_url {
        config.api.base_url = api_url.clone();
    }

    matchboard::config::validate_config(&config)?;
    Ok(config)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C) signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}

async fn run_leaderboard(api: &dyn ScoreboardApi, game: &str, json: bool) -> Result<()> {
    let rows = build_leaderboard(api, game).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No statistics for game {}", game);
        return Ok(());
    }

    println!(
        "{:>3}  {:<20} {:>5} {:>4} {:>4} {:>5} {:>5} {:>5} {:>5} {:>6}",
        "#", "Player", "Games", "W", "L", "Win%", "K", "D", "A", "KDA"
    );
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "{:>3}  {:<20} {:>5} {:>4} {:>4} {:>4}% {:>5} {:>5} {:>5} {:>6.2}",
            rank + 1,
            row.name,
            row.games,
            row.wins,
            row.losses,
            row.winrate,
            row.kills,
            row.deaths,
            row.assists,
            row.kda
        );
    }

    Ok(())
}

async fn run_matches(api: &dyn ScoreboardApi, json: bool) -> Result<()> {
    let feed = feed::active_matches(api).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }

    if feed.is_empty() {
        println!("No active matches");
        return Ok(());
    }

    for m in feed {
        println!(
            "#{} [{}] {} : {}  |  {} vs {}",
            m.id,
            m.game,
            m.score_a,
            m.score_b,
            m.team_a.join(", "),
            m.team_b.join(", ")
        );
    }

    Ok(())
}

async fn run_match_detail(api: &dyn ScoreboardApi, id: i64, json: bool) -> Result<()> {
    let detail = feed::match_detail(api, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    let m = &detail.match_info;

    println!(
        "#{} [{}] {}  {} : {}",
        m.id, m.game, m.status, m.score_a, m.score_b
    );
    for entry in &detail.lines {
        println!(
            "  [{}] {:<20} K {:>3}  D {:>3}  A {:>3}  {}",
            entry.line.team,
            entry.player_name,
            entry.line.kills,
            entry.line.deaths,
            entry.line.assists,
            if entry.line.winner { "win" } else { "loss" }
        );
    }

    Ok(())
}

async fn run_serve(api: Arc<dyn ScoreboardApi>, config: &AppConfig) -> Result<()> {
    if !config.keep_alive.enabled {
        info!("Keep-alive disabled in configuration - nothing to run");
        return Ok(());
    }

    let mut keep_alive = KeepAlive::new(api, config.keep_alive_interval());
    keep_alive.start();

    info!("Keep-alive pinger running, press Ctrl+C to stop");
    wait_for_shutdown_signal().await;

    keep_alive.stop();
    info!("Shutdown complete");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "matchboard {} - api: {}",
        matchboard::VERSION,
        config.api.base_url
    );

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Dry run completed - exiting without calling the API");
        return Ok(());
    }

    let api = Arc::new(HttpScoreboardApi::new(ApiClientConfig::from(&config))?);

    match args.command {
        Command::Leaderboard { game } => run_leaderboard(api.as_ref(), &game, args.json).await,
        Command::Matches => run_matches(api.as_ref(), args.json).await,
        Command::Match { id } => run_match_detail(api.as_ref(), id, args.json).await,
        Command::CreateMatch {
            game,
            team_a,
            team_b,
        } => {
            let created = api
                .create_match(&NewMatch {
                    game,
                    team_a,
                    team_b,
                })
                .await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!("Created match #{} [{}]", created.id, created.game);
            }
            Ok(())
        }
        Command::Serve => run_serve(api, &config).await,
    }
}
