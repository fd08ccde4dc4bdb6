use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use fantasy::columns::Column;
use fantasy::commands;
use fantasy::config;
use fantasy::data_provider::{DirectorySource, RecordSource};
use fantasy::fixtures::MockSource;
use fantasy::tui;
use fantasy::types::Dataset;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "fantasy")]
#[command(about = "Fantasy esports leaderboard", long_about = "Fantasy esports leaderboard\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Directory holding regular-season player records (overrides config)
    #[arg(long, global = true)]
    regular_dir: Option<PathBuf>,

    /// Directory holding tournament player records (overrides config)
    #[arg(long, global = true)]
    tournament_dir: Option<PathBuf>,

    /// Use built-in mock players instead of record files
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a leaderboard
    Leaderboard {
        /// Show the tournament leaderboard instead of the regular season
        #[arg(short, long)]
        tournament: bool,

        /// Positions to include, e.g. 1,2,3 (defaults to the configured set)
        #[arg(short, long, value_delimiter = ',')]
        positions: Option<Vec<u8>>,

        /// Column to sort by, by name (e.g. kills, gpm) or header (e.g. K, GPM)
        #[arg(short, long, value_parser = parse_column)]
        sort: Option<Column>,

        /// Sort descending
        #[arg(short, long, requires = "sort")]
        desc: bool,
    },
    /// Show how a player's fantasy score is made up
    Explain {
        /// Player nickname (case-insensitive)
        nickname: String,

        /// Look the player up in the tournament leaderboard
        #[arg(short, long)]
        tournament: bool,
    },
    /// Display current configuration
    Config,
}

fn parse_column(s: &str) -> Result<Column, String> {
    Column::from_name(s).ok_or_else(|| {
        let names: Vec<_> = Column::ALL.iter().map(|c| c.name()).collect();
        format!("unknown column '{}' (expected one of: {})", s, names.join(", "))
    })
}

fn dataset(tournament: bool) -> Dataset {
    if tournament {
        Dataset::Tournament
    } else {
        Dataset::Regular
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("regular_dir: {}", cfg.regular_dir.display());
    println!("tournament_dir: {}", cfg.tournament_dir.display());
    println!("default_positions: {:?}", cfg.default_positions);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!();
    println!("[display.theme]");
    println!("selection_fg: {:?}", cfg.display.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.display.theme.unfocused_selection_fg(),
        if cfg.display.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("best_fg: {:?}", cfg.display.theme.best_fg);
    println!("worst_fg: {:?}", cfg.display.theme.worst_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Apply CLI directory overrides on top of the config file
fn apply_dir_overrides(cli: &Cli, config: &mut config::Config) {
    if let Some(dir) = &cli.regular_dir {
        config.regular_dir = dir.clone();
    }
    if let Some(dir) = &cli.tournament_dir {
        config.tournament_dir = dir.clone();
    }
}

fn create_source(mock: bool, config: &config::Config) -> Arc<dyn RecordSource> {
    if mock {
        tracing::info!("SOURCE: using mock players");
        MockSource::populated().into_shared()
    } else {
        tracing::info!(
            "SOURCE: reading records from {} and {}",
            config.regular_dir.display(),
            config.tournament_dir.display()
        );
        Arc::new(DirectorySource::new(&config.regular_dir, &config.tournament_dir))
    }
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    source: &dyn RecordSource,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Leaderboard { tournament, positions, sort, desc } => {
            let filter = commands::parse_positions(positions, &config.default_positions)?;
            commands::leaderboard::run(source, dataset(tournament), filter, sort, desc, &config.display).await
        }
        Commands::Explain { nickname, tournament } => {
            commands::explain::run(source, dataset(tournament), &nickname, &config.display).await
        }
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    apply_dir_overrides(&cli, &mut config);
    let source = create_source(cli.mock, &config);

    let Some(command) = cli.command else {
        if let Err(e) = tui::run(source, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    // Config command doesn't need any records
    if let Commands::Config = command {
        handle_config_command(&config);
        return;
    }

    if let Err(e) = execute_command(source.as_ref(), &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
