//! Wordle Sessions - CLI
//!
//! Terminal, line-mode and JSON-lines front-ends over the session engine,
//! plus a parallel self-play simulator.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use wordle_sessions::{
    commands::{progress_bar, run_serve, run_simple, run_simulation},
    config::{DEFAULT_ATTEMPTS, GameConfig},
    game::{GameService, SessionReaper, SessionStore},
    logging::{self, LogTarget},
    output::{print_dictionaries, print_simulation_result},
    solver::{Solver, StrategyType},
    wordlists::{
        Catalog, DEFAULT_DICTIONARY, DictionaryProvider, WordList, loader::load_from_file,
    },
};

/// Id under which `--word-file` is registered
const CUSTOM_DICTIONARY: &str = "custom";

#[derive(Parser)]
#[command(
    name = "wordle_sessions",
    about = "Session-based Wordle with terminal, line and JSON front-ends",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary to deal words from (default: en-us-5, or 'custom' with --word-file)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Attempts per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Minutes a session may sit idle before it is evicted
    #[arg(long, global = true, default_value_t = 30)]
    idle_timeout: u64,

    /// Seconds between sweeps for idle sessions
    #[arg(long, global = true, default_value_t = 60)]
    sweep_interval: u64,

    /// Word list file (one word per line) registered as the 'custom' dictionary
    #[arg(short = 'w', long, global = true)]
    word_file: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Answer JSON requests on stdin, one per line
    Serve,

    /// Play many games with a candidate-filtering player
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Guess selection: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },

    /// List the available dictionaries
    Dictionaries,
}

impl Cli {
    fn config(&self) -> Result<GameConfig> {
        let default_dictionary = match (&self.dictionary, &self.word_file) {
            (Some(id), _) => id.clone(),
            (None, Some(_)) => CUSTOM_DICTIONARY.to_string(),
            (None, None) => DEFAULT_DICTIONARY.to_string(),
        };
        let config = GameConfig {
            total_attempts: self.attempts,
            idle_timeout: Duration::from_secs(self.idle_timeout.saturating_mul(60)),
            sweep_interval: Duration::from_secs(self.sweep_interval),
            default_dictionary,
        };
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// Embedded dictionaries plus the optional custom word list
fn build_catalog(word_file: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::embedded();

    if let Some(path) = word_file {
        let words = load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let count = words.len();
        let list = WordList::new(
            CUSTOM_DICTIONARY,
            "Custom",
            path.display().to_string(),
            words,
            Vec::new(),
        )
        .with_context(|| format!("unusable word list {}", path.display()))?;
        info!(path = %path.display(), words = count, "loaded custom dictionary");
        catalog.insert(list);
    }

    Ok(catalog)
}

/// Fresh store plus service sharing `catalog`
fn build_service(config: &GameConfig, catalog: &Arc<Catalog>) -> GameService {
    let store = Arc::new(SessionStore::new(config.idle_timeout));
    let dictionaries: Arc<dyn DictionaryProvider> = catalog.clone();
    GameService::new(store, dictionaries, config)
}

fn init_logging(command: &Commands, log_file: Option<&Path>) -> Result<()> {
    let target = match (log_file, command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    let default_level = match command {
        Commands::Serve | Commands::Simulate { .. } => "info",
        Commands::Play | Commands::Simple | Commands::Dictionaries => "warn",
    };
    logging::init(target, default_level)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&command, cli.log_file.as_deref())?;

    let config = cli.config()?;
    let catalog = Arc::new(build_catalog(cli.word_file.as_deref())?);
    let service = build_service(&config, &catalog);

    match command {
        Commands::Play => run_play_command(&service, &config),
        Commands::Simple => run_simple_command(&service, &config),
        Commands::Serve => run_serve_command(&service, &config),
        Commands::Simulate { count, strategy } => {
            run_simulate_command(&service, &catalog, &config, count, &strategy)
        }
        Commands::Dictionaries => {
            print_dictionaries(&service.dictionaries(), &config.default_dictionary);
            Ok(())
        }
    }
}

fn spawn_reaper(service: &GameService, config: &GameConfig) -> Result<SessionReaper> {
    SessionReaper::spawn(Arc::clone(service.store()), config.sweep_interval)
        .context("failed to start session reaper")
}

fn run_play_command(service: &GameService, config: &GameConfig) -> Result<()> {
    use wordle_sessions::interactive::{App, run_tui};

    let reaper = spawn_reaper(service, config)?;
    let app = App::new(service, &config.default_dictionary).context("cannot start a game")?;
    let result = run_tui(app);
    reaper.shutdown();
    result
}

fn run_simple_command(service: &GameService, config: &GameConfig) -> Result<()> {
    let reaper = spawn_reaper(service, config)?;
    let result = run_simple(
        service,
        &config.default_dictionary,
        io::stdin().lock(),
        io::stdout().lock(),
    );
    reaper.shutdown();
    result
}

fn run_serve_command(service: &GameService, config: &GameConfig) -> Result<()> {
    let reaper = spawn_reaper(service, config)?;
    let summary = run_serve(service, io::stdin().lock(), io::stdout().lock())?;
    reaper.shutdown();
    info!(
        requests = summary.requests,
        errors = summary.errors,
        live_sessions = service.store().len(),
        "serve finished"
    );
    Ok(())
}

fn run_simulate_command(
    service: &GameService,
    catalog: &Catalog,
    config: &GameConfig,
    count: usize,
    strategy_name: &str,
) -> Result<()> {
    let dictionary = &config.default_dictionary;
    let answers = catalog
        .get(dictionary)
        .ok_or_else(|| anyhow!("unknown dictionary: {dictionary}"))?
        .answers();

    println!("Simulating {count} games from '{dictionary}'...");
    let strategy = StrategyType::from_name(strategy_name);
    let name = strategy.name();
    let solver = Solver::new(strategy, answers);
    let pb = progress_bar(count);

    let result = run_simulation(service, &solver, dictionary, name, count, &pb)
        .context("simulation failed")?;
    print_simulation_result(&result);
    Ok(())
}
