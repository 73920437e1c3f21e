mod config;
mod output;
mod parse;
mod prompt;
mod session;
mod state;

use clap::Parser;
use pairsort_core::Sorter;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::session::{SessionOptions, SessionOutcome, run_session};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "pairsort", version, about = "Rank a list by answering one comparison at a time")]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Start or resume an interactive ranking session
    Rank(RankArgs),
    /// Show how far a saved session has got
    Status(StatusArgs),
    /// Create a default config file at ~/.config/pairsort/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// File with one item per line, or a JSON array of strings
    #[arg(long)]
    items: Option<PathBuf>,

    /// Inline item (repeatable)
    #[arg(long = "item")]
    inline_items: Vec<String>,

    /// Only resolve the top N items (tied items each count)
    #[arg(long)]
    top: Option<usize>,

    /// Seed for the initial shuffle, for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    /// Session file: resumed if it exists, rewritten after every answer
    #[arg(long)]
    state: Option<PathBuf>,

    /// Output JSON instead of table
    #[arg(long)]
    json: bool,

    /// Don't show the progress estimate above each question
    #[arg(long)]
    no_progress: bool,

    /// Path to config file (default: ~/.config/pairsort/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct StatusArgs {
    /// Session file to inspect
    #[arg(long)]
    state: Option<PathBuf>,

    /// Only consider the top N items
    #[arg(long)]
    top: Option<usize>,

    /// Path to config file (default: ~/.config/pairsort/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Load items from --items file and --item inline args.
fn load_items(args: &RankArgs) -> Vec<String> {
    let mut items = Vec::new();

    if let Some(ref path) = args.items {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
        items = parse::parse_items_from_str(&content)
            .unwrap_or_else(|e| bail(format!("File looks like JSON but failed to parse: {e}")));
    }

    items.extend(args.inline_items.iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()));

    if let Some(dup) = parse::find_duplicate(&items) {
        bail(format!("Item \"{dup}\" is listed more than once"));
    }
    items
}

fn resolve_config_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| config::config_path().unwrap_or_else(|e| bail(e)))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Status(args) => run_status(args),
        Commands::Init => {
            let path = config::config_path().unwrap_or_else(|e| bail(e));
            config::create_config_at(&path).unwrap_or_else(|e| bail(e));
            println!("Created config at {}", path.display());
            println!("Edit it to set your default limit, session file, etc.");
        }
    }
}

fn run_rank(args: RankArgs) {
    let config_path = resolve_config_path(args.config.clone());
    let settings = config::load_config(&config_path)
        .unwrap_or_else(|e| bail(e))
        .resolve(args.top, args.state.clone(), args.no_progress);
    let top = settings.top;
    let state_path = settings.state_file;

    let items = load_items(&args);
    let saved = state_path.as_deref().and_then(state::load_state);

    let mut sorter = match saved {
        Some(snapshot) => {
            if !items.is_empty() && !state::same_items(&snapshot, &items) {
                bail("The given items don't match the saved session. Drop --items/--item to resume it, or use another --state file.");
            }
            info!(items = snapshot.prior_order.len(), decisions = snapshot.ledger.len(), "resuming saved session");
            Sorter::from_state(snapshot)
        }
        None => {
            if items.len() < 2 {
                bail(format!("Need at least 2 items to rank, got {}. Use --items <file> or --item <name>.", items.len()));
            }
            info!(items = items.len(), seed = ?args.seed, "starting new session");
            match args.seed {
                Some(seed) => Sorter::with_seed(items, seed),
                None => Sorter::new(items),
            }
        }
    };

    if !io::stdin().is_terminal() {
        info!("stdin is not a terminal; reading answers from it line by line");
    }

    let options = SessionOptions {
        limit: top,
        show_progress: settings.show_progress,
        state_path: state_path.as_deref(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_session(&mut sorter, &options, &mut stdin.lock(), &mut stdout.lock())
        .unwrap_or_else(|e| bail(format!("Terminal IO failed: {e}")));

    match outcome {
        SessionOutcome::Complete(result) => {
            if args.json {
                output::print_json(&result, sorter.round());
            } else {
                output::print_table(&result, sorter.round());
            }
        }
        SessionOutcome::Stopped => match state_path {
            Some(path) => eprintln!(
                "Stopped after {} answers. Resume with: pairsort rank --state {}",
                sorter.round(),
                path.display(),
            ),
            None => eprintln!(
                "Stopped after {} answers. Nothing was saved; pass --state <file> to keep a session.",
                sorter.round(),
            ),
        },
    }
}

fn run_status(args: StatusArgs) {
    let config_path = resolve_config_path(args.config.clone());
    let settings = config::load_config(&config_path)
        .unwrap_or_else(|e| bail(e))
        .resolve(args.top, args.state.clone(), false);
    let top = settings.top;
    let path = settings
        .state_file
        .unwrap_or_else(|| bail(format!("No session file. Pass --state or set state_file in {}", config_path.display())));

    let snapshot = state::load_state(&path)
        .unwrap_or_else(|| bail(format!("No session found at {}", path.display())));

    let mut sorter = Sorter::from_state(snapshot);
    println!("Session: {}", path.display());
    for line in output::describe_status(&mut sorter, top) {
        println!("{line}");
    }
}
