//! shmaude CLI: terminal chat mockup with a simulated assistant

use clap::{Parser, Subcommand, ValueEnum};
use shmaude_engine::{
    resolve_data_dir, Config, JsonFileStore, MemoryStore, PreferenceStore, StoreError,
    ThemeController,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SHMAUDE_LOG";

/// Log file name inside the data directory.
const LOG_FILE: &str = "shmaude.log";

/// Chat interface mockup in the terminal
#[derive(Parser)]
#[command(name = "shmaude")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory for preferences, config and logs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep preferences in memory and write nothing to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Print or change the stored theme preference
    Theme {
        /// Store a new preference
        #[arg(long, value_enum)]
        set: Option<ThemeChoice>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    if !cli.ephemeral {
        init_logging(&data_dir)?;
    }
    let config = Config::load_or_default(&data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "starting");

    let store = open_store(&data_dir, cli.ephemeral);
    match cli.command {
        None | Some(Commands::Tui) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(shmaude_tui::run_tui(&config, store))
        }
        Some(Commands::Theme { set, json }) => cmd_theme(store, set, json),
    }
}

/// Send log output to `<data_dir>/shmaude.log`; the terminal belongs to the UI.
fn init_logging(data_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))?;

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn open_store(data_dir: &Path, ephemeral: bool) -> Box<dyn PreferenceStore> {
    if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::in_dir(data_dir))
    }
}

fn cmd_theme(
    store: Box<dyn PreferenceStore>,
    set: Option<ThemeChoice>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = apply_theme(store, set)?;
    if json {
        let value = serde_json::json!({
            "theme": theme_name(theme.is_dark()),
            "darkMode": theme.is_dark(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", theme_name(theme.is_dark()));
    }
    Ok(())
}

fn apply_theme(
    store: Box<dyn PreferenceStore>,
    set: Option<ThemeChoice>,
) -> Result<ThemeController, StoreError> {
    let mut theme = ThemeController::load(store);
    if let Some(choice) = set {
        theme.try_set_dark(choice == ThemeChoice::Dark)?;
    }
    Ok(theme)
}

fn theme_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}
