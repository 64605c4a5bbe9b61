//! arduino-guide CLI: browse the Arduino guide from a terminal

use clap::{Parser, Subcommand};
use guide_engine::{
    open_or_memory, Address, DynStore, GuideConfig, LinkOutcome, ProgressTracker, Router, Stepper,
    TutorialCatalog, ViewId, CONFIG_FILE,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Arduino guide with saved navigation
#[derive(Parser)]
#[command(name = "arduino-guide")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding config.json and storage.json
    #[arg(long, global = true, default_value = STATE_DIR)]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui {
        /// Address to open, e.g. index.html#examples
        address: Option<String>,
    },

    /// Write the default config to the state directory
    Init,

    /// Load the guide at an address and print the active view
    Open {
        /// Address to open (default: the configured document)
        address: Option<String>,
    },

    /// Load the guide, then click a link
    Click {
        /// Link target, e.g. #feedback or https://www.arduino.cc
        href: String,
    },

    /// Print the saved selection and the view it resolves to
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the learning path, or toggle one item
    Progress {
        #[command(subcommand)]
        action: Option<ProgressCommand>,
    },

    /// Print one step of the configured tutorial
    Tutorial {
        /// Step number, starting at 1
        #[arg(long, default_value = "1")]
        step: usize,
    },

    /// Forget the saved selection
    Reset,
}

#[derive(Subcommand)]
enum ProgressCommand {
    /// Mark an item done, or not done if it already was
    Toggle {
        /// Item label, e.g. "Blink LED"
        label: String,
    },
}

const STATE_DIR: &str = ".arduino-guide";

fn main() {
    let cli = Cli::parse();
    let state_dir = cli.state_dir.as_path();

    if !matches!(cli.command, None | Some(Commands::Tui { .. })) {
        init_tracing();
    }

    match cli.command {
        None => cmd_tui(state_dir, None),
        Some(Commands::Tui { address }) => cmd_tui(state_dir, address),
        Some(Commands::Init) => cmd_init(state_dir),
        Some(Commands::Open { address }) => cmd_open(state_dir, address),
        Some(Commands::Click { href }) => cmd_click(state_dir, &href),
        Some(Commands::Status { json }) => cmd_status(state_dir, json),
        Some(Commands::Progress { action }) => cmd_progress(state_dir, action),
        Some(Commands::Tutorial { step }) => cmd_tutorial(state_dir, step),
        Some(Commands::Reset) => cmd_reset(state_dir),
    }
}

/// Log to stderr, `warn` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn load_config(state_dir: &Path) -> GuideConfig {
    let path = state_dir.join(CONFIG_FILE);
    GuideConfig::load_or_default(&path).unwrap_or_else(|e| fail(e))
}

fn open_router(state_dir: &Path, config: &GuideConfig) -> Router<DynStore> {
    debug!(dir = %state_dir.display(), "Opening store");
    config
        .router(open_or_memory(state_dir))
        .unwrap_or_else(|e| fail(e))
}

fn start_address(config: &GuideConfig, address: Option<String>) -> Address {
    address.map_or_else(|| config.document(), |a| Address::parse(&a))
}

fn cmd_tui(state_dir: &Path, address: Option<String>) {
    let config = load_config(state_dir);
    let store = open_or_memory(state_dir);
    let start = start_address(&config, address);

    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| fail(e));
    if let Err(e) = rt.block_on(guide_tui::run_tui(&config, store, start)) {
        fail(e);
    }
}

fn cmd_init(state_dir: &Path) {
    if let Err(e) = std::fs::create_dir_all(state_dir) {
        eprintln!("Failed to create {}: {e}", state_dir.display());
        std::process::exit(1);
    }

    let config_path = state_dir.join(CONFIG_FILE);
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return;
    }

    match GuideConfig::default().save(&config_path) {
        Ok(()) => println!("Created {}", config_path.display()),
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_open(state_dir: &Path, address: Option<String>) {
    let config = load_config(state_dir);
    let mut router = open_router(state_dir, &config);

    let activation = router.load(start_address(&config, address));
    if activation.fell_back {
        println!("No section named \"{}\"", activation.requested);
    }
    print_current(&router);
}

fn cmd_click(state_dir: &Path, href: &str) {
    let config = load_config(state_dir);
    let mut router = open_router(state_dir, &config);
    router.load(config.document());

    match router.click(href) {
        LinkOutcome::Intercepted(activation) => {
            if activation.fell_back {
                println!("No section named \"{}\"", activation.requested);
            }
            print_current(&router);
        }
        LinkOutcome::PassThrough(href) => {
            println!("Not handled by the guide: {href}");
        }
    }
}

fn print_current(router: &Router<DynStore>) {
    let title = router
        .current_view()
        .map_or(ViewId::FALLBACK, |v| v.title());
    println!("View: {} ({title})", router.current());
    println!("Address: {}", router.address());
}

fn cmd_status(state_dir: &Path, json: bool) {
    let config = load_config(state_dir);
    let router = open_router(state_dir, &config);
    let tracker = ProgressTracker::new(config.learning_path.clone());

    // What a fresh load without a fragment would show, without loading
    let stored = router.stored_selection();
    let wanted = stored.clone().unwrap_or_else(|| config.home_view.clone());
    let resolves_to = if router.views().contains(&wanted) {
        wanted
    } else {
        ViewId::FALLBACK.to_string()
    };
    let progress = tracker.summary(router.store()).ok();

    if json {
        let output = serde_json::json!({
            "storage_key": router.storage_key(),
            "stored": stored,
            "resolves_to": resolves_to,
            "progress": progress,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => fail(e),
        }
        return;
    }

    println!("Arduino Guide Status\n");
    match &stored {
        Some(id) => println!("Saved view: {id}"),
        None => println!("No saved view"),
    }
    println!("Opens at: {resolves_to}");
    if let Some(p) = progress {
        println!("Learning path: {}/{} topics", p.done, p.total);
    }
}

fn cmd_progress(state_dir: &Path, action: Option<ProgressCommand>) {
    let config = load_config(state_dir);
    let mut store = open_or_memory(state_dir);
    let tracker = ProgressTracker::new(config.learning_path);

    if let Some(ProgressCommand::Toggle { label }) = action {
        match tracker.toggle_label(&mut store, &label) {
            Ok(true) => println!("Done: {}", label.trim()),
            Ok(false) => println!("Not done: {}", label.trim()),
            Err(e) => fail(e),
        }
        return;
    }

    for (c, card) in tracker.path().cards.iter().enumerate() {
        let tally = tracker.card_tally(&store, c).unwrap_or_else(|e| fail(e));
        println!("{} ({}/{})", card.title, tally.done, tally.total);
        for label in &card.items {
            let done = tracker.is_done(&store, label).unwrap_or_else(|e| fail(e));
            println!("  [{}] {label}", if done { "x" } else { " " });
        }
    }
}

fn cmd_tutorial(state_dir: &Path, step: usize) {
    let config = load_config(state_dir);
    let mut stepper =
        Stepper::load(&TutorialCatalog::builtin(), &config.tutorial).unwrap_or_else(|e| fail(e));
    stepper.go_to(step.saturating_sub(1));

    let current = stepper.step();
    println!("{}", stepper.heading());
    println!("Image: {}", current.image);
    println!();
    println!("{}", current.text);
    if let Some(code) = &current.code {
        println!();
        for line in code.lines() {
            println!("    {line}");
        }
    }
    println!();
    println!("{}", stepper.counter());
}

fn cmd_reset(state_dir: &Path) {
    let config = load_config(state_dir);
    let mut router = open_router(state_dir, &config);

    if router.stored_selection().is_none() {
        println!("No saved view");
        return;
    }
    router.clear_selection();
    println!("Cleared saved view");
}
