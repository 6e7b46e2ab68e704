mod completer;
mod host;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use dcr_wallet_core::commands::Command;
use dcr_wallet_core::settings::SettingsStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use repl::Session;

#[derive(Parser)]
#[command(name = "dcr-wallet", about = "Decred Wallet: seed restore, history and send/receive from the terminal", version)]
pub(crate) struct Cli {
    /// Data directory for settings (default: XDG data dir/dcrwallet)
    #[arg(long, env = "DCRWALLET_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Number of seed word suggestions to show (overrides the stored setting)
    #[arg(long)]
    max_suggestions: Option<usize>,

    /// Transaction history exported by the wallet library (JSON)
    #[arg(long)]
    transactions: Option<PathBuf>,

    /// Run a single command and exit
    #[arg(long)]
    cmd: Option<String>,

    /// Output in JSON format (useful with --cmd)
    #[arg(long)]
    json: bool,

    /// Treat the wallets as still syncing
    #[arg(long)]
    syncing: bool,

    /// Treat the wallets as disconnected from the network
    #[arg(long)]
    offline: bool,

    /// Treat every wallet as watch-only
    #[arg(long)]
    watch_only: bool,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings_path(&self) -> Result<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dcr_wallet_core::data_dir()?,
        };
        Ok(dir.join("settings.json"))
    }

    pub(crate) fn open_settings(&self) -> Result<SettingsStore> {
        let path = self.settings_path()?;
        SettingsStore::open_at(path.clone())
            .with_context(|| format!("Failed to open settings at {}", path.display()))
    }

    /// Suggestion limit: the flag if given, else the stored setting.
    pub(crate) fn max_suggestions(&self, settings: &SettingsStore) -> Result<usize> {
        match self.max_suggestions {
            Some(0) => anyhow::bail!("--max-suggestions must be at least 1."),
            Some(n) => Ok(n),
            None => Ok(settings.get().max_dropdown_results),
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "dcr_wallet=debug,dcr_wallet_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut session = Session::new(&cli)?;

    if let Some(cmd_str) = &cli.cmd {
        // One-shot mode
        run_oneshot(&mut session, cmd_str)
    } else {
        // REPL mode
        repl::run_repl(&mut session)
    }
}

fn run_oneshot(session: &mut Session, cmd_str: &str) -> Result<()> {
    let command = Command::parse(cmd_str)?;
    if command == Command::Exit {
        return Ok(());
    }
    let output = session.execute(&command)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
