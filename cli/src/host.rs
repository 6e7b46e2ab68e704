/// Terminal implementations of the services the presentation core expects
/// from its host.
use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use dcr_wallet_core::transaction::Transaction;
use dcr_wallet_core::{BannerKind, Navigator, Screen, WalletDirectory, WalletStatus};
use serde::Deserialize;

/// Prints navigation requests instead of switching screens.
pub(crate) struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn present(&self, screen: Screen) {
        println!("-> {screen} screen");
    }

    fn push(&self, screen: Screen) {
        println!("-> {screen}");
    }

    fn dismiss(&self) {
        println!("<- closed");
    }

    fn show_banner(&self, kind: BannerKind, text: &str) {
        match kind {
            BannerKind::Error => eprintln!("Error: {text}"),
            BannerKind::Success => println!("{text}"),
        }
    }

    fn show_alert(&self, title: &str, message: &str, ok_label: &str) {
        println!("{title}\n\n{message}\n\n  [{ok_label}]");
    }
}

/// Wallet status taken from command-line flags.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FlagStatus {
    pub(crate) watch_only: bool,
    pub(crate) syncing: bool,
    pub(crate) offline: bool,
}

impl WalletStatus for FlagStatus {
    fn all_wallets_watch_only(&self) -> Result<bool> {
        Ok(self.watch_only)
    }

    fn is_syncing(&self) -> bool {
        self.syncing
    }

    fn is_connected(&self) -> bool {
        !self.offline
    }
}

#[derive(Debug, Deserialize)]
struct WalletRecord {
    id: i32,
    name: String,
    #[serde(default)]
    spent_tickets: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryFile {
    wallets: Vec<WalletRecord>,
    transactions: Vec<Transaction>,
}

/// Transaction history exported by the wallet library as JSON:
/// `{"wallets": [{"id", "name", "spent_tickets"}], "transactions": [...]}`.
#[derive(Debug, Default)]
pub(crate) struct History {
    names: HashMap<i32, String>,
    spent_tickets: HashSet<(i32, String)>,
    pub(crate) transactions: Vec<Transaction>,
}

impl History {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("Invalid history file {}", path.display()))
    }

    fn from_json(data: &str) -> Result<Self> {
        let file: HistoryFile = serde_json::from_str(data)?;
        let mut history = History {
            transactions: file.transactions,
            ..Default::default()
        };
        for w in file.wallets {
            for hash in w.spent_tickets {
                history.spent_tickets.insert((w.id, hash));
            }
            history.names.insert(w.id, w.name);
        }
        Ok(history)
    }
}

impl WalletDirectory for History {
    fn wallet_name(&self, wallet_id: i32) -> Option<String> {
        self.names.get(&wallet_id).cloned()
    }

    fn ticket_has_voted_or_revoked(&self, wallet_id: i32, hash: &str) -> Result<bool> {
        if !self.names.contains_key(&wallet_id) {
            anyhow::bail!("No wallet with id {wallet_id}");
        }
        Ok(self.spent_tickets.contains(&(wallet_id, hash.to_string())))
    }
}
