use std::path::PathBuf;

use anyhow::Context;

pub mod actions;
pub mod autocomplete;
pub mod commands;
pub mod display;
pub mod dropdown;
pub mod error;
pub mod navigation;
pub mod onboarding;
pub mod seed;
pub mod settings;
pub mod strings;
pub mod transaction;

pub use actions::{ActionOutcome, Blocked, FloatingActions, WalletStatus};
pub use autocomplete::{AutocompleteSelector, SelectorEvent, Suggestions};
pub use commands::Command;
pub use dropdown::{Anchor, DropdownField, DropdownView, FieldEvent};
pub use error::{AutocompleteError, WalletUiError};
pub use navigation::{BannerKind, Navigator, Screen};
pub use onboarding::GovernanceWelcome;
pub use seed::SeedEntry;
pub use settings::{FlagStore, Settings, SettingsStore};
pub use transaction::{Transaction, TxRow, TxRowRenderer, WalletDirectory};

/// XDG-compliant data directory for settings.
/// Linux: `~/.local/share/dcrwallet/`, macOS: `~/Library/Application Support/dcrwallet/`
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("Cannot determine data directory")?
        .join("dcrwallet");
    Ok(dir)
}
