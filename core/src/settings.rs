use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::autocomplete::DEFAULT_MAX_RESULTS;

/// User preferences that affect presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Treat unconfirmed transactions as spendable (and show them as confirmed).
    pub spend_unconfirmed: bool,
    pub has_shown_governance_welcome: bool,
    pub max_dropdown_results: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spend_unconfirmed: false,
            has_shown_governance_welcome: false,
            max_dropdown_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Key/value access to boolean flags, so screens can persist one-shot state
/// without knowing where it lives.
pub trait FlagStore {
    fn flag(&self, key: &str) -> bool;
    fn set_flag(&mut self, key: &str, value: bool) -> Result<()>;
}

impl<T: FlagStore + ?Sized> FlagStore for &mut T {
    fn flag(&self, key: &str) -> bool {
        (**self).flag(key)
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        (**self).set_flag(key, value)
    }
}

pub const SPEND_UNCONFIRMED: &str = "spend_unconfirmed";
pub const HAS_SHOWN_GOVERNANCE_WELCOME: &str = "has_shown_governance_welcome";
pub const MAX_DROPDOWN_RESULTS: &str = "max_dropdown_results";

/// Settings stored as unencrypted JSON.
///
/// Path: `data_dir()/settings.json`
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Open (or create) the settings file in the default data directory.
    pub fn open() -> Result<Self> {
        let path = crate::data_dir()?.join("settings.json");
        Self::open_at(path)
    }

    /// Open (or create) the settings file at a specific path.
    /// A missing file yields defaults; a corrupt one is an error.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let settings = if path.exists() {
            let data = std::fs::read_to_string(&path).context("Failed to read settings.json")?;
            serde_json::from_str(&data).context("Invalid settings.json")?
        } else {
            Settings::default()
        };
        Ok(Self { path, settings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Apply `f` to the settings and write them out. The in-memory settings
    /// only change once the file has been written.
    pub fn update(&mut self, f: impl FnOnce(&mut Settings)) -> Result<()> {
        let mut next = self.settings.clone();
        f(&mut next);
        self.save(&next)?;
        self.settings = next;
        Ok(())
    }

    /// Set a setting from its textual key and value (used by the REPL).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            SPEND_UNCONFIRMED | HAS_SHOWN_GOVERNANCE_WELCOME => {
                let v = parse_bool(value)?;
                self.set_flag(key, v)
            }
            MAX_DROPDOWN_RESULTS => {
                let n: usize = value
                    .parse()
                    .with_context(|| format!("Invalid number '{value}'"))?;
                if n == 0 {
                    bail!("{MAX_DROPDOWN_RESULTS} must be at least 1.");
                }
                self.update(|s| s.max_dropdown_results = n)
            }
            other => bail!("Unknown setting '{other}'."),
        }
    }

    /// Settings as pretty-printed JSON.
    pub fn export(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.settings).context("Failed to serialize settings")
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let json =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, json).context("Failed to write settings.json")?;
        Ok(())
    }
}

impl FlagStore for SettingsStore {
    fn flag(&self, key: &str) -> bool {
        match key {
            SPEND_UNCONFIRMED => self.settings.spend_unconfirmed,
            HAS_SHOWN_GOVERNANCE_WELCOME => self.settings.has_shown_governance_welcome,
            _ => false,
        }
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        match key {
            SPEND_UNCONFIRMED => self.update(|s| s.spend_unconfirmed = value),
            HAS_SHOWN_GOVERNANCE_WELCOME => {
                self.update(|s| s.has_shown_governance_welcome = value)
            }
            other => bail!("Unknown flag '{other}'."),
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => bail!("Expected true/false, got '{value}'."),
    }
}
