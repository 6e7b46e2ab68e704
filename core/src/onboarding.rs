//! Governance (proposals) welcome screen shown before the first proposal fetch.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::navigation::{Navigator, Screen};
use crate::settings::{FlagStore, HAS_SHOWN_GOVERNANCE_WELCOME};
use crate::strings;

pub struct GovernanceWelcome<S: FlagStore> {
    store: S,
    navigator: Arc<dyn Navigator>,
}

impl<S: FlagStore> GovernanceWelcome<S> {
    pub fn new(store: S, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Whether the welcome screen should be shown instead of the proposals list.
    pub fn should_show(&self) -> bool {
        !self.store.flag(HAS_SHOWN_GOVERNANCE_WELCOME)
    }

    pub fn back_tapped(&self) {
        self.navigator.dismiss();
    }

    pub fn info_tapped(&self) {
        self.navigator.show_alert(
            strings::GOVERNANCE,
            strings::GOVERNANCE_WELCOME_INFO,
            strings::GOT_IT,
        );
    }

    /// Remember that the welcome was seen, then move on to the proposals.
    /// Navigation does not happen if the flag cannot be saved.
    pub fn fetch_proposals_tapped(&mut self) -> Result<()> {
        self.store.set_flag(HAS_SHOWN_GOVERNANCE_WELCOME, true)?;
        info!("governance welcome acknowledged");
        self.navigator.push(Screen::Proposals);
        self.navigator.dismiss();
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
