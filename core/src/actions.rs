//! Floating send/receive buttons shown over the main tabs.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::navigation::{BannerKind, Navigator, Screen};
use crate::strings;

/// Wallet state the buttons check before navigating. Supplied by the wallet
/// library; this crate never computes it.
pub trait WalletStatus {
    fn all_wallets_watch_only(&self) -> anyhow::Result<bool>;
    fn is_syncing(&self) -> bool;
    fn is_connected(&self) -> bool;
}

/// Why a tap did not navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blocked {
    WatchOnly,
    /// The watch-only check itself failed.
    Status(String),
    Syncing,
    NotConnected,
}

impl fmt::Display for Blocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocked::WatchOnly => f.write_str(strings::WATCH_ONLY),
            Blocked::Status(msg) => f.write_str(msg),
            Blocked::Syncing => f.write_str(strings::WAIT_FOR_SYNC),
            Blocked::NotConnected => f.write_str(strings::NOT_CONNECTED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Presented(Screen),
    Blocked(Blocked),
}

pub struct FloatingActions {
    status: Arc<dyn WalletStatus>,
    navigator: Arc<dyn Navigator>,
}

impl FloatingActions {
    pub fn new(status: Arc<dyn WalletStatus>, navigator: Arc<dyn Navigator>) -> Self {
        Self { status, navigator }
    }

    pub fn send_tapped(&self) -> ActionOutcome {
        let gate = match self.status.all_wallets_watch_only() {
            Ok(true) => Err(Blocked::WatchOnly),
            Ok(false) => self.network_ready(),
            Err(e) => Err(Blocked::Status(e.to_string())),
        };
        self.finish(gate, Screen::Send)
    }

    pub fn receive_tapped(&self) -> ActionOutcome {
        self.finish(self.network_ready(), Screen::Receive)
    }

    fn network_ready(&self) -> Result<(), Blocked> {
        if self.status.is_syncing() {
            Err(Blocked::Syncing)
        } else if !self.status.is_connected() {
            Err(Blocked::NotConnected)
        } else {
            Ok(())
        }
    }

    fn finish(&self, gate: Result<(), Blocked>, screen: Screen) -> ActionOutcome {
        match gate {
            Ok(()) => {
                info!(%screen, "presenting");
                self.navigator.present(screen);
                ActionOutcome::Presented(screen)
            }
            Err(reason) => {
                warn!(%screen, "action blocked: {reason}");
                self.navigator
                    .show_banner(BannerKind::Error, &reason.to_string());
                ActionOutcome::Blocked(reason)
            }
        }
    }
}
