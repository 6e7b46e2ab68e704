//! Transaction history rows.
//!
//! The wallet library classifies transactions; this module only turns one
//! classified [`Transaction`] into the labels and icons of a list row.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::display::{format_amount, format_reward, format_tx_date};
use crate::error::{Result, WalletUiError};
use crate::strings;

/// Confirmations after which a purchased ticket is mature.
pub const TICKET_MATURITY: i32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
    Regular,
    Mixed,
    Vote,
    Revocation,
    TicketPurchase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxDirection {
    Sent,
    Received,
    Transferred,
}

/// A transaction as reported by the wallet library. Amounts are in atoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub wallet_id: i32,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    pub direction: TxDirection,
    pub amount: i64,
    pub timestamp: i64,
    pub confirmations: i32,
    #[serde(default)]
    pub mix_denom: i64,
    #[serde(default)]
    pub mix_count: i32,
    #[serde(default)]
    pub days_to_vote_or_revoke: i32,
    #[serde(default)]
    pub vote_reward: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxIcon {
    Send,
    Receive,
    Fee,
    Mixed,
    TicketVoted,
    TicketRevoked,
    TicketImmature,
    TicketLive,
}

impl TxIcon {
    /// Asset name of the icon image.
    pub fn asset(self) -> &'static str {
        match self {
            TxIcon::Send => "ic_send",
            TxIcon::Receive => "ic_receive",
            TxIcon::Fee => "ic_fee",
            TxIcon::Mixed => "mixed_tx",
            TxIcon::TicketVoted => "ic_ticketVoted",
            TxIcon::TicketRevoked => "ic_ticketRevoked",
            TxIcon::TicketImmature => "ic_ticketImmature",
            TxIcon::TicketLive => "ic_ticketLive",
        }
    }
}

/// Everything a host needs to draw one history row. `None` fields are hidden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TxRow {
    pub icon: TxIcon,
    /// Amount for regular transactions, status text for staking ones.
    pub title: String,
    pub staking_amount: Option<String>,
    pub vote_reward: Option<String>,
    pub date: String,
    /// Drives the status icon and the date colour.
    pub confirmed: bool,
    pub days_counter: Option<String>,
    pub wallet_name: Option<String>,
    /// Lookup failure to surface as an error banner over the row.
    pub error: Option<String>,
}

/// Wallet lookups needed while rendering rows.
pub trait WalletDirectory {
    fn wallet_name(&self, wallet_id: i32) -> Option<String>;
    fn ticket_has_voted_or_revoked(&self, wallet_id: i32, hash: &str) -> anyhow::Result<bool>;
}

/// Renders transactions into [`TxRow`]s.
pub struct TxRowRenderer<'a> {
    wallets: &'a dyn WalletDirectory,
    spend_unconfirmed: bool,
}

impl<'a> TxRowRenderer<'a> {
    pub fn new(wallets: &'a dyn WalletDirectory, spend_unconfirmed: bool) -> Self {
        Self {
            wallets,
            spend_unconfirmed,
        }
    }

    /// Render one row. Fails only if the transaction's wallet is unknown.
    pub fn render<Tz: TimeZone>(
        &self,
        tx: &Transaction,
        hide_wallet_label: bool,
        now: &DateTime<Tz>,
    ) -> Result<TxRow>
    where
        Tz::Offset: std::fmt::Display,
    {
        let wallet_name = self
            .wallets
            .wallet_name(tx.wallet_id)
            .ok_or(WalletUiError::UnknownWallet(tx.wallet_id))?;

        let confirmed = self.spend_unconfirmed || tx.confirmations > 1;
        let date = if confirmed {
            format_tx_date(tx.timestamp, now)
        } else {
            strings::PENDING.to_string()
        };

        let mut row = TxRow {
            icon: TxIcon::Receive,
            title: String::new(),
            staking_amount: None,
            vote_reward: None,
            date,
            confirmed,
            days_counter: None,
            wallet_name: (!hide_wallet_label).then_some(wallet_name),
            error: None,
        };

        match tx.tx_type {
            TxType::Regular => self.regular(tx, &mut row),
            TxType::Mixed => self.mixed(tx, &mut row),
            TxType::Vote => self.staking_outcome(tx, &mut row, strings::VOTED, TxIcon::TicketVoted),
            TxType::Revocation => {
                self.staking_outcome(tx, &mut row, strings::REVOKED, TxIcon::TicketRevoked)
            }
            TxType::TicketPurchase => self.ticket_purchase(tx, &mut row),
        }
        Ok(row)
    }

    /// Render a list, skipping (and logging) rows whose wallet is unknown.
    pub fn render_all<Tz: TimeZone>(
        &self,
        txs: &[Transaction],
        hide_wallet_label: bool,
        now: &DateTime<Tz>,
    ) -> Vec<TxRow>
    where
        Tz::Offset: std::fmt::Display,
    {
        txs.iter()
            .filter_map(|tx| match self.render(tx, hide_wallet_label, now) {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!(hash = %tx.hash, "skipping transaction row: {e}");
                    None
                }
            })
            .collect()
    }

    fn regular(&self, tx: &Transaction, row: &mut TxRow) {
        let amount = format_amount(tx.amount);
        let (title, icon) = match tx.direction {
            TxDirection::Sent => (format!("-{amount}"), TxIcon::Send),
            TxDirection::Received => (amount, TxIcon::Receive),
            TxDirection::Transferred => (amount, TxIcon::Fee),
        };
        row.title = title;
        row.icon = icon;
    }

    fn mixed(&self, tx: &Transaction, row: &mut TxRow) {
        row.icon = TxIcon::Mixed;
        row.title = strings::MIXED.to_string();
        let mut denom = format_amount(tx.mix_denom);
        if tx.mix_count > 1 {
            denom.push_str(&format!("\t x{}", tx.mix_count));
        }
        row.staking_amount = Some(denom);
    }

    fn staking_outcome(&self, tx: &Transaction, row: &mut TxRow, title: &str, icon: TxIcon) {
        row.title = title.to_string();
        row.icon = icon;
        row.staking_amount = Some(format_amount(tx.amount));
        row.vote_reward = Some(format_reward(tx.vote_reward));
        row.days_counter = Some(strings::days(tx.days_to_vote_or_revoke));
    }

    fn ticket_purchase(&self, tx: &Transaction, row: &mut TxRow) {
        row.title = strings::TICKET.to_string();
        row.icon = TxIcon::TicketImmature;
        row.staking_amount = Some(format_amount(tx.amount));

        let required = if self.spend_unconfirmed { 0 } else { 2 };
        if tx.confirmations < required {
            row.confirmed = false;
            row.date = strings::PENDING.to_string();
        } else if tx.confirmations > TICKET_MATURITY {
            match self
                .wallets
                .ticket_has_voted_or_revoked(tx.wallet_id, &tx.hash)
            {
                Ok(true) => row.title = strings::PURCHASED.to_string(),
                Ok(false) => row.title = strings::LIVE.to_string(),
                Err(e) => row.error = Some(e.to_string()),
            }
            row.icon = TxIcon::TicketLive;
        } else {
            row.title = strings::IMMATURE.to_string();
        }
    }
}
