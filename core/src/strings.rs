//! User-facing strings shared by the screens.

pub const TODAY: &str = "Today";
pub const YESTERDAY: &str = "Yesterday";
pub const PENDING: &str = "Pending";

pub const MIXED: &str = "Mixed";
pub const VOTED: &str = "Voted";
pub const REVOKED: &str = "Revoked";
pub const TICKET: &str = "Ticket";
pub const PURCHASED: &str = "Purchased";
pub const LIVE: &str = "Live";
pub const IMMATURE: &str = "Immature";

pub const WATCH_ONLY: &str = "Only wallet is watching only";
pub const WAIT_FOR_SYNC: &str = "Please wait for your wallets to finish syncing.";
pub const NOT_CONNECTED: &str = "Not connected to the Decred network.";

pub const GOVERNANCE: &str = "Governance";
pub const GOVERNANCE_WELCOME_INFO: &str = "Proposals are submitted by the Decred community to \
request funding from the treasury. Ticket holders vote on whether each proposal is approved.";
pub const GOT_IT: &str = "Got it";

/// "1 day" / "3 days". Counts of one or less use the singular.
pub fn days(n: i32) -> String {
    if n > 1 {
        format!("{n} days")
    } else {
        format!("{n} day")
    }
}
