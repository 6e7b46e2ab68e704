/// Output formatting: DCR denomination conversion, dates and row listings.
///
/// DCR uses 8 decimal places (atoms). 1 DCR = 100_000_000 atoms.
use chrono::{DateTime, Datelike, TimeZone};
use num_format::{Locale, ToFormattedString};

use crate::strings;
use crate::transaction::TxRow;

pub const ATOMS_PER_DCR: u64 = 100_000_000;

/// Convert atoms to a DCR string with eight decimals and grouped thousands.
/// Examples: 150_000_000 -> "1.50000000", -1 -> "-0.00000001"
#[must_use]
pub fn atoms_to_dcr(atoms: i64) -> String {
    let sign = if atoms < 0 { "-" } else { "" };
    let abs = atoms.unsigned_abs();
    let whole = (abs / ATOMS_PER_DCR).to_formatted_string(&Locale::en);
    let frac = abs % ATOMS_PER_DCR;
    format!("{sign}{whole}.{frac:08}")
}

/// Format an amount for display.
#[must_use]
pub fn format_amount(atoms: i64) -> String {
    format!("{} DCR", atoms_to_dcr(atoms))
}

/// Vote reward rounded to eight places, without trailing zeros.
#[must_use]
pub fn format_reward(reward: f64) -> String {
    let rounded = (reward * 1e8).round() / 1e8;
    format!("{rounded}")
}

/// Date label for a transaction row: "Today", "Yesterday", "Mar 04" within
/// the current year, "Mar 04, 2023" otherwise. Days are calendar days in the
/// time zone of `now`.
#[must_use]
pub fn format_tx_date<Tz: TimeZone>(timestamp: i64, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(date) = now.timezone().timestamp_opt(timestamp, 0).single() else {
        return "-".to_string();
    };
    match (date.date_naive() - now.date_naive()).num_days() {
        0 => strings::TODAY.to_string(),
        -1 => strings::YESTERDAY.to_string(),
        _ if date.year() == now.year() => date.format("%b %d").to_string(),
        _ => date.format("%b %d, %Y").to_string(),
    }
}

/// Format rendered rows as plain text, one line per transaction.
#[must_use]
pub fn format_rows(rows: &[TxRow]) -> String {
    if rows.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let marker = if row.confirmed { "✓" } else { "…" };
        let mut line = format!("{marker} {:<12}  {:<20}", row.date, row.title);
        if let Some(amount) = &row.staking_amount {
            line.push_str(&format!("  {amount}"));
        }
        if let Some(reward) = &row.vote_reward {
            line.push_str(&format!("  +{reward}"));
        }
        if let Some(days) = &row.days_counter {
            line.push_str(&format!("  ({days})"));
        }
        if let Some(name) = &row.wallet_name {
            line.push_str(&format!("  [{name}]"));
        }
        if let Some(err) = &row.error {
            line.push_str(&format!("  ! {err}"));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Format rendered rows as a JSON array.
#[must_use]
pub fn format_rows_json(rows: &[TxRow]) -> String {
    serde_json::to_string(rows).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn atoms_zero() {
        assert_eq!(atoms_to_dcr(0), "0.00000000");
    }

    #[test]
    fn atoms_one_dcr() {
        assert_eq!(atoms_to_dcr(100_000_000), "1.00000000");
    }

    #[test]
    fn atoms_fractional() {
        assert_eq!(atoms_to_dcr(150_000_000), "1.50000000");
        assert_eq!(atoms_to_dcr(1), "0.00000001");
    }

    #[test]
    fn atoms_negative() {
        assert_eq!(atoms_to_dcr(-250_000_000), "-2.50000000");
    }

    #[test]
    fn atoms_thousands_grouped() {
        assert_eq!(atoms_to_dcr(123_456_700_000_000), "1,234,567.00000000");
    }

    #[test]
    fn atoms_extreme_does_not_overflow() {
        assert!(atoms_to_dcr(i64::MIN).starts_with('-'));
    }

    #[test]
    fn amount_has_unit() {
        assert_eq!(format_amount(200_000_000), "2.00000000 DCR");
    }

    #[test]
    fn reward_rounding() {
        assert_eq!(format_reward(0.0123), "0.0123");
        assert_eq!(format_reward(1.123456789), "1.12345679");
        assert_eq!(format_reward(0.0), "0");
    }

    #[test]
    fn date_today_and_yesterday() {
        let now = noon(2024, 6, 15);
        let morning = Utc.with_ymd_and_hms(2024, 6, 15, 0, 5, 0).unwrap();
        let late_yesterday = Utc.with_ymd_and_hms(2024, 6, 14, 23, 59, 0).unwrap();
        assert_eq!(format_tx_date(morning.timestamp(), &now), "Today");
        assert_eq!(format_tx_date(late_yesterday.timestamp(), &now), "Yesterday");
    }

    #[test]
    fn date_same_year() {
        let now = noon(2024, 6, 15);
        assert_eq!(format_tx_date(noon(2024, 3, 4).timestamp(), &now), "Mar 04");
    }

    #[test]
    fn date_previous_year() {
        let now = noon(2024, 1, 2);
        assert_eq!(format_tx_date(noon(2023, 12, 30).timestamp(), &now), "Dec 30, 2023");
    }

    #[test]
    fn format_empty_rows() {
        assert_eq!(format_rows(&[]), "No transactions found.");
    }
}
