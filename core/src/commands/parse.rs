use anyhow::{bail, Context, Result};

use super::{Command, GovernanceAction};
use crate::autocomplete::MIN_QUERY_CHARS;
use crate::seed::VALID_WORD_COUNTS;

impl Command {
    /// Parse a command from a raw input string.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            bail!("No command entered. Type 'help' for a list of commands.");
        }

        let mut parts = input.splitn(3, char::is_whitespace);
        let cmd = parts.next().unwrap_or_default().to_lowercase();
        let arg1 = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());
        let arg2 = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

        match cmd.as_str() {
            "recover" | "restore" => {
                let word_count = match arg1 {
                    Some(n) => n
                        .parse::<usize>()
                        .with_context(|| format!("Invalid word count '{n}'"))?,
                    None => Command::default_word_count(),
                };
                if !VALID_WORD_COUNTS.contains(&word_count) {
                    bail!("Seed phrases have 12, 15, 18, 21 or 24 words (got {word_count}).");
                }
                Ok(Command::Recover { word_count })
            }

            "send" => Ok(Command::Send),

            "receive" => Ok(Command::Receive),

            "transactions" | "txs" => match arg1.map(str::to_lowercase).as_deref() {
                None => Ok(Command::Transactions { show_wallet: false }),
                Some("all") => Ok(Command::Transactions { show_wallet: true }),
                Some(other) => bail!("Unknown option '{other}'. Usage: transactions [all]"),
            },

            "governance" | "gov" => {
                let action = match arg1.map(str::to_lowercase).as_deref() {
                    None => GovernanceAction::Open,
                    Some("info") => GovernanceAction::Info,
                    Some("fetch") => GovernanceAction::Fetch,
                    Some("back") => GovernanceAction::Back,
                    Some(other) => bail!(
                        "Unknown action '{other}'. Usage: governance [info|fetch|back]"
                    ),
                };
                Ok(Command::Governance { action })
            }

            "suggest" => {
                let prefix = arg1.ok_or_else(|| {
                    anyhow::anyhow!("Missing prefix. Usage: suggest <prefix>")
                })?;
                if prefix.chars().count() < MIN_QUERY_CHARS {
                    bail!("Type at least {MIN_QUERY_CHARS} letters to get suggestions.");
                }
                Ok(Command::Suggest {
                    prefix: prefix.to_string(),
                })
            }

            "settings" | "set" => {
                if arg1.is_some() && arg2.is_none() {
                    bail!("Missing value. Usage: settings <key> <value>");
                }
                Ok(Command::Settings {
                    key: arg1.map(|s| s.to_lowercase()),
                    value: arg2.map(|s| s.to_string()),
                })
            }

            "help" | "?" => Ok(Command::Help {
                command: arg1.map(|s| s.to_lowercase()),
            }),

            "exit" | "quit" | "q" => Ok(Command::Exit),

            other => bail!("Unknown command '{other}'. Type 'help' for a list of commands."),
        }
    }
}
