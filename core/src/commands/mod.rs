/// Command definitions and parsing for the wallet REPL and one-shot mode.
mod help;
mod parse;

pub use help::help_text;

use crate::seed::VALID_WORD_COUNTS;

/// Words offered by the REPL's command completer.
pub const COMMAND_NAMES: &[&str] = &[
    "recover",
    "restore",
    "send",
    "receive",
    "transactions",
    "txs",
    "governance",
    "gov",
    "suggest",
    "settings",
    "set",
    "help",
    "exit",
    "quit",
    "q",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernanceAction {
    /// Show the welcome screen (or skip to proposals if already seen)
    Open,
    Info,
    Fetch,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Restore a wallet from its seed phrase, word by word: recover [12|15|18|21|24]
    Recover { word_count: usize },
    /// Tap the floating Send button
    Send,
    /// Tap the floating Receive button
    Receive,
    /// Show transaction history rows: transactions [all]
    Transactions { show_wallet: bool },
    /// Governance welcome screen: governance [info|fetch|back]
    Governance { action: GovernanceAction },
    /// List seed word suggestions for a prefix: suggest <prefix>
    Suggest { prefix: String },
    /// Show or change settings: settings [key value]
    Settings { key: Option<String>, value: Option<String> },
    /// Print help
    Help { command: Option<String> },
    /// Exit the wallet
    Exit,
}

impl Command {
    /// Returns a confirmation prompt if this command should ask before executing.
    pub fn confirmation_prompt(&self) -> Option<String> {
        match self {
            Command::Recover { word_count } => Some(format!(
                "Restore a wallet from a {word_count}-word seed phrase? Make sure nobody can see your screen."
            )),
            _ => None,
        }
    }

    /// Default mnemonic length for `recover` without an argument.
    pub fn default_word_count() -> usize {
        VALID_WORD_COUNTS[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recover_requires_confirmation() {
        let cmd = Command::Recover { word_count: 24 };
        let prompt = cmd.confirmation_prompt().unwrap();
        assert!(prompt.contains("24-word"));
    }

    #[test]
    fn other_commands_run_without_confirmation() {
        assert!(Command::Send.confirmation_prompt().is_none());
        assert!(Command::Exit.confirmation_prompt().is_none());
    }

    #[test]
    fn every_command_name_parses() {
        for name in COMMAND_NAMES {
            let input = if *name == "suggest" { "suggest ab" } else { name };
            assert!(Command::parse(input).is_ok(), "'{name}' should parse");
        }
    }
}
