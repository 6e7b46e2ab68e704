//! REPL shell: Reedline-based interactive wallet session.
use crate::completer::{line_editor, WordCompleter};
use crate::host::{FlagStatus, History, TerminalNavigator};
use crate::Cli;
use anyhow::{bail, Result};
use chrono::Local;
use dcr_wallet_core::autocomplete::AutocompleteSelector;
use dcr_wallet_core::commands::{help_text, GovernanceAction, COMMAND_NAMES};
use dcr_wallet_core::display::{format_rows, format_rows_json};
use dcr_wallet_core::seed::{english_words, SeedEntry};
use dcr_wallet_core::{
    ActionOutcome, BannerKind, Command, FloatingActions, GovernanceWelcome, Navigator, Screen,
    SettingsStore, TxRowRenderer,
};
use reedline::{DefaultPrompt, DefaultPromptSegment, Signal};
use std::sync::Arc;
use tracing::{debug, info};
use zeroize::{Zeroize, Zeroizing};

/// State shared by REPL and one-shot mode.
pub(crate) struct Session {
    settings: SettingsStore,
    navigator: Arc<TerminalNavigator>,
    actions: FloatingActions,
    history: History,
    max_suggestions: usize,
    json: bool,
}

impl Session {
    pub(crate) fn new(cli: &Cli) -> Result<Self> {
        let settings = cli.open_settings()?;
        let max_suggestions = cli.max_suggestions(&settings)?;
        let history = match &cli.transactions {
            Some(path) => History::load(path)?,
            None => History::default(),
        };
        let status = FlagStatus {
            watch_only: cli.watch_only,
            syncing: cli.syncing,
            offline: cli.offline,
        };
        let navigator = Arc::new(TerminalNavigator);
        let actions = FloatingActions::new(Arc::new(status), navigator.clone());
        info!(
            settings = %settings.path().display(),
            transactions = history.transactions.len(),
            "session ready"
        );
        Ok(Self {
            settings,
            navigator,
            actions,
            history,
            max_suggestions,
            json: cli.json,
        })
    }

    pub(crate) fn execute(&mut self, command: &Command) -> Result<String> {
        debug!(?command, "executing");
        match command {
            Command::Recover { word_count } => self.recover(*word_count),
            Command::Send => Ok(outcome_text(self.actions.send_tapped())),
            Command::Receive => Ok(outcome_text(self.actions.receive_tapped())),
            Command::Transactions { show_wallet } => {
                let renderer =
                    TxRowRenderer::new(&self.history, self.settings.get().spend_unconfirmed);
                let rows =
                    renderer.render_all(&self.history.transactions, !show_wallet, &Local::now());
                if self.json {
                    Ok(format_rows_json(&rows))
                } else {
                    Ok(format_rows(&rows))
                }
            }
            Command::Governance { action } => self.governance(*action),
            Command::Suggest { prefix } => {
                let selector = AutocompleteSelector::new(
                    english_words().iter().copied(),
                    self.max_suggestions,
                )?;
                let words = selector.filter(prefix).suggestions;
                if self.json {
                    Ok(serde_json::json!({ "prefix": prefix, "suggestions": words }).to_string())
                } else if words.is_empty() {
                    Ok(format!("No seed words start with '{prefix}'."))
                } else {
                    Ok(words.join("\n"))
                }
            }
            Command::Settings { key, value } => match (key, value) {
                (Some(key), Some(value)) => {
                    self.settings.set(key, value)?;
                    if key == dcr_wallet_core::settings::MAX_DROPDOWN_RESULTS {
                        self.max_suggestions = self.settings.get().max_dropdown_results;
                    }
                    self.navigator
                        .show_banner(BannerKind::Success, &format!("Updated {key}."));
                    Ok(String::new())
                }
                _ => self.settings.export(),
            },
            Command::Help { command } => Ok(help_text(command.as_deref())),
            Command::Exit => Ok(String::new()),
        }
    }

    fn governance(&mut self, action: GovernanceAction) -> Result<String> {
        let mut screen = GovernanceWelcome::new(&mut self.settings, self.navigator.clone());
        match action {
            GovernanceAction::Open => {
                if screen.should_show() {
                    screen.info_tapped();
                    Ok("Type 'governance fetch' to load proposals or 'governance back' to close."
                        .to_string())
                } else {
                    screen.fetch_proposals_tapped()?;
                    Ok(String::new())
                }
            }
            GovernanceAction::Info => {
                screen.info_tapped();
                Ok(String::new())
            }
            GovernanceAction::Fetch => {
                screen.fetch_proposals_tapped()?;
                Ok(String::new())
            }
            GovernanceAction::Back => {
                screen.back_tapped();
                Ok(String::new())
            }
        }
    }

    /// Word-by-word seed entry. Tab completes from the word list; after an
    /// unfinished word the matching words are listed and can be picked by number.
    fn recover(&mut self, word_count: usize) -> Result<String> {
        let mut entry = SeedEntry::new(word_count, self.max_suggestions)?;
        let selector =
            AutocompleteSelector::new(english_words().iter().copied(), self.max_suggestions)?;
        let mut editor = line_editor(Box::new(WordCompleter::new(selector)));

        println!("Enter your {word_count} seed words one at a time.");
        println!("Tab completes a word; a number picks from the listed matches; 'back' redoes the previous word.");

        loop {
            if entry.is_complete() {
                match entry.validate() {
                    Ok(()) => break,
                    Err(e) => {
                        eprintln!("Error: {e}");
                        println!("Type 'back' to redo the last word, or press Ctrl-D to cancel.");
                    }
                }
            }
            let label = if entry.is_complete() {
                "checksum failed".to_string()
            } else {
                format!("word {}/{}", entry.current_index() + 1, word_count)
            };
            let prompt =
                DefaultPrompt::new(DefaultPromptSegment::Basic(label), DefaultPromptSegment::Empty);
            let mut line = match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => line,
                Ok(_) => return Ok("Recovery cancelled.".to_string()),
                Err(e) => bail!("Input error: {e}"),
            };
            let input = Zeroizing::new(line.trim().to_lowercase());
            line.zeroize();

            if input.is_empty() {
                continue;
            }
            if input.as_str() == "back" {
                if !entry.back() {
                    println!("Nothing to undo.");
                }
                continue;
            }
            if entry.is_complete() {
                println!("All {word_count} words are entered. Type 'back' to change the last one.");
                continue;
            }
            if let Ok(n) = input.parse::<usize>() {
                let rows = entry.field().view().rows.len();
                if (1..=rows).contains(&n) {
                    if let Err(e) = entry.answer_row(n - 1) {
                        eprintln!("Error: {e}");
                    }
                } else if rows == 0 {
                    println!("Type at least two letters to list matching words.");
                } else {
                    println!("Pick a number between 1 and {rows}.");
                }
                continue;
            }
            if entry.answer_typed(&input).is_ok() {
                continue;
            }

            let view = entry.suggest(&input);
            if view.visible {
                for (i, word) in view.rows.iter().enumerate() {
                    println!("  {}) {word}", i + 1);
                }
            } else {
                println!("No seed word starts with '{}'.", input.as_str());
            }
        }

        Ok(format!(
            "Seed phrase verified ({word_count} words). The wallet can now be restored."
        ))
    }
}

fn outcome_text(outcome: ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Presented(Screen::Send) => "Ready to send.".to_string(),
        ActionOutcome::Presented(Screen::Receive) => "Ready to receive.".to_string(),
        ActionOutcome::Presented(other) => format!("Opened {other}."),
        // The banner has already been printed.
        ActionOutcome::Blocked(_) => String::new(),
    }
}

pub(crate) fn run_repl(session: &mut Session) -> Result<()> {
    println!("Decred Wallet v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for a list of commands.");
    println!();

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("[dcrwallet]".to_string()),
        DefaultPromptSegment::Empty,
    );

    let selector = AutocompleteSelector::new(COMMAND_NAMES.iter().copied(), COMMAND_NAMES.len())?;
    let mut editor = line_editor(Box::new(WordCompleter::new(selector)));

    loop {
        match editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match Command::parse(line) {
                    Ok(Command::Exit) => {
                        println!("Goodbye.");
                        break;
                    }
                    Ok(cmd) => {
                        if let Some(prompt_msg) = cmd.confirmation_prompt() {
                            if !prompt_confirm(&prompt_msg) {
                                println!("Cancelled.");
                                continue;
                            }
                        }
                        match session.execute(&cmd) {
                            Ok(output) => {
                                if !output.is_empty() {
                                    println!("{output}");
                                }
                            }
                            Err(e) => {
                                eprintln!("Error: {e}");
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("{e}");
                    }
                }
            }
            Ok(_) => {
                println!("Goodbye.");
                break;
            }
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        }
    }

    Ok(())
}

fn prompt_confirm(prompt: &str) -> bool {
    use std::io::Write;
    print!("{prompt} [y/N]: ");
    std::io::stdout().flush().ok();
    let mut input = String::new();
    std::io::stdin().read_line(&mut input).is_ok() && input.trim().eq_ignore_ascii_case("y")
}
