#[must_use]
pub fn help_text(command: Option<&str>) -> String {
    match command {
        Some("recover") | Some("restore") => {
            "recover [12|15|18|21|24]\n  Restore a wallet from its seed phrase.\n  Each word is entered separately; after two letters, matching words\n  from the BIP-39 list are offered. Pick one with its number or Tab.\n  Default: 12 words.\n  Alias: restore".to_string()
        }
        Some("send") => {
            "send\n  Open the send screen.\n  Refused while syncing, when offline, or if every wallet is watch-only.".to_string()
        }
        Some("receive") => {
            "receive\n  Open the receive screen.\n  Refused while syncing or when offline.".to_string()
        }
        Some("transactions") | Some("txs") => {
            "transactions [all]\n  Show transaction history rows.\n  'all' adds the wallet name to every row.\n  Alias: txs".to_string()
        }
        Some("governance") | Some("gov") => {
            "governance [info|fetch|back]\n  Show the governance welcome screen.\n  info:  explain what proposals are\n  fetch: remember the welcome was seen and open the proposals\n  back:  close the welcome screen\n  Alias: gov".to_string()
        }
        Some("suggest") => {
            "suggest <prefix>\n  List seed words starting with <prefix> (at least 2 letters).".to_string()
        }
        Some("settings") | Some("set") => {
            "settings [key value]\n  Show settings, or change one.\n  Keys: spend_unconfirmed, has_shown_governance_welcome,\n        max_dropdown_results\n  Example: settings spend_unconfirmed true\n  Alias: set".to_string()
        }
        Some("exit") | Some("quit") | Some("q") => {
            "exit\n  Exit the wallet.\n  Aliases: quit, q".to_string()
        }
        Some("help") => "help [command]\n  Show help for all commands or one command.".to_string(),
        Some(other) => format!("Unknown command: '{other}'. Type 'help' for a list."),
        None => {
            "Available commands:\n\
             \n\
             \x20 recover          Restore a wallet from its seed phrase\n\
             \x20 send             Open the send screen\n\
             \x20 receive          Open the receive screen\n\
             \x20 transactions     Show transaction history\n\
             \x20 governance       Governance welcome screen\n\
             \x20 suggest          List seed words for a prefix\n\
             \x20 settings         Show or change settings\n\
             \x20 help [cmd]       Show help for a command\n\
             \x20 exit             Exit the wallet\n\
             \n\
             Type 'help <command>' for detailed help on a specific command."
                .to_string()
        }
    }
}
