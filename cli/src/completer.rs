/// Reedline completers backed by the autocomplete selector.
use dcr_wallet_core::autocomplete::AutocompleteSelector;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, Completer, Emacs, KeyCode, KeyModifiers,
    MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Span, Suggestion,
};

const MENU_NAME: &str = "completion_menu";

/// Completes the word under the cursor from a fixed word list.
pub(crate) struct WordCompleter {
    selector: AutocompleteSelector,
}

impl WordCompleter {
    pub(crate) fn new(selector: AutocompleteSelector) -> Self {
        Self { selector }
    }
}

impl Completer for WordCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let mut pos = pos.min(line.len());
        while !line.is_char_boundary(pos) {
            pos -= 1;
        }
        let start = line[..pos]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, ws)| i + ws.len_utf8())
            .unwrap_or(0);
        let query = &line[start..pos];
        self.selector
            .filter(query)
            .suggestions
            .into_iter()
            .map(|value| Suggestion {
                value,
                span: Span::new(start, pos),
                append_whitespace: true,
                ..Default::default()
            })
            .collect()
    }
}

/// Line editor with `completer` on Tab, shown as a columnar menu.
pub(crate) fn line_editor(completer: Box<dyn Completer>) -> Reedline {
    let menu = Box::new(ColumnarMenu::default().with_name(MENU_NAME));
    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(MENU_NAME.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    Reedline::create()
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(menu))
        .with_edit_mode(Box::new(Emacs::new(keybindings)))
}
