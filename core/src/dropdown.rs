//! Dropdown search field: maps selector output onto a list surface.
//!
//! The field owns its input text and a render model for the dropdown rows.
//! Hosts draw [`DropdownView`] however they like and forward taps and focus
//! changes back here.

use tracing::debug;
use zeroize::Zeroize;

use crate::autocomplete::{AutocompleteSelector, SelectorEvent};
use crate::error::AutocompleteError;

/// Height of one suggestion row.
pub const ROW_HEIGHT: f32 = 45.0;

/// Gap between the bottom of the input field and the dropdown.
pub const FIELD_GAP: f32 = 12.0;

/// Where the input field sits inside the container that hosts the dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchor {
    pub field_y: f32,
    pub field_height: f32,
    pub container_height: f32,
}

/// Frame of the dropdown surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DropdownLayout {
    pub width: f32,
    pub height: f32,
    pub origin_y: f32,
}

impl DropdownLayout {
    /// Place `rows` rows below the field, or above it when they would run
    /// past the bottom of the container.
    #[must_use]
    pub fn place(anchor: Anchor, width: f32, rows: usize) -> Self {
        let height = rows as f32 * ROW_HEIGHT;
        let below = anchor.field_y + anchor.field_height + FIELD_GAP;
        let origin_y = if below + height > anchor.container_height {
            anchor.field_y - height
        } else {
            below
        };
        Self {
            width,
            height,
            origin_y,
        }
    }
}

/// What the host should draw for the dropdown right now.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownView {
    pub rows: Vec<String>,
    pub visible: bool,
    pub layout: DropdownLayout,
}

/// Notifications for the screen that owns the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    EditingBegan,
    WordSelected(String),
    EditingEnded,
}

impl From<SelectorEvent> for FieldEvent {
    fn from(event: SelectorEvent) -> Self {
        match event {
            SelectorEvent::Focused => FieldEvent::EditingBegan,
            SelectorEvent::Selected(word) => FieldEvent::WordSelected(word),
            SelectorEvent::Dismissed => FieldEvent::EditingEnded,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DropdownField {
    selector: AutocompleteSelector,
    text: String,
    width: f32,
    anchor: Anchor,
    view: DropdownView,
}

impl DropdownField {
    /// Configure the word list and surface width. The dropdown starts hidden.
    pub fn setup<I, S>(
        &mut self,
        words: I,
        max_results: usize,
        width: f32,
    ) -> Result<(), AutocompleteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selector.configure(words, max_results)?;
        self.width = width;
        self.hide();
        Ok(())
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn view(&self) -> &DropdownView {
        &self.view
    }

    pub fn selector(&self) -> &AutocompleteSelector {
        &self.selector
    }

    /// Replace the field text without filtering (e.g. when the host resets it).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.zeroize();
        self.text = text.into();
    }

    /// The user edited the text.
    pub fn text_changed(&mut self, text: impl Into<String>) -> &DropdownView {
        self.set_text(text);
        let result = self.selector.on_query_changed(&self.text);
        if !result.visible {
            self.hide();
            return &self.view;
        }
        let layout = DropdownLayout::place(self.anchor, self.width, result.suggestions.len());
        self.view.rows.zeroize();
        self.view = DropdownView {
            rows: result.suggestions,
            visible: true,
            layout,
        };
        &self.view
    }

    /// Commit the row at `index` of the visible dropdown.
    pub fn row_tapped(&mut self, index: usize) -> Result<FieldEvent, AutocompleteError> {
        let word = self
            .view
            .rows
            .get(index)
            .cloned()
            .ok_or_else(|| AutocompleteError::InvalidSelection {
                word: format!("<row {index}>"),
            })?;
        self.pick(&word)
    }

    /// Commit `word`, which must be one of the rows on display. The rows
    /// are cleared afterwards, so a second pick needs new text first.
    pub fn pick(&mut self, word: &str) -> Result<FieldEvent, AutocompleteError> {
        let event = self.selector.select(word)?;
        debug!(row_count = self.view.rows.len(), "dropdown row picked");
        self.set_text(word);
        self.hide();
        Ok(event.into())
    }

    pub fn editing_began(&self) -> FieldEvent {
        self.selector.on_focus_gained().into()
    }

    /// Focus left the field. Hides the dropdown; the text is kept.
    pub fn editing_ended(&mut self) -> FieldEvent {
        self.hide();
        self.selector.on_focus_lost().into()
    }

    fn hide(&mut self) {
        self.selector.reset();
        self.view.rows.zeroize();
        self.view = DropdownView::default();
    }
}
