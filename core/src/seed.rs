/// Seed phrase entry: one dropdown field per word, backed by the BIP-39 list.
use bip39::{Language, Mnemonic};
use tracing::debug;
use zeroize::Zeroizing;

use crate::dropdown::{DropdownField, DropdownView, FieldEvent};
use crate::error::{Result, WalletUiError};

/// Mnemonic lengths accepted by the restore flow.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// The BIP-39 English word list, in canonical order.
pub fn english_words() -> &'static [&'static str] {
    Language::English.word_list()
}

/// Word-by-word restore session.
///
/// Answered words are zeroized when the session is dropped.
pub struct SeedEntry {
    field: DropdownField,
    words: Vec<Zeroizing<String>>,
    word_count: usize,
}

impl SeedEntry {
    pub fn new(word_count: usize, max_results: usize) -> Result<Self> {
        if !VALID_WORD_COUNTS.contains(&word_count) {
            return Err(WalletUiError::InvalidSeed(format!(
                "Seed phrase must be 12, 15, 18, 21 or 24 words (got {word_count})."
            )));
        }
        let mut field = DropdownField::default();
        field.setup(english_words().iter().copied(), max_results, 0.0)?;
        Ok(Self {
            field,
            words: Vec::with_capacity(word_count),
            word_count,
        })
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Zero-based index of the word being entered.
    pub fn current_index(&self) -> usize {
        self.words.len()
    }

    pub fn is_complete(&self) -> bool {
        self.words.len() == self.word_count
    }

    pub fn field(&self) -> &DropdownField {
        &self.field
    }

    /// Feed the current text of the word field.
    pub fn suggest(&mut self, text: &str) -> &DropdownView {
        self.field.text_changed(text)
    }

    /// Answer the current slot with one of the displayed suggestions.
    pub fn answer_with(&mut self, word: &str) -> Result<()> {
        self.ensure_open()?;
        if let FieldEvent::WordSelected(w) = self.field.pick(word)? {
            self.push(w);
        }
        Ok(())
    }

    /// Answer the current slot with the suggestion at `row`.
    pub fn answer_row(&mut self, row: usize) -> Result<()> {
        self.ensure_open()?;
        if let FieldEvent::WordSelected(w) = self.field.row_tapped(row)? {
            self.push(w);
        }
        Ok(())
    }

    /// Answer the current slot with a fully typed word. It must be an exact
    /// (case-insensitive) entry of the word list.
    pub fn answer_typed(&mut self, text: &str) -> Result<()> {
        self.ensure_open()?;
        let word = text.trim().to_lowercase();
        if !self.field.selector().contains(&word) {
            return Err(WalletUiError::InvalidSeed(format!(
                "'{word}' is not in the BIP-39 word list."
            )));
        }
        self.push(word);
        Ok(())
    }

    /// Clear the most recently answered word. Returns false if there was none.
    pub fn back(&mut self) -> bool {
        let popped = self.words.pop().is_some();
        self.field.set_text("");
        popped
    }

    /// The words answered so far, space-separated.
    pub fn phrase(&self) -> Zeroizing<String> {
        let mut out = Zeroizing::new(String::new());
        for (i, w) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(w);
        }
        out
    }

    /// Check that all words are present and the checksum is valid.
    pub fn validate(&self) -> Result<()> {
        if !self.is_complete() {
            return Err(WalletUiError::InvalidSeed(format!(
                "Seed phrase incomplete: {} of {} words entered.",
                self.words.len(),
                self.word_count
            )));
        }
        let phrase = self.phrase();
        Mnemonic::parse_in_normalized(Language::English, &phrase)
            .map_err(|e| WalletUiError::InvalidSeed(format!("Invalid seed phrase: {e}")))?;
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_complete() {
            return Err(WalletUiError::InvalidSeed(
                "All seed words have already been entered.".to_string(),
            ));
        }
        Ok(())
    }

    fn push(&mut self, word: String) {
        self.words.push(Zeroizing::new(word));
        self.field.set_text("");
        debug!(entered = self.words.len(), total = self.word_count, "seed word answered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutocompleteError;

    const VALID_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn word_list_is_bip39_english() {
        let words = english_words();
        assert_eq!(words.len(), 2048);
        assert_eq!(words[0], "abandon");
        assert_eq!(words[2047], "zoo");
    }

    #[test]
    fn rejects_odd_word_count() {
        assert!(matches!(
            SeedEntry::new(13, 4),
            Err(WalletUiError::InvalidSeed(_))
        ));
    }

    #[test]
    fn rejects_zero_results() {
        assert!(matches!(
            SeedEntry::new(12, 0),
            Err(WalletUiError::Autocomplete(AutocompleteError::InvalidConfiguration { .. }))
        ));
    }

    #[test]
    fn suggestions_come_from_word_list() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        let view = entry.suggest("zo").clone();
        assert_eq!(view.rows, vec!["zone", "zoo"]);
        assert!(view.visible);
    }

    #[test]
    fn full_restore_through_suggestions() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        for _ in 0..11 {
            entry.suggest("aban");
            entry.answer_with("abandon").unwrap();
        }
        entry.suggest("abou");
        entry.answer_row(0).unwrap();
        assert!(entry.is_complete());
        assert_eq!(entry.phrase().as_str(), VALID_12);
        entry.validate().unwrap();
    }

    #[test]
    fn typed_words_accepted_when_exact() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        for word in VALID_12.split(' ') {
            entry.answer_typed(&word.to_uppercase()).unwrap();
        }
        entry.validate().unwrap();
    }

    #[test]
    fn typed_unknown_word_rejected() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        assert!(entry.answer_typed("bitcoin").is_err());
        assert_eq!(entry.current_index(), 0);
    }

    #[test]
    fn answer_must_be_on_display() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        entry.suggest("zo");
        assert!(entry.answer_with("abandon").is_err());
        assert_eq!(entry.current_index(), 0);
    }

    #[test]
    fn same_suggestion_cannot_answer_twice() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        entry.suggest("aban");
        entry.answer_with("abandon").unwrap();
        assert!(matches!(
            entry.answer_with("abandon"),
            Err(WalletUiError::Autocomplete(AutocompleteError::InvalidSelection { .. }))
        ));
        assert_eq!(entry.current_index(), 1);
        assert!(entry.field().text().is_empty());
    }

    #[test]
    fn bad_checksum_fails_validation() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        for _ in 0..12 {
            entry.answer_typed("abandon").unwrap();
        }
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid seed phrase"));
    }

    #[test]
    fn back_after_failed_checksum_allows_correction() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        for _ in 0..12 {
            entry.answer_typed("abandon").unwrap();
        }
        assert!(entry.validate().is_err());
        assert!(entry.answer_typed("about").is_err());

        assert!(entry.back());
        entry.suggest("abou");
        entry.answer_row(0).unwrap();
        entry.validate().unwrap();
    }

    #[test]
    fn incomplete_fails_validation() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        entry.answer_typed("abandon").unwrap();
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("1 of 12"));
    }

    #[test]
    fn back_removes_last_word() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        assert!(!entry.back());
        entry.answer_typed("zoo").unwrap();
        entry.answer_typed("zone").unwrap();
        assert!(entry.back());
        assert_eq!(entry.phrase().as_str(), "zoo");
    }

    #[test]
    fn no_answers_past_the_end() {
        let mut entry = SeedEntry::new(12, 4).unwrap();
        for _ in 0..12 {
            entry.answer_typed("abandon").unwrap();
        }
        assert!(entry.answer_typed("abandon").is_err());
    }
}
