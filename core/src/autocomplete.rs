//! Prefix-filtered autocomplete over a fixed candidate list.
//!
//! The selector knows nothing about rendering. A host feeds it query text and
//! focus changes; it answers with a bounded suggestion list and a visibility
//! flag for whatever surface displays the suggestions (see [`crate::dropdown`]).

use tracing::debug;
use zeroize::Zeroize;

use crate::error::AutocompleteError;

/// Number of suggestions shown when the host does not choose a limit.
pub const DEFAULT_MAX_RESULTS: usize = 4;

/// Queries shorter than this (in characters) never produce suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

/// Output of one filtering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
    pub visible: bool,
}

impl Suggestions {
    fn hidden() -> Self {
        Self::default()
    }
}

/// Notifications the selector hands back to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// Input gained focus.
    Focused,
    /// The host committed one of the current suggestions.
    Selected(String),
    /// Input lost focus; the suggestion surface should be hidden.
    Dismissed,
}

#[derive(Debug, Clone)]
struct Candidate {
    word: String,
    folded: String,
}

/// Case-insensitive prefix selector over an ordered candidate set.
///
/// Results keep candidate order and are cut off after `max_results` matches.
/// Duplicates in the candidate set are kept as-is.
#[derive(Debug, Clone)]
pub struct AutocompleteSelector {
    candidates: Vec<Candidate>,
    max_results: usize,
    last: Vec<String>,
}

impl Default for AutocompleteSelector {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            max_results: DEFAULT_MAX_RESULTS,
            last: Vec::new(),
        }
    }
}

impl AutocompleteSelector {
    /// Build a configured selector in one step.
    pub fn new<I, S>(candidates: I, max_results: usize) -> Result<Self, AutocompleteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selector = Self::default();
        selector.configure(candidates, max_results)?;
        Ok(selector)
    }

    /// Replace the candidate set and result limit.
    ///
    /// On error the previous configuration is left untouched.
    pub fn configure<I, S>(
        &mut self,
        candidates: I,
        max_results: usize,
    ) -> Result<(), AutocompleteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if max_results == 0 {
            return Err(AutocompleteError::InvalidConfiguration { max_results });
        }
        self.candidates = candidates
            .into_iter()
            .map(|c| {
                let word = c.into();
                let folded = word.to_lowercase();
                Candidate { word, folded }
            })
            .collect();
        self.max_results = max_results;
        self.last.zeroize();
        debug!(candidates = self.candidates.len(), max_results, "autocomplete configured");
        Ok(())
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// True if `word` is in the candidate set (exact, case-sensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.candidates.iter().any(|c| c.word == word)
    }

    /// The list returned by the most recent [`on_query_changed`](Self::on_query_changed).
    pub fn current(&self) -> &[String] {
        &self.last
    }

    /// Filter without recording the result.
    #[must_use]
    pub fn filter(&self, query: &str) -> Suggestions {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Suggestions::hidden();
        }
        let needle = query.to_lowercase();
        let suggestions: Vec<String> = self
            .candidates
            .iter()
            .filter(|c| c.folded.starts_with(&needle))
            .take(self.max_results)
            .map(|c| c.word.clone())
            .collect();
        let visible = !suggestions.is_empty();
        Suggestions {
            suggestions,
            visible,
        }
    }

    /// Recompute suggestions for a new query. Supersedes the previous result.
    pub fn on_query_changed(&mut self, query: &str) -> Suggestions {
        let result = self.filter(query);
        debug!(query_len = query.len(), matches = result.suggestions.len(), "query changed");
        self.last.zeroize();
        self.last.clone_from(&result.suggestions);
        result
    }

    /// Commit `word`. It must be one of the current suggestions.
    pub fn select(&self, word: &str) -> Result<SelectorEvent, AutocompleteError> {
        if !self.last.iter().any(|w| w == word) {
            return Err(AutocompleteError::InvalidSelection {
                word: word.to_string(),
            });
        }
        debug!("suggestion selected");
        Ok(SelectorEvent::Selected(word.to_string()))
    }

    /// Input lost focus. Drops the current suggestions; candidates are kept.
    pub fn on_focus_lost(&mut self) -> SelectorEvent {
        self.reset();
        SelectorEvent::Dismissed
    }

    /// Forget the current suggestions. Nothing can be selected until the
    /// next query.
    pub fn reset(&mut self) {
        self.last.zeroize();
    }

    pub fn on_focus_gained(&self) -> SelectorEvent {
        SelectorEvent::Focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fruit() -> AutocompleteSelector {
        AutocompleteSelector::new(["apple", "apply", "banana", "avocado", "ant"], 4).unwrap()
    }

    #[test]
    fn prefix_matches_in_candidate_order() {
        let mut s = fruit();
        let out = s.on_query_changed("ap");
        assert_eq!(out.suggestions, vec!["apple", "apply"]);
        assert!(out.visible);
    }

    #[test]
    fn single_char_query_is_hidden() {
        let mut s = fruit();
        let out = s.on_query_changed("a");
        assert!(out.suggestions.is_empty());
        assert!(!out.visible);
    }

    #[test]
    fn empty_query_is_hidden() {
        let mut s = fruit();
        assert_eq!(s.on_query_changed(""), Suggestions::default());
    }

    #[test]
    fn no_match_is_hidden() {
        let mut s = fruit();
        let out = s.on_query_changed("xyz");
        assert!(out.suggestions.is_empty());
        assert!(!out.visible);
    }

    #[test]
    fn duplicates_kept_and_limit_applied() {
        let mut s = AutocompleteSelector::new(["ant", "ant", "bee"], 1).unwrap();
        assert_eq!(s.on_query_changed("an").suggestions, vec!["ant"]);

        s.configure(["ant", "ant", "bee"], 4).unwrap();
        assert_eq!(s.on_query_changed("an").suggestions, vec!["ant", "ant"]);
    }

    #[test]
    fn matching_ignores_case() {
        let mut s = fruit();
        assert_eq!(s.on_query_changed("AP").suggestions, vec!["apple", "apply"]);

        let mut upper = AutocompleteSelector::new(["Avocado", "avenue"], 4).unwrap();
        assert_eq!(upper.on_query_changed("aV").suggestions, vec!["Avocado", "avenue"]);
    }

    #[test]
    fn query_length_counts_characters_not_bytes() {
        // "é" is two bytes but one character.
        let mut s = AutocompleteSelector::new(["école", "étude"], 4).unwrap();
        assert!(!s.on_query_changed("é").visible);
        assert_eq!(s.on_query_changed("éc").suggestions, vec!["école"]);
    }

    #[test]
    fn result_stops_at_limit() {
        let words: Vec<String> = (0..50).map(|i| format!("ab{i:02}")).collect();
        let mut s = AutocompleteSelector::new(words, 4).unwrap();
        assert_eq!(s.on_query_changed("ab").suggestions, vec!["ab00", "ab01", "ab02", "ab03"]);
    }

    #[test]
    fn zero_limit_rejected() {
        let err = AutocompleteSelector::new(["a"], 0).unwrap_err();
        assert_eq!(err, AutocompleteError::InvalidConfiguration { max_results: 0 });
    }

    #[test]
    fn failed_configure_keeps_previous_state() {
        let mut s = fruit();
        assert!(s.configure(["zebra"], 0).is_err());
        assert_eq!(s.candidate_count(), 5);
        assert_eq!(s.max_results(), 4);
    }

    #[test]
    fn configure_replaces_candidates() {
        let mut s = fruit();
        s.on_query_changed("ap");
        s.configure(["zebra", "zero"], 4).unwrap();
        assert!(s.current().is_empty());
        assert!(s.on_query_changed("ap").suggestions.is_empty());
        assert_eq!(s.on_query_changed("ze").suggestions, vec!["zebra", "zero"]);
    }

    #[test]
    fn select_accepts_current_suggestion() {
        let mut s = fruit();
        s.on_query_changed("ap");
        assert_eq!(s.select("apply").unwrap(), SelectorEvent::Selected("apply".into()));
        // The selector does not clear on its own.
        assert_eq!(s.current(), ["apple", "apply"]);
    }

    #[test]
    fn select_rejects_word_outside_suggestions() {
        let mut s = fruit();
        s.on_query_changed("ap");
        let err = s.select("banana").unwrap_err();
        assert_eq!(err, AutocompleteError::InvalidSelection { word: "banana".into() });
    }

    #[test]
    fn select_checks_latest_result_only() {
        let mut s = fruit();
        s.on_query_changed("ap");
        s.on_query_changed("ba");
        assert!(s.select("apple").is_err());
        assert!(s.select("banana").is_ok());
    }

    #[test]
    fn select_before_any_query_fails() {
        let s = fruit();
        assert!(s.select("apple").is_err());
    }

    #[test]
    fn focus_lost_dismisses_and_clears_suggestions() {
        let mut s = fruit();
        s.on_query_changed("ap");
        assert_eq!(s.on_focus_lost(), SelectorEvent::Dismissed);
        assert!(s.current().is_empty());
        assert!(s.select("apple").is_err());
        assert_eq!(s.candidate_count(), 5);
    }

    #[test]
    fn reset_blocks_selection_until_next_query() {
        let mut s = fruit();
        s.on_query_changed("ap");
        s.reset();
        assert!(s.select("apple").is_err());
        s.on_query_changed("ap");
        assert_eq!(s.select("apple").unwrap(), SelectorEvent::Selected("apple".into()));
    }

    #[test]
    fn focus_gained_is_passthrough() {
        let mut s = fruit();
        s.on_query_changed("ap");
        assert_eq!(s.on_focus_gained(), SelectorEvent::Focused);
        assert_eq!(s.current().len(), 2);
    }

    fn is_subsequence(sub: &[String], full: &[String]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f == s))
    }

    proptest! {
        #[test]
        fn short_queries_never_suggest(
            words in prop::collection::vec("[a-cA-C]{0,5}", 0..40),
            query in "[a-c]{0,1}",
            max in 1usize..8,
        ) {
            let mut s = AutocompleteSelector::new(words, max).unwrap();
            let out = s.on_query_changed(&query);
            prop_assert!(out.suggestions.is_empty());
            prop_assert!(!out.visible);
        }

        #[test]
        fn suggestions_respect_prefix_limit_and_order(
            words in prop::collection::vec("[a-cA-C]{1,5}", 0..40),
            query in "[a-cA-C]{2,3}",
            max in 1usize..8,
        ) {
            let mut s = AutocompleteSelector::new(words.clone(), max).unwrap();
            let out = s.on_query_changed(&query);
            let needle = query.to_lowercase();
            prop_assert!(out.suggestions.len() <= max);
            prop_assert_eq!(out.visible, !out.suggestions.is_empty());
            for w in &out.suggestions {
                prop_assert!(w.to_lowercase().starts_with(&needle));
            }
            prop_assert!(is_subsequence(&out.suggestions, &words));

            let expected: Vec<String> = words
                .iter()
                .filter(|w| w.to_lowercase().starts_with(&needle))
                .take(max)
                .cloned()
                .collect();
            prop_assert_eq!(&out.suggestions, &expected);
        }

        #[test]
        fn repeated_query_is_idempotent(
            words in prop::collection::vec("[a-c]{1,4}", 0..30),
            query in "[a-c]{0,3}",
        ) {
            let mut s = AutocompleteSelector::new(words, DEFAULT_MAX_RESULTS).unwrap();
            let first = s.on_query_changed(&query);
            let second = s.on_query_changed(&query);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn select_succeeds_iff_in_last_result(
            words in prop::collection::vec("[a-c]{1,4}", 1..30),
            query in "[a-c]{2,3}",
            pick in "[a-c]{1,4}",
        ) {
            let mut s = AutocompleteSelector::new(words, 3).unwrap();
            let out = s.on_query_changed(&query);
            let member = out.suggestions.contains(&pick);
            prop_assert_eq!(s.select(&pick).is_ok(), member);
        }
    }
}
