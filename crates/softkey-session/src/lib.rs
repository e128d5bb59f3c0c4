//! Shell-facing session layer for the suggestion engine.
//!
//! `KeyboardSession` owns one `SuggestionTrie` and drives it the way the
//! keyboard shell needs: activating a language provider runs the
//! clear-then-load sequence, and each keystroke turns the text before the
//! cursor into a prefix query. The session is injected into whatever
//! orchestrates keystrokes; there is no ambient instance.

#[cfg(test)]
mod tests;

use tracing::debug;

use softkey_core::provider::LanguageProvider;
use softkey_core::trie::SuggestionTrie;

pub struct KeyboardSession {
    trie: SuggestionTrie,
    language: String,
}

impl KeyboardSession {
    /// New session with the result cap from settings and no vocabulary.
    pub fn new() -> Self {
        Self {
            trie: SuggestionTrie::new(),
            language: String::new(),
        }
    }

    pub fn with_limit(max_results: usize) -> Self {
        Self {
            trie: SuggestionTrie::with_limit(max_results),
            language: String::new(),
        }
    }

    /// Name of the active language, empty before the first activation.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn trie(&self) -> &SuggestionTrie {
        &self.trie
    }

    /// Switch to a provider's vocabulary.
    ///
    /// Always clears first, so activation replaces the previous language's
    /// vocabulary entirely rather than merging into it.
    pub fn activate_provider(&mut self, provider: &dyn LanguageProvider) {
        self.trie.clear();
        self.trie
            .load_weighted_terms(provider.suggestion_dictionary());
        self.language = provider.language().to_string();
        debug!(
            language = %self.language,
            terms = self.trie.term_count(),
            "provider activated"
        );
    }

    /// Ranked completions for an explicit prefix.
    pub fn suggestions_for_prefix(&self, prefix: &str) -> Vec<String> {
        self.trie.suggestions_for_prefix(prefix)
    }

    /// Ranked completions for the word currently being typed, extracted
    /// from the text immediately before the cursor. Empty when the cursor
    /// does not sit at the end of a word.
    pub fn suggestions_for_context(&self, before_cursor: &str) -> Vec<String> {
        match last_word_typed(before_cursor) {
            Some(word) => self.trie.suggestions_for_prefix(word),
            None => Vec::new(),
        }
    }
}

impl Default for KeyboardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The trailing run of letter characters before the cursor.
///
/// `None` when the context is empty or ends in a non-letter — the user is
/// between words and there is nothing to complete.
pub fn last_word_typed(context: &str) -> Option<&str> {
    let last = context.chars().next_back()?;
    if !last.is_alphabetic() {
        return None;
    }
    let start = context
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_alphabetic())
        .last()
        .map(|(i, _)| i)?;
    Some(&context[start..])
}
