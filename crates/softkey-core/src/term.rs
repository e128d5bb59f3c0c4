//! Vocabulary entries: a term paired with its ranking weight.

/// One vocabulary entry as loaded from a language pack.
///
/// Two entries with identical `text` name the same vocabulary slot — the
/// trie never stores them as independent leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedTerm {
    pub text: String,
    pub weight: u32,
}

impl WeightedTerm {
    pub fn new(text: impl Into<String>, weight: u32) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    /// Build from a possibly-negative weight, clamping to zero.
    ///
    /// Pack files and wordlists carry signed integers; a negative weight is
    /// a data-quality issue normalized here rather than propagated into
    /// ranking.
    pub fn from_signed(text: impl Into<String>, weight: i64) -> Self {
        Self::new(text, weight.max(0).min(u32::MAX as i64) as u32)
    }

    /// Whether the entry is usable as a vocabulary term.
    /// Empty-after-trim text is malformed and skipped at load time.
    pub fn is_well_formed(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
