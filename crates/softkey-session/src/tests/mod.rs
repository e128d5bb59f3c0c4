mod basic;

use softkey_core::provider::LanguageProvider;
use softkey_core::term::WeightedTerm;

/// In-memory provider for tests; layout tables stay empty since the
/// session never reads them.
pub(crate) struct StubProvider {
    pub name: &'static str,
    pub words: Vec<WeightedTerm>,
}

impl StubProvider {
    pub(crate) fn new(name: &'static str, words: &[(&str, u32)]) -> Self {
        Self {
            name,
            words: words
                .iter()
                .map(|&(text, weight)| WeightedTerm::new(text, weight))
                .collect(),
        }
    }
}

impl LanguageProvider for StubProvider {
    fn language(&self) -> &str {
        self.name
    }

    fn suggestion_dictionary(&self) -> Vec<WeightedTerm> {
        self.words.clone()
    }

    fn secondary_characters(&self) -> &[Vec<String>] {
        &[]
    }

    fn tertiary_characters(&self) -> &[Vec<String>] {
        &[]
    }

    fn shift_characters(&self) -> &[Vec<String>] {
        &[]
    }

    fn autocapitalize_after(&self) -> &[String] {
        &[]
    }
}
