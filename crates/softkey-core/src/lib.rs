pub mod provider;
pub mod settings;
pub mod term;
pub mod trie;

pub use provider::{LanguagePack, LanguageProvider};
pub use term::WeightedTerm;
pub use trie::SuggestionTrie;
