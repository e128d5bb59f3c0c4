//! Language providers: where vocabularies and key layouts come from.
//!
//! A provider supplies everything one language/mode needs — a display name,
//! the weighted suggestion dictionary the trie is loaded from, and the
//! key-layout tables the shell renders. The engine only ever consumes the
//! dictionary; the layout tables ride along for the shell.

mod pack;

use std::sync::OnceLock;

pub use pack::{parse_pack_toml, PackError};

use crate::term::WeightedTerm;

pub const DEFAULT_PACK_TOML: &str = include_str!("default_pack.toml");

pub trait LanguageProvider: Send + Sync {
    /// Human-readable language name, shown on the space bar.
    fn language(&self) -> &str;

    /// The vocabulary to load into the suggestion trie.
    fn suggestion_dictionary(&self) -> Vec<WeightedTerm>;

    /// Characters typed by an upward swipe, row by row.
    fn secondary_characters(&self) -> &[Vec<String>];

    /// Characters available in alt mode, row by row.
    fn tertiary_characters(&self) -> &[Vec<String>];

    /// Characters available in shift mode, row by row.
    fn shift_characters(&self) -> &[Vec<String>];

    /// Suffixes after which the shell should re-enable shift.
    fn autocapitalize_after(&self) -> &[String];
}

/// A language provider defined by a TOML pack file.
#[derive(Debug, Clone)]
pub struct LanguagePack {
    name: String,
    words: Vec<WeightedTerm>,
    secondary: Vec<Vec<String>>,
    tertiary: Vec<Vec<String>>,
    shift: Vec<Vec<String>>,
    autocapitalize_after: Vec<String>,
}

impl LanguagePack {
    pub fn parse(toml_str: &str) -> Result<Self, PackError> {
        parse_pack_toml(toml_str)
    }

    /// The built-in pack, embedded at build time.
    pub fn default_pack() -> &'static LanguagePack {
        static INSTANCE: OnceLock<LanguagePack> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            parse_pack_toml(DEFAULT_PACK_TOML).expect("embedded pack TOML must be valid")
        })
    }

    pub(crate) fn from_parts(
        name: String,
        words: Vec<WeightedTerm>,
        secondary: Vec<Vec<String>>,
        tertiary: Vec<Vec<String>>,
        shift: Vec<Vec<String>>,
        autocapitalize_after: Vec<String>,
    ) -> Self {
        Self {
            name,
            words,
            secondary,
            tertiary,
            shift,
            autocapitalize_after,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl LanguageProvider for LanguagePack {
    fn language(&self) -> &str {
        &self.name
    }

    fn suggestion_dictionary(&self) -> Vec<WeightedTerm> {
        self.words.clone()
    }

    fn secondary_characters(&self) -> &[Vec<String>] {
        &self.secondary
    }

    fn tertiary_characters(&self) -> &[Vec<String>] {
        &self.tertiary
    }

    fn shift_characters(&self) -> &[Vec<String>] {
        &self.shift
    }

    fn autocapitalize_after(&self) -> &[String] {
        &self.autocapitalize_after
    }
}
