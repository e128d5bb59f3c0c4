use serde::Deserialize;
use tracing::debug;

use super::LanguagePack;
use crate::term::WeightedTerm;

#[derive(Deserialize)]
struct PackFile {
    name: String,
    #[serde(default)]
    autocapitalize_after: Vec<String>,
    layout: LayoutTables,
    #[serde(default)]
    words: Vec<WordEntry>,
}

#[derive(Deserialize)]
struct LayoutTables {
    secondary: Vec<Vec<String>>,
    tertiary: Vec<Vec<String>>,
    shift: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct WordEntry {
    term: String,
    weight: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("pack name is empty")]
    EmptyName,
    #[error("layout tables must have the same number of rows")]
    RaggedLayout,
}

/// Parse TOML text into a `LanguagePack`.
///
/// Structural problems (unparseable TOML, empty name, layout tables with
/// mismatched row counts) are errors. Data-quality problems inside word
/// entries are not: negative weights are clamped to zero here, and terms
/// that are empty after trimming are left for the trie to skip at load.
pub fn parse_pack_toml(toml_str: &str) -> Result<LanguagePack, PackError> {
    let file: PackFile = toml::from_str(toml_str).map_err(|e| PackError::Parse(e.to_string()))?;

    if file.name.trim().is_empty() {
        return Err(PackError::EmptyName);
    }
    if file.layout.secondary.len() != file.layout.tertiary.len()
        || file.layout.secondary.len() != file.layout.shift.len()
    {
        return Err(PackError::RaggedLayout);
    }

    let words: Vec<WeightedTerm> = file
        .words
        .into_iter()
        .map(|w| WeightedTerm::from_signed(w.term, w.weight))
        .collect();

    debug!(name = %file.name, words = words.len(), "language pack parsed");

    Ok(LanguagePack::from_parts(
        file.name,
        words,
        file.layout.secondary,
        file.layout.tertiary,
        file.layout.shift,
        file.autocapitalize_after,
    ))
}
