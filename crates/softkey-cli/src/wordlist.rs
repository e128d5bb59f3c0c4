//! Lenient ingestion of plain-text wordlists.
//!
//! One `term<TAB>weight` pair per line. Blank lines and `#` comments are
//! ignored; lines that don't fit the format are counted and skipped, never
//! fatal — a bad line in a 50k-word list shouldn't kill the whole load.

use std::fs;
use std::io;
use std::path::Path;

use softkey_core::term::WeightedTerm;

pub struct Wordlist {
    pub terms: Vec<WeightedTerm>,
    pub skipped: usize,
}

pub fn parse_wordlist(input: &str) -> Wordlist {
    let mut terms = Vec::new();
    let mut skipped = 0usize;

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((term, weight)) = line.split_once('\t') else {
            skipped += 1;
            continue;
        };
        let term = term.trim();
        let Ok(weight) = weight.trim().parse::<i64>() else {
            skipped += 1;
            continue;
        };
        if term.is_empty() {
            skipped += 1;
            continue;
        }
        terms.push(WeightedTerm::from_signed(term, weight));
    }

    Wordlist { terms, skipped }
}

pub fn load_wordlist(path: &Path) -> Result<Wordlist, io::Error> {
    Ok(parse_wordlist(&fs::read_to_string(path)?))
}
