use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use softkey_cli::wordlist::load_wordlist;
use softkey_core::provider::{LanguagePack, LanguageProvider, PackError};
use softkey_core::trie::SuggestionTrie;
use softkey_session::KeyboardSession;

#[derive(Parser)]
#[command(name = "sktool", about = "Softkey suggestion-engine diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query a language pack for completions of a prefix
    Suggest {
        /// Path to the pack TOML file
        pack_file: PathBuf,
        /// Prefix typed so far
        prefix: String,
        /// Maximum number of candidates (defaults to the settings cap)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a pack's name, layout shape, and top-weighted terms
    PackInfo {
        /// Path to the pack TOML file
        pack_file: PathBuf,
        /// Number of top terms to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Query a term<TAB>weight wordlist for completions of a prefix
    Wordlist {
        /// Path to the wordlist file
        list_file: PathBuf,
        /// Prefix typed so far
        prefix: String,
        /// Maximum number of candidates (defaults to the settings cap)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pack error: {0}")]
    Pack(#[from] PackError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Suggest {
            pack_file,
            prefix,
            limit,
            json,
        } => cmd_suggest(&pack_file, &prefix, limit, json),
        Command::PackInfo { pack_file, top } => cmd_pack_info(&pack_file, top),
        Command::Wordlist {
            list_file,
            prefix,
            limit,
            json,
        } => cmd_wordlist(&list_file, &prefix, limit, json),
    }
}

fn load_pack(path: &Path) -> Result<LanguagePack, CliError> {
    Ok(LanguagePack::parse(&fs::read_to_string(path)?)?)
}

fn session_with(limit: Option<usize>) -> KeyboardSession {
    match limit {
        Some(n) => KeyboardSession::with_limit(n),
        None => KeyboardSession::new(),
    }
}

fn print_suggestions(suggestions: &[String], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(suggestions)?);
    } else if suggestions.is_empty() {
        println!("(no candidates)");
    } else {
        for s in suggestions {
            println!("{s}");
        }
    }
    Ok(())
}

fn cmd_suggest(
    pack_file: &Path,
    prefix: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let pack = load_pack(pack_file)?;
    let mut session = session_with(limit);
    session.activate_provider(&pack);
    print_suggestions(&session.suggestions_for_prefix(prefix), json)
}

fn cmd_pack_info(pack_file: &Path, top: usize) -> Result<(), CliError> {
    let pack = load_pack(pack_file)?;

    println!("name:  {}", pack.language());
    let rows: Vec<usize> = pack.secondary_characters().iter().map(Vec::len).collect();
    println!("rows:  {rows:?}");
    println!("words: {}", pack.word_count());

    let mut dict = pack.suggestion_dictionary();
    dict.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| a.text.chars().count().cmp(&b.text.chars().count()))
            .then_with(|| a.text.cmp(&b.text))
    });
    for term in dict.iter().take(top) {
        println!("  {:>6}  {}", term.weight, term.text);
    }
    Ok(())
}

fn cmd_wordlist(
    list_file: &Path,
    prefix: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let list = load_wordlist(list_file)?;
    if list.skipped > 0 {
        eprintln!("skipped {} malformed line(s)", list.skipped);
    }

    let mut trie = match limit {
        Some(n) => SuggestionTrie::with_limit(n),
        None => SuggestionTrie::new(),
    };
    trie.load_weighted_terms(list.terms);
    print_suggestions(&trie.suggestions_for_prefix(prefix), json)
}
