use softkey_core::provider::LanguagePack;

use super::StubProvider;
use crate::{last_word_typed, KeyboardSession};

#[test]
fn activation_loads_the_provider_vocabulary() {
    let mut session = KeyboardSession::with_limit(5);
    session.activate_provider(&StubProvider::new("English", &[("run", 5), ("rust", 9)]));

    assert_eq!(session.language(), "English");
    assert_eq!(session.suggestions_for_prefix("ru"), ["rust", "run"]);
}

#[test]
fn switching_providers_replaces_the_vocabulary() {
    let mut session = KeyboardSession::with_limit(5);
    session.activate_provider(&StubProvider::new("English", &[("run", 5)]));
    session.activate_provider(&StubProvider::new("French", &[("rue", 5)]));

    assert_eq!(session.language(), "French");
    assert_eq!(session.suggestions_for_prefix("ru"), ["rue"]);
    assert!(session.suggestions_for_prefix("run").is_empty());
}

#[test]
fn fresh_session_suggests_nothing() {
    let session = KeyboardSession::with_limit(5);
    assert_eq!(session.language(), "");
    assert!(session.suggestions_for_prefix("a").is_empty());
}

#[test]
fn default_pack_activates() {
    let mut session = KeyboardSession::with_limit(5);
    session.activate_provider(LanguagePack::default_pack());

    assert_eq!(session.language(), "Khmer");
    assert!(!session.trie().is_empty());
    assert_eq!(session.suggestions_for_prefix("ការ"), ["ការងារ"]);
}

#[test]
fn context_queries_use_the_last_word() {
    let mut session = KeyboardSession::with_limit(5);
    session.activate_provider(&StubProvider::new("English", &[("world", 3), ("word", 2)]));

    assert_eq!(session.suggestions_for_context("hello wor"), ["world", "word"]);
    // Cursor after a space: between words, nothing to complete.
    assert!(session.suggestions_for_context("hello ").is_empty());
    assert!(session.suggestions_for_context("").is_empty());
}

#[test]
fn last_word_is_the_trailing_letter_run() {
    assert_eq!(last_word_typed("hello wor"), Some("wor"));
    assert_eq!(last_word_typed("wor"), Some("wor"));
    assert_eq!(last_word_typed("one two3abc"), Some("abc"));
    assert_eq!(last_word_typed("hello "), None);
    assert_eq!(last_word_typed("hello."), None);
    assert_eq!(last_word_typed(""), None);
    assert_eq!(last_word_typed("42"), None);
}

#[test]
fn last_word_handles_non_ascii_letters() {
    assert_eq!(last_word_typed("abc ខម"), Some("ខម"));
    assert_eq!(last_word_typed("é déj"), Some("déj"));
}
