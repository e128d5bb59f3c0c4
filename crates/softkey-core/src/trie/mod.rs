//! Weighted prefix trie backing the predictive-text strip.
//!
//! `SuggestionTrie` stores the active language's vocabulary and answers
//! ranked completion queries for the word typed so far. Nodes live in a
//! single arena (`Vec<Node>`) addressed by `NodeId` handles, so `clear()`
//! is an arena reset and loading never scatters per-node allocations.
//!
//! The trie is single-threaded by design: one keystroke, one query. It is
//! plain owned data (`Send`), so a shell that wants a background reload can
//! either wrap the instance in an external `RwLock` or build a fresh trie
//! off-thread and swap the reference it holds.


use tracing::debug;

use crate::settings::settings;
use crate::term::WeightedTerm;

/// Stable handle into the node arena. Handle 0 is always the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Whether a node ends a complete vocabulary term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Terminal {
    #[default]
    NotATerm,
    Term {
        weight: u32,
    },
}

#[derive(Debug, Default)]
struct Node {
    /// Child edges, sorted by character so traversal order is the Unicode
    /// scalar order the ranking tie-break relies on.
    children: Vec<(char, NodeId)>,
    terminal: Terminal,
}

/// Mutable prefix-indexed vocabulary store with ranked lookup.
#[derive(Debug)]
pub struct SuggestionTrie {
    nodes: Vec<Node>,
    max_results: usize,
    term_count: usize,
}

impl SuggestionTrie {
    /// Create an empty trie with the result cap from settings.
    pub fn new() -> Self {
        Self::with_limit(settings().suggestions.max_results)
    }

    /// Create an empty trie returning at most `max_results` candidates
    /// per query.
    pub fn with_limit(max_results: usize) -> Self {
        Self {
            nodes: vec![Node::default()],
            max_results,
            term_count: 0,
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Number of distinct terms currently stored.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Discard all terms, keeping only the empty root. Idempotent.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[NodeId::ROOT.index()] = Node::default();
        self.term_count = 0;
    }

    /// Load a batch of terms into the trie.
    ///
    /// Additive with last-write-wins: a term already present has its weight
    /// replaced, everything else is untouched. Callers switching languages
    /// are expected to `clear()` first. Entries whose text is empty after
    /// trimming are skipped without aborting the batch. Matching is case-
    /// and code-point-sensitive; no normalization is performed.
    pub fn load_weighted_terms<I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = WeightedTerm>,
    {
        let mut loaded = 0usize;
        let mut skipped = 0usize;
        for term in terms {
            let text = term.text.trim();
            if text.is_empty() {
                skipped += 1;
                continue;
            }
            self.insert(text, term.weight);
            loaded += 1;
        }
        debug!(loaded, skipped, total = self.term_count, "vocabulary batch");
    }

    fn insert(&mut self, text: &str, weight: u32) {
        let mut cur = NodeId::ROOT;
        for ch in text.chars() {
            cur = self.child_or_insert(cur, ch);
        }
        let terminal = &mut self.nodes[cur.index()].terminal;
        if matches!(terminal, Terminal::NotATerm) {
            self.term_count += 1;
        }
        *terminal = Terminal::Term { weight };
    }

    fn child_or_insert(&mut self, id: NodeId, ch: char) -> NodeId {
        match self.nodes[id.index()]
            .children
            .binary_search_by_key(&ch, |&(c, _)| c)
        {
            Ok(pos) => self.nodes[id.index()].children[pos].1,
            Err(pos) => {
                let child = NodeId(self.nodes.len() as u32);
                self.nodes.push(Node::default());
                self.nodes[id.index()].children.insert(pos, (ch, child));
                child
            }
        }
    }

    fn child(&self, id: NodeId, ch: char) -> Option<NodeId> {
        let children = &self.nodes[id.index()].children;
        children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|pos| children[pos].1)
    }

    /// Ranked completions for a typed prefix.
    ///
    /// An empty prefix yields no suggestions (the engine never proposes the
    /// whole vocabulary on a blank context), and so does a prefix with no
    /// matching path. Otherwise every term below the prefix — including the
    /// prefix itself when it is a complete term — is ranked by weight
    /// descending, then shorter term first, then lexicographically, and the
    /// top `max_results` are returned. Read-only and idempotent.
    pub fn suggestions_for_prefix(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }

        let mut cur = NodeId::ROOT;
        for ch in prefix.chars() {
            match self.child(cur, ch) {
                Some(next) => cur = next,
                None => return Vec::new(),
            }
        }

        let mut found: Vec<(String, u32)> = Vec::new();
        let mut buf = prefix.to_string();
        self.collect_terms(cur, &mut buf, &mut found);

        found.sort_by(|(text_a, weight_a), (text_b, weight_b)| {
            weight_b
                .cmp(weight_a)
                .then_with(|| text_a.chars().count().cmp(&text_b.chars().count()))
                .then_with(|| text_a.cmp(text_b))
        });
        found.truncate(self.max_results);

        debug!(prefix, results = found.len(), "prefix query");
        found.into_iter().map(|(text, _)| text).collect()
    }

    fn collect_terms(&self, id: NodeId, buf: &mut String, out: &mut Vec<(String, u32)>) {
        let node = &self.nodes[id.index()];
        if let Terminal::Term { weight } = node.terminal {
            out.push((buf.clone(), weight));
        }
        for &(ch, child) in &node.children {
            buf.push(ch);
            self.collect_terms(child, buf, out);
            buf.pop();
        }
    }
}

impl Default for SuggestionTrie {
    fn default() -> Self {
        Self::new()
    }
}
