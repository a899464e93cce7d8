// --- File: src/core/trie.rs
use crate::core::types::Unit;
use std::collections::HashMap;

/// One mapping: a source key and the graphemic units it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    pub key: String,
    pub units: Vec<Unit>,
}

#[derive(Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    entry: Option<usize>,
}

/// Arena-backed trie over source keys, used for greedy maximal-munch
/// tokenization. Built once per table and only read afterwards.
#[derive(Clone)]
pub struct KeyTrie {
    nodes: Vec<Node>,
    entries: Vec<TableEntry>,
    max_key_len: usize,
}

impl KeyTrie {
    pub fn new() -> Self {
        Self { nodes: vec![Node::default()], entries: Vec::new(), max_key_len: 0 }
    }

    pub fn from_entries<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, Vec<Unit>)>) -> Self {
        let mut trie = Self::new();
        for (key, units) in entries {
            trie.insert(key.as_ref(), units);
        }
        trie
    }

    /// Inserts `key`, replacing the units of an existing identical key.
    /// O(k) where k is key length. Empty keys are ignored.
    pub fn insert(&mut self, key: &str, units: Vec<Unit>) {
        if key.is_empty() {
            return;
        }
        let mut node_idx = 0;
        let mut len = 0;
        for ch in key.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node_idx].children.insert(ch, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
            len += 1;
        }

        let entry = TableEntry { key: key.to_string(), units };
        match self.nodes[node_idx].entry {
            Some(id) => self.entries[id] = entry,
            None => {
                self.nodes[node_idx].entry = Some(self.entries.len());
                self.entries.push(entry);
            }
        }
        self.max_key_len = self.max_key_len.max(len);
    }

    /// Longest key that is a prefix of `input`, with its length in chars.
    pub fn longest_match(&self, input: &[char]) -> Option<(usize, &TableEntry)> {
        let mut node_idx = 0;
        let mut best = None;
        for (i, ch) in input.iter().enumerate() {
            match self.nodes[node_idx].children.get(ch) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some(id) = self.nodes[node_idx].entry {
                best = Some((i + 1, &self.entries[id]));
            }
        }
        best
    }

    pub fn get(&self, key: &str) -> Option<&TableEntry> {
        let mut node_idx = 0;
        for ch in key.chars() {
            node_idx = *self.nodes[node_idx].children.get(&ch)?;
        }
        self.nodes[node_idx].entry.map(|id| &self.entries[id])
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeyTrie {
    fn default() -> Self {
        Self::new()
    }
}
