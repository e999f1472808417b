// --- File: src/core/trie.rs
use crate::error::{Result, SegmentError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TrieNode {
    children: HashMap<char, usize>,
    is_word: bool,
}

/// A codepoint-keyed prefix trie over the dictionary words.
///
/// Built once from a word list and read-only afterwards, so a single index
/// can be shared (behind an `Arc`) by any number of concurrent segmentation
/// calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryIndex {
    nodes: Vec<TrieNode>,
    word_count: usize,
    max_word_len: usize,
}

impl DictionaryIndex {
    /// Creates an empty index. Use [`DictionaryIndex::from_words`] for the
    /// validated bulk build.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
            max_word_len: 0,
        }
    }

    /// Builds an index from a word sequence.
    ///
    /// Entries are trimmed; blank entries and `#` comments are skipped.
    /// Fails with `InvalidDictionary` if an entry contains a control
    /// character or if no word remains.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for (line, entry) in words.into_iter().enumerate() {
            let word = entry.as_ref().trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if let Some(c) = word.chars().find(|c| c.is_control()) {
                return Err(SegmentError::InvalidDictionary {
                    reason: format!("entry {} contains control character {:?}", line + 1, c),
                });
            }
            index.insert(word);
        }

        if index.is_empty() {
            return Err(SegmentError::InvalidDictionary {
                reason: "word list is empty".to_string(),
            });
        }
        log::debug!(
            "built dictionary index: {} words, {} nodes",
            index.word_count,
            index.nodes.len()
        );
        Ok(index)
    }

    /// Inserts a word.
    /// O(k) complexity where k is the word length in codepoints.
    pub fn insert(&mut self, word: &str) {
        let mut node_idx = 0;
        let mut len = 0;
        for c in word.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&c) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::default());
                self.nodes[node_idx].children.insert(c, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
            len += 1;
        }
        if len == 0 || self.nodes[node_idx].is_word {
            return;
        }
        self.nodes[node_idx].is_word = true;
        self.word_count += 1;
        self.max_word_len = self.max_word_len.max(len);
    }

    /// Returns the end offsets of every dictionary word that is a prefix of
    /// `text[offset..]`, longest match first.
    /// Never looks further than [`DictionaryIndex::max_word_len`] codepoints.
    pub fn longest_matches_at(&self, text: &[char], offset: usize) -> Vec<usize> {
        let mut ends = Vec::new();
        let mut node_idx = 0;
        for (i, c) in text.iter().enumerate().skip(offset).take(self.max_word_len) {
            match self.nodes[node_idx].children.get(c) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if self.nodes[node_idx].is_word {
                ends.push(i + 1);
            }
        }
        ends.reverse();
        ends
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut node_idx = 0;
        for c in word.chars() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&next_idx) => node_idx = next_idx,
                None => return false,
            }
        }
        node_idx != 0 && self.nodes[node_idx].is_word
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Length in codepoints of the longest word.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}

impl Default for DictionaryIndex {
    fn default() -> Self {
        Self::new()
    }
}
