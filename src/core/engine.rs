// --- File: src/core/engine.rs
use crate::core::classifier;
use crate::core::graph::{self, EdgeSource};
use crate::core::tcc::ClusterBoundaries;
use crate::core::trie::DictionaryIndex;
use crate::core::types::{Offset, SegmentOptions, Token, TokenKind};
use crate::dictionary::{DictionaryCache, DictionarySource};
use crate::error::Result;
use std::sync::Arc;

/// Segments `text` against `dictionary`.
///
/// Spans are classified first; each `ThaiText` span goes through the graph
/// solver and every other span becomes one token of its own kind. Tokens
/// come back in input order. Empty input returns immediately without
/// touching the dictionary.
pub fn segment(text: &str, dictionary: &DictionaryIndex, options: &SegmentOptions) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let boundaries = ClusterBoundaries::analyze(&chars);
    let spans = classifier::classify(&chars, &boundaries);

    let mut tokens = Vec::with_capacity(spans.len());
    for span in spans {
        let piece = &chars[span.start..span.end];
        match span.kind {
            TokenKind::WhitespaceRun if !options.keep_whitespace => {}
            kind if kind.is_atomic() => tokens.push(Token::from_chars(piece, kind)),
            _ => push_words(&mut tokens, piece, dictionary, options.join_unknown),
        }
    }
    tokens
}

fn push_words(tokens: &mut Vec<Token>, span: &[char], dictionary: &DictionaryIndex, join_unknown: bool) {
    let mut unknown_from: Option<Offset> = None;
    for edge in graph::solve(span, dictionary) {
        if join_unknown && edge.source == EdgeSource::Unknown {
            unknown_from.get_or_insert(edge.from);
            continue;
        }
        if let Some(start) = unknown_from.take() {
            tokens.push(Token::from_chars(&span[start..edge.from], TokenKind::ThaiText));
        }
        tokens.push(Token::from_chars(&span[edge.from..edge.to], TokenKind::ThaiText));
    }
    if let Some(start) = unknown_from {
        tokens.push(Token::from_chars(&span[start..], TokenKind::ThaiText));
    }
}

/// A dictionary handle bundled with segmentation options.
///
/// Cheap to clone; clones share the same read-only index.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    dictionary: Arc<DictionaryIndex>,
    options: SegmentOptions,
}

impl Tokenizer {
    pub fn new(dictionary: Arc<DictionaryIndex>) -> Self {
        Self::with_options(dictionary, SegmentOptions::default())
    }

    pub fn with_options(dictionary: Arc<DictionaryIndex>, options: SegmentOptions) -> Self {
        Self { dictionary, options }
    }

    /// Resolves `source` through the process-wide dictionary cache.
    pub fn from_source(source: &DictionarySource, options: SegmentOptions) -> Result<Self> {
        let dictionary = DictionaryCache::global().get_or_load(source)?;
        Ok(Self::with_options(dictionary, options))
    }

    pub fn dictionary(&self) -> &Arc<DictionaryIndex> {
        &self.dictionary
    }

    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    pub fn segment(&self, text: &str) -> Vec<Token> {
        segment(text, &self.dictionary, &self.options)
    }

    /// Like [`Tokenizer::segment`], keeping only the token texts.
    pub fn segment_words(&self, text: &str) -> Vec<String> {
        self.segment(text).into_iter().map(|t| t.text).collect()
    }
}
