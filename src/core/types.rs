// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A codepoint offset into the text being segmented.
pub type Offset = usize;

/// The classification carried by every span and every emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Thai (or other non-Latin script) text, segmented against the dictionary.
    ThaiText,
    /// Digits, including decimal points, thousands separators and dotted
    /// sequences such as `127.0.0.1`.
    Number,
    PunctuationRun,
    WhitespaceRun,
    LatinRun,
    /// Control and format codepoints such as ZERO WIDTH SPACE.
    Other,
}

impl TokenKind {
    /// Atomic kinds are emitted as a single token without dictionary lookup.
    pub fn is_atomic(self) -> bool {
        !matches!(self, TokenKind::ThaiText)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::ThaiText => "thai_text",
            TokenKind::Number => "number",
            TokenKind::PunctuationRun => "punctuation_run",
            TokenKind::WhitespaceRun => "whitespace_run",
            TokenKind::LatinRun => "latin_run",
            TokenKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A half-open `[start, end)` range of codepoint offsets with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Offset,
    pub end: Offset,
    pub kind: TokenKind,
}

impl Span {
    pub fn new(start: Offset, end: Offset, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The final output unit of segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(), kind }
    }

    /// Builds a token from a slice of the decoded input.
    pub fn from_chars(chars: &[char], kind: TokenKind) -> Self {
        Self { text: chars.iter().collect(), kind }
    }
}

/// Knobs for a single segmentation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Keep `WhitespaceRun` tokens in the output.
    pub keep_whitespace: bool,
    /// Merge consecutive out-of-vocabulary clusters inside a Thai span
    /// into one token instead of emitting one token per cluster.
    pub join_unknown: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            keep_whitespace: true,
            join_unknown: false,
        }
    }
}
