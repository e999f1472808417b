// src/lib.rs

pub mod c_api;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod persistence;
pub mod tokenize;

pub use crate::core::engine::{segment as segment_tokens, Tokenizer};
pub use crate::core::trie::DictionaryIndex;
pub use crate::core::types::{SegmentOptions, Span, Token, TokenKind};
pub use crate::dictionary::{DictionaryCache, DictionarySource};
pub use crate::error::{Result, SegmentError};
pub use crate::tokenize::{segment, word_tokenize, word_tokenize_with, Engine};
