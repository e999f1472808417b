// File: src/tokenize.rs
//! Engine selection and the string-in, strings-out entry points.
use crate::core::engine::Tokenizer;
use crate::core::types::SegmentOptions;
use crate::dictionary::DictionarySource;
use crate::error::{Result, SegmentError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Tokenization engines that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Dictionary maximal matching constrained by Thai character clusters.
    #[default]
    Newmm,
}

impl FromStr for Engine {
    type Err = SegmentError;

    fn from_str(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("newmm") {
            Ok(Engine::Newmm)
        } else {
            Err(SegmentError::UnsupportedEngine {
                name: name.to_string(),
            })
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Newmm => f.write_str("newmm"),
        }
    }
}

/// Splits `text` into word strings.
///
/// The engine name is checked before anything else. `None` and `""` give an
/// empty result without loading any dictionary. `custom_dict` names a word
/// file; without it the embedded default dictionary is used. Dictionaries are
/// built once per path and shared through the global cache.
pub fn word_tokenize(
    text: Option<&str>,
    engine: &str,
    custom_dict: Option<&Path>,
    keep_whitespace: bool,
) -> Result<Vec<String>> {
    let options = SegmentOptions {
        keep_whitespace,
        ..SegmentOptions::default()
    };
    word_tokenize_with(text, engine, custom_dict, options)
}

/// [`word_tokenize`] with every [`SegmentOptions`] knob exposed.
pub fn word_tokenize_with(
    text: Option<&str>,
    engine: &str,
    custom_dict: Option<&Path>,
    options: SegmentOptions,
) -> Result<Vec<String>> {
    let engine: Engine = engine.parse()?;

    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(Vec::new()),
    };

    let tokenizer = Tokenizer::from_source(&DictionarySource::from_custom_path(custom_dict), options)?;
    log::trace!("{} segmenting {} bytes", engine, text.len());
    Ok(tokenizer.segment_words(text))
}

/// [`word_tokenize`] with the `newmm` engine.
pub fn segment(text: Option<&str>, custom_dict: Option<&Path>, keep_whitespace: bool) -> Result<Vec<String>> {
    word_tokenize(text, "newmm", custom_dict, keep_whitespace)
}
