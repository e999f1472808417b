// File: src/dictionary.rs
//! Word-list loading, the embedded default dictionary, and the per-source
//! cache of built indexes.
use crate::core::trie::DictionaryIndex;
use crate::error::{Result, SegmentError};
use crate::persistence;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

/// The built-in Thai word list, one word per line.
pub const DEFAULT_WORDS: &str = include_str!("../data/words_th.txt");

/// Reads a newline-separated UTF-8 word file.
///
/// A missing file is `NotFound`; undecodable content is `InvalidDictionary`.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| SegmentError::from_io(e, path))?;
    Ok(content.lines().map(str::to_string).collect())
}

impl DictionaryIndex {
    /// Builds an index from a newline-separated word file.
    pub fn from_word_file(path: &Path) -> Result<Self> {
        let words = load_word_list(path)?;
        log::debug!("read {} lines from {}", words.len(), path.display());
        Self::from_words(words)
    }

    /// Builds an index from the embedded default word list.
    pub fn default_thai() -> Result<Self> {
        Self::from_words(DEFAULT_WORDS.lines())
    }
}

/// Where a dictionary comes from; also the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictionarySource {
    /// The embedded default word list.
    Default,
    /// A newline-separated word file.
    WordList(PathBuf),
    /// A binary snapshot written by [`persistence::save_snapshot`].
    Snapshot(PathBuf),
}

impl DictionarySource {
    /// `Default` when no custom path is given, otherwise a word list.
    pub fn from_custom_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => DictionarySource::WordList(path.to_path_buf()),
            None => DictionarySource::Default,
        }
    }

    /// Builds the index. Not cached; see [`DictionaryCache`].
    pub fn load(&self) -> Result<DictionaryIndex> {
        match self {
            DictionarySource::Default => DictionaryIndex::default_thai(),
            DictionarySource::WordList(path) => DictionaryIndex::from_word_file(path),
            DictionarySource::Snapshot(path) => persistence::load_snapshot(path),
        }
    }
}

#[derive(Default)]
struct Slot {
    index: OnceLock<Arc<DictionaryIndex>>,
    init: Mutex<()>,
}

/// Built indexes keyed by source, each constructed at most once.
///
/// The default dictionary lives in its own slot, so hits on it never touch a
/// lock. Path-keyed hits take the map's read lock only to find their slot.
/// A failed load leaves the slot empty, so a later call retries it.
#[derive(Default)]
pub struct DictionaryCache {
    default: Slot,
    slots: RwLock<HashMap<DictionarySource, Arc<Slot>>>,
}

impl DictionaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache.
    pub fn global() -> &'static DictionaryCache {
        static GLOBAL: OnceLock<DictionaryCache> = OnceLock::new();
        GLOBAL.get_or_init(DictionaryCache::new)
    }

    /// Returns the index for `source`, building it on first use.
    pub fn get_or_load(&self, source: &DictionarySource) -> Result<Arc<DictionaryIndex>> {
        match source {
            DictionarySource::Default => Self::load_into(&self.default, source),
            _ => Self::load_into(&self.slot(source), source),
        }
    }

    /// Number of sources with a built index.
    pub fn len(&self) -> usize {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        let built = slots.values().filter(|slot| slot.index.get().is_some()).count();
        built + usize::from(self.default.index.get().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_into(slot: &Slot, source: &DictionarySource) -> Result<Arc<DictionaryIndex>> {
        if let Some(index) = slot.index.get() {
            return Ok(Arc::clone(index));
        }

        let _guard = slot.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(index) = slot.index.get() {
            return Ok(Arc::clone(index));
        }
        let index = Arc::new(source.load()?);
        log::debug!("cached dictionary {:?} ({} words)", source, index.len());
        let _ = slot.index.set(Arc::clone(&index));
        Ok(index)
    }

    fn slot(&self, source: &DictionarySource) -> Arc<Slot> {
        {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = slots.get(source) {
                return Arc::clone(slot);
            }
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(source.clone()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::thread;
    use tempfile::NamedTempFile;

    fn word_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_dictionary_builds() {
        let index = DictionaryIndex::default_thai().unwrap();
        assert!(index.len() > 100);
        assert!(index.contains("ภาษาไทย"));
        assert!(index.contains("โรงเรียน"));
    }

    #[test]
    fn word_file_handles_crlf_and_blank_lines() {
        let file = word_file("ไป\r\nมา\r\n\r\n# comment\nกับ\n");
        let index = DictionaryIndex::from_word_file(file.path()).unwrap();
        assert_eq!(index.len(), 3);
        assert!(index.contains("มา"));
    }

    #[test]
    fn missing_word_file_is_not_found() {
        let err = DictionaryIndex::from_word_file(Path::new("/nonexistent/path/dict.txt")).unwrap_err();
        assert!(matches!(err, SegmentError::NotFound { .. }));
    }

    #[test]
    fn empty_word_file_is_invalid() {
        let file = word_file("\n\n");
        let err = DictionaryIndex::from_word_file(file.path()).unwrap_err();
        assert!(matches!(err, SegmentError::InvalidDictionary { .. }));
    }

    #[test]
    fn non_utf8_word_file_is_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        let err = DictionaryIndex::from_word_file(file.path()).unwrap_err();
        assert!(matches!(err, SegmentError::InvalidDictionary { .. }));
    }

    #[test]
    fn cache_builds_each_source_once() {
        let file = word_file("ไป\nมา\n");
        let source = DictionarySource::WordList(file.path().to_path_buf());
        let cache = DictionaryCache::new();

        let first = cache.get_or_load(&source).unwrap();
        let second = cache.get_or_load(&source).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.get_or_load(&DictionarySource::Default).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cache_is_shared_across_threads() {
        let file = word_file("ไป\nมา\n");
        let source = DictionarySource::WordList(file.path().to_path_buf());
        let cache = Arc::new(DictionaryCache::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let source = source.clone();
                thread::spawn(move || cache.get_or_load(&source).unwrap())
            })
            .collect();
        let indexes: Vec<Arc<DictionaryIndex>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        for index in &indexes[1..] {
            assert!(Arc::ptr_eq(&indexes[0], index));
        }
    }

    #[test]
    fn default_dictionary_skips_the_slot_map() {
        let cache = DictionaryCache::new();
        let first = cache.get_or_load(&DictionarySource::Default).unwrap();
        let second = cache.get_or_load(&DictionarySource::Default).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.slots.read().unwrap().is_empty());
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cache = DictionaryCache::new();
        let source = DictionarySource::WordList(PathBuf::from("/nonexistent/dict.txt"));
        assert!(cache.get_or_load(&source).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn custom_path_selects_word_list() {
        assert_eq!(DictionarySource::from_custom_path(None), DictionarySource::Default);
        assert_eq!(
            DictionarySource::from_custom_path(Some(Path::new("d.txt"))),
            DictionarySource::WordList(PathBuf::from("d.txt"))
        );
    }
}
