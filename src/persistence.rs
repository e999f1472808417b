// File: src/persistence.rs
use crate::core::trie::DictionaryIndex;
use crate::error::{Result, SegmentError};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Bumped whenever the serialized index layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    index: DictionaryIndex,
}

/// Writes `index` to `path` atomically: the snapshot goes to a temporary
/// file in the same directory, which is then renamed over `path`.
pub fn save_snapshot(index: &DictionaryIndex, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        index: index.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| SegmentError::Io(e.error))?;
    log::debug!("saved snapshot of {} words to {}", index.len(), path.display());
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<DictionaryIndex> {
    let file = File::open(path).map_err(|e| SegmentError::from_io(e, path))?;
    let reader = BufReader::new(file);
    let snapshot: Snapshot = bincode::deserialize_from(reader).map_err(|e| {
        SegmentError::InvalidDictionary {
            reason: format!("corrupt snapshot {}: {}", path.display(), e),
        }
    })?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SegmentError::InvalidDictionary {
            reason: format!(
                "snapshot version {} is not supported (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            ),
        });
    }
    if snapshot.index.is_empty() {
        return Err(SegmentError::InvalidDictionary {
            reason: format!("snapshot {} holds no words", path.display()),
        });
    }
    log::debug!("loaded snapshot of {} words from {}", snapshot.index.len(), path.display());
    Ok(snapshot.index)
}
