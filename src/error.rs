// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by dictionary loading, engine selection and the binding
/// layer. Segmenting valid text never fails.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// Text handed over a binding boundary is not valid UTF-8.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The word list is empty, has malformed entries, or a snapshot is corrupt.
    #[error("invalid dictionary: {reason}")]
    InvalidDictionary { reason: String },

    #[error("unsupported engine '{name}', only 'newmm' is supported")]
    UnsupportedEngine { name: String },

    #[error("dictionary file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl SegmentError {
    /// Maps an I/O error on `path`, turning a missing file into `NotFound`.
    pub(crate) fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => SegmentError::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::InvalidData => SegmentError::InvalidDictionary {
                reason: format!("{} is not valid UTF-8: {}", path.display(), err),
            },
            _ => SegmentError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SegmentError>;
