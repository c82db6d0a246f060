use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The result of reading one accepted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileOutcome {
    /// The file was read in full as UTF-8.
    Content {
        /// The path as produced by the walk (e.g. `./src/main.rs`).
        path: PathBuf,
        /// The absolute path used in the block header.
        absolute: PathBuf,
        content: String,
    },
    /// The file could not be opened or decoded.
    Failed {
        /// The path as produced by the walk.
        path: PathBuf,
        message: String,
    },
}

impl FileOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Content { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

/// Summary of a completed bundle run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleReport {
    /// Absolute path of the bundle file.
    pub output: PathBuf,
    /// Number of file blocks written.
    pub files_written: usize,
    /// Number of `Error reading file` lines written.
    pub errors: usize,
    /// Files the classifier rejected.
    pub skipped: usize,
}
