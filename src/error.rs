use std::path::PathBuf;
use thiserror::Error;
/// Errors that abort a bundle run.
///
/// Only the bundle file itself (creating, writing, flushing) and resolving the
/// working directory can fail a run. Files that cannot be read are reported
/// inside the bundle as `FileOutcome::Failed` and never surface here.
#[derive(Debug, Error)]
pub enum BundleError {
    /// An I/O failure on `path`. Always fatal.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }
}
