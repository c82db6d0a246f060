use crate::classify::is_text_file;
use crate::error::BundleError;
use crate::options::BundleOptions;
use crate::output::write_outcome;
use crate::types::{BundleReport, FileOutcome};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &BundleOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        if options.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        Self {
            inner: builder.build(),
        }
    }
    /// Yields every non-directory entry under the root, dangling links
    /// included. Walk errors (unlistable directories) are dropped.
    fn files(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.file_type().is_some() && !entry.path().is_dir() => {
                Some(entry.into_path())
            }
            Ok(_) => None,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping unreadable entry: {}", _e);
                None
            }
        })
    }
}
/// Absolute form of `path` with `.` and `..` removed lexically. Symlinks are
/// not resolved.
fn absolute_path(path: &Path) -> Result<PathBuf, BundleError> {
    let absolute = std::path::absolute(path).map_err(|e| BundleError::io(path, e))?;
    Ok(normalize(&absolute))
}
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
fn read_file(path: PathBuf, absolute: PathBuf) -> FileOutcome {
    match fs::read_to_string(&path) {
        Ok(content) => FileOutcome::Content {
            path,
            absolute,
            content,
        },
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Failed to read {}: {}", path.display(), e);
            FileOutcome::Failed {
                path,
                message: e.to_string(),
            }
        }
    }
}
/// Streams the outcome of every text file under the root, in walk order.
///
/// The bundle file itself and files the classifier rejects are not yielded.
pub struct BundleStream {
    paths: Box<dyn Iterator<Item = PathBuf>>,
    output: PathBuf,
    skipped: usize,
}
impl BundleStream {
    pub fn new(options: &BundleOptions) -> Result<Self, BundleError> {
        let output = absolute_path(&options.output)?;
        Ok(Self {
            paths: Box::new(Walker::new(options).files()),
            output,
            skipped: 0,
        })
    }
    /// Number of files the classifier has rejected so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
impl Iterator for BundleStream {
    type Item = Result<FileOutcome, BundleError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = self.paths.next()?;
            let absolute = match absolute_path(&path) {
                Ok(p) => p,
                Err(e) => return Some(Err(e)),
            };
            if absolute == self.output {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping bundle file {}", absolute.display());
                continue;
            }
            if !is_text_file(&path) {
                #[cfg(feature = "logging")]
                tracing::debug!("Not a text file: {}", path.display());
                self.skipped += 1;
                continue;
            }
            return Some(Ok(read_file(path, absolute)));
        }
    }
}
/// Writes every text file under `options.root` into `options.output`.
///
/// The bundle file is truncated first. Files that fail to read are recorded as
/// an error line inside the bundle; only failures on the bundle file itself
/// are returned as errors.
pub fn bundle(options: &BundleOptions) -> Result<BundleReport, BundleError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Bundling {} into {}",
        options.root.display(),
        options.output.display()
    );
    let output = absolute_path(&options.output)?;
    let file = File::create(&output).map_err(|e| BundleError::io(&output, e))?;
    let mut writer = BufWriter::new(file);
    let mut stream = BundleStream::new(options)?;
    let mut report = BundleReport {
        output: output.clone(),
        ..Default::default()
    };
    for outcome in stream.by_ref() {
        let outcome = outcome?;
        if outcome.is_failed() {
            report.errors += 1;
        } else {
            report.files_written += 1;
        }
        write_outcome(&mut writer, &outcome).map_err(|e| BundleError::io(&output, e))?;
    }
    report.skipped = stream.skipped();
    writer.flush().map_err(|e| BundleError::io(&output, e))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dot_components() {
        assert_eq!(normalize(Path::new("/a/./b/../c.txt")), PathBuf::from("/a/c.txt"));
        assert_eq!(normalize(Path::new("/a/b/c/../../d")), PathBuf::from("/a/d"));
    }

    #[test]
    fn normalize_stops_at_root() {
        assert_eq!(normalize(Path::new("/../../x")), PathBuf::from("/x"));
    }

    #[test]
    fn absolute_path_matches_walked_form() {
        let via_parent = absolute_path(Path::new("sub/../out.txt")).unwrap();
        let walked = absolute_path(Path::new("./out.txt")).unwrap();
        assert_eq!(via_parent, walked);
    }
}
