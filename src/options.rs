use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name the bundle is written to when none is given.
pub const DEFAULT_OUTPUT: &str = "code_contents.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleOptions {
    /// Directory to scan.
    pub root: PathBuf,
    /// Bundle file. Relative paths resolve against the working directory, not `root`.
    pub output: PathBuf,
    /// Visit directory entries in file-name order instead of listing order.
    pub sort_by_name: bool,
    pub follow_links: bool,
}
impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sort_by_name: false,
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct BundleBuilder {
    options: BundleOptions,
}
impl BundleBuilder {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            options: BundleOptions {
                output: output.into(),
                ..Default::default()
            },
        }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn sort_by_name(mut self, yes: bool) -> Self {
        self.options.sort_by_name = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
