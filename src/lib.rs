//! # Codebundle
//!
//! `codebundle` walks a directory tree, picks out files that look like text or
//! source code, and concatenates them into one bundle file. Every file gets a
//! header with its absolute path; files that cannot be read leave an error line
//! in the bundle instead of aborting the run.
//!
//! Text detection is by name only: an extension allow-list, then a content type
//! guessed from the file name. Nothing is filtered out of the walk (hidden
//! files and VCS directories included) apart from the bundle file itself.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use codebundle::{BundleBuilder, bundle};
//!
//! let options = BundleBuilder::new("code_contents.txt")
//!     .root(".")
//!     .sort_by_name(true)
//!     .build();
//!
//! let report = bundle(&options).expect("Failed to write bundle");
//! println!("{} files, {} errors", report.files_written, report.errors);
//! ```

pub mod classify;
mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use classify::{ALLOWED_EXTENSIONS, Classification, classify, is_text_file};
pub use engine::{BundleStream, bundle};
pub use error::BundleError;
pub use options::{BundleBuilder, BundleOptions, DEFAULT_OUTPUT};
pub use types::{BundleReport, FileOutcome};
