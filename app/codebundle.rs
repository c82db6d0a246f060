//! Command-line interface for codebundle.
//!
//! With no arguments, scans the current directory and writes every text file
//! into `code_contents.txt` next to it.

use clap::Parser;
use codebundle::{BundleBuilder, BundleOptions, BundleReport, DEFAULT_OUTPUT, bundle};
use std::path::PathBuf;
use std::process::exit;

/// codebundle: concatenate a source tree into one file
#[derive(Parser)]
#[command(name = "codebundle", version, about, long_about = None)]
struct Cli {
    /// Bundle file to write (relative to the current dir)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory to scan
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Visit entries in file-name order for reproducible output
    #[arg(long)]
    sort: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Print a JSON summary after the scan
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_options(self) -> (BundleOptions, bool) {
        let options = BundleBuilder::new(self.output)
            .root(self.root)
            .sort_by_name(self.sort)
            .follow_links(self.follow_links)
            .build();
        (options, self.json)
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (options, json) = cli.into_options();

    println!(
        "Scanning directory and writing contents to {}...",
        options.output.display()
    );
    match bundle(&options) {
        Ok(report) => {
            println!("Scan complete!");
            if json {
                print_report(&report);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_report(report: &BundleReport) {
    let json = serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    println!("{}", json);
}
