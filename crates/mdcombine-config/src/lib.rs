//! # mdcombine-config
//!
//! CLI argument structures and defaults.
//!
//! ## What belongs here
//! * Clap `Parser` structs
//! * Default values
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations

use std::path::PathBuf;

use clap::Parser;

/// Default output file name, relative to the working directory.
///
/// Supplied to the parser as an explicit default value; there is no
/// module-level mutable state and no environment-variable override.
pub const DEFAULT_OUTPUT_NAME: &str = "combined_md_files.txt";

/// `mdcombine` — concatenate every `.md` file in a directory into one
/// tagged text file.
///
/// Default mode (no arguments) combines the current working directory into
/// `combined_md_files.txt`.
#[derive(Parser, Debug)]
#[command(name = "mdcombine", version, about, long_about = None)]
pub struct Cli {
    /// Directory to combine (defaults to the current working directory).
    pub dir: Option<PathBuf>,

    /// Output file path (created or truncated).
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT_NAME)]
    pub out: PathBuf,

    /// Sort file names before combining.
    ///
    /// Without this flag, output order is the directory-listing order,
    /// which is platform-defined and not guaranteed stable.
    #[arg(long)]
    pub sort: bool,
}
