//! # mdcombine
//!
//! **CLI Binary**
//!
//! Entry point for the `mdcombine` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Resolve the default input directory
//! * Run the combine operation and print the confirmation line
//! * Render errors for the terminal
//!
//! This crate should contain minimal business logic.

mod error_hints;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mdcombine_config::Cli;
use mdcombine_core::{CombineOptions, combine};

/// Render an error (and any hints) for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

/// Entry point used by the `mdcombine` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let dir: PathBuf = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let options = CombineOptions { sort: cli.sort };
    let summary = combine(&dir, &cli.out, &options)?;

    println!(
        "Combined {} Markdown file(s) into {}",
        summary.files,
        cli.out.display()
    );

    Ok(())
}
