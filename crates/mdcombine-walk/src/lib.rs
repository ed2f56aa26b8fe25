//! # mdcombine-walk
//!
//! Directory listing and candidate filtering. Lists the entries of a single
//! directory and keeps the Markdown candidates, in listing order.
//!
//! ## What belongs here
//! * Non-recursive directory enumeration
//! * Candidate filtering by file name suffix
//!
//! ## What does NOT belong here
//! * Reading file contents (use mdcombine-core)
//! * Output formatting

use std::path::Path;

use anyhow::{Context, Result};

/// File name suffix that marks a directory entry as a candidate.
/// Matched case-sensitively, as a plain suffix (not a glob).
pub const MARKDOWN_SUFFIX: &str = ".md";

/// List the candidate file names in `dir`, in the order the directory
/// listing yields them.
///
/// The listing is non-recursive: subdirectories are neither descended into
/// nor reported as errors. The filter is a pure name test, so a directory
/// whose name ends in `.md` is still returned; callers that try to read it
/// get the I/O error at that point.
///
/// Listing order is platform/filesystem-defined and is propagated untouched.
/// Sort the result if deterministic output is required.
///
/// Entries whose names are not valid UTF-8 cannot carry the literal `.md`
/// suffix and are skipped.
pub fn list_candidates(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if let Some(name) = entry.file_name().to_str()
            && name.ends_with(MARKDOWN_SUFFIX)
        {
            names.push(name.to_string());
        }
    }

    Ok(names)
}
