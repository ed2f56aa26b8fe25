//! # mdcombine-core
//!
//! The combine operation: read every Markdown candidate in a directory and
//! append it to a single output file as a tagged block.
//!
//! ## What belongs here
//! * The block wire format (`<name>`, blank line, content, blank line)
//! * The sequential read-and-append loop
//!
//! ## What does NOT belong here
//! * Directory enumeration (use mdcombine-walk)
//! * CLI parsing (use mdcombine-config)

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use mdcombine_walk::list_candidates;

/// Options for a single combine run.
#[derive(Debug, Clone, Default)]
pub struct CombineOptions {
    /// Sort candidate names before combining.
    ///
    /// Off by default: the output order is the directory-listing order,
    /// which is platform-defined. Sorting is the explicit opt-in for
    /// deterministic output and is never imposed silently.
    pub sort: bool,
}

/// What a combine run produced, for the caller's confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineSummary {
    /// Number of blocks written.
    pub files: usize,
}

/// Write one block: `<name>`, a blank line, the verbatim content, and two
/// trailing newlines.
///
/// The format is a byte-exact contract. Stripping the `<name>\n\n` prefix
/// and the `\n\n` suffix from a block recovers the file content exactly.
pub fn write_block<W: Write>(w: &mut W, name: &str, content: &str) -> Result<()> {
    write!(w, "<{name}>\n\n")?;
    w.write_all(content.as_bytes())?;
    write!(w, "\n\n")?;
    Ok(())
}

/// Combine every Markdown candidate in `dir` into `output`.
///
/// The output file is created (or truncated) before the directory is listed,
/// so a missing input directory still leaves an empty output file behind.
/// The run fails fast: any unreadable or non-UTF-8 candidate aborts with the
/// underlying I/O error, and whatever has already been flushed to the output
/// stays there. No retries, no cleanup.
pub fn combine(dir: &Path, output: &Path, options: &CombineOptions) -> Result<CombineSummary> {
    let out = std::fs::File::create(output)
        .with_context(|| format!("Failed to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(out);

    let mut names = list_candidates(dir)?;
    if options.sort {
        names.sort();
    }

    for name in &names {
        let path = dir.join(name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        write_block(&mut writer, name, &content)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write output file {}", output.display()))?;

    Ok(CombineSummary { files: names.len() })
}
