use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to read directory")
        || haystack.contains("no such file or directory")
    {
        push_hint(&mut out, "Verify the input directory exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("did not contain valid utf-8") {
        push_hint(
            &mut out,
            "mdcombine reads files as UTF-8 text; re-encode the file or rename it away from `.md`.",
        );
    }

    if haystack.contains("permission denied") {
        push_hint(
            &mut out,
            "Check file permissions on the input directory and the output path.",
        );
    }

    if haystack.contains("is a directory") {
        push_hint(
            &mut out,
            "A directory name ends in `.md`; rename it or point mdcombine elsewhere.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
