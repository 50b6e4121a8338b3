//! Deterministic cleanup of raw extracted document text.
//!
//! PDF extraction tends to repeat header/footer lines on every page and
//! produce ragged whitespace; the generator gets one cleaned copy. The
//! function is total over any string and idempotent.

/// Normalizes raw document text.
///
/// Line endings are unified, horizontal whitespace runs collapse to a single
/// space, lines are stripped with adjacent duplicates dropped, blank-line
/// runs collapse to a single paragraph separator, and duplicate paragraphs
/// are removed keeping first occurrence.
pub fn normalize(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    let mut prev: Option<String> = None;
    for line in text.lines() {
        let line = collapse_spaces(line.trim());
        if line.is_empty() {
            // at most one blank separator, never a leading one
            if lines.last().is_some_and(|last| !last.is_empty()) {
                lines.push(String::new());
            }
            prev = None;
            continue;
        }
        if prev.as_deref() != Some(line.as_str()) {
            lines.push(line.clone());
        }
        prev = Some(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    // Paragraph-level dedup, first occurrence wins.
    let joined = lines.join("\n");
    let mut paragraphs: Vec<&str> = Vec::new();
    for part in joined.split("\n\n") {
        if !paragraphs.contains(&part) {
            paragraphs.push(part);
        }
    }
    paragraphs.join("\n\n").trim().to_string()
}

/// Collapses runs of two or more spaces/tabs to a single space; a lone
/// whitespace character is left as-is.
fn collapse_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut gap = String::new();
    for ch in line.chars() {
        if ch == ' ' || ch == '\t' {
            gap.push(ch);
        } else {
            flush_gap(&mut out, &mut gap);
            out.push(ch);
        }
    }
    flush_gap(&mut out, &mut gap);
    out
}

fn flush_gap(out: &mut String, gap: &mut String) {
    match gap.len() {
        0 => {}
        1 => out.push_str(gap),
        _ => out.push(' '),
    }
    gap.clear();
}
