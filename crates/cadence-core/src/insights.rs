//! Extraction of short textual insights from a narrative block.

/// Maximum number of insights returned by any extraction rule.
const MAX_BULLETS: usize = 5;
const MAX_HEADINGS: usize = 3;
const MAX_SENTENCES: usize = 3;

/// Minimum length for a sentence to qualify under the fallback rule.
const MIN_SENTENCE_LEN: usize = 20;

/// Pulls a small set of short insights out of a narrative block.
///
/// Rules are tried in order and the first that yields at least one result
/// wins:
///
/// 1. bullet lines (`-`, `•`, or `*`), up to 5, markers stripped;
/// 2. markdown headings (1-3 leading `#`), up to 3;
/// 3. sentences longer than 20 characters, up to 3.
///
/// Empty input, or text that matches none of the rules, yields an empty
/// vector; callers must handle that (the expansion treats an all-empty
/// result set as "nothing to expand" rather than dividing by zero).
pub fn extract_insights(text: &str) -> Vec<String> {
    let bullets: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter_map(strip_bullet_marker)
        .take(MAX_BULLETS)
        .collect();
    if !bullets.is_empty() {
        return bullets;
    }

    let headings: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter_map(strip_heading_marker)
        .take(MAX_HEADINGS)
        .collect();
    if !headings.is_empty() {
        return headings;
    }

    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_LEN)
        .take(MAX_SENTENCES)
        .map(String::from)
        .collect()
}

/// Strips a leading bullet marker; returns None for non-bullet lines and
/// for bullets whose content is empty.
fn strip_bullet_marker(line: &str) -> Option<String> {
    let rest = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .or_else(|| line.strip_prefix('*'))?;
    let content = rest.trim();
    (!content.is_empty()).then(|| content.to_string())
}

/// Strips 1-3 leading `#` characters; four or more is not a heading.
fn strip_heading_marker(line: &str) -> Option<String> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let content = line[hashes..].trim();
    (!content.is_empty()).then(|| content.to_string())
}
