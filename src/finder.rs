use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::cursor::Span;

/// How the pattern string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Exact substring match.
    #[default]
    Literal,
    /// Pattern compiled as a regular expression.
    Regex,
}

/// Pattern rejected by the regex compiler (regex mode only).
///
/// Reported to the user as a non-fatal message; previously stored matches
/// stay valid until a corrected pattern is searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid search pattern `{pattern}`: {message}")]
pub struct PatternError {
    /// The pattern as the user typed it.
    pub pattern: String,
    /// The compiler's diagnostic.
    pub message: String,
}

/// Finds every non-overlapping match of `pattern` in `text`, left to right.
///
/// Matching is case-insensitive in both modes. Spans are byte offsets into
/// `text`, ascending and non-overlapping; the scan resumes at each match's
/// end, so adjacent literal occurrences collapse into the left-most
/// non-overlapping run. An empty pattern matches nothing.
///
/// Pure and deterministic; safe to call from any thread.
pub fn find(text: &str, pattern: &str, mode: SearchMode) -> Result<Vec<Span>, PatternError> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }

    let regex = compile(pattern, mode)?;
    let mut spans: Vec<Span> = Vec::new();
    for m in regex.find_iter(text) {
        // A zero-width match flush against the previous match's end selects
        // nothing that match didn't already cover; skip it so a greedy run
        // like `a*` over "aaa" is reported once, not with a trailing empty.
        if m.start() == m.end()
            && spans.last().is_some_and(|prev| prev.end == m.start())
        {
            continue;
        }
        spans.push(Span::new(m.start(), m.end()));
    }
    Ok(spans)
}

fn compile(pattern: &str, mode: SearchMode) -> Result<Regex, PatternError> {
    let source = match mode {
        SearchMode::Literal => regex::escape(pattern),
        SearchMode::Regex => pattern.to_string(),
    };

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|e| PatternError {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}
