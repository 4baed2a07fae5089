// Plain-text rendering of scan results.

use crate::types::{AnnotationSpan, StemCandidate};

/// Rewrite `text` with each span replaced by `{surface:gloss}`.
///
/// Format:
///   `학교에 {가고:go}` (unannotated text is copied verbatim)
///
/// `spans` must come from scanning `text`.
pub fn to_bracketed(text: &str, spans: &[AnnotationSpan]) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 16);
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        out.push_str(&format!("{{{}:{}}}", span.surface, span.gloss));
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Stem candidates as `stem` or `stem*` (verb-only), comma separated.
pub fn candidates_to_string(candidates: &[StemCandidate]) -> String {
    candidates
        .iter()
        .map(|c| {
            if c.verb_only {
                format!("{}*", c.stem)
            } else {
                c.stem.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
