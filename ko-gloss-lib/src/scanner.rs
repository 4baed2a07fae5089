// Text-level scanning: split into Hangul runs, resolve each, emit spans.

use crate::gloss::GlossFormatter;
use crate::hangul;
use crate::resolver::Resolver;
use crate::types::{AnnotationSpan, DisplayLanguage};
use crate::vocabulary::VocabularyIndex;

/// Annotate `text` with the default resolver and formatter.
///
/// Spans are ordered by `start`, never overlap, and always cover a whole
/// maximal run of Hangul syllables. Offsets are byte offsets into `text`.
pub fn scan(text: &str, index: &VocabularyIndex, language: DisplayLanguage) -> Vec<AnnotationSpan> {
    scan_with(
        text,
        index,
        &Resolver::default(),
        &GlossFormatter::default(),
        language,
    )
}

/// Annotate `text` with an explicit resolution policy and formatter.
pub fn scan_with(
    text: &str,
    index: &VocabularyIndex,
    resolver: &Resolver,
    formatter: &GlossFormatter,
    language: DisplayLanguage,
) -> Vec<AnnotationSpan> {
    let mut spans = Vec::new();
    if !hangul::has_syllable(text) {
        return spans;
    }

    let mut claimed = Claimed::new(text.len());

    for (start, end) in hangul::syllable_runs(text) {
        if claimed.overlaps(start, end) {
            continue;
        }

        let surface = &text[start..end];
        let Some(entry) = resolver.resolve(surface, index) else {
            continue;
        };
        // An entry without a gloss in this language is left unannotated.
        let Some(gloss) = formatter.format(entry, language) else {
            tracing::debug!(word = %entry.word, %language, "no gloss for display language");
            continue;
        };

        claimed.claim(start, end);
        spans.push(AnnotationSpan {
            start,
            end,
            surface: surface.to_string(),
            dictionary_form: entry.word.clone(),
            gloss,
        });
    }

    spans.sort_by_key(|s| s.start);
    spans
}

/// Byte positions already covered by an accepted span.
struct Claimed(Vec<bool>);

impl Claimed {
    fn new(len: usize) -> Self {
        Self(vec![false; len])
    }

    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.0[start..end].iter().any(|&c| c)
    }

    fn claim(&mut self, start: usize, end: usize) {
        self.0[start..end].fill(true);
    }
}
