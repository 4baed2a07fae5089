// Korean stem extraction.
//
// A surface form is matched against a catalogue of conjugation endings and
// particles. Every ending that is a strict suffix of the word yields a stem
// (and the same stem with the `다` dictionary marker appended). Candidates are
// tagged `verb_only` when the stripped ending can only follow a verb or
// adjective stem, which the resolver uses to keep verb readings from landing
// on homographic nouns.

use crate::hangul;
use crate::types::StemCandidate;

/// Dictionary-form marker carried by every verb and adjective entry.
pub const DICTIONARY_MARKER: char = '다';

// ---------------------------------------------------------------------------
// Ending catalogue
// ---------------------------------------------------------------------------

/// What stripping an ending says about the remaining stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndingKind {
    /// Tense, politeness or connective ending: follows verb/adjective stems
    /// only.
    Verbal,
    /// Object or subject particle (or the copula): attaches to nouns.
    Particle,
    /// 은/는: topic particle after nouns, modifier ending after verbs.
    Topic,
    /// Contracted 하다 form; the remainder plus `하다` is the base.
    HadaContraction,
}

struct Ending {
    text: &'static str,
    kind: EndingKind,
}

const fn verbal(text: &'static str) -> Ending {
    Ending { text, kind: EndingKind::Verbal }
}

const fn particle(text: &'static str) -> Ending {
    Ending { text, kind: EndingKind::Particle }
}

const fn topic(text: &'static str) -> Ending {
    Ending { text, kind: EndingKind::Topic }
}

const fn hada(text: &'static str) -> Ending {
    Ending { text, kind: EndingKind::HadaContraction }
}

/// All endings, longest first (by syllable count). Within one length the
/// declaration order decides, so keep this list sorted when editing.
const ENDINGS: &[Ending] = &[
    // 4 syllables: formal past / future.
    verbal("었습니다"),
    verbal("았습니다"),
    verbal("였습니다"),
    verbal("겠습니다"),
    hada("했습니다"),
    // 3 syllables.
    verbal("습니다"),
    particle("입니다"),
    verbal("ㅂ니다"),
    verbal("었어요"),
    verbal("았어요"),
    verbal("였어요"),
    verbal("겠어요"),
    verbal("으니까"),
    hada("했어요"),
    hada("했지만"),
    hada("합니다"),
    // 2 syllables.
    verbal("어요"),
    verbal("아요"),
    verbal("여요"),
    verbal("었어"),
    verbal("았어"),
    verbal("였어"),
    verbal("었다"),
    verbal("았다"),
    verbal("였다"),
    verbal("겠어"),
    verbal("지만"),
    verbal("거나"),
    verbal("면서"),
    verbal("어서"),
    verbal("아서"),
    verbal("여서"),
    verbal("니까"),
    verbal("도록"),
    hada("해요"),
    hada("해서"),
    hada("했어"),
    hada("했다"),
    hada("했고"),
    // 1 syllable.
    verbal("어"),
    verbal("아"),
    verbal("여"),
    topic("은"),
    topic("는"),
    particle("을"),
    particle("를"),
    particle("이"),
    particle("가"),
    verbal("고"),
    verbal("지"),
    verbal("게"),
    hada("해"),
];

const HADA: &str = "하다";

// ---------------------------------------------------------------------------
// Stem extraction
// ---------------------------------------------------------------------------

/// Every plausible dictionary-form candidate for `word`, the word itself
/// first. Order follows [`extract_stems_for_lookup`]; no duplicates.
pub fn extract_stems(word: &str) -> Vec<String> {
    extract_stems_for_lookup(word)
        .into_iter()
        .map(|c| c.stem)
        .collect()
}

/// Stem candidates tagged with whether they may only match verb/adjective
/// entries.
///
/// Generation order: the word itself, the word without a trailing `다`, then
/// one pair (bare stem, stem + `다`) per matching ending, longest ending
/// first. A stem produced twice keeps its first position and tag.
pub fn extract_stems_for_lookup(word: &str) -> Vec<StemCandidate> {
    let mut out = Candidates::default();
    out.push(word.to_string(), false);

    if !hangul::has_syllable(word) {
        return out.0;
    }

    if let Some(bare) = word.strip_suffix(DICTIONARY_MARKER) {
        if !bare.is_empty() {
            out.push(bare.to_string(), true);
        }
    }

    for ending in ENDINGS {
        let Some(remainder) = word.strip_suffix(ending.text) else {
            continue;
        };

        let verb_only = match ending.kind {
            EndingKind::HadaContraction => {
                // 해요 on its own is 하다.
                out.push(format!("{remainder}{HADA}"), true);
                continue;
            }
            _ if remainder.is_empty() => continue,
            EndingKind::Verbal => true,
            EndingKind::Particle => false,
            // A one-syllable stem before 은/는 is far more often a verb
            // modifier (서는, 가는) than a noun with a topic marker.
            EndingKind::Topic => remainder.chars().count() == 1,
        };

        out.push(remainder.to_string(), verb_only);
        if !remainder.ends_with(DICTIONARY_MARKER) {
            out.push(format!("{remainder}{DICTIONARY_MARKER}"), verb_only);
        }
    }

    out.0
}

/// Ordered candidate list that ignores repeated stems.
#[derive(Default)]
struct Candidates(Vec<StemCandidate>);

impl Candidates {
    fn push(&mut self, stem: String, verb_only: bool) {
        if !self.0.iter().any(|c| c.stem == stem) {
            self.0.push(StemCandidate { stem, verb_only });
        }
    }
}

// ---------------------------------------------------------------------------
// Conjugation checks
// ---------------------------------------------------------------------------

fn strip_marker(s: &str) -> &str {
    s.strip_suffix(DICTIONARY_MARKER).unwrap_or(s)
}

/// Whether `surface` could be an inflected form of `base_form`.
pub fn could_be_conjugation_of(surface: &str, base_form: &str) -> bool {
    if surface == base_form {
        return true;
    }
    let base_stem = strip_marker(base_form);
    extract_stems(surface)
        .iter()
        .any(|stem| strip_marker(stem) == base_stem || stem == base_form)
}

/// Common inflected forms of a dictionary form, the form itself first.
///
/// Only forms the stem extractor can map back are produced: vowel-final stems
/// other than 하다 verbs contract with 아/어 (가 + 아요 → 가요) and are left out.
/// Non-verbal words (no trailing `다`) are returned unchanged.
pub fn generate_conjugations(dictionary_form: &str) -> Vec<String> {
    let mut forms = vec![dictionary_form.to_string()];
    let Some(stem) = dictionary_form.strip_suffix(DICTIONARY_MARKER) else {
        return forms;
    };
    let Some(last) = stem.chars().last() else {
        return forms;
    };
    let Some(vowel_final) = hangul::ends_in_vowel(last) else {
        return forms;
    };

    if let Some(head) = stem.strip_suffix('하') {
        for suffix in ["해요", "했어요", "했습니다", "합니다", "해서"] {
            push_unique(&mut forms, format!("{head}{suffix}"));
        }
    }

    if vowel_final {
        for suffix in ["고", "지만", "니까", "는", "면서", "도록", "게", "지"] {
            push_unique(&mut forms, format!("{stem}{suffix}"));
        }
    } else {
        let bright = hangul::medial_vowel(last).is_some_and(hangul::is_bright_vowel);
        let (a, past) = if bright { ("아", "았") } else { ("어", "었") };
        for suffix in [
            format!("{a}요"),
            format!("{past}어요"),
            format!("{past}습니다"),
            format!("{a}서"),
        ] {
            push_unique(&mut forms, format!("{stem}{suffix}"));
        }
        for suffix in ["습니다", "고", "지만", "으니까", "는", "은"] {
            push_unique(&mut forms, format!("{stem}{suffix}"));
        }
    }

    forms
}

fn push_unique(forms: &mut Vec<String>, form: String) {
    if !forms.contains(&form) {
        forms.push(form);
    }
}
