// Display cleanup for raw multi-sense glosses.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DisplayLanguage, VocabEntry};

/// Marks lexical meta-notes in raw glosses ("one of the ~", "~ piece(s)").
pub const META_MARKER: char = '~';

static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// English synonym clusters. The first term of each cluster is the canonical
/// form; terms are interchangeable in every context or are regional variants.
const ENGLISH_CLUSTERS: &[&[&str]] = &[
    // British / American variants
    &["autumn", "fall"],
    &["university", "college"],
    // Conjunctions
    &["but", "however"],
    &["so", "thus"],
    // Degree adverbs
    &["very", "extremely"],
    &["almost", "nearly"],
    &["much", "far", "a lot"],
    // Verbs and nouns
    &["answer", "reply"],
    &["choose", "select"],
    &["gather", "get together"],
    &["return", "go back"],
    &["come back", "come home"],
    &["help", "assistance"],
    &["finish", "end"],
    &["meeting", "gathering"],
    &["usually", "normally"],
    &["simple", "easy"],
    &["alcohol", "liquor"],
    &["hiking", "mountain-climbing"],
    &["schedule", "timetable"],
    &["stop", "cease"],
    &["want", "wish", "desire"],
    &["disadvantage", "shortcoming", "drawback"],
    &["ruin", "spoil", "mess up"],
    &["significance", "meaning", "sense"],
    // 이상하다: "funny" as in odd
    &["strange", "weird", "funny"],
    &["for a bit", "for a while", "a little"],
    &["confusion", "mess", "disorder"],
    &["husband and wife", "married couple"],
    &["boast", "brag"],
    &["old story", "old tale"],
    &["of this kind", "of this sort"],
    &["right", "correct"],
    &["other", "another"],
    &["behind", "towards the rear"],
    // Adverbs
    &["in advance", "beforehand"],
    &["first", "first of all"],
    &["immediately", "soon", "just", "quickly"],
    &["washing dishes", "dish-washing"],
];

/// Lowercased term → canonical term of its cluster.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    canonical: HashMap<String, String>,
}

impl SynonymTable {
    /// Build from clusters; the first term of each cluster is canonical. A
    /// term listed in two clusters belongs to the first.
    pub fn new<C, T>(clusters: C) -> Self
    where
        C: IntoIterator<Item = T>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let mut canonical = HashMap::new();
        for cluster in clusters {
            let terms: Vec<String> = cluster
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
            let Some(head) = terms.first().cloned() else {
                continue;
            };
            for term in terms {
                canonical.entry(term).or_insert_with(|| head.clone());
            }
        }
        Self { canonical }
    }

    /// The built-in English clusters.
    pub fn english() -> Self {
        Self::new(ENGLISH_CLUSTERS.iter().map(|c| c.iter()))
    }

    /// Canonical key for a gloss part: its cluster head, or the lowercased
    /// part itself.
    pub fn canonical(&self, part: &str) -> String {
        let lower = part.to_lowercase();
        self.canonical.get(&lower).cloned().unwrap_or(lower)
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

/// Renders an entry's gloss for display.
#[derive(Debug, Clone)]
pub struct GlossFormatter {
    synonyms: SynonymTable,
}

impl Default for GlossFormatter {
    fn default() -> Self {
        Self::new(SynonymTable::english())
    }
}

impl GlossFormatter {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    /// Display gloss of `entry` in `language`, or `None` if the entry has no
    /// gloss in that language. Only the default language is cleaned up; other
    /// languages are returned verbatim.
    pub fn format(&self, entry: &VocabEntry, language: DisplayLanguage) -> Option<String> {
        let raw = entry.raw_gloss(language)?;
        if language != DisplayLanguage::default() {
            return Some(raw.to_string());
        }
        Some(self.clean(raw).unwrap_or_else(|| raw.to_string()))
    }

    /// Cleaned form of a raw gloss, or `None` if nothing survives.
    pub fn clean(&self, raw: &str) -> Option<String> {
        let parts: Vec<String> = raw
            .split(',')
            .map(clean_part)
            .filter(|p| !p.is_empty())
            .collect();
        let parts = strip_meta_parts(parts);
        if parts.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        let kept: Vec<String> = parts
            .into_iter()
            .filter(|p| seen.insert(self.synonyms.canonical(p)))
            .collect();
        Some(kept.join(", "))
    }
}

/// Drop parenthetical notes and collapse whitespace.
fn clean_part(raw: &str) -> String {
    let without_notes = PARENTHETICAL.replace_all(raw, " ");
    WHITESPACE.replace_all(&without_notes, " ").trim().to_string()
}

/// If some parts are meta-notes and some are not, drop the notes. If every
/// part is a note, keep them all with the marker removed.
fn strip_meta_parts(parts: Vec<String>) -> Vec<String> {
    if parts.iter().any(|p| !p.contains(META_MARKER)) {
        return parts
            .into_iter()
            .filter(|p| !p.contains(META_MARKER))
            .collect();
    }
    parts
        .iter()
        .map(|p| {
            let unmarked = p.replace(META_MARKER, "");
            WHITESPACE.replace_all(&unmarked, " ").trim().to_string()
        })
        .filter(|p| !p.is_empty())
        .collect()
}
