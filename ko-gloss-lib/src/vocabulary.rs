use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{Level, LevelFilter, PartOfSpeech, VocabEntry};

/// Grammatical particles and bound nouns that are never annotated on their
/// own: they are function words, not vocabulary to learn.
pub const DEFAULT_EXCLUDED_WORDS: &[&str] = &[
    // Topic / subject
    "은", "는", "이", "가",
    // Object
    "을", "를",
    // Possessive
    "의",
    // Location / time
    "에", "에서", "에게", "한테",
    // Also
    "도",
    // And / with
    "와", "과", "하고", "랑", "이랑",
    // Direction / means
    "로", "으로",
    // From / until
    "부터", "까지",
    // Only / than
    "만", "보다",
    // Bound noun of 할 수 있다
    "수",
];

// ---------------------------------------------------------------------------
// Raw table
// ---------------------------------------------------------------------------

/// A table record as it appears in JSON, before validation. Fields stay
/// untyped so a bad value skips one record instead of failing the load.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    word: Value,
    #[serde(default)]
    level: Value,
    #[serde(default)]
    pos: Value,
    #[serde(default, alias = "translations")]
    glosses: Value,
}

/// Why a record was left out of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a JSON object, or an object with conflicting keys.
    NotARecord(String),
    /// `word` is absent, null or blank.
    MissingWord,
    /// `word` is present but not a string.
    WordNotString,
    MissingLevel,
    /// `level` is not an integer; holds the raw JSON.
    LevelNotInteger(String),
    LevelOutOfRange(i64),
    /// No language has a non-empty string gloss.
    NoGloss,
}

/// A record dropped at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the source array.
    pub position: usize,
    pub word: Option<String>,
    pub reason: SkipReason,
}

/// The validated vocabulary table in document order. Duplicate words are kept
/// here; the index decides which one wins.
#[derive(Debug, Clone, Default)]
pub struct VocabTable {
    entries: Vec<VocabEntry>,
    skipped: Vec<SkippedRecord>,
}

impl VocabTable {
    /// Parse a JSON array of vocabulary records. Malformed records are skipped
    /// and reported through [`VocabTable::skipped`]; only JSON syntax errors
    /// fail the load.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<Value> = serde_json::from_str(json)?;
        let mut table = VocabTable::default();

        for (position, value) in raw.into_iter().enumerate() {
            let checked = serde_json::from_value::<RawRecord>(value)
                .map_err(|e| (None, SkipReason::NotARecord(e.to_string())))
                .and_then(validate);
            match checked {
                Ok(entry) => table.entries.push(entry),
                Err((word, reason)) => {
                    tracing::warn!(position, ?word, ?reason, "skipping vocabulary record");
                    table.skipped.push(SkippedRecord {
                        position,
                        word,
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            entries = table.entries.len(),
            skipped = table.skipped.len(),
            "loaded vocabulary table"
        );
        Ok(table)
    }

    /// Read and parse a JSON table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }

    /// Build a table from already-validated entries.
    pub fn from_entries(entries: Vec<VocabEntry>) -> Self {
        Self {
            entries,
            skipped: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(record: RawRecord) -> std::result::Result<VocabEntry, (Option<String>, SkipReason)> {
    let word = match record.word {
        Value::String(w) if !w.trim().is_empty() => w.trim().to_string(),
        Value::String(_) | Value::Null => return Err((None, SkipReason::MissingWord)),
        _ => return Err((None, SkipReason::WordNotString)),
    };

    let level = match parse_level(&record.level) {
        Ok(level) => level,
        Err(reason) => return Err((Some(word), reason)),
    };

    // Null or non-string glosses are dropped, not fatal.
    let glosses: HashMap<String, String> = match record.glosses {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(lang, gloss)| match gloss {
                Value::String(g) if !g.trim().is_empty() => Some((lang, g)),
                _ => None,
            })
            .collect(),
        _ => HashMap::new(),
    };
    if glosses.is_empty() {
        return Err((Some(word), SkipReason::NoGloss));
    }

    // An unrecognised tag is treated the same as no tag.
    let pos = match record.pos {
        Value::Null => None,
        Value::String(raw) => {
            let parsed = PartOfSpeech::parse(&raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                tracing::warn!(%word, pos = %raw, "unknown part of speech, treating as unrecorded");
            }
            parsed
        }
        other => {
            tracing::warn!(%word, pos = %other, "unknown part of speech, treating as unrecorded");
            None
        }
    };

    Ok(VocabEntry {
        word,
        level,
        pos,
        glosses,
    })
}

fn parse_level(raw: &Value) -> std::result::Result<Level, SkipReason> {
    let n = match raw {
        Value::Null => return Err(SkipReason::MissingLevel),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| SkipReason::LevelNotInteger(n.to_string()))?,
        other => return Err(SkipReason::LevelNotInteger(other.to_string())),
    };
    u8::try_from(n)
        .ok()
        .and_then(|n| Level::try_from(n).ok())
        .ok_or(SkipReason::LevelOutOfRange(n))
}

// ---------------------------------------------------------------------------
// Excluded words
// ---------------------------------------------------------------------------

/// Words left out of every index built with this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The common particles in [`DEFAULT_EXCLUDED_WORDS`].
    pub fn default_particles() -> Self {
        Self::from_words(DEFAULT_EXCLUDED_WORDS.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

/// Read-only word → entry lookup for one (level filter, exclusion set)
/// configuration. Rebuilt, never edited, when the configuration changes.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    entries: HashMap<String, VocabEntry>,
    filter: LevelFilter,
}

impl VocabularyIndex {
    /// Index every entry admitted by `filter` and not in `excluded`. When a
    /// word occurs more than once, the first occurrence wins.
    pub fn build(table: &VocabTable, filter: LevelFilter, excluded: &ExclusionSet) -> Self {
        let mut entries: HashMap<String, VocabEntry> = HashMap::new();
        let mut duplicates = 0usize;

        for entry in table.entries() {
            if excluded.contains(&entry.word) || !filter.admits(entry.level) {
                continue;
            }
            if entries.contains_key(&entry.word) {
                duplicates += 1;
                tracing::debug!(word = %entry.word, "duplicate vocabulary word, keeping first");
                continue;
            }
            entries.insert(entry.word.clone(), entry.clone());
        }

        tracing::info!(
            ?filter,
            words = entries.len(),
            duplicates,
            "built vocabulary index"
        );
        Self { entries, filter }
    }

    /// Look up an entry by dictionary form.
    pub fn get(&self, word: &str) -> Option<&VocabEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn filter(&self) -> LevelFilter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
