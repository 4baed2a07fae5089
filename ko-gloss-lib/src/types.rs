use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Vocabulary tier. Entries belong to exactly one numeric level; level 3 in a
/// user configuration means "every level".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    One,
    Two,
    Three,
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(Error::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        match level {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Which entries an index admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    Only(Level),
    All,
}

impl LevelFilter {
    pub fn admits(self, level: Level) -> bool {
        match self {
            LevelFilter::Only(wanted) => wanted == level,
            LevelFilter::All => true,
        }
    }
}

impl From<Level> for LevelFilter {
    /// Configuration levels 1 and 2 select a single tier; 3 selects the union.
    fn from(level: Level) -> Self {
        match level {
            Level::Three => LevelFilter::All,
            single => LevelFilter::Only(single),
        }
    }
}

/// Recorded part of speech of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Expression,
    Adverb,
    Particle,
    Pronoun,
}

impl PartOfSpeech {
    /// Verbs and adjectives are stored with the `다` dictionary marker and are
    /// the only classes a verb-only stem candidate may match.
    pub fn is_verbal(self) -> bool {
        matches!(self, PartOfSpeech::Verb | PartOfSpeech::Adjective)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noun" | "n" => Some(PartOfSpeech::Noun),
            "verb" | "v" => Some(PartOfSpeech::Verb),
            "adjective" | "adj" => Some(PartOfSpeech::Adjective),
            "expression" | "expr" => Some(PartOfSpeech::Expression),
            "adverb" | "adv" => Some(PartOfSpeech::Adverb),
            "particle" => Some(PartOfSpeech::Particle),
            "pronoun" | "pron" => Some(PartOfSpeech::Pronoun),
            _ => None,
        }
    }
}

/// Language an annotation gloss is displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLanguage {
    #[default]
    En,
    Zh,
    Ja,
}

impl DisplayLanguage {
    /// Key of this language in an entry's gloss map.
    pub fn code(self) -> &'static str {
        match self {
            DisplayLanguage::En => "en",
            DisplayLanguage::Zh => "zh",
            DisplayLanguage::Ja => "ja",
        }
    }
}

impl std::str::FromStr for DisplayLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(DisplayLanguage::En),
            "zh" => Ok(DisplayLanguage::Zh),
            "ja" => Ok(DisplayLanguage::Ja),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One validated vocabulary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Dictionary form; verbs and adjectives end in `다`.
    pub word: String,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PartOfSpeech>,
    /// Raw gloss per language code (e.g. "en" → "eat, have").
    pub glosses: HashMap<String, String>,
}

impl VocabEntry {
    /// Raw gloss for a language, ignoring blank strings.
    pub fn raw_gloss(&self, language: DisplayLanguage) -> Option<&str> {
        self.glosses
            .get(language.code())
            .map(String::as_str)
            .filter(|g| !g.trim().is_empty())
    }
}

/// A possible dictionary stem for a surface form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemCandidate {
    pub stem: String,
    /// Only admissible against verb/adjective entries (or entries without a
    /// recorded POS).
    pub verb_only: bool,
}

impl StemCandidate {
    pub fn new(stem: impl Into<String>, verb_only: bool) -> Self {
        Self {
            stem: stem.into(),
            verb_only,
        }
    }
}

/// A region of scanned text paired with its gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSpan {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Text exactly as it appears in the input.
    pub surface: String,
    /// Vocabulary key the surface resolved to.
    pub dictionary_form: String,
    pub gloss: String,
}
