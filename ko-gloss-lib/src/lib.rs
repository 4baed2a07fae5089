pub mod config;
pub mod error;
pub mod gloss;
pub mod hangul;
pub mod morphology;
pub mod output;
pub mod resolver;
pub mod scanner;
pub mod session;
pub mod types;
pub mod vocabulary;

pub use config::UserConfig;
pub use error::{Error, Result};
pub use gloss::{GlossFormatter, SynonymTable};
pub use morphology::{could_be_conjugation_of, extract_stems, extract_stems_for_lookup};
pub use resolver::{resolve, Resolver, UnknownPos};
pub use scanner::{scan, scan_with};
pub use session::{Session, SessionState, Snapshot};
pub use types::{
    AnnotationSpan, DisplayLanguage, Level, LevelFilter, PartOfSpeech, StemCandidate, VocabEntry,
};
pub use vocabulary::{ExclusionSet, VocabTable, VocabularyIndex};
