// POS-guarded lookup of a surface form in a vocabulary index.
//
// Resolution is a single ordered walk: exact key first, then each stem
// candidate in generation order. A verb-only candidate is rejected when it
// lands on an entry with a recorded non-verbal POS, and the walk moves on.
// There is no second, relaxed pass: when the verb's dictionary form is not in
// the index the word stays unresolved rather than falling back to a noun.

use crate::morphology;
use crate::types::{StemCandidate, VocabEntry};
use crate::vocabulary::VocabularyIndex;

/// How a verb-only candidate treats an entry with no recorded POS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownPos {
    /// Accept the match (open-world default).
    #[default]
    Admit,
    /// Treat the entry as non-verbal.
    Reject,
}

/// Resolution policy. `Resolver::default()` admits entries without POS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    pub unknown_pos: UnknownPos,
}

impl Resolver {
    pub fn new(unknown_pos: UnknownPos) -> Self {
        Self { unknown_pos }
    }

    /// Resolve a surface form to its dictionary entry, if any.
    pub fn resolve<'a>(&self, word: &str, index: &'a VocabularyIndex) -> Option<&'a VocabEntry> {
        if let Some(entry) = index.get(word) {
            return Some(entry);
        }

        morphology::extract_stems_for_lookup(word)
            .iter()
            .find_map(|candidate| self.accept(candidate, index))
    }

    /// The entry `candidate` resolves to, unless the POS guard rejects it.
    fn accept<'a>(
        &self,
        candidate: &StemCandidate,
        index: &'a VocabularyIndex,
    ) -> Option<&'a VocabEntry> {
        let entry = index.get(&candidate.stem)?;
        if candidate.verb_only && !self.admits_verb_only(entry) {
            tracing::debug!(
                stem = %candidate.stem,
                pos = ?entry.pos,
                "verb-only candidate rejected"
            );
            return None;
        }
        Some(entry)
    }

    fn admits_verb_only(&self, entry: &VocabEntry) -> bool {
        match entry.pos {
            Some(pos) => pos.is_verbal(),
            None => self.unknown_pos == UnknownPos::Admit,
        }
    }
}

/// Resolve with the default policy.
pub fn resolve<'a>(word: &str, index: &'a VocabularyIndex) -> Option<&'a VocabEntry> {
    Resolver::default().resolve(word, index)
}
