// Host-side annotator state.
//
// The host stops feeding text, reconfigures, then resumes. Rather than a
// suspend flag checked on every call, the session moves through explicit
// states and swaps the whole index behind an `Arc`. A caller that took a
// snapshot before a swap keeps scanning against the index it started with.

use std::sync::Arc;

use crate::config::UserConfig;
use crate::gloss::GlossFormatter;
use crate::resolver::Resolver;
use crate::scanner;
use crate::types::{AnnotationSpan, DisplayLanguage};
use crate::vocabulary::{ExclusionSet, VocabTable, VocabularyIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Text is being annotated.
    Active,
    /// A configuration change is in progress; scans produce nothing.
    Reconfiguring,
    /// Annotation is switched off.
    Idle,
}

/// What a finished reconfiguration changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconfigured {
    pub index_rebuilt: bool,
    pub state: SessionState,
}

/// An index snapshot plus everything needed to scan with it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    index: Arc<VocabularyIndex>,
    resolver: Resolver,
    formatter: Arc<GlossFormatter>,
    language: DisplayLanguage,
}

impl Snapshot {
    pub fn scan(&self, text: &str) -> Vec<AnnotationSpan> {
        scanner::scan_with(
            text,
            &self.index,
            &self.resolver,
            &self.formatter,
            self.language,
        )
    }

    pub fn index(&self) -> &VocabularyIndex {
        &self.index
    }
}

pub struct Session {
    table: Arc<VocabTable>,
    excluded: ExclusionSet,
    config: UserConfig,
    index: Arc<VocabularyIndex>,
    resolver: Resolver,
    formatter: Arc<GlossFormatter>,
    state: SessionState,
}

impl Session {
    pub fn new(table: Arc<VocabTable>, excluded: ExclusionSet, config: UserConfig) -> Self {
        let index = Arc::new(VocabularyIndex::build(
            &table,
            config.level_filter(),
            &excluded,
        ));
        Self {
            table,
            excluded,
            config,
            index,
            resolver: Resolver::default(),
            formatter: Arc::new(GlossFormatter::default()),
            state: state_for(&config),
        }
    }

    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_formatter(mut self, formatter: GlossFormatter) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    /// Current index and settings, independent of later reconfiguration.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            index: Arc::clone(&self.index),
            resolver: self.resolver,
            formatter: Arc::clone(&self.formatter),
            language: self.config.display_language,
        }
    }

    /// Annotate `text` if the session is active; otherwise return nothing.
    pub fn scan(&self, text: &str) -> Vec<AnnotationSpan> {
        if self.state != SessionState::Active {
            return Vec::new();
        }
        self.snapshot().scan(text)
    }

    /// Enter `Reconfiguring`. Scans return nothing until
    /// [`Session::finish_reconfigure`].
    pub fn begin_reconfigure(&mut self) {
        tracing::debug!(from = ?self.state, "reconfiguring");
        self.state = SessionState::Reconfiguring;
    }

    /// Apply `config`, rebuilding the index only if the level changed, and
    /// leave `Reconfiguring` for `Active` or `Idle`.
    pub fn finish_reconfigure(&mut self, config: UserConfig) -> Reconfigured {
        let index_rebuilt = config.level != self.config.level;
        if index_rebuilt {
            let index = VocabularyIndex::build(&self.table, config.level_filter(), &self.excluded);
            self.index = Arc::new(index);
        }
        self.config = config;
        self.state = state_for(&config);
        tracing::info!(
            level = %config.level,
            language = %config.display_language,
            state = ?self.state,
            index_rebuilt,
            "configuration applied"
        );
        Reconfigured {
            index_rebuilt,
            state: self.state,
        }
    }

    /// `begin_reconfigure` followed by `finish_reconfigure`.
    pub fn apply_config(&mut self, config: UserConfig) -> Reconfigured {
        self.begin_reconfigure();
        self.finish_reconfigure(config)
    }
}

fn state_for(config: &UserConfig) -> SessionState {
    if config.enabled {
        SessionState::Active
    } else {
        SessionState::Idle
    }
}
