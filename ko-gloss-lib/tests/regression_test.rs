// Regression tests for stem resolution against the sample vocabulary.

use ko_gloss_lib::morphology::generate_conjugations;
use ko_gloss_lib::vocabulary::SkipReason;
use ko_gloss_lib::{
    could_be_conjugation_of, extract_stems, resolve, ExclusionSet, Level, LevelFilter,
    PartOfSpeech, VocabTable, VocabularyIndex,
};

fn table() -> VocabTable {
    VocabTable::from_json(include_str!("data/sample-vocab.json")).expect("fixture is valid JSON")
}

fn index(filter: LevelFilter) -> VocabularyIndex {
    VocabularyIndex::build(&table(), filter, &ExclusionSet::default_particles())
}

fn level_one() -> VocabularyIndex {
    index(LevelFilter::Only(Level::One))
}

fn level_two() -> VocabularyIndex {
    index(LevelFilter::Only(Level::Two))
}

fn union_without_exclusions() -> VocabularyIndex {
    VocabularyIndex::build(&table(), LevelFilter::All, &ExclusionSet::empty())
}

fn resolved(word: &str, idx: &VocabularyIndex) -> Option<String> {
    resolve(word, idx).map(|e| e.word.clone())
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn malformed_records_are_skipped() {
    let t = table();
    let reasons: Vec<_> = t.skipped().iter().map(|s| s.reason.clone()).collect();
    assert_eq!(reasons, vec![SkipReason::MissingWord, SkipReason::NoGloss]);
}

#[test]
fn one_bad_record_does_not_sink_the_table() {
    let good = r#"{"word": "먹다", "level": 1, "pos": "verb", "glosses": {"en": "eat"}}"#;
    for bad in [
        r#"{"word": "가다", "level": 300, "glosses": {"en": "go"}}"#,
        r#"{"word": "가다", "level": "2", "glosses": {"en": "go"}}"#,
        r#"{"word": "가다", "level": 1, "glosses": {"zh": null}}"#,
    ] {
        let t = VocabTable::from_json(&format!("[{good}, {bad}]"))
            .unwrap_or_else(|e| panic!("{bad} failed the load: {e}"));
        assert_eq!(t.len(), 1, "{bad}");
        assert_eq!(t.skipped().len(), 1, "{bad}");
    }

    let t = VocabTable::from_json(&format!(
        r#"[{good}, {{"word": "가다", "level": 1, "glosses": {{"en": "go", "zh": null}}}}]"#
    ))
    .unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(
        VocabularyIndex::build(&t, LevelFilter::All, &ExclusionSet::empty())
            .get("가다")
            .map(|e| e.glosses.len()),
        Some(1)
    );
}

#[test]
fn duplicate_word_keeps_first_occurrence() {
    let all = index(LevelFilter::All);
    let school = all.get("학교").expect("학교 is indexed");
    assert_eq!(school.level, Level::One);
    assert_eq!(school.glosses["en"], "school");
}

#[test]
fn level_indexes_are_disjoint() {
    let one = level_one();
    let two = level_two();
    let shared: Vec<&str> = one
        .words()
        .filter(|w| two.contains(w))
        .filter(|w| *w != "학교") // listed once per level in the fixture
        .collect();
    assert!(shared.is_empty(), "unexpected overlap: {shared:?}");
    assert!(index(LevelFilter::All).len() > one.len().max(two.len()));
}

#[test]
fn default_particles_not_indexed() {
    let all = index(LevelFilter::All);
    for word in ["은", "수", "가"] {
        assert!(!all.contains(word), "{word} should be excluded");
    }
    assert!(union_without_exclusions().contains("가"));
}

// ---------------------------------------------------------------------------
// Exact and conjugated lookups
// ---------------------------------------------------------------------------

#[test]
fn dictionary_forms_pass_through() {
    for idx in [level_one(), level_two(), index(LevelFilter::All)] {
        for word in idx.words() {
            assert_eq!(resolved(word, &idx).as_deref(), Some(word));
        }
    }
}

/// Past-tense polite form built the way the stemmer expects it.
fn past_polite(dictionary_form: &str) -> String {
    let stem = dictionary_form.strip_suffix('다').unwrap();
    let last = stem.chars().last().unwrap();
    let ending = if last == '하' {
        "였어요"
    } else if ko_gloss_lib::hangul::medial_vowel(last)
        .is_some_and(ko_gloss_lib::hangul::is_bright_vowel)
    {
        "았어요"
    } else {
        "었어요"
    };
    format!("{stem}{ending}")
}

#[test]
fn past_tense_recovers_every_verb_and_adjective() {
    let idx = union_without_exclusions();
    let verbal: Vec<_> = table()
        .entries()
        .iter()
        .filter(|e| e.pos.is_some_and(PartOfSpeech::is_verbal))
        .map(|e| e.word.clone())
        .collect();
    assert!(verbal.len() >= 10);
    for word in verbal {
        let past = past_polite(&word);
        assert_eq!(
            resolved(&past, &idx).as_deref(),
            Some(word.as_str()),
            "{past} should resolve to {word}"
        );
    }
}

#[test]
fn meogeosseoyo_with_only_the_verb() {
    let entries = table()
        .entries()
        .iter()
        .filter(|e| e.word == "먹다")
        .cloned()
        .collect();
    let idx = VocabularyIndex::build(
        &VocabTable::from_entries(entries),
        LevelFilter::All,
        &ExclusionSet::empty(),
    );
    assert!(!idx.contains("먹"));
    assert_eq!(resolved("먹었어요", &idx).as_deref(), Some("먹다"));
}

#[test]
fn present_tense_and_connectors() {
    let idx = level_one();
    assert_eq!(resolved("좋아요", &idx).as_deref(), Some("좋다"));
    assert_eq!(resolved("재미있어요", &idx).as_deref(), Some("재미있다"));
    assert_eq!(resolved("맛있어요", &idx).as_deref(), Some("맛있다"));
    assert_eq!(resolved("공부하고", &idx).as_deref(), Some("공부하다"));
    assert_eq!(resolved("먹지만", &idx).as_deref(), Some("먹다"));
    assert_eq!(resolved("먹어서", &idx).as_deref(), Some("먹다"));
}

#[test]
fn hada_contractions_resolve() {
    let idx = level_one();
    assert_eq!(resolved("공부했어요", &idx).as_deref(), Some("공부하다"));
    assert_eq!(resolved("공부합니다", &idx).as_deref(), Some("공부하다"));
    assert_eq!(resolved("해요", &idx).as_deref(), Some("하다"));
    assert_eq!(resolved("했어요", &idx).as_deref(), Some("하다"));
}

#[test]
fn generated_conjugations_resolve_back() {
    for entry in table().entries() {
        if !entry.pos.is_some_and(PartOfSpeech::is_verbal) {
            continue;
        }
        let idx = VocabularyIndex::build(
            &VocabTable::from_entries(vec![entry.clone()]),
            LevelFilter::All,
            &ExclusionSet::empty(),
        );
        for form in generate_conjugations(&entry.word) {
            assert_eq!(
                resolved(&form, &idx).as_deref(),
                Some(entry.word.as_str()),
                "{form} should resolve to {}",
                entry.word
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Noun/verb collisions
// ---------------------------------------------------------------------------

#[test]
fn verb_reading_beats_single_syllable_noun() {
    let idx = level_one();
    // 살 (flesh) and 배우 (actor) are nouns in the same level as the verbs.
    assert_eq!(resolved("살았어요", &idx).as_deref(), Some("살다"));
    assert_eq!(resolved("배우니까", &idx).as_deref(), Some("배우다"));
}

#[test]
fn gago_is_go_not_professional() {
    let idx = union_without_exclusions();
    assert!(idx.contains("가"));
    assert_eq!(resolved("가고", &idx).as_deref(), Some("가다"));
}

#[test]
fn seoda_present_only_in_level_one() {
    let one = level_one();
    let two = level_two();
    assert!(one.contains("서다") && !one.contains("서"));
    assert!(two.contains("서") && !two.contains("서다"));

    for word in ["서고", "서는"] {
        assert_eq!(resolved(word, &one).as_deref(), Some("서다"), "{word} on level 1");
        assert_eq!(resolved(word, &two), None, "{word} on level 2 must not fall back to 서");
    }
}

#[test]
fn seoda_in_union_still_wins() {
    let all = index(LevelFilter::All);
    assert_eq!(resolved("서고", &all).as_deref(), Some("서다"));
    assert_eq!(resolved("서는", &all).as_deref(), Some("서다"));
    assert_eq!(resolved("서", &all).as_deref(), Some("서"));
}

#[test]
fn topic_particle_on_long_stem_reaches_noun() {
    let idx = level_one();
    assert_eq!(resolved("사람은", &idx).as_deref(), Some("사람"));
    assert_eq!(resolved("친구는", &idx).as_deref(), Some("친구"));
    assert_eq!(resolved("친구를", &idx).as_deref(), Some("친구"));
}

#[test]
fn subject_particles_and_copula_reach_noun() {
    let idx = level_one();
    assert_eq!(resolved("학교가", &idx).as_deref(), Some("학교"));
    assert_eq!(resolved("사람이", &idx).as_deref(), Some("사람"));
    // Unlike 은/는, 이 after one syllable still reaches the noun.
    assert_eq!(resolved("책이", &idx).as_deref(), Some("책"));
    assert_eq!(resolved("친구입니다", &idx).as_deref(), Some("친구"));
    assert_eq!(resolved("학교입니다", &idx).as_deref(), Some("학교"));
}

#[test]
fn noun_with_dictionary_marker_is_not_a_noun() {
    // 친구다 reads as a verb form; only the noun 친구 exists.
    assert_eq!(resolved("친구다", &level_one()), None);
    assert_eq!(resolved("책다", &level_one()), None);
}

#[test]
fn topic_particle_on_single_syllable_rejects_noun() {
    // Only the noun 서 is indexed, so 서는 has nothing admissible.
    let idx = level_two();
    assert_eq!(resolved("서는", &idx), None);
    assert_eq!(resolved("서은", &idx), None);
}

#[test]
fn unknown_pos_entry_is_admitted() {
    let idx = level_two();
    assert_eq!(resolve("거대", &idx).unwrap().pos, None);
    assert_eq!(resolved("거대는", &idx).as_deref(), Some("거대"));
}

// ---------------------------------------------------------------------------
// Known gaps
// ---------------------------------------------------------------------------

#[test]
fn vowel_contraction_is_unresolved() {
    // 가 + 아서 contracts to 가서; only 하다 contractions are mapped.
    assert_eq!(resolved("가서", &level_one()), None);
}

#[test]
fn unknown_words_do_not_resolve() {
    let idx = index(LevelFilter::All);
    assert_eq!(resolved("블라블라블라", &idx), None);
    assert_eq!(resolved("hello", &idx), None);
}

// ---------------------------------------------------------------------------
// Stem and conjugation helpers
// ---------------------------------------------------------------------------

#[test]
fn extract_stems_shape() {
    let stems = extract_stems("먹었어요");
    assert_eq!(stems[0], "먹었어요");
    assert!(stems.contains(&"먹다".to_string()));
    let unique: std::collections::HashSet<_> = stems.iter().collect();
    assert_eq!(unique.len(), stems.len());

    assert!(extract_stems("먹다").contains(&"먹".to_string()));
    assert!(extract_stems("공부했어요").contains(&"공부했어요".to_string()));
}

#[test]
fn conjugation_checks() {
    assert!(could_be_conjugation_of("먹었어요", "먹다"));
    assert!(could_be_conjugation_of("공부했어요", "공부하다"));
    assert!(could_be_conjugation_of("학교", "학교"));
    assert!(!could_be_conjugation_of("먹었어요", "자다"));
    assert!(!could_be_conjugation_of("살았어요", "사다"));
}
