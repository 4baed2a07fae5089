// Hangul syllable arithmetic.
//
// Precomposed syllables occupy U+AC00..=U+D7A3 and are laid out as
// (initial * 21 + medial) * 28 + final.

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const FINALS: u32 = 28;
const MEDIALS_TIMES_FINALS: u32 = 21 * FINALS;

/// Medial vowels in syllable-table order.
const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// True for a precomposed Hangul syllable (가..힣). This is the script the
/// scanner annotates.
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// True if `text` contains at least one precomposed syllable.
pub fn has_syllable(text: &str) -> bool {
    text.chars().any(is_syllable)
}

fn syllable_offset(c: char) -> Option<u32> {
    is_syllable(c).then(|| c as u32 - SYLLABLE_BASE)
}

/// Whether a syllable ends without a final consonant (no batchim).
/// Returns `None` for non-syllables.
pub fn ends_in_vowel(c: char) -> Option<bool> {
    syllable_offset(c).map(|off| off % FINALS == 0)
}

/// Medial vowel of a syllable.
pub fn medial_vowel(c: char) -> Option<char> {
    syllable_offset(c).map(|off| MEDIALS[((off % MEDIALS_TIMES_FINALS) / FINALS) as usize])
}

/// Bright (yang) vowels take the 아 series of endings; everything else takes
/// 어.
pub fn is_bright_vowel(medial: char) -> bool {
    matches!(medial, 'ㅏ' | 'ㅗ')
}

/// Byte ranges of maximal runs of Hangul syllables, left to right.
pub fn syllable_runs(text: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        match (is_syllable(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, text.len()));
    }
    runs
}
