//! Word → Thai pronunciation guide (`w2p`).
//!
//! The guide spells each syllable as it is read, syllables joined by `-`
//! (`สวัสดี` → `สะ-หฺวัด-ดี`). Words come from the pronunciation corpus when
//! listed; otherwise a rule-based guide is built so that abbreviations,
//! Latin tokens and unlisted Thai words still get an answer.

mod letters;

use tracing::{debug, debug_span};

pub use letters::{abbreviation_letters, consonant_name, latin_name, spell_latin};

use crate::corpus::{CorpusCache, PronunciationDict};
use crate::settings::settings;
use crate::syllable::{self, Segment};

pub const SYLLABLE_SEPARATOR: &str = "-";

/// Pronounce `text` using the process-wide corpus cache.
pub fn pronounce(text: &str) -> String {
    pronounce_in(CorpusCache::global(), text)
}

/// Pronounce `text` with the `corpus.w2p_name` dictionary from `cache`,
/// loading it on demand.
pub fn pronounce_in(cache: &CorpusCache, text: &str) -> String {
    let dict = cache.get(&settings().corpus.w2p_name);
    if dict.is_none() {
        debug!("w2p corpus unavailable, using rules only");
    }
    pronounce_with(dict.as_deref(), text)
}

/// Pronounce each whitespace-separated word, re-joined with single spaces.
pub fn pronounce_with(dict: Option<&PronunciationDict>, text: &str) -> String {
    let _span = debug_span!("w2p", len = text.len()).entered();
    text.split_whitespace()
        .map(|word| match dict.and_then(|d| d.first(word)) {
            Some(guide) => guide.to_string(),
            None => {
                debug!(word, "w2p dictionary miss");
                rule_guide(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Best-effort guide for a word missing from the dictionary.
pub fn rule_guide(word: &str) -> String {
    if let Some(letters) = abbreviation_letters(word) {
        return letters
            .into_iter()
            .filter_map(consonant_name)
            .collect::<Vec<_>>()
            .join(SYLLABLE_SEPARATOR);
    }
    if let Some(spelled) = spell_latin(word) {
        return spelled;
    }
    let mut guide = String::new();
    let mut joinable = false;
    for segment in syllable::parse(word) {
        let (piece, attached) = match segment {
            Segment::Syllable(s) => (s.spelled(), false),
            Segment::Other(t) if is_punctuation(&t) => (t, true),
            Segment::Other(t) => (spell_latin(&t).unwrap_or(t), false),
        };
        // punctuation sticks to its neighbours
        if joinable && !attached {
            guide.push_str(SYLLABLE_SEPARATOR);
        }
        guide.push_str(&piece);
        joinable = !attached;
    }
    guide
}

fn is_punctuation(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_punctuation() || matches!(c, 'ฯ' | '๚' | '๛'))
}
