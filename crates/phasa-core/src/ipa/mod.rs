//! Phonetic transcription.
//!
//! - `transliterate`: rule g2p over the syllable grammar with the IPA table.
//! - `iso11940::transliterate`: letter-by-letter ISO 11940 (ICU Thai-Latin).
//! - `transliterate_with_dict`: dictionary IPA with rule fallback.
//! - `trans_list` / `xsampa_list`: the rule output as phoneme units,
//!   produced lazily and restartable through `iter()`.

pub mod iso11940;
#[cfg(test)]
mod tests;
pub mod xsampa;

use std::borrow::Cow;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::corpus::{CorpusCache, PronunciationDict};
use crate::settings::settings;
use crate::syllable::{self, Segment};
use crate::table::{parse_table_toml, MappingTable, TableConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_ipa.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set a custom IPA table before the first `table()` call.
pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
    parse_table_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| TableConfigError::AlreadyInitialized)
}

/// Get or initialize the global IPA table.
pub fn table() -> &'static MappingTable {
    static INSTANCE: OnceLock<MappingTable> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TOML);
        MappingTable::from_toml(toml_str).expect("IPA TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Rule-based IPA for `text`. Unparsed text passes through.
pub fn transliterate(text: &str) -> String {
    let _span = debug_span!("ipa", len = text.len()).entered();
    let table = table();
    let mut out = String::with_capacity(text.len() * 2);
    for seg in syllable::parse(text) {
        match seg {
            Segment::Syllable(s) => out.push_str(&table.render(&s)),
            Segment::Other(t) => out.push_str(&t),
        }
    }
    out
}

/// IPA from a pronunciation dictionary, falling back to the rules word by
/// word when the dictionary is missing or has no entry.
pub fn transliterate_with_dict(dict: Option<&PronunciationDict>, text: &str) -> String {
    let _span = debug_span!("dict_ipa", len = text.len()).entered();
    text.split_whitespace()
        .map(|word| match dict.and_then(|d| d.first(word)) {
            Some(ipa) => ipa.to_string(),
            None => {
                debug!(word, "no IPA entry, using rules");
                transliterate(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dictionary IPA using the `corpus.ipa_name` resource from `cache`.
pub fn transliterate_dict_in(cache: &CorpusCache, text: &str) -> String {
    let dict = cache.get(&settings().corpus.ipa_name);
    transliterate_with_dict(dict.as_deref(), text)
}

/// Phoneme units of `text`.
pub fn trans_list(text: &str) -> PhonemeSeq {
    PhonemeSeq::new(text)
}

/// X-SAMPA units of `text`.
pub fn xsampa_list(text: &str) -> XsampaSeq {
    XsampaSeq(PhonemeSeq::new(text))
}

/// A parsed word whose phoneme units are rendered on demand. Every call to
/// `iter()` starts from the first unit.
#[derive(Debug, Clone)]
pub struct PhonemeSeq {
    segments: Vec<Segment>,
}

impl PhonemeSeq {
    pub fn new(text: &str) -> Self {
        Self {
            segments: syllable::parse(text),
        }
    }

    pub fn iter(&self) -> Phonemes<'_> {
        Phonemes {
            table: table(),
            segments: self.segments.iter(),
            pending: Vec::new().into_iter(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'a> IntoIterator for &'a PhonemeSeq {
    type Item = String;
    type IntoIter = Phonemes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Phonemes<'a> {
    table: &'static MappingTable,
    segments: std::slice::Iter<'a, Segment>,
    pending: std::vec::IntoIter<String>,
}

impl Iterator for Phonemes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(unit) = self.pending.next() {
                return Some(unit);
            }
            let units: Vec<String> = match self.segments.next()? {
                Segment::Syllable(s) => self
                    .table
                    .syllable_units(s)
                    .into_iter()
                    .map(Cow::into_owned)
                    .collect(),
                Segment::Other(t) => t.split_whitespace().map(str::to_string).collect(),
            };
            self.pending = units.into_iter();
        }
    }
}

/// `PhonemeSeq` rendered in X-SAMPA.
#[derive(Debug, Clone)]
pub struct XsampaSeq(PhonemeSeq);

impl XsampaSeq {
    pub fn iter(&self) -> impl Iterator<Item = String> + Clone + '_ {
        self.0.iter().map(|p| xsampa::from_ipa(&p))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
