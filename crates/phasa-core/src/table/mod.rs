//! Grapheme → output mapping tables.
//!
//! A table has three sections keyed by the components the syllable grammar
//! produces: onsets (applied by longest match, so clusters and leader pairs
//! beat single letters), vowel patterns (exact key, `-` marks the consonant
//! slot) and final consonants.

mod config;
mod trie;

pub use config::{parse_table_toml, TableConfigError, TableSections};
pub use trie::PatternTrie;

use std::borrow::Cow;
use std::collections::HashMap;

use crate::syllable::{Nucleus, Syllable};

pub struct MappingTable {
    initials: PatternTrie<String>,
    vowels: HashMap<String, String>,
    finals: HashMap<char, String>,
}

impl MappingTable {
    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        Ok(Self::from_sections(parse_table_toml(toml_str)?))
    }

    pub fn from_sections(sections: TableSections) -> Self {
        let finals = sections
            .finals
            .into_iter()
            .filter_map(|(k, v)| k.chars().next().map(|c| (c, v)))
            .collect();
        Self {
            initials: PatternTrie::build(sections.initials),
            vowels: sections.vowels.into_iter().collect(),
            finals,
        }
    }

    /// Map an onset by longest match.
    pub fn initial(&self, onset: &str) -> String {
        self.initials.apply(onset)
    }

    pub fn vowel(&self, key: &str) -> Option<&str> {
        self.vowels.get(key).map(String::as_str)
    }

    pub fn coda(&self, c: char) -> Option<&str> {
        self.finals.get(&c).map(String::as_str)
    }

    pub fn has_vowel(&self, key: &str) -> bool {
        self.vowels.contains_key(key)
    }

    /// Output units of one syllable in spoken order: onset units, vowel,
    /// final. Empty units (a silent glottal onset) are skipped; silent
    /// letters and tone marks produce nothing. A vowel pattern or final the
    /// table does not cover is emitted as written.
    pub fn syllable_units<'a>(&'a self, syl: &'a Syllable) -> Vec<Cow<'a, str>> {
        let mut units: Vec<Cow<'a, str>> = self
            .initials
            .units(&syl.onset)
            .into_iter()
            .map(|(src, mapped)| Cow::Borrowed(mapped.unwrap_or(src)))
            .collect();
        let vowel = syl.nucleus.key().and_then(|k| self.vowel(k));
        match (vowel, syl.nucleus) {
            (Some(v), _) => units.push(Cow::Borrowed(v)),
            (None, Nucleus::Written(key)) => units.push(Cow::Owned(key.replace('-', ""))),
            // inherent vowels are unwritten
            (None, _) => {}
        }
        let coda = if vowel.is_some() {
            syl.effective_coda()
        } else {
            syl.coda
        };
        if let Some(c) = coda {
            match self.coda(c) {
                Some(f) => units.push(Cow::Borrowed(f)),
                None => units.push(Cow::Owned(c.to_string())),
            }
        }
        units.retain(|u| !u.is_empty());
        units
    }

    pub fn render(&self, syl: &Syllable) -> String {
        self.syllable_units(syl).concat()
    }
}
