use std::collections::BTreeMap;

use lexime_trie::{DoubleArray, TrieSearch};

use super::CorpusError;

pub(super) const MAGIC: &[u8; 4] = b"PDIX";
pub(super) const VERSION: u8 = 1;
/// magic(4) + version(1) + reserved(3) + crc32(4)
pub(super) const HEADER_SIZE: usize = 12;

/// Word → pronunciations, stored in a double-array trie.
#[derive(Debug)]
pub struct PronunciationDict {
    pub(super) trie: DoubleArray<u8>,
    pub(super) values: Vec<Vec<String>>,
}

impl PronunciationDict {
    /// Build from `(word, pronunciations)` pairs. Repeated words merge their
    /// pronunciations in order; words with none are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (word, prons) in entries {
            if word.is_empty() || prons.is_empty() {
                continue;
            }
            let slot = merged.entry(word).or_default();
            for p in prons {
                if !slot.contains(&p) {
                    slot.push(p);
                }
            }
        }
        // BTreeMap is already sorted; DoubleArray::build needs sorted keys
        let keys: Vec<&[u8]> = merged.keys().map(|k| k.as_bytes()).collect();
        let trie = DoubleArray::<u8>::build(&keys);
        let values = merged.into_values().collect();
        Self { trie, values }
    }

    /// Parse `word<TAB>pronunciation[<TAB>pronunciation…]` lines. Blank
    /// lines and `#` comments are skipped.
    pub fn parse_tsv(content: &str) -> Result<Self, CorpusError> {
        let mut entries = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or_default().trim();
            let prons: Vec<String> = fields
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            if word.is_empty() || prons.is_empty() {
                return Err(CorpusError::Parse {
                    line: idx + 1,
                    reason: "expected word<TAB>pronunciation".to_string(),
                });
            }
            entries.push((word.to_string(), prons));
        }
        Ok(Self::from_entries(entries))
    }

    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.trie
            .exact_match(word.as_bytes())
            .map(|id| self.values[id as usize].as_slice())
    }

    /// The preferred pronunciation of `word`.
    pub fn first(&self, word: &str) -> Option<&str> {
        self.lookup(word)
            .and_then(|prons| prons.first())
            .map(String::as_str)
    }

    /// Iterate over all `(word, pronunciations)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (String, &[String])> {
        self.trie.predictive_search(b"").map(move |m| {
            let word = String::from_utf8(m.key)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
            (word, self.values[m.value_id as usize].as_slice())
        })
    }

    /// Returns (word_count, pronunciation_count).
    pub fn stats(&self) -> (usize, usize) {
        let prons = self.values.iter().map(Vec::len).sum();
        (self.values.len(), prons)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
