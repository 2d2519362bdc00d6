use lexime_trie::{DoubleArray, TrieSearch};

/// Double-array trie over UTF-8 keys with one value per key.
///
/// Keys are sorted and deduplicated before the trie is built, so callers can
/// pass entries in any order. Later duplicates win.
pub struct PatternTrie<V> {
    da: DoubleArray<u8>,
    values: Vec<V>,
}

impl<V> PatternTrie<V> {
    pub fn build<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut entries: Vec<(String, V)> = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v))
            .collect();
        // DoubleArray build needs sorted, unique keys
        entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        entries.reverse();
        entries.dedup_by(|a, b| a.0 == b.0);
        entries.reverse();

        let keys: Vec<&[u8]> = entries.iter().map(|(k, _)| k.as_bytes()).collect();
        let da = DoubleArray::<u8>::build(&keys);
        let values = entries.into_iter().map(|(_, v)| v).collect();
        Self { da, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.da
            .exact_match(key.as_bytes())
            .map(|id| &self.values[id as usize])
    }

    /// All keys that are prefixes of `text`, as `(byte_len, value)`.
    pub fn prefix_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, &'a V)> {
        self.da
            .common_prefix_search(text.as_bytes())
            .map(move |m| (m.len, &self.values[m.value_id as usize]))
    }

    pub fn longest_prefix<'a>(&'a self, text: &'a str) -> Option<(usize, &'a V)> {
        self.prefix_matches(text).max_by_key(|(len, _)| *len)
    }
}

impl PatternTrie<String> {
    /// Split `text` into longest-match units. Characters with no rule come
    /// back unmapped.
    pub fn units<'a>(&'a self, text: &'a str) -> Vec<(&'a str, Option<&'a str>)> {
        let mut out = Vec::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            match self.longest_prefix(rest) {
                Some((len, value)) if len > 0 => {
                    out.push((&rest[..len], Some(value.as_str())));
                    rest = &rest[len..];
                }
                _ => {
                    let len = c.len_utf8();
                    out.push((&rest[..len], None));
                    rest = &rest[len..];
                }
            }
        }
        out
    }

    /// Rewrite `text` by longest match, passing unmapped characters through.
    pub fn apply(&self, text: &str) -> String {
        self.units(text)
            .into_iter()
            .map(|(src, mapped)| mapped.unwrap_or(src))
            .collect()
    }
}
