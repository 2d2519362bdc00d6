use std::sync::OnceLock;

use crate::table::PatternTrie;

/// Whether a vowel pattern can be followed by a final consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    /// Never takes a final (`-ะ`, `-ำ`, glides such as `-าย`).
    Open,
    /// Takes a final when one follows.
    Optional,
    /// Only valid with a final (`-ว` as in สวน).
    Required,
}

/// Written vowel patterns. `-` is the onset slot; a leading vowel comes
/// before it.
pub(crate) static VOWEL_PATTERNS: &[(&str, Closure)] = &[
    ("-ะ", Closure::Open),
    ("-ั", Closure::Optional),
    ("-ัว", Closure::Open),
    ("-ัวะ", Closure::Open),
    ("-ัย", Closure::Open),
    ("-า", Closure::Optional),
    ("-าย", Closure::Open),
    ("-าว", Closure::Open),
    ("-ำ", Closure::Open),
    ("-ิ", Closure::Optional),
    ("-ิว", Closure::Open),
    ("-ี", Closure::Optional),
    ("-ึ", Closure::Optional),
    ("-ื", Closure::Optional),
    ("-ือ", Closure::Open),
    ("-ุ", Closure::Optional),
    ("-ุย", Closure::Open),
    ("-ู", Closure::Optional),
    ("-็", Closure::Optional),
    ("-อ", Closure::Optional),
    ("-อย", Closure::Open),
    ("-ว", Closure::Required),
    ("-วย", Closure::Open),
    ("-รร", Closure::Optional),
    ("-ฤ", Closure::Optional),
    ("เ-", Closure::Optional),
    ("เ-ะ", Closure::Open),
    ("เ-็", Closure::Optional),
    ("เ-า", Closure::Open),
    ("เ-าะ", Closure::Open),
    ("เ-ิ", Closure::Optional),
    ("เ-ีย", Closure::Optional),
    ("เ-ียะ", Closure::Open),
    ("เ-ียว", Closure::Open),
    ("เ-ือ", Closure::Optional),
    ("เ-ือะ", Closure::Open),
    ("เ-ือย", Closure::Open),
    ("เ-อ", Closure::Optional),
    ("เ-อะ", Closure::Open),
    ("เ-ย", Closure::Open),
    ("เ-ว", Closure::Open),
    ("เ-็ว", Closure::Open),
    ("แ-", Closure::Optional),
    ("แ-ะ", Closure::Open),
    ("แ-็", Closure::Optional),
    ("แ-ว", Closure::Open),
    ("แ-็ว", Closure::Open),
    ("โ-", Closure::Optional),
    ("โ-ะ", Closure::Open),
    ("โ-ย", Closure::Open),
    ("ไ-", Closure::Open),
    ("ไ-ย", Closure::Open),
    ("ใ-", Closure::Open),
];

/// Two-letter onsets: true clusters, clusters with a silent ร, and leader
/// pairs where ห or อ only sets the tone class.
static ONSET_PAIRS: &[&str] = &[
    "กร", "กล", "กว", "ขร", "ขล", "ขว", "คร", "คล", "คว", "ปร", "ปล", "พร", "พล", "ตร", "บร",
    "บล", "ดร", "ฟร", "ฟล", "ทร", "จร", "ซร", "ศร", "สร", "หง", "หญ", "หน", "หม", "หย", "หร",
    "หล", "หว", "อย",
];

pub(crate) fn vowel_trie() -> &'static PatternTrie<(&'static str, Closure)> {
    static INSTANCE: OnceLock<PatternTrie<(&'static str, Closure)>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        PatternTrie::build(VOWEL_PATTERNS.iter().map(|&(key, closure)| (key, (key, closure))))
    })
}

pub(crate) fn is_onset_pair(first: char, second: char) -> bool {
    ONSET_PAIRS.iter().any(|pair| {
        let mut chars = pair.chars();
        chars.next() == Some(first) && chars.next() == Some(second)
    })
}

/// Every vowel key a mapping table must cover. The inherent vowels reuse
/// the keys of their written short forms.
pub fn vowel_keys() -> impl Iterator<Item = &'static str> {
    VOWEL_PATTERNS.iter().map(|&(key, _)| key)
}
