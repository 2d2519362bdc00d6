//! Character-level Unicode classification for Thai text.

pub const THANTHAKHAT: char = '\u{0E4C}';
pub const MAITAIKHU: char = '\u{0E47}';
pub const SARA_A: char = '\u{0E30}';

/// Check the full Thai block (U+0E00..U+0E7F).
pub fn is_thai(c: char) -> bool {
    ('\u{0E00}'..='\u{0E7F}').contains(&c)
}

/// Consonants ก..ฮ (U+0E01..U+0E2E). This range includes the vocalic
/// letters ฤ and ฦ, which the grammar treats as onsets carrying their own
/// vowel.
pub fn is_consonant(c: char) -> bool {
    ('\u{0E01}'..='\u{0E2E}').contains(&c)
}

/// ฤ and ฦ.
pub fn is_vocalic(c: char) -> bool {
    matches!(c, 'ฤ' | 'ฦ')
}

/// Vowels written before the consonant they follow in speech: เ แ โ ใ ไ.
pub fn is_lead_vowel(c: char) -> bool {
    ('\u{0E40}'..='\u{0E44}').contains(&c)
}

/// Vowel signs written after, above, or below their consonant.
pub fn is_dependent_vowel(c: char) -> bool {
    matches!(
        c,
        '\u{0E30}'..='\u{0E3A}' | MAITAIKHU | '\u{0E45}'
    )
}

/// Mai ek, mai tho, mai tri, mai chattawa.
pub fn is_tone_mark(c: char) -> bool {
    ('\u{0E48}'..='\u{0E4B}').contains(&c)
}

/// Consonants that can close a syllable. ห อ ฮ never do, and ฉ ผ ฝ
/// do not appear as finals in native spelling.
pub fn can_be_final(c: char) -> bool {
    is_consonant(c) && !is_vocalic(c) && !matches!(c, 'ห' | 'อ' | 'ฮ' | 'ฉ' | 'ผ' | 'ฝ')
}
