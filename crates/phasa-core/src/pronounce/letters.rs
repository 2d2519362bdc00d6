use crate::unicode::is_consonant;

/// Thai reading of a Latin letter, case-insensitive.
pub fn latin_name(c: char) -> Option<&'static str> {
    let name = match c.to_ascii_lowercase() {
        'a' => "เอ",
        'b' => "บี",
        'c' => "ซี",
        'd' => "ดี",
        'e' => "อี",
        'f' => "เอฟ",
        'g' => "จี",
        'h' => "เอช",
        'i' => "ไอ",
        'j' => "เจ",
        'k' => "เค",
        'l' => "แอล",
        'm' => "เอ็ม",
        'n' => "เอ็น",
        'o' => "โอ",
        'p' => "พี",
        'q' => "คิว",
        'r' => "อาร์",
        's' => "เอส",
        't' => "ที",
        'u' => "ยู",
        'v' => "วี",
        'w' => "ดับเบิลยู",
        'x' => "เอ็กซ์",
        'y' => "วาย",
        'z' => "แซด",
        _ => return None,
    };
    Some(name)
}

/// Name of a Thai consonant as read in an abbreviation: the letter with
/// สระออ (`ม` → `มอ`).
pub fn consonant_name(c: char) -> Option<String> {
    is_consonant(c).then(|| format!("{c}อ"))
}

/// `Some(letters)` when `word` is an abbreviation: Thai consonants
/// interleaved with periods and ending in one (`มข.`, `ก.พ.`).
pub fn abbreviation_letters(word: &str) -> Option<Vec<char>> {
    if !word.ends_with('.') {
        return None;
    }
    let letters: Vec<char> = word.chars().filter(|&c| c != '.').collect();
    (!letters.is_empty() && letters.iter().all(|&c| is_consonant(c))).then_some(letters)
}

/// Spell each letter of an all-Latin word, joined by `-`.
pub fn spell_latin(word: &str) -> Option<String> {
    let names = word
        .chars()
        .map(latin_name)
        .collect::<Option<Vec<_>>>()?;
    (!names.is_empty()).then(|| names.join("-"))
}
