/// Convert one IPA unit to X-SAMPA. Symbols with no X-SAMPA spelling other
/// than themselves (plain Latin letters) pass through.
pub fn from_ipa(ipa: &str) -> String {
    let mut out = String::with_capacity(ipa.len() + 2);
    for c in ipa.chars() {
        match c {
            'ʰ' => out.push_str("_h"),
            'ŋ' => out.push('N'),
            'ɕ' => out.push_str("s\\"),
            'ɛ' => out.push('E'),
            'ɔ' => out.push('O'),
            'ɯ' => out.push('M'),
            'ɤ' => out.push('7'),
            'ː' => out.push(':'),
            'ʔ' => out.push('?'),
            'æ' => out.push('{'),
            'ə' => out.push('@'),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspirated_affricate() {
        assert_eq!(from_ipa("tɕʰ"), "ts\\_h");
        assert_eq!(from_ipa("kʰ"), "k_h");
    }

    #[test]
    fn test_vowels() {
        assert_eq!(from_ipa("ɛːw"), "E:w");
        assert_eq!(from_ipa("ɯːa"), "M:a");
        assert_eq!(from_ipa("ɤː"), "7:");
    }

    #[test]
    fn test_plain_letters_pass_through() {
        assert_eq!(from_ipa("m"), "m");
        assert_eq!(from_ipa(""), "");
    }
}
