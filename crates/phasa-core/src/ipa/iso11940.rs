//! Letter-by-letter transliteration after ISO 11940, the scheme ICU's
//! Thai-Latin transform implements. Leading vowels are moved after the
//! consonant they precede so the output follows reading order.

use crate::unicode::{is_consonant, is_lead_vowel};

fn letter(c: char) -> Option<&'static str> {
    let s = match c {
        'ก' => "k",
        'ข' => "k̄h",
        'ฃ' => "ḳ̄h",
        'ค' => "kh",
        'ฅ' => "ḳh",
        'ฆ' => "k̛h",
        'ง' => "ng",
        'จ' => "c",
        'ฉ' => "c̄h",
        'ช' => "ch",
        'ซ' => "s̛",
        'ฌ' => "c̣h",
        'ญ' => "ỵ",
        'ฎ' => "ḍ",
        'ฏ' => "ṭ",
        'ฐ' => "ṭ̄h",
        'ฑ' => "ẖ",
        'ฒ' => "t̛h",
        'ณ' => "ṇ",
        'ด' => "d",
        'ต' => "t",
        'ถ' => "t̄h",
        'ท' => "th",
        'ธ' => "ṯh",
        'น' => "n",
        'บ' => "b",
        'ป' => "p",
        'ผ' => "p̄h",
        'ฝ' => "f̄",
        'พ' => "ph",
        'ฟ' => "f",
        'ภ' => "p̣h",
        'ม' => "m",
        'ย' => "y",
        'ร' => "r",
        'ฤ' => "v",
        'ล' => "l",
        'ฦ' => "ł",
        'ว' => "w",
        'ศ' => "ṣ̄",
        'ษ' => "ṣ̄",
        'ส' => "s̄",
        'ห' => "h̄",
        'ฬ' => "ḷ",
        'อ' => "x",
        'ฮ' => "ḥ",
        'ฯ' => "ǂ",
        'ะ' => "a",
        'ั' => "ạ",
        'า' => "ā",
        'ำ' => "å",
        'ิ' => "i",
        'ี' => "ī",
        'ึ' => "ụ",
        'ื' => "ụ̄",
        'ุ' => "u",
        'ู' => "ū",
        'ฺ' => "̥",
        'เ' => "e",
        'แ' => "æ",
        'โ' => "o",
        'ใ' => "ı",
        'ไ' => "ị",
        'ๅ' => "ɨ",
        'ๆ' => "«",
        '็' => "̆",
        '่' => "̀",
        '้' => "̂",
        '๊' => "̃",
        '๋' => "̌",
        '์' => "̒",
        'ํ' => "̊",
        '๏' => "§",
        '๐' => "0",
        '๑' => "1",
        '๒' => "2",
        '๓' => "3",
        '๔' => "4",
        '๕' => "5",
        '๖' => "6",
        '๗' => "7",
        '๘' => "8",
        '๙' => "9",
        _ => return None,
    };
    Some(s)
}

fn push_letter(out: &mut String, c: char) {
    match letter(c) {
        Some(s) => out.push_str(s),
        None => out.push(c),
    }
}

pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_lead_vowel(c) {
            if let Some(&next) = chars.peek().filter(|&&n| is_consonant(n)) {
                chars.next();
                push_letter(&mut out, next);
            }
        }
        push_letter(&mut out, c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_vowel_reordered() {
        assert_eq!(transliterate("แมว"), "mæw");
        assert_eq!(transliterate("เกม"), "kem");
    }

    #[test]
    fn test_plain_letters() {
        assert_eq!(transliterate("กา"), "kā");
        assert_eq!(transliterate("๑๒"), "12");
    }

    #[test]
    fn test_non_thai_passes_through() {
        assert_eq!(transliterate("abc แมว"), "abc mæw");
        assert_eq!(transliterate(""), "");
        // a lead vowel at the end has nothing to swap with
        assert_eq!(transliterate("เ"), "e");
    }
}
