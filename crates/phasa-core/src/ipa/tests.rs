use super::*;
use crate::syllable::vowel_keys;
use crate::unicode::can_be_final;

#[test]
fn test_rule_ipa() {
    assert_eq!(transliterate("คน"), "kʰon");
    assert_eq!(transliterate("แมว"), "mɛːw");
    assert_eq!(transliterate("หมอก"), "mɔːk");
    assert_eq!(transliterate("กรรม"), "kam");
    assert_eq!(transliterate(""), "");
    assert_eq!(transliterate("abc"), "abc");
}

#[test]
fn test_table_covers_grammar() {
    let t = table();
    for key in vowel_keys() {
        assert!(t.has_vowel(key), "IPA table missing vowel {key}");
    }
    for c in ('\u{0E01}'..='\u{0E2E}').filter(|&c| can_be_final(c)) {
        assert!(t.coda(c).is_some(), "IPA table missing final {c}");
    }
}

#[test]
fn test_trans_list_units() {
    let seq = trans_list("คน");
    let units: Vec<String> = seq.iter().collect();
    assert_eq!(units, vec!["kʰ", "o", "n"]);
}

#[test]
fn test_trans_list_restartable() {
    let seq = trans_list("สวัสดี");
    let first: Vec<String> = seq.iter().collect();
    let second: Vec<String> = (&seq).into_iter().collect();
    assert!(!first.is_empty());
    assert_eq!(first, second);

    // a partially consumed iterator can be cloned and resumed
    let mut it = seq.iter();
    it.next();
    let rest: Vec<String> = it.clone().collect();
    assert_eq!(rest, first[1..].to_vec());
}

#[test]
fn test_trans_list_keeps_pass_through_words() {
    let units: Vec<String> = trans_list("อัก a").iter().collect();
    assert_eq!(units, vec!["ʔ", "a", "k", "a"]);
}

#[test]
fn test_xsampa_list() {
    let seq = xsampa_list("คน");
    let units: Vec<String> = seq.iter().collect();
    assert_eq!(units, vec!["k_h", "o", "n"]);
    assert!(!seq.is_empty());
}

#[test]
fn test_empty_sequences() {
    assert!(trans_list("").is_empty());
    assert!(xsampa_list("").is_empty());
    assert!(trans_list("  ").is_empty());
}

#[test]
fn test_dict_ipa_with_fallback() {
    let dict = PronunciationDict::from_entries(vec![(
        "แมว".to_string(),
        vec!["mɛːw˧".to_string()],
    )]);
    assert_eq!(transliterate_with_dict(Some(&dict), "แมว"), "mɛːw˧");
    assert_eq!(transliterate_with_dict(Some(&dict), "คน"), "kʰon");
    assert_eq!(transliterate_with_dict(Some(&dict), "แมว คน"), "mɛːw˧ kʰon");
    assert_eq!(transliterate_with_dict(None, "แมว"), "mɛːw");
}

#[test]
fn test_dict_ipa_from_corpus_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("thai_ipa.tsv"), "คน\tkʰon˧\n").unwrap();
    let cache = CorpusCache::new(Some(dir.path().to_path_buf()));
    assert_eq!(transliterate_dict_in(&cache, "คน แมว"), "kʰon˧ mɛːw");
    // no thai_ipa resource at all: rules only
    assert_eq!(transliterate_dict_in(&CorpusCache::new(None), "คน"), "kʰon");
}

#[test]
fn test_iso11940_matches_icu_for_maeo() {
    assert_eq!(iso11940::transliterate("แมว"), "mæw");
}
