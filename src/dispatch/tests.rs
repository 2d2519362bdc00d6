use std::sync::atomic::{AtomicUsize, Ordering};

use phasa_core::engine::TranscribeError;
use phasa_core::neural::{
    DecodeConfig, NeuralError, Seq2SeqTransliterator, SequenceModel, Vocabulary,
};
use phasa_core::puan::PuanError;

use super::*;

fn local() -> Phasa {
    Phasa::new(Arc::new(CorpusCache::new(None)))
}

/// Reverses each word; counts calls.
struct Reverser(AtomicUsize);

impl Transcriber for Reverser {
    fn transcribe(&self, text: &str) -> Result<String, TranscribeError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(text.chars().rev().collect())
    }
}

/// Echoes the input indices back.
struct EchoModel;

impl SequenceModel for EchoModel {
    fn decode(&self, input: &[u32], max_length: usize) -> Result<Vec<u32>, NeuralError> {
        Ok(input.iter().copied().take(max_length).collect())
    }
}

#[test]
fn test_absent_and_empty_input() {
    let p = local();
    for engine in RomanizeEngine::names() {
        assert_eq!(p.romanize(None, engine).unwrap(), "", "{engine}");
        assert_eq!(p.romanize("", engine).unwrap(), "", "{engine}");
    }
    for engine in TransliterateEngine::names() {
        assert_eq!(p.transliterate(None, engine).unwrap(), "", "{engine}");
        assert_eq!(p.transliterate("", engine).unwrap(), "", "{engine}");
    }
    assert_eq!(p.pronounce(None, "w2p").unwrap(), "");
    assert_eq!(p.pronounce("", None).unwrap(), "");
}

#[test]
fn test_rule_engines() {
    let p = local();
    assert_eq!(p.romanize("แมว", "royin").unwrap(), "maeo");
    assert_eq!(p.romanize("แมว", None).unwrap(), "maeo");
    assert_eq!(p.transliterate("คน", "ipa").unwrap(), "kʰon");
    assert_eq!(p.transliterate("แมว", "icu").unwrap(), "mæw");
    assert_eq!(p.transliterate("คน", "dict_ipa").unwrap(), "kʰon");
    assert_eq!(p.pronounce("มข.", "w2p").unwrap(), "มอ-ขอ");
    assert_eq!(p.pronounce("jks", "dictionary_lookup").unwrap(), "เจ-เค-เอส");
}

#[test]
fn test_unknown_engine() {
    let p = local();
    let err = p.romanize("แมว", "nope").unwrap_err();
    assert!(matches!(err, PhasaError::UnknownEngine(_)), "{err}");
    // the name is checked even when there is nothing to transcribe
    assert!(p.transliterate(None, "royin").is_err());
    assert!(p.pronounce("คน", "ipa").is_err());
}

#[test]
fn test_missing_model_is_resource_unavailable() {
    let p = local();
    let err = p.romanize("แมว", "thai2rom").unwrap_err();
    assert!(
        matches!(err, PhasaError::ResourceUnavailable { engine: "thai2rom", .. }),
        "{err}"
    );
    let err = p.transliterate("แมว", "thaig2p").unwrap_err();
    assert!(matches!(
        err,
        PhasaError::ResourceUnavailable {
            engine: "thaig2p",
            ..
        }
    ));
}

#[test]
fn test_injected_models() {
    let p = local()
        .with_thai2rom(Reverser(AtomicUsize::new(0)))
        .with_thaig2p(Reverser(AtomicUsize::new(0)));
    assert_eq!(p.romanize("abc", "thai2rom").unwrap(), "cba");
    assert_eq!(p.romanize("abc", "sequence_model").unwrap(), "cba");
    assert_eq!(p.transliterate("abc", "thaig2p").unwrap(), "cba");
    // rule engines are unaffected
    assert_eq!(p.romanize("abc", "royin").unwrap(), "abc");
}

#[test]
fn test_seq2seq_behind_dispatch_is_deterministic() {
    let vocab = Vocabulary::from_chars("กขค".chars());
    let model = Seq2SeqTransliterator::new(vocab.clone(), vocab, EchoModel)
        .with_config(DecodeConfig { max_length: 2 });
    let p = local().with_thai2rom(model);
    assert_eq!(p.romanize("กขค ขก", "thai2rom").unwrap(), "กข ขก");
    assert_eq!(
        p.romanize("กขค ขก", "thai2rom").unwrap(),
        p.romanize("กขค ขก", "thai2rom").unwrap()
    );
    // unknown characters are dropped, never an error
    assert_eq!(p.romanize("♥", "thai2rom").unwrap(), "");
}

#[test]
fn test_remove_corpus_then_pronounce() {
    let p = local();
    assert_eq!(p.pronounce("แมว", None).unwrap(), "แมว");
    assert!(p.remove_corpus("thai_w2p").unwrap());
    for word in ["คน", "แมว", "มข.", "มช.", "jks"] {
        assert!(!p.pronounce(word, None).unwrap().is_empty(), "{word}");
    }
    assert!(p.remove_corpus("../x").is_err());
}

#[test]
fn test_swap_syllables() {
    assert_eq!(swap_syllables("นาริน", true).unwrap(), "นิน-รา");
    assert_eq!(swap_syllables("นาริน", false).unwrap(), "นินรา");
    assert_eq!(swap_syllables("แสงดีนะ", true).unwrap(), "แสง-ดะ-นี");
    let err = swap_syllables("สวัสดีครับ", true).unwrap_err();
    assert_eq!(err.invalid_syllable_count(), Some(4));
    assert!(matches!(
        swap_syllables(None, true),
        Err(PhasaError::Puan(PuanError::InvalidSyllableCount { count: 0 }))
    ));
}

#[test]
fn test_phoneme_lists() {
    let units: Vec<String> = trans_list("คน").iter().collect();
    assert_eq!(units, vec!["kʰ", "o", "n"]);
    let xsampa: Vec<String> = xsampa_list("คน").iter().collect();
    assert_eq!(xsampa, vec!["k_h", "o", "n"]);
    assert!(trans_list(None).is_empty());
    assert!(xsampa_list(None).is_empty());
}

#[test]
fn test_corpus_dir_feeds_dictionary_engines() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("thai_w2p.tsv"), "คน\tคน-คน\n").unwrap();
    std::fs::write(dir.path().join("thai_ipa.tsv"), "คน\tkʰon˧\n").unwrap();
    let p = Phasa::new(Arc::new(CorpusCache::new(Some(dir.path().to_path_buf()))));
    assert_eq!(p.pronounce("คน", "w2p").unwrap(), "คน-คน");
    assert_eq!(p.transliterate("คน", "dict_ipa").unwrap(), "kʰon˧");
    assert!(dir.path().join("thai_w2p.pdx").exists());

    assert!(p.remove_corpus("thai_w2p").unwrap());
    assert!(!dir.path().join("thai_w2p.pdx").exists());
    assert!(!p.corpus().is_loaded("thai_w2p"));
    // the source list survives and is reloaded on next use
    assert_eq!(p.pronounce("คน", "w2p").unwrap(), "คน-คน");
}

#[test]
fn test_global_romanize_required_outputs() {
    let cases = [
        ("หมอก", "mok"),
        ("หาย", "hai"),
        ("แมว", "maeo"),
        ("เดือน", "duean"),
        ("ดำ", "dam"),
        ("ดู", "du"),
        ("บัว", "bua"),
        ("กก", "kok"),
        ("พร", "phon"),
        ("กร", "kon"),
        ("กรร", "kan"),
        ("กรรม", "kam"),
        ("ฝ้าย", "fai"),
        ("นพพร", "nopphon"),
        ("อัก", "ak"),
        ("abc", "abc"),
    ];
    for (thai, expected) in cases {
        assert_eq!(crate::romanize(thai, "royin").unwrap(), expected, "{thai}");
    }
    let whole = crate::romanize("ตากใบ", None).unwrap();
    let parts = crate::romanize("ตาก", None).unwrap() + &crate::romanize("ใบ", None).unwrap();
    assert_eq!(whole, parts);
}

#[test]
fn test_global_entry_points() {
    assert_eq!(crate::romanize(None, "thai2rom").unwrap(), "");
    assert_eq!(crate::transliterate(None, "thaig2p").unwrap(), "");
    assert_eq!(crate::transliterate("แมว", "ipa").unwrap(), "mɛːw");
    assert_eq!(crate::transliterate("แมว", "icu").unwrap(), "mæw");
    for word in ["คน", "แมว", "มข.", "มช.", "jks"] {
        assert!(!crate::pronounce(word, None).unwrap().is_empty(), "{word}");
    }
    assert!(matches!(
        crate::romanize("แมว", "pinyin"),
        Err(PhasaError::UnknownEngine(_))
    ));
}
