use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;

fn thai_vocab() -> Vocabulary {
    Vocabulary::from_chars("กขคงมวนแเาิีุู".chars())
}

fn latin_vocab() -> Vocabulary {
    Vocabulary::from_chars("abcdefghijklmnopqrstuvwxyz".chars())
}

/// Maps each source character to a fixed target character.
struct CharMapModel {
    source: Vocabulary,
    target: Vocabulary,
    calls: Arc<AtomicUsize>,
}

impl CharMapModel {
    fn new() -> Self {
        Self {
            source: thai_vocab(),
            target: latin_vocab(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn latin_for(c: char) -> char {
        match c {
            'ก' => 'k',
            'ข' | 'ค' => 'k',
            'ง' => 'g',
            'ม' => 'm',
            'ว' => 'o',
            'น' => 'n',
            'แ' => 'a',
            'เ' => 'e',
            'า' => 'a',
            'ิ' | 'ี' => 'i',
            _ => 'u',
        }
    }
}

impl SequenceModel for CharMapModel {
    fn decode(&self, input: &[u32], max_length: usize) -> Result<Vec<u32>, NeuralError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(input
            .iter()
            .take_while(|&&i| i != END)
            .map(|&i| match self.source.char_at(i) {
                Some(c) => self.target.index(Self::latin_for(c)),
                None => UNK,
            })
            .take(max_length)
            .collect())
    }
}

/// Ignores `max_length` and never emits `END`.
struct RunawayModel;

impl SequenceModel for RunawayModel {
    fn decode(&self, _input: &[u32], _max_length: usize) -> Result<Vec<u32>, NeuralError> {
        Ok(vec![4; 500])
    }
}

struct FailingModel;

impl SequenceModel for FailingModel {
    fn decode(&self, _input: &[u32], _max_length: usize) -> Result<Vec<u32>, NeuralError> {
        Err(NeuralError::Model("boom".to_string()))
    }
}

// --- Vocabulary ---

#[test]
fn test_reserved_indices() {
    assert_eq!((PAD, UNK, START, END), (0, 1, 2, 3));
    let vocab = thai_vocab();
    assert_eq!(vocab.index('ก'), 4);
    assert_eq!(vocab.char_at(4), Some('ก'));
    for reserved in [PAD, UNK, START, END] {
        assert_eq!(vocab.char_at(reserved), None);
    }
    assert_eq!(vocab.char_at(vocab.len() as u32), None);
}

#[test]
fn test_prepare_sequence_unknown_chars() {
    let t = Seq2SeqTransliterator::new(thai_vocab(), latin_vocab(), CharMapModel::new());
    assert_eq!(t.prepare_sequence("A"), vec![UNK, END]);
    assert_eq!(t.prepare_sequence("♥"), vec![UNK, END]);
    assert_ne!(t.prepare_sequence("ก"), vec![UNK, END]);
    assert_eq!(t.prepare_sequence(""), vec![END]);
    assert_eq!(t.prepare_sequence("กA"), vec![4, UNK, END]);
}

#[test]
fn test_decode_stops_at_end_and_skips_reserved() {
    let vocab = latin_vocab();
    let a = vocab.index('a');
    let b = vocab.index('b');
    assert_eq!(vocab.decode(&[a, PAD, UNK, b, END, a]), "ab");
    assert_eq!(vocab.decode(&[]), "");
}

#[test]
fn test_from_tokens() {
    let tokens = ["<PAD>", "<UNK>", "<start>", "<end>", "ก", "ข"];
    let vocab = Vocabulary::from_tokens(&tokens).unwrap();
    assert_eq!(vocab.len(), 6);
    assert_eq!(vocab.index('ข'), 5);
    assert_eq!(vocab.tokens(), tokens.map(String::from).to_vec());
}

#[test]
fn test_from_tokens_rejects_bad_lists() {
    let wrong_reserved = ["<PAD>", "<start>", "<UNK>", "<end>", "ก"];
    assert!(matches!(
        Vocabulary::from_tokens(&wrong_reserved),
        Err(NeuralError::Vocabulary(_))
    ));
    let multi_char = ["<PAD>", "<UNK>", "<start>", "<end>", "กข"];
    assert!(Vocabulary::from_tokens(&multi_char).is_err());
    let duplicate = ["<PAD>", "<UNK>", "<start>", "<end>", "ก", "ก"];
    assert!(Vocabulary::from_tokens(&duplicate).is_err());
    assert!(Vocabulary::from_tokens(&["<PAD>"]).is_err());
}

#[test]
fn test_vocab_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(VOCAB_FILE);
    save_vocabularies(&path, &thai_vocab(), &latin_vocab()).unwrap();
    let (source, target) = load_vocabularies(&path).unwrap();
    assert_eq!(source.tokens(), thai_vocab().tokens());
    assert_eq!(target.len(), 30);
}

#[test]
fn test_model_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, r#"{"embedding_dim": 16, "hidden_dim": 8}"#).unwrap();
    assert_eq!(
        load_model_config(&path).unwrap(),
        ModelConfig {
            embedding_dim: 16,
            hidden_dim: 8
        }
    );
    std::fs::write(&path, "{").unwrap();
    assert!(matches!(
        load_model_config(&path),
        Err(NeuralError::Metadata(_))
    ));
}

// --- Seq2SeqTransliterator ---

#[test]
fn test_transliterate_with_model() {
    let t = Seq2SeqTransliterator::new(thai_vocab(), latin_vocab(), CharMapModel::new());
    assert_eq!(t.transliterate("แมว").unwrap(), "amo");
    assert_eq!(t.transliterate("").unwrap(), "");
}

#[test]
fn test_unknown_chars_never_raise() {
    let t = Seq2SeqTransliterator::new(thai_vocab(), latin_vocab(), CharMapModel::new());
    // unknown source characters decode to UNK, which renders as nothing
    assert_eq!(t.transliterate("♥").unwrap(), "");
    assert_eq!(t.transliterate("A").unwrap(), "");
}

#[test]
fn test_words_are_split_and_rejoined() {
    let model = CharMapModel::new();
    let calls = Arc::clone(&model.calls);
    let t = Seq2SeqTransliterator::new(thai_vocab(), latin_vocab(), model);
    assert_eq!(t.transliterate("  แมว\tกา  ").unwrap(), "amo ka");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_deterministic() {
    let t = Seq2SeqTransliterator::new(thai_vocab(), latin_vocab(), CharMapModel::new());
    let first = t.transliterate("เงิน").unwrap();
    for _ in 0..5 {
        assert_eq!(t.transliterate("เงิน").unwrap(), first);
    }
}

#[test]
fn test_output_bounded_by_max_length() {
    let t = Seq2SeqTransliterator::new(thai_vocab(), latin_vocab(), RunawayModel)
        .with_config(DecodeConfig { max_length: 7 });
    assert_eq!(t.transliterate_word("ก").unwrap().chars().count(), 7);
}

#[test]
fn test_default_max_length_from_settings() {
    assert_eq!(DecodeConfig::default().max_length, 64);
}

#[test]
fn test_model_errors_propagate() {
    let t = Seq2SeqTransliterator::new(thai_vocab(), latin_vocab(), FailingModel);
    assert!(matches!(t.transliterate("ก"), Err(NeuralError::Model(_))));
}

// --- candle model ---

#[cfg(feature = "neural")]
mod candle_model {
    use candle_core::{DType, Device};
    use candle_nn::{VarBuilder, VarMap};

    use super::*;

    fn random_model(source: &Vocabulary, target: &Vocabulary) -> Seq2SeqModel {
        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
        let config = ModelConfig {
            embedding_dim: 8,
            hidden_dim: 6,
        };
        Seq2SeqModel::new(&config, source.len(), target.len(), vb).unwrap()
    }

    #[test]
    fn test_random_weights_bounded_and_deterministic() {
        let (source, target) = (thai_vocab(), latin_vocab());
        let model = random_model(&source, &target);
        let input = source.encode("แมว");
        let first = model.decode(&input, 10).unwrap();
        assert!(first.len() <= 10);
        assert!(first.iter().all(|&i| (i as usize) < target.len() && i != END));
        assert_eq!(model.decode(&input, 10).unwrap(), first);
        assert!(model.decode(&input, 0).unwrap().is_empty());
    }

    #[test]
    fn test_random_weights_through_transliterator() {
        let (source, target) = (thai_vocab(), latin_vocab());
        let model = random_model(&source, &target);
        let t = Seq2SeqTransliterator::new(source, target, model)
            .with_config(DecodeConfig { max_length: 5 });
        let out = t.transliterate("ก ♥").unwrap();
        assert!(out.split(' ').all(|w| w.chars().count() <= 5));
        assert_eq!(t.transliterate("ก ♥").unwrap(), out);
    }

    #[test]
    #[ignore] // Requires a trained thai2rom artifact
    fn test_thai2rom_artifact() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/thai2rom");
        if !dir.join(WEIGHTS_FILE).exists() {
            eprintln!("skipping: artifact not found at {}", dir.display());
            return;
        }
        let t = Seq2SeqTransliterator::open(&dir).unwrap();
        assert_eq!(t.transliterate("แมว").unwrap(), "maeo");
        assert_eq!(t.transliterate("แมว").unwrap(), t.transliterate("แมว").unwrap());
    }
}
