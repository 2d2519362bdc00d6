//! Sequence-to-sequence transliteration.
//!
//! A word is encoded as vocabulary indices terminated by `END`, decoded
//! greedily by a `SequenceModel`, and mapped back through the target
//! vocabulary. The same machinery serves romanization (thai2rom) and
//! phoneme output (thaig2p); only the artifact differs.
//!
//! The candle encoder–decoder is behind the `neural` feature. Without it,
//! any `SequenceModel` implementation can be plugged in.

#[cfg(feature = "neural")]
mod seq2seq;
#[cfg(test)]
mod tests;
mod vocab;

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

#[cfg(feature = "neural")]
pub use seq2seq::Seq2SeqModel;
pub use vocab::{Vocabulary, END, PAD, RESERVED_TOKENS, START, UNK};

use crate::settings::settings;

pub const CONFIG_FILE: &str = "config.json";
pub const VOCAB_FILE: &str = "vocab.json";
pub const WEIGHTS_FILE: &str = "model.safetensors";

#[derive(Debug, thiserror::Error)]
pub enum NeuralError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid model metadata: {0}")]
    Metadata(String),
    #[error("invalid vocabulary: {0}")]
    Vocabulary(String),
    #[error("model error: {0}")]
    Model(String),
}

/// Greedy decoding parameters.
#[derive(Debug, Clone, Copy)]
pub struct DecodeConfig {
    /// Hard bound on output indices per word.
    pub max_length: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_length: settings().neural.max_length,
        }
    }
}

/// A trained encoder–decoder treated as a black box.
pub trait SequenceModel: Send + Sync {
    /// Decode greedily from `START`. Returns target indices without the
    /// terminating `END`, at most `max_length` of them.
    fn decode(&self, input: &[u32], max_length: usize) -> Result<Vec<u32>, NeuralError>;
}

/// Layer sizes stored in `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub embedding_dim: usize,
    pub hidden_dim: usize,
}

#[derive(Serialize, Deserialize)]
struct VocabFile {
    source: Vec<String>,
    target: Vec<String>,
}

pub fn load_model_config(path: &Path) -> Result<ModelConfig, NeuralError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| NeuralError::Metadata(e.to_string()))
}

/// Read `(source, target)` vocabularies from a `vocab.json`.
pub fn load_vocabularies(path: &Path) -> Result<(Vocabulary, Vocabulary), NeuralError> {
    let content = fs::read_to_string(path)?;
    let file: VocabFile =
        serde_json::from_str(&content).map_err(|e| NeuralError::Metadata(e.to_string()))?;
    Ok((
        Vocabulary::from_tokens(&file.source)?,
        Vocabulary::from_tokens(&file.target)?,
    ))
}

pub fn save_vocabularies(
    path: &Path,
    source: &Vocabulary,
    target: &Vocabulary,
) -> Result<(), NeuralError> {
    let file = VocabFile {
        source: source.tokens(),
        target: target.tokens(),
    };
    let json =
        serde_json::to_string_pretty(&file).map_err(|e| NeuralError::Metadata(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

pub struct Seq2SeqTransliterator {
    source: Vocabulary,
    target: Vocabulary,
    model: Box<dyn SequenceModel>,
    config: DecodeConfig,
}

impl Seq2SeqTransliterator {
    pub fn new(source: Vocabulary, target: Vocabulary, model: impl SequenceModel + 'static) -> Self {
        Self {
            source,
            target,
            model: Box::new(model),
            config: DecodeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DecodeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load an artifact directory: `config.json`, `vocab.json` and
    /// `model.safetensors`.
    #[cfg(feature = "neural")]
    pub fn open(dir: &Path) -> Result<Self, NeuralError> {
        let config = load_model_config(&dir.join(CONFIG_FILE))?;
        let (source, target) = load_vocabularies(&dir.join(VOCAB_FILE))?;
        let model =
            Seq2SeqModel::load(&dir.join(WEIGHTS_FILE), &config, source.len(), target.len())
                .map_err(|e| NeuralError::Model(format!("{e:#}")))?;
        debug!(dir = %dir.display(), src = source.len(), tgt = target.len(), "seq2seq loaded");
        Ok(Self::new(source, target, model))
    }

    pub fn source_vocab(&self) -> &Vocabulary {
        &self.source
    }

    pub fn target_vocab(&self) -> &Vocabulary {
        &self.target
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Model input for `word`: source indices terminated by `END`.
    pub fn prepare_sequence(&self, word: &str) -> Vec<u32> {
        self.source.encode(word)
    }

    pub fn transliterate_word(&self, word: &str) -> Result<String, NeuralError> {
        if word.is_empty() {
            return Ok(String::new());
        }
        let input = self.prepare_sequence(word);
        let mut output = self.model.decode(&input, self.config.max_length)?;
        if output.len() > self.config.max_length {
            debug!(word, len = output.len(), "model exceeded max_length, truncating");
            output.truncate(self.config.max_length);
        }
        Ok(self.target.decode(&output))
    }

    /// Transliterate whitespace-separated words, re-joined with single
    /// spaces.
    pub fn transliterate(&self, text: &str) -> Result<String, NeuralError> {
        let _span = debug_span!("seq2seq", len = text.len()).entered();
        let words = text
            .split_whitespace()
            .map(|w| self.transliterate_word(w))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(words.join(" "))
    }
}
