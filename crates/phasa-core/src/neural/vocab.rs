use std::collections::HashMap;

use super::NeuralError;

pub const PAD: u32 = 0;
pub const UNK: u32 = 1;
pub const START: u32 = 2;
pub const END: u32 = 3;

/// Token spellings of the reserved indices, in index order.
pub const RESERVED_TOKENS: [&str; 4] = ["<PAD>", "<UNK>", "<start>", "<end>"];

/// Bijective character ↔ index map. Indices 0..4 are reserved; characters
/// start at 4.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    to_index: HashMap<char, u32>,
    to_char: Vec<char>,
}

impl Vocabulary {
    /// Build from characters in index order. Repeats keep their first index.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut to_index = HashMap::new();
        let mut to_char = Vec::new();
        for c in chars {
            if !to_index.contains_key(&c) {
                to_index.insert(c, (RESERVED_TOKENS.len() + to_char.len()) as u32);
                to_char.push(c);
            }
        }
        Self { to_index, to_char }
    }

    /// Build from a token list whose first four entries are the reserved
    /// tokens and whose remaining entries are single characters.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, NeuralError> {
        if tokens.len() < RESERVED_TOKENS.len() {
            return Err(NeuralError::Vocabulary(format!(
                "expected at least {} tokens, got {}",
                RESERVED_TOKENS.len(),
                tokens.len()
            )));
        }
        for (i, expected) in RESERVED_TOKENS.iter().enumerate() {
            if tokens[i].as_ref() != *expected {
                return Err(NeuralError::Vocabulary(format!(
                    "index {i} must be {expected}, got {:?}",
                    tokens[i].as_ref()
                )));
            }
        }
        let mut chars = Vec::with_capacity(tokens.len() - RESERVED_TOKENS.len());
        for token in &tokens[RESERVED_TOKENS.len()..] {
            let mut it = token.as_ref().chars();
            match (it.next(), it.next()) {
                (Some(c), None) => chars.push(c),
                _ => {
                    return Err(NeuralError::Vocabulary(format!(
                        "token {:?} is not a single character",
                        token.as_ref()
                    )))
                }
            }
        }
        let vocab = Self::from_chars(chars.iter().copied());
        if vocab.to_char.len() != chars.len() {
            return Err(NeuralError::Vocabulary("duplicate character".to_string()));
        }
        Ok(vocab)
    }

    /// Size including the reserved indices.
    pub fn len(&self) -> usize {
        RESERVED_TOKENS.len() + self.to_char.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_char.is_empty()
    }

    pub fn index(&self, c: char) -> u32 {
        self.to_index.get(&c).copied().unwrap_or(UNK)
    }

    /// Character at `index`; `None` for reserved or out-of-range indices.
    pub fn char_at(&self, index: u32) -> Option<char> {
        (index as usize)
            .checked_sub(RESERVED_TOKENS.len())
            .and_then(|i| self.to_char.get(i))
            .copied()
    }

    /// Indices of `word` terminated by `END`. Unknown characters map to
    /// `UNK`; the empty word is `[END]`.
    pub fn encode(&self, word: &str) -> Vec<u32> {
        let mut seq: Vec<u32> = word.chars().map(|c| self.index(c)).collect();
        seq.push(END);
        seq
    }

    /// Characters of `indices` up to the first `END`, skipping reserved
    /// indices.
    pub fn decode(&self, indices: &[u32]) -> String {
        indices
            .iter()
            .take_while(|&&i| i != END)
            .filter_map(|&i| self.char_at(i))
            .collect()
    }

    pub fn tokens(&self) -> Vec<String> {
        RESERVED_TOKENS
            .iter()
            .map(|t| t.to_string())
            .chain(self.to_char.iter().map(|c| c.to_string()))
            .collect()
    }
}
