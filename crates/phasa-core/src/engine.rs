//! Engine names and the `Transcriber` seam.
//!
//! Each operation has a closed set of engines resolved from a static
//! name table. Besides the canonical name, each engine accepts a
//! descriptive alias (`dictionary_lookup` for `w2p`, ...).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::corpus::CorpusCache;
use crate::neural::{NeuralError, Seq2SeqTransliterator};
use crate::{ipa, pronounce, royin};

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("{engine} is unavailable: {reason}")]
    ResourceUnavailable {
        engine: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Neural(#[from] NeuralError),
}

/// One engine: text in, transcription out.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, text: &str) -> Result<String, TranscribeError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {operation} engine {name:?} (expected one of {expected})")]
pub struct UnknownEngine {
    pub operation: &'static str,
    pub name: String,
    pub expected: String,
}

macro_rules! engine_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $operation:literal {
            $($variant:ident => [$canonical:literal $(, $alias:literal)*]),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            const TABLE: &'static [(&'static str, $name)] = &[
                $(($canonical, $name::$variant), $(($alias, $name::$variant),)*)+
            ];

            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $canonical),+
                }
            }

            /// Canonical names in declaration order.
            pub fn names() -> Vec<&'static str> {
                Self::ALL.iter().map(|e| e.name()).collect()
            }
        }

        impl FromStr for $name {
            type Err = UnknownEngine;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::TABLE
                    .iter()
                    .find(|(n, _)| *n == s)
                    .map(|&(_, e)| e)
                    .ok_or_else(|| UnknownEngine {
                        operation: $operation,
                        name: s.to_string(),
                        expected: Self::names().join(", "),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

engine_enum! {
    /// Thai → Latin spelling.
    RomanizeEngine, "romanize" {
        Royin => ["royin", "default_rule_based"],
        Thai2Rom => ["thai2rom", "sequence_model"],
    }
}

engine_enum! {
    /// Thai → phonetic notation.
    TransliterateEngine, "transliterate" {
        Ipa => ["ipa", "rule_g2p"],
        Icu => ["icu", "iso11940", "external_library"],
        DictIpa => ["dict_ipa", "dictionary_ipa"],
        Thaig2p => ["thaig2p"],
    }
}

engine_enum! {
    /// Thai → Thai pronunciation guide.
    PronounceEngine, "pronounce" {
        W2p => ["w2p", "dictionary_lookup"],
    }
}

impl RomanizeEngine {
    pub fn is_neural(self) -> bool {
        self == RomanizeEngine::Thai2Rom
    }
}

impl TransliterateEngine {
    pub fn is_neural(self) -> bool {
        self == TransliterateEngine::Thaig2p
    }
}

/// Royal Thai General System rules.
pub struct Royin;

impl Transcriber for Royin {
    fn transcribe(&self, text: &str) -> Result<String, TranscribeError> {
        Ok(royin::romanize(text))
    }
}

/// Rule g2p with the IPA table.
pub struct IpaRules;

impl Transcriber for IpaRules {
    fn transcribe(&self, text: &str) -> Result<String, TranscribeError> {
        Ok(ipa::transliterate(text))
    }
}

/// ISO 11940 letter transliteration.
pub struct Iso11940;

impl Transcriber for Iso11940 {
    fn transcribe(&self, text: &str) -> Result<String, TranscribeError> {
        Ok(ipa::iso11940::transliterate(text))
    }
}

/// Dictionary IPA over a corpus cache, rules on a miss.
pub struct DictIpa {
    pub cache: Arc<CorpusCache>,
}

impl Transcriber for DictIpa {
    fn transcribe(&self, text: &str) -> Result<String, TranscribeError> {
        Ok(ipa::transliterate_dict_in(&self.cache, text))
    }
}

/// Pronunciation guide over a corpus cache, rules on a miss.
pub struct W2p {
    pub cache: Arc<CorpusCache>,
}

impl Transcriber for W2p {
    fn transcribe(&self, text: &str) -> Result<String, TranscribeError> {
        Ok(pronounce::pronounce_in(&self.cache, text))
    }
}

impl Transcriber for Seq2SeqTransliterator {
    fn transcribe(&self, text: &str) -> Result<String, TranscribeError> {
        Ok(self.transliterate(text)?)
    }
}
