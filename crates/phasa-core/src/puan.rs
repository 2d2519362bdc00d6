//! Syllable-swapping word play (คำผวน).
//!
//! Onsets stay in place while rhymes (leading vowel, vowel, tone mark and
//! final) trade places: `นาริน` → `นิน-รา`.

use tracing::debug_span;

use crate::settings::settings;
use crate::syllable::{self, Syllable};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PuanError {
    #[error("puan needs two or three syllables, got {count}")]
    InvalidSyllableCount { count: usize },
    #[error("cannot split {0:?} into Thai syllables")]
    Undecomposable(String),
}

/// Swapped syllables, before joining.
pub fn permute(word: &str) -> Result<Vec<String>, PuanError> {
    let segments = syllable::parse(word);
    let syllables = segments
        .iter()
        .map(|segment| {
            segment
                .as_syllable()
                .ok_or_else(|| PuanError::Undecomposable(segment.text()))
        })
        .collect::<Result<Vec<&Syllable>, _>>()?;

    match syllables.as_slice() {
        [a, b] => Ok(vec![b.respell(&a.onset), a.respell(&b.onset)]),
        // the first syllable stays; the last two trade rhymes
        [a, b, c] => Ok(vec![a.spelled(), c.respell(&b.onset), b.respell(&c.onset)]),
        other => Err(PuanError::InvalidSyllableCount { count: other.len() }),
    }
}

/// Swap with the configured `puan.separator` when `use_separator`, else
/// with nothing between syllables.
pub fn swap_syllables(word: &str, use_separator: bool) -> Result<String, PuanError> {
    let separator = if use_separator {
        settings().puan.separator.as_str()
    } else {
        ""
    };
    swap_with_separator(word, separator)
}

pub fn swap_with_separator(word: &str, separator: &str) -> Result<String, PuanError> {
    let _span = debug_span!("puan", word).entered();
    Ok(permute(word)?.join(separator))
}
