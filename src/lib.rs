//! Thai text transcription: romanization, phonetic transliteration,
//! pronunciation guides and syllable swapping (puan).
//!
//! Engines are chosen by name per call. The free functions use a
//! process-wide [`Phasa`]; construct one directly to supply a different
//! corpus directory or sequence models.
//!
//! ```no_run
//! assert_eq!(phasa::romanize("แมว", "royin").unwrap(), "maeo");
//! assert_eq!(phasa::transliterate("คน", "ipa").unwrap(), "kʰon");
//! assert_eq!(phasa::swap_syllables("นาริน", true).unwrap(), "นิน-รา");
//! ```

mod dispatch;
mod error;
pub mod trace_init;

pub use dispatch::{swap_syllables, trans_list, xsampa_list, Phasa};
pub use error::PhasaError;
pub use phasa_core::engine::{
    PronounceEngine, RomanizeEngine, Transcriber, TranscribeError, TransliterateEngine,
    UnknownEngine,
};
pub use phasa_core::ipa::{PhonemeSeq, XsampaSeq};
pub use phasa_core::puan::PuanError;

/// Romanize `text` with the named engine (`royin`, `thai2rom`); `None`
/// selects `engines.romanize` from settings.
pub fn romanize<'t, 'e>(
    text: impl Into<Option<&'t str>>,
    engine: impl Into<Option<&'e str>>,
) -> Result<String, PhasaError> {
    Phasa::global().romanize(text, engine)
}

/// Phonetic transcription with the named engine (`ipa`, `icu`, `dict_ipa`,
/// `thaig2p`).
pub fn transliterate<'t, 'e>(
    text: impl Into<Option<&'t str>>,
    engine: impl Into<Option<&'e str>>,
) -> Result<String, PhasaError> {
    Phasa::global().transliterate(text, engine)
}

/// Thai pronunciation guide with the named engine (`w2p`).
pub fn pronounce<'t, 'e>(
    text: impl Into<Option<&'t str>>,
    engine: impl Into<Option<&'e str>>,
) -> Result<String, PhasaError> {
    Phasa::global().pronounce(text, engine)
}
