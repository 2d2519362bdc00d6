//! Engine selection by name over a shared set of resources.

#[cfg(test)]
mod tests;

#[cfg(feature = "neural")]
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::{debug, debug_span};

use phasa_core::corpus::CorpusCache;
use phasa_core::engine::{
    DictIpa, IpaRules, Iso11940, PronounceEngine, RomanizeEngine, Royin, Transcriber,
    TransliterateEngine, W2p,
};
use phasa_core::ipa::{self, PhonemeSeq, XsampaSeq};
use phasa_core::puan;
use phasa_core::settings::settings;

use crate::PhasaError;

/// Resources for every engine: the corpus cache and any loaded sequence
/// models. Rule engines need nothing beyond the embedded tables.
pub struct Phasa {
    corpus: Arc<CorpusCache>,
    dict_ipa: DictIpa,
    w2p: W2p,
    thai2rom: Option<Box<dyn Transcriber>>,
    thaig2p: Option<Box<dyn Transcriber>>,
}

impl Phasa {
    pub fn new(corpus: Arc<CorpusCache>) -> Self {
        Self {
            dict_ipa: DictIpa {
                cache: Arc::clone(&corpus),
            },
            w2p: W2p {
                cache: Arc::clone(&corpus),
            },
            corpus,
            thai2rom: None,
            thaig2p: None,
        }
    }

    /// The process-wide instance: the global corpus cache plus the models
    /// named by `neural.thai2rom_dir` / `neural.thaig2p_dir`. A model that
    /// fails to load is logged and left unavailable.
    pub fn global() -> &'static Phasa {
        static INSTANCE: OnceLock<Phasa> = OnceLock::new();
        INSTANCE.get_or_init(Self::from_settings)
    }

    /// A new instance over the global corpus cache with the models named in
    /// settings.
    pub fn from_settings() -> Self {
        #[allow(unused_mut)]
        let mut phasa = Self::new(Arc::clone(CorpusCache::global()));
        #[cfg(feature = "neural")]
        {
            let neural = &settings().neural;
            if let Some(dir) = &neural.thai2rom_dir {
                match Self::open_model(dir) {
                    Ok(model) => phasa.thai2rom = Some(model),
                    Err(e) => tracing::warn!(dir = %dir.display(), "thai2rom not loaded: {e}"),
                }
            }
            if let Some(dir) = &neural.thaig2p_dir {
                match Self::open_model(dir) {
                    Ok(model) => phasa.thaig2p = Some(model),
                    Err(e) => tracing::warn!(dir = %dir.display(), "thaig2p not loaded: {e}"),
                }
            }
        }
        phasa
    }

    #[cfg(feature = "neural")]
    fn open_model(dir: &Path) -> Result<Box<dyn Transcriber>, PhasaError> {
        let model = phasa_core::neural::Seq2SeqTransliterator::open(dir)?;
        Ok(Box::new(model))
    }

    /// Use `model` for the `thai2rom` engine.
    pub fn with_thai2rom(mut self, model: impl Transcriber + 'static) -> Self {
        self.thai2rom = Some(Box::new(model));
        self
    }

    /// Use `model` for the `thaig2p` engine.
    pub fn with_thaig2p(mut self, model: impl Transcriber + 'static) -> Self {
        self.thaig2p = Some(Box::new(model));
        self
    }

    /// Load the `thai2rom` artifact directory.
    #[cfg(feature = "neural")]
    pub fn load_thai2rom(mut self, dir: &Path) -> Result<Self, PhasaError> {
        self.thai2rom = Some(Self::open_model(dir)?);
        Ok(self)
    }

    /// Load the `thaig2p` artifact directory.
    #[cfg(feature = "neural")]
    pub fn load_thaig2p(mut self, dir: &Path) -> Result<Self, PhasaError> {
        self.thaig2p = Some(Self::open_model(dir)?);
        Ok(self)
    }

    pub fn corpus(&self) -> &CorpusCache {
        &self.corpus
    }

    /// Evict a pronunciation resource; the next lookup reloads it.
    pub fn remove_corpus(&self, name: &str) -> Result<bool, PhasaError> {
        Ok(self.corpus.remove(name)?)
    }

    pub fn romanizer(&self, engine: RomanizeEngine) -> Result<&dyn Transcriber, PhasaError> {
        match engine {
            RomanizeEngine::Royin => Ok(&Royin),
            RomanizeEngine::Thai2Rom => model(&self.thai2rom, engine.name(), "thai2rom_dir"),
        }
    }

    pub fn transliterator(
        &self,
        engine: TransliterateEngine,
    ) -> Result<&dyn Transcriber, PhasaError> {
        match engine {
            TransliterateEngine::Ipa => Ok(&IpaRules),
            TransliterateEngine::Icu => Ok(&Iso11940),
            TransliterateEngine::DictIpa => Ok(&self.dict_ipa),
            TransliterateEngine::Thaig2p => model(&self.thaig2p, engine.name(), "thaig2p_dir"),
        }
    }

    pub fn pronouncer(&self, engine: PronounceEngine) -> Result<&dyn Transcriber, PhasaError> {
        match engine {
            PronounceEngine::W2p => Ok(&self.w2p),
        }
    }

    /// Romanize with `engine` (default `engines.romanize`).
    pub fn romanize<'t, 'e>(
        &self,
        text: impl Into<Option<&'t str>>,
        engine: impl Into<Option<&'e str>>,
    ) -> Result<String, PhasaError> {
        let engine: RomanizeEngine = engine
            .into()
            .unwrap_or(settings().engines.romanize.as_str())
            .parse()?;
        let _span = debug_span!("romanize", engine = engine.name()).entered();
        match non_empty(text) {
            Some(text) => Ok(self.romanizer(engine)?.transcribe(text)?),
            None => Ok(String::new()),
        }
    }

    /// Phonetic transcription with `engine` (default `engines.transliterate`).
    pub fn transliterate<'t, 'e>(
        &self,
        text: impl Into<Option<&'t str>>,
        engine: impl Into<Option<&'e str>>,
    ) -> Result<String, PhasaError> {
        let engine: TransliterateEngine = engine
            .into()
            .unwrap_or(settings().engines.transliterate.as_str())
            .parse()?;
        let _span = debug_span!("transliterate", engine = engine.name()).entered();
        match non_empty(text) {
            Some(text) => Ok(self.transliterator(engine)?.transcribe(text)?),
            None => Ok(String::new()),
        }
    }

    /// Pronunciation guide with `engine` (default `engines.pronounce`).
    pub fn pronounce<'t, 'e>(
        &self,
        text: impl Into<Option<&'t str>>,
        engine: impl Into<Option<&'e str>>,
    ) -> Result<String, PhasaError> {
        let engine: PronounceEngine = engine
            .into()
            .unwrap_or(settings().engines.pronounce.as_str())
            .parse()?;
        let _span = debug_span!("pronounce", engine = engine.name()).entered();
        match non_empty(text) {
            Some(text) => Ok(self.pronouncer(engine)?.transcribe(text)?),
            None => Ok(String::new()),
        }
    }
}

/// Swap rhymes between syllables. Absent input counts as empty and fails
/// the syllable count check.
pub fn swap_syllables<'t>(
    text: impl Into<Option<&'t str>>,
    use_separator: bool,
) -> Result<String, PhasaError> {
    Ok(puan::swap_syllables(
        text.into().unwrap_or_default(),
        use_separator,
    )?)
}

/// Rule IPA units of `text`; empty for absent input.
pub fn trans_list<'t>(text: impl Into<Option<&'t str>>) -> PhonemeSeq {
    ipa::trans_list(text.into().unwrap_or_default())
}

/// X-SAMPA units of `text`; empty for absent input.
pub fn xsampa_list<'t>(text: impl Into<Option<&'t str>>) -> XsampaSeq {
    ipa::xsampa_list(text.into().unwrap_or_default())
}

fn non_empty<'t>(text: impl Into<Option<&'t str>>) -> Option<&'t str> {
    text.into().filter(|t| !t.is_empty())
}

fn model<'a>(
    slot: &'a Option<Box<dyn Transcriber>>,
    engine: &'static str,
    setting: &str,
) -> Result<&'a dyn Transcriber, PhasaError> {
    match slot {
        Some(m) => Ok(m.as_ref()),
        None => {
            debug!(engine, "no model loaded");
            let reason = if cfg!(feature = "neural") {
                format!("no model loaded (set neural.{setting})")
            } else {
                "built without the `neural` feature".to_string()
            };
            Err(PhasaError::ResourceUnavailable { engine, reason })
        }
    }
}
