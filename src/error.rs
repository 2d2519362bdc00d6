use phasa_core::corpus::CorpusError;
use phasa_core::engine::{TranscribeError, UnknownEngine};
use phasa_core::neural::NeuralError;
use phasa_core::puan::PuanError;
use phasa_core::settings::SettingsError;
use phasa_core::table::TableConfigError;

#[derive(Debug, thiserror::Error)]
pub enum PhasaError {
    #[error(transparent)]
    UnknownEngine(#[from] UnknownEngine),
    #[error("{engine} is unavailable: {reason}")]
    ResourceUnavailable {
        engine: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Puan(#[from] PuanError),
    #[error(transparent)]
    Neural(#[from] NeuralError),
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Table(#[from] TableConfigError),
}

impl From<TranscribeError> for PhasaError {
    fn from(e: TranscribeError) -> Self {
        match e {
            TranscribeError::ResourceUnavailable { engine, reason } => {
                PhasaError::ResourceUnavailable { engine, reason }
            }
            TranscribeError::Neural(e) => PhasaError::Neural(e),
        }
    }
}

impl PhasaError {
    /// The syllable count when this is a puan count failure.
    pub fn invalid_syllable_count(&self) -> Option<usize> {
        match self {
            PhasaError::Puan(PuanError::InvalidSyllableCount { count }) => Some(*count),
            _ => None,
        }
    }
}
