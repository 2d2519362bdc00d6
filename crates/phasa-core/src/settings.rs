//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the mapping tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::corpus::valid_name;
use crate::engine::{PronounceEngine, RomanizeEngine, TransliterateEngine};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engines: EngineSettings,
    pub neural: NeuralSettings,
    pub corpus: CorpusSettings,
    pub puan: PuanSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub romanize: String,
    pub transliterate: String,
    pub pronounce: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeuralSettings {
    pub max_length: usize,
    #[serde(default)]
    pub thai2rom_dir: Option<PathBuf>,
    #[serde(default)]
    pub thaig2p_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusSettings {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    pub w2p_name: String,
    pub ipa_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuanSettings {
    pub separator: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_engine {
        ($field:ident, $engine:ty) => {
            if s.engines.$field.parse::<$engine>().is_err() {
                return Err(SettingsError::InvalidValue {
                    field: concat!("engines.", stringify!($field)).to_string(),
                    reason: format!(
                        "unknown engine {:?} (expected one of {})",
                        s.engines.$field,
                        <$engine>::names().join(", ")
                    ),
                });
            }
        };
    }
    macro_rules! check_corpus_name {
        ($field:ident) => {
            if !valid_name(&s.corpus.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!("corpus.", stringify!($field)).to_string(),
                    reason: "must be non-empty ASCII letters, digits, '_' or '-'".to_string(),
                });
            }
        };
    }

    check_engine!(romanize, RomanizeEngine);
    check_engine!(transliterate, TransliterateEngine);
    check_engine!(pronounce, PronounceEngine);

    check_positive_usize!(neural.max_length);

    check_corpus_name!(w2p_name);
    check_corpus_name!(ipa_name);

    Ok(())
}
