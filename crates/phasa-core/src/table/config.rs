use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::{is_consonant, is_thai};

#[derive(Deserialize)]
struct TableConfig {
    initials: BTreeMap<String, String>,
    vowels: BTreeMap<String, String>,
    finals: BTreeMap<String, String>,
}

/// The three sections of a mapping table, sorted by key.
#[derive(Debug, Clone)]
pub struct TableSections {
    pub initials: BTreeMap<String, String>,
    pub vowels: BTreeMap<String, String>,
    pub finals: BTreeMap<String, String>,
}

impl TableSections {
    pub fn rule_count(&self) -> usize {
        self.initials.len() + self.vowels.len() + self.finals.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("[initials] key must be Thai consonants: {0}")]
    InvalidInitial(String),
    #[error("[vowels] key must be Thai with one '-' placeholder: {0}")]
    InvalidVowel(String),
    #[error("[finals] key must be a single Thai consonant: {0}")]
    InvalidFinal(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into `[initials]`, `[vowels]` and `[finals]` sections.
///
/// Initial values may be empty (a glottal onset like อ writes nothing);
/// vowel and final values may not.
pub fn parse_table_toml(toml_str: &str) -> Result<TableSections, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.initials.is_empty() {
        return Err(TableConfigError::Empty("initials"));
    }
    if config.vowels.is_empty() {
        return Err(TableConfigError::Empty("vowels"));
    }
    if config.finals.is_empty() {
        return Err(TableConfigError::Empty("finals"));
    }

    for key in config.initials.keys() {
        if key.is_empty() || !key.chars().all(is_consonant) {
            return Err(TableConfigError::InvalidInitial(key.clone()));
        }
    }

    for (key, value) in &config.vowels {
        let placeholders = key.chars().filter(|&c| c == '-').count();
        if placeholders != 1 || !key.chars().all(|c| c == '-' || is_thai(c)) {
            return Err(TableConfigError::InvalidVowel(key.clone()));
        }
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key.clone()));
        }
    }

    for (key, value) in &config.finals {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_consonant(c) => {}
            _ => return Err(TableConfigError::InvalidFinal(key.clone())),
        }
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(TableSections {
        initials: config.initials,
        vowels: config.vowels,
        finals: config.finals,
    })
}
