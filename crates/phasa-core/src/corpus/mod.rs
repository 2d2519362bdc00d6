//! Named pronunciation resources with a read-through cache.
//!
//! `CorpusCache::get(name)` returns the in-memory copy when present and
//! otherwise loads, in order: the compiled `<data_dir>/<name>.pdx`, the raw
//! `<data_dir>/<name>.tsv` (compiling it next to the source), then the
//! embedded seed list. `remove(name)` evicts the in-memory copy and deletes
//! the compiled file so the next `get` rebuilds from source.

mod pron_dict;
mod pron_dict_io;

pub use pron_dict::PronunciationDict;

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::settings::settings;

/// Environment variable consulted when `corpus.data_dir` is unset.
pub const DATA_DIR_ENV: &str = "PHASA_DATA_DIR";

pub const COMPILED_EXT: &str = "pdx";
pub const SOURCE_EXT: &str = "tsv";

const THAI_W2P_SEED: &str = include_str!("thai_w2p_seed.tsv");

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected PDIX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch")]
    Checksum,

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid corpus name: {0:?}")]
    InvalidName(String),
}

impl From<lexime_trie::TrieError> for CorpusError {
    fn from(e: lexime_trie::TrieError) -> Self {
        match e {
            lexime_trie::TrieError::InvalidMagic => CorpusError::InvalidMagic,
            lexime_trie::TrieError::InvalidVersion(_) => CorpusError::UnsupportedVersion(0),
            lexime_trie::TrieError::TruncatedData => CorpusError::InvalidHeader,
        }
    }
}

/// Embedded fallback content for well-known corpus names.
fn seed(name: &str) -> Option<&'static str> {
    match name {
        "thai_w2p" => Some(THAI_W2P_SEED),
        _ => None,
    }
}

pub(crate) fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub struct CorpusCache {
    data_dir: Option<PathBuf>,
    loaded: RwLock<HashMap<String, Arc<PronunciationDict>>>,
}

impl CorpusCache {
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide cache. Its data directory is `corpus.data_dir` from
    /// settings, else `$PHASA_DATA_DIR`, else none (seed lists only).
    pub fn global() -> &'static Arc<CorpusCache> {
        static INSTANCE: OnceLock<Arc<CorpusCache>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let data_dir = settings()
                .corpus
                .data_dir
                .clone()
                .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from));
            Arc::new(CorpusCache::new(data_dir))
        })
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn compiled_path(&self, name: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|d| d.join(format!("{name}.{COMPILED_EXT}")))
    }

    pub fn source_path(&self, name: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|d| d.join(format!("{name}.{SOURCE_EXT}")))
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Get `name`, loading it on first use. `None` when no source exists or
    /// every source failed to load.
    pub fn get(&self, name: &str) -> Option<Arc<PronunciationDict>> {
        if !valid_name(name) {
            return None;
        }
        if let Some(dict) = self
            .loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Some(Arc::clone(dict));
        }

        let dict = Arc::new(self.load(name)?);
        let mut loaded = self.loaded.write().unwrap_or_else(PoisonError::into_inner);
        // another caller may have loaded it meanwhile; keep the first copy
        Some(Arc::clone(loaded.entry(name.to_string()).or_insert(dict)))
    }

    /// Evict `name` from memory and delete its compiled file. Returns whether
    /// anything was removed. The raw source is left in place.
    pub fn remove(&self, name: &str) -> Result<bool, CorpusError> {
        if !valid_name(name) {
            return Err(CorpusError::InvalidName(name.to_string()));
        }
        let evicted = self
            .loaded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .is_some();

        let mut deleted = false;
        if let Some(path) = self.compiled_path(name) {
            match std::fs::remove_file(&path) {
                Ok(()) => deleted = true,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        debug!(name, evicted, deleted, "corpus removed");
        Ok(evicted || deleted)
    }

    fn load(&self, name: &str) -> Option<PronunciationDict> {
        if let Some(path) = self.compiled_path(name).filter(|p| p.exists()) {
            match PronunciationDict::open(&path) {
                Ok(dict) => {
                    debug!(name, path = %path.display(), "corpus loaded (compiled)");
                    return Some(dict);
                }
                Err(e) => warn!(name, error = %e, "compiled corpus unreadable, rebuilding"),
            }
        }

        if let Some(path) = self.source_path(name).filter(|p| p.exists()) {
            match std::fs::read_to_string(&path)
                .map_err(CorpusError::from)
                .and_then(|s| PronunciationDict::parse_tsv(&s))
            {
                Ok(dict) => {
                    debug!(name, path = %path.display(), "corpus loaded (source)");
                    if let Some(out) = self.compiled_path(name) {
                        if let Err(e) = dict.save(&out) {
                            warn!(name, error = %e, "failed to write compiled corpus");
                        }
                    }
                    return Some(dict);
                }
                Err(e) => warn!(name, error = %e, "corpus source unreadable"),
            }
        }

        let content = seed(name)?;
        match PronunciationDict::parse_tsv(content) {
            Ok(dict) => {
                debug!(name, "corpus loaded (seed)");
                Some(dict)
            }
            Err(e) => {
                warn!(name, error = %e, "embedded seed unreadable");
                None
            }
        }
    }
}
