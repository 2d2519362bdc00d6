//! Rule-based romanization (Royal Thai General System).
//!
//! Words are decomposed by the syllable grammar and each syllable is
//! rendered through the royin mapping table: onset by longest match, vowel
//! pattern by key, final by sound class. Tone marks and silent letters
//! produce nothing. Text the grammar passes through is copied unchanged.


use std::sync::OnceLock;

use tracing::debug_span;

use crate::syllable::{self, Segment};
use crate::table::{parse_table_toml, MappingTable, TableConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_royin.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set a custom royin table before the first `table()` call.
pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
    parse_table_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| TableConfigError::AlreadyInitialized)
}

/// Get or initialize the global royin table.
pub fn table() -> &'static MappingTable {
    static INSTANCE: OnceLock<MappingTable> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TOML);
        MappingTable::from_toml(toml_str).expect("royin TOML must be valid")
    })
}

/// Returns the embedded default royin table.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Romanize `text` with the global table.
pub fn romanize(text: &str) -> String {
    romanize_with(table(), text)
}

/// Romanize `text` with an explicit table.
pub fn romanize_with(table: &MappingTable, text: &str) -> String {
    let _span = debug_span!("royin", len = text.len()).entered();
    let mut out = String::with_capacity(text.len());
    for seg in syllable::parse(text) {
        match seg {
            Segment::Syllable(s) => out.push_str(&table.render(&s)),
            Segment::Other(t) => out.push_str(&t),
        }
    }
    out
}
