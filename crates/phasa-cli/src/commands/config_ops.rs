use std::fs;
use std::process;

use clap::ValueEnum;

use phasa_core::table::parse_table_toml;
use phasa_core::{ipa, royin, settings};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Which embedded mapping table a command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    Royin,
    Ipa,
}

/// Install custom settings and tables before any engine runs.
pub fn apply_overrides(
    settings_file: Option<&str>,
    royin_file: Option<&str>,
    ipa_file: Option<&str>,
) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = royin_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(royin::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = ipa_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(ipa::init_custom(content), "Error in {file}: {}");
    }
}

pub fn table_export(table: TableKind) {
    match table {
        TableKind::Royin => print!("{}", royin::default_toml()),
        TableKind::Ipa => print!("{}", ipa::default_toml()),
    }
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let sections = die!(parse_table_toml(&content), "Error: {}");
    println!(
        "OK: {} rules (initials={}, vowels={}, finals={})",
        sections.rule_count(),
        sections.initials.len(),
        sections.vowels.len(),
        sections.finals.len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: engines.romanize={}, engines.transliterate={}, engines.pronounce={}, neural.max_length={}",
        s.engines.romanize, s.engines.transliterate, s.engines.pronounce, s.neural.max_length
    );
}
