use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
#[cfg(feature = "neural")]
use std::path::Path;
use std::process;

use serde::{Deserialize, Serialize};

use phasa::{Phasa, PhasaError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Model directories given on the command line; they take precedence over
/// `neural.*_dir` in settings.
#[derive(Debug, Default, Clone)]
pub struct ModelDirs {
    pub thai2rom: Option<String>,
    pub thaig2p: Option<String>,
}

pub fn open_phasa(models: &ModelDirs) -> Phasa {
    let phasa = Phasa::from_settings();
    #[cfg(feature = "neural")]
    let phasa = {
        let mut phasa = phasa;
        if let Some(dir) = &models.thai2rom {
            phasa = die!(
                phasa.load_thai2rom(Path::new(dir)),
                "Error loading thai2rom model: {}"
            );
        }
        if let Some(dir) = &models.thaig2p {
            phasa = die!(
                phasa.load_thaig2p(Path::new(dir)),
                "Error loading thaig2p model: {}"
            );
        }
        phasa
    };
    #[cfg(not(feature = "neural"))]
    if models.thai2rom.is_some() || models.thaig2p.is_some() {
        eprintln!("Warning: built without the `neural` feature, model directories ignored");
    }
    phasa
}

pub fn romanize_cmd(phasa: &Phasa, text: &str, engine: Option<&str>) {
    let out = die!(phasa.romanize(text, engine), "Error: {}");
    println!("{out}");
}

pub fn transliterate_cmd(
    phasa: &Phasa,
    text: &str,
    engine: Option<&str>,
    phonemes: bool,
    xsampa: bool,
) {
    if phonemes {
        let units: Vec<String> = phasa::trans_list(text).iter().collect();
        println!("{}", units.join(" "));
    } else if xsampa {
        let units: Vec<String> = phasa::xsampa_list(text).iter().collect();
        println!("{}", units.join(" "));
    } else {
        let out = die!(phasa.transliterate(text, engine), "Error: {}");
        println!("{out}");
    }
}

pub fn pronounce_cmd(phasa: &Phasa, text: &str, engine: Option<&str>) {
    let out = die!(phasa.pronounce(text, engine), "Error: {}");
    println!("{out}");
}

pub fn puan_cmd(word: &str, use_separator: bool) {
    let out = die!(phasa::swap_syllables(word, use_separator), "Error: {}");
    println!("{out}");
}

// --- Batch ---

/// One output line of `batch`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchRecord {
    pub word: String,
    pub romanized: String,
    pub transliterated: String,
    pub pronunciation: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub puan: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BatchEngines<'a> {
    pub romanize: Option<&'a str>,
    pub transliterate: Option<&'a str>,
    pub pronounce: Option<&'a str>,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {source}")]
    Engine { line: usize, source: PhasaError },
}

/// Transcribe one word per input line into JSONL. Blank lines and `#`
/// comments are skipped. Returns the number of records written.
pub fn run_batch(
    phasa: &Phasa,
    input: impl BufRead,
    mut output: impl Write,
    engines: BatchEngines<'_>,
) -> Result<usize, BatchError> {
    let mut written = 0;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        let engine_err = |source| BatchError::Engine {
            line: idx + 1,
            source,
        };
        let record = BatchRecord {
            word: word.to_string(),
            romanized: phasa.romanize(word, engines.romanize).map_err(engine_err)?,
            transliterated: phasa
                .transliterate(word, engines.transliterate)
                .map_err(engine_err)?,
            pronunciation: phasa.pronounce(word, engines.pronounce).map_err(engine_err)?,
            // most words are not two or three syllables long
            puan: phasa::swap_syllables(word, true).ok(),
        };
        serde_json::to_writer(&mut output, &record)?;
        writeln!(output)?;
        written += 1;
    }
    output.flush()?;
    Ok(written)
}

pub fn batch_cmd(phasa: &Phasa, input_file: &str, output_file: &str, engines: BatchEngines<'_>) {
    let input = die!(File::open(input_file), "Error opening {input_file}: {}");
    let output = die!(
        File::create(output_file),
        "Error creating {output_file}: {}"
    );
    let n = die!(
        run_batch(
            phasa,
            BufReader::new(input),
            BufWriter::new(output),
            engines
        ),
        "Error: {}"
    );
    eprintln!("Wrote {n} records to {output_file}");
}
