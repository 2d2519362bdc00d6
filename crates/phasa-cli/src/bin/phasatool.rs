use clap::{Parser, Subcommand};

use phasa_cli::commands::config_ops::{self, TableKind};
use phasa_cli::commands::corpus_ops;
use phasa_cli::commands::transcribe_ops::{self, BatchEngines, ModelDirs};

#[derive(Parser)]
#[command(name = "phasatool", about = "Thai romanization and transcription tool")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom royin mapping table TOML
    #[arg(long, global = true)]
    royin_table: Option<String>,
    /// Custom IPA mapping table TOML
    #[arg(long, global = true)]
    ipa_table: Option<String>,
    /// thai2rom model directory (config.json, vocab.json, model.safetensors)
    #[arg(long, global = true)]
    thai2rom: Option<String>,
    /// thaig2p model directory
    #[arg(long, global = true)]
    thaig2p: Option<String>,
    /// Write JSON-lines traces to this directory (`trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize Thai text
    Romanize {
        /// Text to romanize
        text: String,
        /// Engine: royin, thai2rom (default from settings)
        #[arg(short, long)]
        engine: Option<String>,
    },
    /// Phonetic transcription of Thai text
    Transliterate {
        /// Text to transcribe
        text: String,
        /// Engine: ipa, icu, dict_ipa, thaig2p (default from settings)
        #[arg(short, long)]
        engine: Option<String>,
        /// Print rule IPA units separated by spaces
        #[arg(long, conflicts_with = "xsampa")]
        phonemes: bool,
        /// Print X-SAMPA units separated by spaces
        #[arg(long)]
        xsampa: bool,
    },
    /// Thai pronunciation guide
    Pronounce {
        /// Text to pronounce
        text: String,
        /// Engine: w2p (default from settings)
        #[arg(short, long)]
        engine: Option<String>,
    },
    /// Swap syllable rhymes (คำผวน)
    Puan {
        /// Two- or three-syllable word
        word: String,
        /// Join syllables without a separator
        #[arg(long)]
        no_separator: bool,
    },
    /// Transcribe a word list (one per line) into JSONL
    Batch {
        /// Input file
        input_file: String,
        /// Output JSONL file
        output_file: String,
        /// Romanize engine
        #[arg(long)]
        romanize_engine: Option<String>,
        /// Transliterate engine
        #[arg(long)]
        transliterate_engine: Option<String>,
        /// Pronounce engine
        #[arg(long)]
        pronounce_engine: Option<String>,
    },
    /// Pronunciation corpus maintenance
    Corpus {
        #[command(subcommand)]
        action: CorpusAction,
    },
    /// Print an embedded mapping table
    TableExport {
        #[arg(value_enum, default_value = "royin")]
        table: TableKind,
    },
    /// Validate a mapping table TOML file
    TableValidate {
        /// TOML file to validate
        file: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// TOML file to validate
        file: String,
    },
}

#[derive(Subcommand)]
enum CorpusAction {
    /// Compile a word<TAB>pronunciation file
    Compile {
        /// Input TSV file
        input_tsv: String,
        /// Output compiled file (.pdx)
        output_file: String,
    },
    /// Show compiled corpus statistics
    Info {
        /// Compiled corpus file (.pdx)
        file: String,
        /// Number of entries to print
        #[arg(short, long, default_value = "0")]
        sample: usize,
    },
    /// Evict a corpus and delete its compiled file
    Remove {
        /// Corpus name (e.g. thai_w2p)
        name: String,
        /// Data directory (default: settings or $PHASA_DATA_DIR)
        #[arg(long)]
        data_dir: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        phasa::trace_init::init_tracing(std::path::Path::new(dir));
    }
    config_ops::apply_overrides(
        cli.settings.as_deref(),
        cli.royin_table.as_deref(),
        cli.ipa_table.as_deref(),
    );
    let models = ModelDirs {
        thai2rom: cli.thai2rom,
        thaig2p: cli.thaig2p,
    };

    match cli.command {
        Command::Romanize { text, engine } => {
            let phasa = transcribe_ops::open_phasa(&models);
            transcribe_ops::romanize_cmd(&phasa, &text, engine.as_deref())
        }
        Command::Transliterate {
            text,
            engine,
            phonemes,
            xsampa,
        } => {
            let phasa = transcribe_ops::open_phasa(&models);
            transcribe_ops::transliterate_cmd(&phasa, &text, engine.as_deref(), phonemes, xsampa)
        }
        Command::Pronounce { text, engine } => {
            let phasa = transcribe_ops::open_phasa(&models);
            transcribe_ops::pronounce_cmd(&phasa, &text, engine.as_deref())
        }
        Command::Puan { word, no_separator } => transcribe_ops::puan_cmd(&word, !no_separator),
        Command::Batch {
            input_file,
            output_file,
            romanize_engine,
            transliterate_engine,
            pronounce_engine,
        } => {
            let phasa = transcribe_ops::open_phasa(&models);
            let engines = BatchEngines {
                romanize: romanize_engine.as_deref(),
                transliterate: transliterate_engine.as_deref(),
                pronounce: pronounce_engine.as_deref(),
            };
            transcribe_ops::batch_cmd(&phasa, &input_file, &output_file, engines)
        }
        Command::Corpus { action } => match action {
            CorpusAction::Compile {
                input_tsv,
                output_file,
            } => corpus_ops::compile(&input_tsv, &output_file),
            CorpusAction::Info { file, sample } => corpus_ops::info(&file, sample),
            CorpusAction::Remove { name, data_dir } => {
                corpus_ops::remove(&name, data_dir.as_deref())
            }
        },
        Command::TableExport { table } => config_ops::table_export(table),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
