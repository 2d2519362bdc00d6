use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use phasa_core::corpus::{CorpusCache, PronunciationDict};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn compile(input_tsv: &str, output_file: &str) {
    let content = die!(
        fs::read_to_string(input_tsv),
        "Error reading {input_tsv}: {}"
    );
    let dict = die!(
        PronunciationDict::parse_tsv(&content),
        "Error parsing {input_tsv}: {}"
    );
    let (words, prons) = dict.stats();
    eprintln!("Building trie from {words} words ({prons} pronunciations)...");

    die!(
        dict.save(Path::new(output_file)),
        "Error writing corpus: {}"
    );
    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!("Wrote {output_file} ({:.1} KB)", file_size as f64 / 1024.0);
}

pub fn info(file: &str, sample: usize) {
    let dict = die!(
        PronunciationDict::open(Path::new(file)),
        "Error opening corpus: {}"
    );
    let (words, prons) = dict.stats();
    println!("Words:          {words}");
    println!("Pronunciations: {prons}");
    if sample > 0 {
        let mut entries: Vec<(String, Vec<String>)> = dict
            .iter()
            .map(|(word, prons)| (word, prons.to_vec()))
            .collect();
        entries.sort();
        println!();
        for (word, prons) in entries.iter().take(sample) {
            println!("  {word}\t{}", prons.join(" | "));
        }
    }
}

/// Evict `name` from the cache in `data_dir` (default: the global cache's
/// directory) and delete its compiled file.
pub fn remove(name: &str, data_dir: Option<&str>) {
    let local;
    let cache = match data_dir {
        Some(dir) => {
            local = CorpusCache::new(Some(PathBuf::from(dir)));
            &local
        }
        None => CorpusCache::global().as_ref(),
    };
    let removed = die!(cache.remove(name), "Error removing {name}: {}");
    let location = cache
        .compiled_path(name)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no data directory)".to_string());
    if removed {
        println!("Removed {name} ({location})");
    } else {
        println!("Nothing cached for {name} ({location})");
    }
}
