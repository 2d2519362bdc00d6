use std::fs::{self, File};
use std::path::Path;

use lexime_trie::DoubleArray;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use super::pron_dict::{PronunciationDict, HEADER_SIZE, MAGIC, VERSION};
use super::CorpusError;

#[derive(Serialize, Deserialize)]
struct PronDictData {
    trie: Vec<u8>,
    values: Vec<Vec<String>>,
}

impl PronunciationDict {
    /// Serialize to bytes (PDIX format): header, CRC32 of the body, bincode
    /// body.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CorpusError> {
        let data = PronDictData {
            trie: self.trie.as_bytes().to_vec(),
            values: self.values.clone(),
        };
        let body = bincode::serialize(&data).map_err(CorpusError::Serialize)?;
        let crc = crc32fast::hash(&body);

        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&crc.to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, CorpusError> {
        if data.len() < 5 {
            return Err(CorpusError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(CorpusError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(CorpusError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(CorpusError::InvalidHeader);
        }

        let mut crc_bytes = [0u8; 4];
        crc_bytes.copy_from_slice(&data[8..12]);
        let body = &data[HEADER_SIZE..];
        if crc32fast::hash(body) != u32::from_le_bytes(crc_bytes) {
            return Err(CorpusError::Checksum);
        }

        let parsed: PronDictData = bincode::deserialize(body).map_err(CorpusError::Deserialize)?;
        let trie = DoubleArray::<u8>::from_bytes(&parsed.trie)?;
        Ok(Self {
            trie,
            values: parsed.values,
        })
    }

    /// Open a compiled dictionary file through a read-only mapping.
    pub fn open(path: &Path) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), CorpusError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
