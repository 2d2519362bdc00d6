pub mod corpus;
pub mod engine;
pub mod ipa;
pub mod neural;
pub mod pronounce;
pub mod puan;
pub mod royin;
pub mod settings;
pub mod syllable;
pub mod table;
pub mod unicode;
