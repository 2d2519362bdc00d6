pub mod config_ops;
pub mod corpus_ops;
pub mod transcribe_ops;
