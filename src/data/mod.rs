// src/data/mod.rs

mod config;
mod corpus_reader;
mod escape;
mod types;

pub use config::CorpusConfig;
pub use corpus_reader::{extract_sentences, Corpus, CorpusReader};
pub use escape::escape_ampersands;
pub use types::{LabeledAlignment, Link, SentencePair, TokenizedSentencePair};
