//! Paracorp: parallel corpus preprocessing for word alignment
//!
//! Reads sentence pairs and labeled alignments from XML, builds per-language
//! vocabularies and maps sentences to token ids for an alignment model.

pub mod data;
pub mod error;
pub mod metrics;
pub mod tokenizer;

// Main re-exports
pub use data::{
    extract_sentences, CorpusConfig, CorpusReader, LabeledAlignment, Link, SentencePair,
    TokenizedSentencePair,
};
pub use error::{CorpusError, Result};
pub use metrics::{compute_aer, compute_precision, compute_recall, AlignmentScore};
pub use tokenizer::{build_vocabularies, tokenize_sents, PairTokenizer, VocabBuilder, Vocabulary};

/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG`, INFO by
/// default. Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
