// src/tokenizer/pair_tokenizer.rs

use tracing::{debug, info};

use super::vocab::Vocabulary;
use crate::data::{SentencePair, TokenizedSentencePair};

/// Maps sentence pairs to vocabulary ids, dropping pairs that end up empty
/// on either side.
pub struct PairTokenizer<'a> {
    source_vocab: &'a Vocabulary,
    target_vocab: &'a Vocabulary,
}

impl<'a> PairTokenizer<'a> {
    pub fn new(source_vocab: &'a Vocabulary, target_vocab: &'a Vocabulary) -> Self {
        Self {
            source_vocab,
            target_vocab,
        }
    }

    /// `None` when no source token or no target token is in the vocabulary.
    pub fn encode_pair(&self, pair: &SentencePair) -> Option<TokenizedSentencePair> {
        let source_tokens = self.source_vocab.encode(pair.source());
        let target_tokens = self.target_vocab.encode(pair.target());
        TokenizedSentencePair::new(source_tokens, target_tokens)
    }

    /// Tokenized pairs in input order; dropped pairs leave no gap.
    pub fn tokenize(&self, sentence_pairs: &[SentencePair]) -> Vec<TokenizedSentencePair> {
        self.tokenize_with_origin(sentence_pairs)
            .into_iter()
            .map(|(_, pair)| pair)
            .collect()
    }

    /// Like [`PairTokenizer::tokenize`], but each kept pair carries its index
    /// in `sentence_pairs`, so it can be matched back to its alignment.
    pub fn tokenize_with_origin(
        &self,
        sentence_pairs: &[SentencePair],
    ) -> Vec<(usize, TokenizedSentencePair)> {
        let tokenized: Vec<(usize, TokenizedSentencePair)> = sentence_pairs
            .iter()
            .enumerate()
            .filter_map(|(i, pair)| self.encode_pair(pair).map(|t| (i, t)))
            .collect();

        let dropped = sentence_pairs.len() - tokenized.len();
        debug!(dropped, "pairs emptied by vocabulary filtering");
        info!(
            input = sentence_pairs.len(),
            kept = tokenized.len(),
            "sentence pairs tokenized"
        );

        tokenized
    }
}

/// Tokenizes `sentence_pairs` against the two vocabularies.
pub fn tokenize_sents(
    sentence_pairs: &[SentencePair],
    source_vocab: &Vocabulary,
    target_vocab: &Vocabulary,
) -> Vec<TokenizedSentencePair> {
    PairTokenizer::new(source_vocab, target_vocab).tokenize(sentence_pairs)
}
