// src/tokenizer/vocab.rs

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::data::SentencePair;

/// Token to dense id mapping for one language.
///
/// Ids run `0..len()` with no gaps; id 0 is the most frequent token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    id_to_token: Vec<String>,
    #[serde(skip)]
    token_to_id: HashMap<String, u32>,
}

impl Vocabulary {
    /// Assigns ids in iteration order. Repeated tokens keep their first id.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            if vocab.token_to_id.contains_key(&token) {
                continue;
            }
            let id = vocab.id_to_token.len() as u32;
            vocab.token_to_id.insert(token.clone(), id);
            vocab.id_to_token.push(token);
        }
        vocab
    }

    pub fn get(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    pub fn token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// `(token, id)` in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i as u32))
    }

    pub fn as_map(&self) -> &HashMap<String, u32> {
        &self.token_to_id
    }

    /// Maps known tokens to ids; unknown tokens are skipped, not replaced.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u32> {
        tokens
            .iter()
            .filter_map(|t| self.get(t.as_ref()))
            .collect()
    }

    pub fn decode(&self, ids: &[u32]) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.token(id)).collect()
    }
}

/// Builds source and target vocabularies from token frequencies
#[derive(Debug, Clone)]
pub struct VocabBuilder {
    freq_cutoff: Option<usize>,
    min_frequency: usize,
}

impl VocabBuilder {
    pub fn new() -> Self {
        Self {
            freq_cutoff: None,
            min_frequency: 1,
        }
    }

    /// Keeps only the `cutoff` most frequent tokens of each language.
    pub fn with_freq_cutoff(mut self, cutoff: usize) -> Self {
        self.freq_cutoff = Some(cutoff);
        self
    }

    /// Drops tokens seen fewer than `min_frequency` times before the cutoff.
    pub fn with_min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency.max(1);
        self
    }

    pub fn freq_cutoff(&self) -> Option<usize> {
        self.freq_cutoff
    }

    /// Returns `(source, target)` vocabularies. Each language is counted and
    /// ranked independently.
    pub fn build(&self, sentence_pairs: &[SentencePair]) -> (Vocabulary, Vocabulary) {
        let source = self.build_side(sentence_pairs.iter().map(|p| p.source()), "source");
        let target = self.build_side(sentence_pairs.iter().map(|p| p.target()), "target");

        info!(
            pairs = sentence_pairs.len(),
            source_vocab = source.len(),
            target_vocab = target.len(),
            "vocabularies built"
        );

        (source, target)
    }

    fn build_side<'a, I>(&self, sentences: I, side: &str) -> Vocabulary
    where
        I: Iterator<Item = &'a [String]>,
    {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for sentence in sentences {
            for token in sentence {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }
        let distinct = counts.len();

        let mut ranked: Vec<(&str, usize)> = counts
            .into_iter()
            .filter(|(_, freq)| *freq >= self.min_frequency)
            .collect();
        // Frequency descending, token ascending on ties
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        if let Some(cutoff) = self.freq_cutoff {
            ranked.truncate(cutoff);
        }

        debug!(
            side,
            distinct,
            kept = ranked.len(),
            cutoff = ?self.freq_cutoff,
            "ranked tokens"
        );

        Vocabulary::from_tokens(ranked.into_iter().map(|(t, _)| t.to_string()))
    }
}

impl Default for VocabBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Source and target vocabularies, optionally keeping only the
/// `freq_cutoff` most frequent tokens per language.
pub fn build_vocabularies(
    sentence_pairs: &[SentencePair],
    freq_cutoff: Option<usize>,
) -> (Vocabulary, Vocabulary) {
    let builder = match freq_cutoff {
        Some(cutoff) => VocabBuilder::new().with_freq_cutoff(cutoff),
        None => VocabBuilder::new(),
    };
    builder.build(sentence_pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(source: &str, target: &str) -> SentencePair {
        SentencePair::new(
            source.split_whitespace().map(String::from).collect(),
            target.split_whitespace().map(String::from).collect(),
        )
    }

    #[test]
    fn test_ties_break_on_token() {
        let pairs = vec![pair("c b a", "z"), pair("b c", "y z")];
        let (source, target) = build_vocabularies(&pairs, None);

        // b and c both twice, a once
        assert_eq!(source.get("b"), Some(0));
        assert_eq!(source.get("c"), Some(1));
        assert_eq!(source.get("a"), Some(2));

        assert_eq!(target.get("z"), Some(0));
        assert_eq!(target.get("y"), Some(1));
    }

    #[test]
    fn test_min_frequency_applies_before_cutoff() {
        let pairs = vec![pair("a a b c", "x"), pair("a b", "x")];
        let (source, _) = VocabBuilder::new()
            .with_min_frequency(2)
            .with_freq_cutoff(5)
            .build(&pairs);

        assert_eq!(source.len(), 2);
        assert!(source.contains("a"));
        assert!(source.contains("b"));
        assert!(!source.contains("c"));
    }

    #[test]
    fn test_from_tokens_keeps_first_id() {
        let vocab = Vocabulary::from_tokens(["x", "y", "x"].iter().map(|s| s.to_string()));
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get("x"), Some(0));
        assert_eq!(vocab.token(1), Some("y"));
        assert_eq!(vocab.token(2), None);
    }

    #[test]
    fn test_encode_skips_unknown() {
        let vocab = Vocabulary::from_tokens(["the", "cat"].iter().map(|s| s.to_string()));
        assert_eq!(vocab.encode(&["the", "dog", "cat", "the"]), vec![0, 1, 0]);
        assert_eq!(vocab.decode(&[1, 9, 0]), vec!["cat", "the"]);
    }
}
