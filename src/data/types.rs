// src/data/types.rs
//! Records shared by the reader, the vocabulary builder and the tokenizer

use serde::{Deserialize, Serialize};

/// Alignment link `(source_position, target_position)`, both 1-indexed.
pub type Link = (usize, usize);

/// One sentence and its translation, as whitespace tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    source: Vec<String>,
    target: Vec<String>,
}

impl SentencePair {
    pub fn new(source: Vec<String>, target: Vec<String>) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    pub fn target(&self) -> &[String] {
        &self.target
    }
}

/// Sentence pair mapped to vocabulary ids.
///
/// Both sides are guaranteed non-empty: pairs that lose every token on either
/// side never make it into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizedSentencePair {
    source_tokens: Vec<u32>,
    target_tokens: Vec<u32>,
}

impl TokenizedSentencePair {
    pub fn new(source_tokens: Vec<u32>, target_tokens: Vec<u32>) -> Option<Self> {
        if source_tokens.is_empty() || target_tokens.is_empty() {
            return None;
        }
        Some(Self {
            source_tokens,
            target_tokens,
        })
    }

    pub fn source_tokens(&self) -> &[u32] {
        &self.source_tokens
    }

    pub fn target_tokens(&self) -> &[u32] {
        &self.target_tokens
    }
}

/// Human-annotated alignments for one sentence, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledAlignment {
    sure: Vec<Link>,
    possible: Vec<Link>,
}

impl LabeledAlignment {
    pub fn new(sure: Vec<Link>, possible: Vec<Link>) -> Self {
        Self { sure, possible }
    }

    pub fn sure(&self) -> &[Link] {
        &self.sure
    }

    pub fn possible(&self) -> &[Link] {
        &self.possible
    }
}
