// src/data/config.rs
//! Element names used by the corpus reader

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub sentence_tag: String,
    pub source_tag: String,
    pub target_tag: String,
    pub sure_tag: String,
    pub possible_tag: String,
}

impl CorpusConfig {
    /// English-Czech layout: `<s><english/><czech/><sure/><possible/></s>`
    pub fn new() -> Self {
        Self {
            sentence_tag: "s".to_string(),
            source_tag: "english".to_string(),
            target_tag: "czech".to_string(),
            sure_tag: "sure".to_string(),
            possible_tag: "possible".to_string(),
        }
    }

    pub fn with_sentence_tag(mut self, tag: &str) -> Self {
        self.sentence_tag = tag.to_string();
        self
    }

    pub fn with_source_tag(mut self, tag: &str) -> Self {
        self.source_tag = tag.to_string();
        self
    }

    pub fn with_target_tag(mut self, tag: &str) -> Self {
        self.target_tag = tag.to_string();
        self
    }

    pub fn with_sure_tag(mut self, tag: &str) -> Self {
        self.sure_tag = tag.to_string();
        self
    }

    pub fn with_possible_tag(mut self, tag: &str) -> Self {
        self.possible_tag = tag.to_string();
        self
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self::new()
    }
}
