//! Common test utilities and helpers
//!
//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use paracorp::SentencePair;

/// Three sentences; the second has a raw ampersand, the third no alignments
pub const SAMPLE_CORPUS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<sentences>
  <s id="1">
    <english>the cat sat</english>
    <czech>kocka sedela</czech>
    <sure>1-1 3-2</sure>
    <possible>2-1</possible>
  </s>
  <s id="2">
    <english>Tom & Jerry</english>
    <czech>Tom a Jerry</czech>
    <sure>1-1 2-2 3-3</sure>
    <possible></possible>
  </s>
  <s id="3">
    <english>the dog</english>
    <czech>pes</czech>
  </s>
</sentences>
"#;

/// Writes `content` to `name` inside `dir` and returns the path
pub fn write_corpus(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create corpus file");
    file.write_all(content.as_bytes())
        .expect("Failed to write corpus file");
    path
}

/// Wraps sentence elements in a root element
pub fn corpus_of(sentences: &[&str]) -> String {
    format!("<sentences>{}</sentences>", sentences.concat())
}

/// Builds a pair from space-separated strings
pub fn pair(source: &str, target: &str) -> SentencePair {
    SentencePair::new(
        source.split_whitespace().map(String::from).collect(),
        target.split_whitespace().map(String::from).collect(),
    )
}
