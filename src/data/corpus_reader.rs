// src/data/corpus_reader.rs

use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;
use tracing::{debug, info};

use super::config::CorpusConfig;
use super::escape::escape_ampersands;
use super::types::{LabeledAlignment, Link, SentencePair};
use crate::error::{CorpusError, Result};

/// Sentence pairs and their alignments, index-aligned.
pub type Corpus = (Vec<SentencePair>, Vec<LabeledAlignment>);

#[derive(Debug, Clone, Copy)]
enum Field {
    Source,
    Target,
    Sure,
    Possible,
}

/// Raw field contents of the sentence currently being read
#[derive(Default)]
struct PendingSentence {
    source: Option<String>,
    target: Option<String>,
    sure: Option<String>,
    possible: Option<String>,
}

impl PendingSentence {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Source => &mut self.source,
            Field::Target => &mut self.target,
            Field::Sure => &mut self.sure,
            Field::Possible => &mut self.possible,
        }
    }

    fn finish(self, index: usize) -> Result<(SentencePair, LabeledAlignment)> {
        let pair = SentencePair::new(
            split_tokens(self.source.as_deref()),
            split_tokens(self.target.as_deref()),
        );
        let alignment = LabeledAlignment::new(
            parse_links(self.sure.as_deref(), index)?,
            parse_links(self.possible.as_deref(), index)?,
        );
        Ok((pair, alignment))
    }
}

/// Reader for XML parallel corpora with hand-labeled alignments
pub struct CorpusReader {
    config: CorpusConfig,
}

impl CorpusReader {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Reads the whole file, then parses it with [`CorpusReader::parse_str`].
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Corpus> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CorpusError::FileNotFound(path.to_path_buf())
            } else {
                CorpusError::FileRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let corpus = self.parse_str(&content)?;
        info!(
            path = %path.display(),
            sentences = corpus.0.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Parses corpus markup held in memory.
    ///
    /// One sentence pair and one alignment are produced for every sentence
    /// element directly under the root, in document order, even when all of
    /// its fields are missing.
    pub fn parse_str(&self, content: &str) -> Result<Corpus> {
        let escaped = escape_ampersands(content);
        let mut reader = Reader::from_str(&escaped);
        reader.trim_text(false);

        let mut sentence_pairs = Vec::new();
        let mut alignments = Vec::new();

        let mut depth = 0usize;
        let mut root_seen = false;
        let mut pending: Option<PendingSentence> = None;
        let mut active: Option<Field> = None;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    return Err(parse_error(&escaped, reader.buffer_position(), e.to_string()))
                }
            };

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let self_closing = matches!(event, Event::Empty(_));
                    let name = e.name();

                    match depth {
                        0 => {
                            if root_seen {
                                return Err(parse_error(
                                    &escaped,
                                    reader.buffer_position(),
                                    "more than one root element".to_string(),
                                ));
                            }
                            root_seen = true;
                        }
                        1 if name.as_ref() == self.config.sentence_tag.as_bytes() => {
                            if self_closing {
                                let index = sentence_pairs.len();
                                let (pair, alignment) = PendingSentence::default().finish(index)?;
                                sentence_pairs.push(pair);
                                alignments.push(alignment);
                            } else {
                                pending = Some(PendingSentence::default());
                            }
                        }
                        2 => {
                            if let (Some(sentence), Some(field)) =
                                (pending.as_mut(), self.field_for(name.as_ref()))
                            {
                                let slot = sentence.slot(field);
                                // first occurrence wins
                                if slot.is_none() {
                                    *slot = Some(String::new());
                                    if !self_closing {
                                        active = Some(field);
                                    }
                                }
                            }
                        }
                        _ => {}
                    }

                    if !self_closing {
                        depth += 1;
                    }
                }

                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    match depth {
                        2 => active = None,
                        1 => {
                            if let Some(sentence) = pending.take() {
                                let index = sentence_pairs.len();
                                let (pair, alignment) = sentence.finish(index)?;
                                sentence_pairs.push(pair);
                                alignments.push(alignment);
                            }
                        }
                        _ => {}
                    }
                }

                Event::Text(ref e) => {
                    if depth == 0 {
                        if !e.iter().all(u8::is_ascii_whitespace) {
                            return Err(parse_error(
                                &escaped,
                                reader.buffer_position(),
                                "text outside the root element".to_string(),
                            ));
                        }
                    } else if let (Some(sentence), Some(field)) = (pending.as_mut(), active) {
                        let text = e.unescape().map_err(|err| {
                            parse_error(&escaped, reader.buffer_position(), err.to_string())
                        })?;
                        if let Some(buf) = sentence.slot(field).as_mut() {
                            buf.push_str(&text);
                        }
                    }
                }

                Event::CData(ref e) => {
                    if depth == 0 {
                        return Err(parse_error(
                            &escaped,
                            reader.buffer_position(),
                            "CDATA outside the root element".to_string(),
                        ));
                    }
                    if let (Some(sentence), Some(field)) = (pending.as_mut(), active) {
                        let text = std::str::from_utf8(e).map_err(|err| {
                            parse_error(&escaped, reader.buffer_position(), err.to_string())
                        })?;
                        if let Some(buf) = sentence.slot(field).as_mut() {
                            buf.push_str(text);
                        }
                    }
                }

                Event::Eof => {
                    if depth > 0 {
                        return Err(parse_error(
                            &escaped,
                            reader.buffer_position(),
                            format!("unexpected end of input with {} unclosed element(s)", depth),
                        ));
                    }
                    if !root_seen {
                        return Err(parse_error(
                            &escaped,
                            reader.buffer_position(),
                            "no root element".to_string(),
                        ));
                    }
                    break;
                }

                _ => {}
            }
        }

        debug!(sentences = sentence_pairs.len(), "parsed corpus markup");
        Ok((sentence_pairs, alignments))
    }

    fn field_for(&self, name: &[u8]) -> Option<Field> {
        let config = &self.config;
        if name == config.source_tag.as_bytes() {
            Some(Field::Source)
        } else if name == config.target_tag.as_bytes() {
            Some(Field::Target)
        } else if name == config.sure_tag.as_bytes() {
            Some(Field::Sure)
        } else if name == config.possible_tag.as_bytes() {
            Some(Field::Possible)
        } else {
            None
        }
    }
}

impl Default for CorpusReader {
    fn default() -> Self {
        Self::new(CorpusConfig::default())
    }
}

/// Reads an English-Czech corpus file with the default element names.
pub fn extract_sentences<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    CorpusReader::default().read_file(path)
}

fn split_tokens(text: Option<&str>) -> Vec<String> {
    text.map(|t| t.split_whitespace().map(String::from).collect())
        .unwrap_or_default()
}

fn parse_links(text: Option<&str>, sentence: usize) -> Result<Vec<Link>> {
    match text {
        Some(t) => t
            .split_whitespace()
            .map(|token| parse_link(token, sentence))
            .collect(),
        None => Ok(Vec::new()),
    }
}

/// Parses `"<int>-<int>"` into a 1-indexed `(source, target)` link.
fn parse_link(token: &str, sentence: usize) -> Result<Link> {
    let bad = |reason: &str| CorpusError::Format {
        sentence,
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let (left, right) = token.split_once('-').ok_or_else(|| bad("expected `<int>-<int>`"))?;
    let source = parse_position(left).ok_or_else(|| bad("source position is not a positive integer"))?;
    let target = parse_position(right).ok_or_else(|| bad("target position is not a positive integer"))?;
    Ok((source, target))
}

fn parse_position(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|&p| p >= 1)
}

/// Line and column are 1-based. Lines match the input file; columns count
/// bytes of the escaped text.
fn parse_error(text: &str, offset: usize, reason: String) -> CorpusError {
    let offset = offset.min(text.len());
    let before = &text.as_bytes()[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before.iter().rposition(|&b| b == b'\n').map_or(0, |p| p + 1);

    CorpusError::Parse {
        line,
        column: offset - line_start + 1,
        offset,
        reason,
    }
}
