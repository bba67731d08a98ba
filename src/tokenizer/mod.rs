mod pair_tokenizer;
mod vocab;

pub use pair_tokenizer::{tokenize_sents, PairTokenizer};
pub use vocab::{build_vocabularies, VocabBuilder, Vocabulary};
