// src/metrics/mod.rs

mod alignment;

pub use alignment::{
    compute_aer, compute_precision, compute_recall, evaluate, select_alignments, AlignmentScore,
};
