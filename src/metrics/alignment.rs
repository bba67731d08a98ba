//! Precision, recall and alignment error rate against labeled alignments

use std::collections::HashSet;

use crate::data::{LabeledAlignment, Link};
use crate::error::{CorpusError, Result};

/// Summed counts over a corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentScore {
    /// |A ∩ (S ∪ P)|
    pub precision_hits: usize,
    /// |A|
    pub predicted: usize,
    /// |A ∩ S|
    pub recall_hits: usize,
    /// |S|
    pub sure: usize,
}

impl AlignmentScore {
    pub fn precision(&self) -> Option<f64> {
        ratio(self.precision_hits, self.predicted)
    }

    pub fn recall(&self) -> Option<f64> {
        ratio(self.recall_hits, self.sure)
    }

    /// `1 - (|A∩P| + |A∩S|) / (|A| + |S|)`, 0.0 when both sets are empty
    pub fn aer(&self) -> f64 {
        ratio(self.precision_hits + self.recall_hits, self.predicted + self.sure)
            .map_or(0.0, |r| 1.0 - r)
    }
}

impl std::fmt::Display for AlignmentScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Precision: {}/{} | Recall: {}/{} | AER: {:.4}",
            self.precision_hits,
            self.predicted,
            self.recall_hits,
            self.sure,
            self.aer()
        )
    }
}

fn ratio(num: usize, den: usize) -> Option<f64> {
    if den == 0 {
        None
    } else {
        Some(num as f64 / den as f64)
    }
}

/// Scores predicted links sentence by sentence. `predicted[i]` must belong
/// to `reference[i]`.
///
/// Sure links count as possible too: the corpus does not guarantee that
/// every sure link is repeated in the possible list.
pub fn evaluate(reference: &[LabeledAlignment], predicted: &[Vec<Link>]) -> Result<AlignmentScore> {
    if reference.len() != predicted.len() {
        return Err(CorpusError::LengthMismatch {
            reference: reference.len(),
            predicted: predicted.len(),
        });
    }

    let mut score = AlignmentScore::default();
    for (labels, links) in reference.iter().zip(predicted) {
        let sure: HashSet<&Link> = labels.sure().iter().collect();
        let possible: HashSet<&Link> = sure.iter().copied().chain(labels.possible()).collect();
        let guessed: HashSet<&Link> = links.iter().collect();

        score.precision_hits += guessed.intersection(&possible).count();
        score.recall_hits += guessed.intersection(&sure).count();
        score.predicted += links.len();
        score.sure += labels.sure().len();
    }

    Ok(score)
}

/// `(|A ∩ (S ∪ P)|, |A|)` summed over sentences
pub fn compute_precision(
    reference: &[LabeledAlignment],
    predicted: &[Vec<Link>],
) -> Result<(usize, usize)> {
    let score = evaluate(reference, predicted)?;
    Ok((score.precision_hits, score.predicted))
}

/// `(|A ∩ S|, |S|)` summed over sentences
pub fn compute_recall(
    reference: &[LabeledAlignment],
    predicted: &[Vec<Link>],
) -> Result<(usize, usize)> {
    let score = evaluate(reference, predicted)?;
    Ok((score.recall_hits, score.sure))
}

pub fn compute_aer(reference: &[LabeledAlignment], predicted: &[Vec<Link>]) -> Result<f64> {
    Ok(evaluate(reference, predicted)?.aer())
}

/// Picks the labeled alignments of the sentences that survived tokenization,
/// given the origin indices from `PairTokenizer::tokenize_with_origin`.
/// Indices past the end of `alignments` are skipped.
pub fn select_alignments(alignments: &[LabeledAlignment], origins: &[usize]) -> Vec<LabeledAlignment> {
    origins
        .iter()
        .filter_map(|&i| alignments.get(i).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_scores_zero_aer() {
        let score = evaluate(&[], &[]).unwrap();
        assert_eq!(score, AlignmentScore::default());
        assert_eq!(score.aer(), 0.0);
        assert_eq!(score.precision(), None);
        assert_eq!(score.recall(), None);
    }

    #[test]
    fn test_duplicate_predictions_count_once_in_hits() {
        let reference = vec![LabeledAlignment::new(vec![(1, 1)], vec![])];
        let predicted = vec![vec![(1, 1), (1, 1)]];
        let score = evaluate(&reference, &predicted).unwrap();

        assert_eq!(score.precision_hits, 1);
        assert_eq!(score.predicted, 2);
        assert_eq!(score.recall_hits, 1);
    }
}
