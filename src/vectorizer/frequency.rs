use serde::{Deserialize, Serialize};

use crate::vectorizer::{alphabet::Alphabet, compute::compare, evaluate::scoring::Similarity};

/// Character counts of one text, one slot per alphabet dimension.
///
/// Only built by `Vectorizer`, so `len()` always equals the alphabet size it
/// was built with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyVector {
    counts: Vec<u32>,
}

impl FrequencyVector {
    /// All-zero vector of `dim` dimensions
    pub(crate) fn zeros(dim: usize) -> Self {
        Self { counts: vec![0; dim] }
    }

    /// Count one occurrence at `index` (caller guarantees `index < len()`).
    /// Saturates at `u32::MAX`.
    #[inline]
    pub(crate) fn bump(&mut self, index: usize) {
        self.counts[index] = self.counts[index].saturating_add(1);
    }

    /// Count every character of `text` found in `alphabet`.
    /// 範囲外の文字は無視
    pub(crate) fn count_into(&mut self, alphabet: &Alphabet, text: &str) {
        for c in text.chars() {
            if let Some(index) = alphabet.index_of(c) {
                self.bump(index);
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.counts.get(index).copied()
    }

    /// Sum of all counts (number of recognized characters)
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// True when no recognized character was counted.
    /// Such a vector has zero magnitude and every similarity against it is undefined.
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn dot(&self, other: &FrequencyVector) -> f64 {
        compare::dot(&self.counts, &other.counts)
    }

    pub fn squared_norm(&self) -> f64 {
        compare::dot(&self.counts, &self.counts)
    }

    /// Cosine similarity against `other`
    pub fn similarity(&self, other: &FrequencyVector) -> Similarity {
        compare::cosine_similarity(&self.counts, &other.counts)
    }
}

impl AsRef<[u32]> for FrequencyVector {
    fn as_ref(&self) -> &[u32] {
        &self.counts
    }
}
