use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::vectorizer::{
    corpus::ReferenceCorpus,
    evaluate::scoring::{RankedResult, Similarity},
    frequency::FrequencyVector,
    Vectorizer,
};

/// Cosine similarity of two frequency vectors.
/// `Similarity::Undefined` when either one is the zero vector, or when they
/// were built on alphabets of different sizes.
#[inline]
pub fn similarity(v1: &FrequencyVector, v2: &FrequencyVector) -> Similarity {
    v1.similarity(v2)
}

/// Ranks reference labels against query texts.
///
/// The corpus is injected at construction and never mutated, so a `Ranker`
/// can be cloned and used from any number of threads.
#[derive(Debug, Clone)]
pub struct Ranker {
    corpus: Arc<ReferenceCorpus>,
    vectorizer: Vectorizer,
}

impl Ranker {
    pub fn new(corpus: Arc<ReferenceCorpus>) -> Self {
        let vectorizer = corpus.vectorizer();
        Self { corpus, vectorizer }
    }

    pub fn corpus(&self) -> &Arc<ReferenceCorpus> {
        &self.corpus
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    /// Vectorize `query` and rank every label by descending similarity.
    ///
    /// Never fails. An empty or fully out-of-alphabet query gives
    /// `Similarity::Undefined` for every label.
    pub fn rank(&self, query: &str) -> RankedResult {
        let query_vec = self.vectorizer.vectorize(query);
        let result = self.rank_vector(&query_vec);
        debug!(query, best = ?result.best(), "ranked query");
        result
    }

    /// Rank against an already vectorized query.
    /// One entry per label; equal scores keep corpus order.
    pub fn rank_vector(&self, query_vec: &FrequencyVector) -> RankedResult {
        // 並列にスコア計算、collect は順序を保持する
        let list: Vec<(Box<str>, Similarity)> = self
            .corpus
            .entries
            .par_iter()
            .map(|(label, ref_vec)| (label.clone(), similarity(ref_vec, query_vec)))
            .collect();
        let mut result = RankedResult::new(list);
        result.sort_by_score();
        result
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceCorpus::demo()))
    }
}
