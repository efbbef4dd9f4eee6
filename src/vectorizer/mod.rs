pub mod alphabet;
pub mod frequency;
pub mod corpus;
pub mod compute;
pub mod evaluate;
pub mod serde;

use std::sync::Arc;

use crate::vectorizer::{alphabet::Alphabet, frequency::FrequencyVector};

/// Text → `FrequencyVector` converter bound to one alphabet.
///
/// Iterates by code point (`str::chars`). Characters outside the alphabet are
/// skipped, there is no case folding. Multi-byte characters are never in the
/// reference alphabet and are therefore skipped too.
///
/// Cloning is cheap, the alphabet is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vectorizer {
    alphabet: Arc<Alphabet>,
}

impl Vectorizer {
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        Self { alphabet }
    }

    /// Vectorizer over the reference alphabet
    pub fn reference() -> Self {
        Self::new(Arc::new(Alphabet::reference()))
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Dimension of every vector this vectorizer produces
    #[inline]
    pub fn dim(&self) -> usize {
        self.alphabet.len()
    }

    /// Count each alphabet character of `text`.
    /// The result always has `dim()` slots; `""` gives the zero vector.
    pub fn vectorize(&self, text: &str) -> FrequencyVector {
        let mut vec = FrequencyVector::zeros(self.dim());
        vec.count_into(&self.alphabet, text);
        vec
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::reference()
    }
}
