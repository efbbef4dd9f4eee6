/// This crate is a bag-of-characters text classifier.
/// Texts are turned into character-frequency vectors over a fixed alphabet and
/// reference labels are ranked by cosine similarity to a query.
pub mod vectorizer;
pub mod error;

/// Alphabet
/// The fixed, ordered set of recognized characters.
/// Position in the alphabet is the vector dimension a character is counted in.
///
/// The reference alphabet is `a`..`v`, `x`, `w`, `y`, `z` and space (27 chars).
/// Custom alphabets can be built with `Alphabet::new` (no duplicates allowed).
pub use vectorizer::alphabet::Alphabet;

/// Vectorizer
/// Converts text into a `FrequencyVector`, one count per alphabet character.
/// Characters outside the alphabet are dropped; there is no case folding.
pub use vectorizer::Vectorizer;

/// Frequency Vector
/// Character counts of a text. Its length always equals the alphabet size.
pub use vectorizer::frequency::FrequencyVector;

/// Reference Corpus
/// Immutable label → `FrequencyVector` table used as ranking targets.
/// Conventionally each label is vectorized from its own characters.
///
/// # Serialization
/// Supported, plus a CBOR snapshot via `to_cbor` / `from_cbor`.
/// Decoding validates labels and vector dimensions.
pub use vectorizer::corpus::ReferenceCorpus;

/// Ranker and Similarity
/// - `Ranker`: ranks every corpus label against a query text
/// - `RankedResult`: (label, score) list, best first
/// - `Similarity`: cosine score, or `Undefined` for zero-magnitude vectors
pub use vectorizer::evaluate::{
    ranker::{similarity, Ranker},
    scoring::{RankedResult, Similarity},
};

pub use error::{Error, Result};
