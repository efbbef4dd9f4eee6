use thiserror::Error;

/// Errors raised while building or decoding vectorizer state.
///
/// Vectorizing, comparing and ranking never fail; only construction of an
/// `Alphabet` / `ReferenceCorpus` and snapshot decoding can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,

    #[error("character {0:?} appears more than once in the alphabet")]
    DuplicateCharacter(char),

    #[error("label {0:?} appears more than once in the reference corpus")]
    DuplicateLabel(String),

    /// A stored vector does not match the alphabet it claims to be built on
    #[error("vector for label {label:?} has {found} dimensions, alphabet has {expected}")]
    DimensionMismatch {
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("snapshot encoding/decoding failed: {0}")]
    Snapshot(#[from] serde_cbor::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
