use std::sync::Arc;

use indexmap::IndexMap;
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{
    error::{Error, Result},
    vectorizer::{alphabet::Alphabet, corpus::ReferenceCorpus, frequency::FrequencyVector},
};

/// Deserialized form of a `ReferenceCorpus`.
/// Checked by `into_reference_corpus` before it becomes a corpus:
/// labels must be unique and every vector must have one slot per alphabet char.
#[derive(Debug, Deserialize)]
pub struct CorpusData {
    pub alphabet: Alphabet,
    /// (label, vector) in corpus order
    pub entries: Vec<(String, FrequencyVector)>,
}

impl CorpusData {
    pub fn into_reference_corpus(self) -> Result<ReferenceCorpus> {
        let expected = self.alphabet.len();
        let mut entries = IndexMap::with_capacity(self.entries.len());
        for (label, vec) in self.entries {
            if vec.len() != expected {
                return Err(Error::DimensionMismatch {
                    label,
                    expected,
                    found: vec.len(),
                });
            }
            if entries.contains_key(label.as_str()) {
                return Err(Error::DuplicateLabel(label));
            }
            entries.insert(label.into_boxed_str(), vec);
        }
        Ok(ReferenceCorpus {
            alphabet: Arc::new(self.alphabet),
            entries,
        })
    }
}

struct EntriesSeq<'a>(&'a IndexMap<Box<str>, FrequencyVector>);

impl Serialize for EntriesSeq<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl Serialize for ReferenceCorpus {
    /// Same layout as `CorpusData`
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CorpusData", 2)?;
        state.serialize_field("alphabet", &*self.alphabet)?;
        state.serialize_field("entries", &EntriesSeq(&self.entries))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ReferenceCorpus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CorpusData::deserialize(deserializer)?
            .into_reference_corpus()
            .map_err(serde::de::Error::custom)
    }
}

/// CBOR snapshot
impl ReferenceCorpus {
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        let bytes = serde_cbor::to_vec(self)?;
        debug!(bytes = bytes.len(), labels = self.len(), "encoded corpus snapshot");
        Ok(bytes)
    }

    /// Decode a snapshot made by `to_cbor`.
    ///
    /// # Errors
    /// * `Error::Snapshot` - malformed CBOR, or an invalid alphabet
    /// * `Error::DimensionMismatch` / `Error::DuplicateLabel` - inconsistent entries
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        let data: CorpusData = serde_cbor::from_slice(bytes)?;
        data.into_reference_corpus()
    }
}
