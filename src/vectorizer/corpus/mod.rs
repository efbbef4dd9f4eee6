use std::sync::Arc;

use indexmap::{map::Entry, IndexMap};
use tracing::debug;

use crate::{
    error::{Error, Result},
    vectorizer::{alphabet::Alphabet, frequency::FrequencyVector, Vectorizer},
};

/// Labels of the demo corpus, each vectorized from its own characters
pub const DEMO_LABELS: [&str; 4] = [
    "home",
    "atualizar dados cadastrais",
    "ativar cartao",
    "texto de teste",
];

/// Label → `FrequencyVector` table used as comparison targets.
///
/// Built once, read-only afterward. Share it as `Arc<ReferenceCorpus>`;
/// there is no mutation API, so concurrent readers need no lock.
///
/// Iteration order is insertion order (this is the tie order of a ranking).
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    pub(crate) alphabet: Arc<Alphabet>,
    pub(crate) entries: IndexMap<Box<str>, FrequencyVector>,
}

impl ReferenceCorpus {
    /// Self-referential corpus: every label is vectorized from its own text.
    pub fn from_labels<I, S>(alphabet: Arc<Alphabet>, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<S> = labels.into_iter().collect();
        Self::from_pairs(alphabet, labels.iter().map(|l| (l.as_ref(), l.as_ref())))
    }

    /// Corpus from explicit `(label, reference text)` pairs.
    ///
    /// # Errors
    /// * `Error::DuplicateLabel` - the same label given twice
    pub fn from_pairs<I, L, T>(alphabet: Arc<Alphabet>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, T)>,
        L: AsRef<str>,
        T: AsRef<str>,
    {
        let vectorizer = Vectorizer::new(alphabet);
        let mut entries = IndexMap::new();
        for (label, text) in pairs {
            match entries.entry(Box::<str>::from(label.as_ref())) {
                Entry::Occupied(e) => return Err(Error::DuplicateLabel(e.key().to_string())),
                Entry::Vacant(e) => {
                    e.insert(vectorizer.vectorize(text.as_ref()));
                }
            }
        }
        debug!(labels = entries.len(), dim = vectorizer.dim(), "built reference corpus");
        Ok(Self {
            alphabet: Arc::clone(vectorizer.alphabet()),
            entries,
        })
    }

    /// The four-label demo corpus over the reference alphabet
    pub fn demo() -> Self {
        let vectorizer = Vectorizer::reference();
        // DEMO_LABELS は重複なし
        let entries = DEMO_LABELS
            .iter()
            .map(|&label| (Box::<str>::from(label), vectorizer.vectorize(label)))
            .collect();
        Self {
            alphabet: Arc::clone(vectorizer.alphabet()),
            entries,
        }
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Vectorizer over this corpus's alphabet (queries must use it)
    pub fn vectorizer(&self) -> Vectorizer {
        Vectorizer::new(Arc::clone(&self.alphabet))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&FrequencyVector> {
        self.entries.get(label)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|k| &**k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyVector)> + '_ {
        self.entries.iter().map(|(k, v)| (&**k, v))
    }
}

/// Order sensitive: insertion order decides ties, so it is part of the value.
impl PartialEq for ReferenceCorpus {
    fn eq(&self, other: &Self) -> bool {
        self.alphabet == other.alphabet
            && self.entries.len() == other.entries.len()
            && self.iter().eq(other.iter())
    }
}

impl Eq for ReferenceCorpus {}

impl Default for ReferenceCorpus {
    fn default() -> Self {
        Self::demo()
    }
}
