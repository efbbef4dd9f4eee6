use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// Cosine score of one (reference, query) pair.
///
/// `Undefined` is the 0/0 case: one of the vectors has no recognized
/// character. It is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Similarity {
    Defined(f64),
    Undefined,
}

impl Similarity {
    /// Raw float value; `Undefined` becomes NaN
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Similarity::Defined(v) => v,
            Similarity::Undefined => f64::NAN,
        }
    }

    #[inline]
    pub fn as_option(self) -> Option<f64> {
        match self {
            Similarity::Defined(v) => Some(v),
            Similarity::Undefined => None,
        }
    }

    #[inline]
    pub fn is_undefined(self) -> bool {
        matches!(self, Similarity::Undefined)
    }

    /// Three-way order used for ranking.
    /// Defined scores by value, every defined score above `Undefined`.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Similarity::Defined(a), Similarity::Defined(b)) => a.total_cmp(b),
            (Similarity::Defined(_), Similarity::Undefined) => Ordering::Greater,
            (Similarity::Undefined, Similarity::Defined(_)) => Ordering::Less,
            (Similarity::Undefined, Similarity::Undefined) => Ordering::Equal,
        }
    }
}

impl From<Similarity> for Option<f64> {
    fn from(s: Similarity) -> Self {
        s.as_option()
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Similarity::Defined(v), Some(p)) => write!(f, "{:.*}", p, v),
            (Similarity::Defined(v), None) => write!(f, "{}", v),
            (Similarity::Undefined, _) => f.write_str("undefined"),
        }
    }
}

/// Ranked labels for one query.
/// (label, score) per reference entry, best first once sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub list: Vec<(Box<str>, Similarity)>,
}

impl RankedResult {
    pub fn new(list: Vec<(Box<str>, Similarity)>) -> Self {
        Self { list }
    }

    /// Sort by descending score.
    /// Stable: equal scores keep their current (corpus insertion) order.
    /// `Undefined` entries go last.
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.1.rank_cmp(&a.1));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Similarity)> + '_ {
        self.list.iter().map(|(label, score)| (&**label, *score))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.list.iter().map(|(label, _)| &**label)
    }

    /// First entry, if it has a defined score
    pub fn best(&self) -> Option<(&str, f64)> {
        self.list
            .first()
            .and_then(|(label, score)| score.as_option().map(|v| (&**label, v)))
    }

    /// At most `k` leading entries
    pub fn top(&self, k: usize) -> &[(Box<str>, Similarity)] {
        &self.list[..k.min(self.list.len())]
    }

    pub fn score_of(&self, label: &str) -> Option<Similarity> {
        self.list
            .iter()
            .find(|(l, _)| &**l == label)
            .map(|(_, s)| *s)
    }

    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.list.iter().position(|(l, _)| &**l == label)
    }
}

impl IntoIterator for RankedResult {
    type Item = (Box<str>, Similarity);
    type IntoIter = std::vec::IntoIter<(Box<str>, Similarity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

/// `label<TAB>score` per line.
/// `{:#}` pads labels into a column.
impl fmt::Display for RankedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if f.alternate() {
            self.list.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0)
        } else {
            0
        };
        for (label, score) in &self.list {
            if f.alternate() {
                writeln!(f, "{:<width$}  {:.6}", label, score, width = width)?;
            } else {
                writeln!(f, "{}\t{:.6}", label, score)?;
            }
        }
        Ok(())
    }
}
