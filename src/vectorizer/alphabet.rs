use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Reference character set.
/// `x` precedes `w`. This order is the vector layout.
pub const REFERENCE_CHARS: [char; 27] = [
    'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'x', 'w',
    'y', 'z', ' ',
];

/// Alphabet 構造体
/// Ordered set of recognized characters.
/// The position of a character is the dimension it is counted in,
/// so the alphabet size is the length of every `FrequencyVector` built from it.
///
/// Lookup is O(1) (hash index), order is insertion order.
///
/// # Examples
/// ```
/// use charvec::Alphabet;
/// let alphabet = Alphabet::reference();
/// assert_eq!(alphabet.len(), 27);
/// assert_eq!(alphabet.index_of('a'), Some(0));
/// assert_eq!(alphabet.index_of('A'), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    chars: IndexSet<char>,
}

impl Alphabet {
    /// Build an alphabet from an ordered list of characters.
    ///
    /// # Errors
    /// * `Error::EmptyAlphabet` - no characters were given
    /// * `Error::DuplicateCharacter` - a character occurs twice
    pub fn new<I>(chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut set = IndexSet::new();
        for c in chars {
            if !set.insert(c) {
                return Err(Error::DuplicateCharacter(c));
            }
        }
        if set.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        Ok(Self { chars: set })
    }

    /// The 27-character reference alphabet (lowercase latin + space)
    pub fn reference() -> Self {
        // REFERENCE_CHARS は重複なし
        Self {
            chars: REFERENCE_CHARS.iter().copied().collect(),
        }
    }

    /// Position of `c`, or `None` when `c` is outside the alphabet.
    /// Callers skip `None`; it is not an error.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.get_index_of(&c)
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Character at dimension `index`
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get_index(index).copied()
    }

    /// Number of dimensions
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

/// Order sensitive: the same characters in another order are a different layout.
impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.chars.len() == other.chars.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Alphabet {}

impl Default for Alphabet {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = Error;

    fn try_from(chars: Vec<char>) -> Result<Self> {
        Self::new(chars)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.chars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_alphabet_has_27_dims() {
        let alphabet = Alphabet::reference();
        assert_eq!(alphabet.len(), 27);
        assert_eq!(alphabet.index_of('a'), Some(0));
        assert_eq!(alphabet.index_of('v'), Some(21));
        assert_eq!(alphabet.index_of(' '), Some(26));
    }

    #[test]
    fn x_and_w_are_transposed() {
        let alphabet = Alphabet::reference();
        assert_eq!(alphabet.index_of('x'), Some(22));
        assert_eq!(alphabet.index_of('w'), Some(23));
        assert_eq!(alphabet.char_at(22), Some('x'));
        assert_eq!(alphabet.char_at(23), Some('w'));
    }

    #[test]
    fn unknown_chars_have_no_index() {
        let alphabet = Alphabet::reference();
        for c in ['A', 'Z', '0', '.', '\n', 'ã', 'ç'] {
            assert_eq!(alphabet.index_of(c), None, "{c:?} should be outside");
            assert!(!alphabet.contains(c));
        }
        assert_eq!(alphabet.char_at(27), None);
    }

    #[test]
    fn custom_alphabet_rejects_duplicates() {
        match Alphabet::new("abca".chars()) {
            Err(Error::DuplicateCharacter('a')) => {}
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn custom_alphabet_rejects_empty() {
        assert!(matches!(Alphabet::new("".chars()), Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn custom_alphabet_keeps_order() {
        let alphabet = Alphabet::new("zyx".chars()).unwrap();
        assert_eq!(alphabet.iter().collect::<String>(), "zyx");
        assert_eq!(alphabet.index_of('x'), Some(2));
        assert_ne!(alphabet, Alphabet::new("xyz".chars()).unwrap());
    }
}
