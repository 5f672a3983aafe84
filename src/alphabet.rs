use std::fmt;
use std::sync::Arc;

/// The ordered sequence of letters the player must press.
///
/// Cheap to clone (shared backing slice) and never mutated once built, so a
/// `Game` can carry it across pure state transitions without copying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: Arc<[char]>,
}

impl Alphabet {
    /// The canonical 29-letter sequence: 'a'..'z' followed by å, ä, ö.
    pub fn swedish() -> Self {
        let mut letters: Vec<char> = ('a'..='z').collect();
        letters.extend(['å', 'ä', 'ö']);
        Self {
            letters: letters.into(),
        }
    }

    /// Plain 'a'..'z'.
    pub fn english() -> Self {
        Self {
            letters: ('a'..='z').collect::<Vec<char>>().into(),
        }
    }

    /// Build a custom sequence from a string, e.g. for practicing a subset
    /// or for tests with short alphabets. Returns `None` for an empty input.
    pub fn from_letters(letters: &str) -> Option<Self> {
        let letters: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.is_empty() {
            return None;
        }
        Some(Self {
            letters: letters.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at `idx`, or `None` past the end of the sequence.
    pub fn get(&self, idx: usize) -> Option<char> {
        self.letters.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::swedish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
