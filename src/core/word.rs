//! Crossword entry representation
//!
//! A Word pairs a clue with its uppercase solution text and a list-unique id.

use std::fmt;

/// Identifier assigned to a word by its word provider
pub type WordId = u32;

/// A crossword entry: clue plus solution text
///
/// Equality is by `id` only. The text is stored uppercase and its length is
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct Word {
    id: WordId,
    clue: String,
    text: String,
    length: usize,
}

/// Ordered list of words handed to the generator
pub type WordList = Vec<Word>;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    EmptyClue,
    EmptyText,
    InvalidCharacters(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyClue => write!(f, "Clue must not be empty"),
            Self::EmptyText => write!(f, "Solution word must not be empty"),
            Self::InvalidCharacters(text) => {
                write!(f, "Solution word '{text}' must contain only ASCII letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word
    ///
    /// The text is upper-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The clue is empty
    /// - The text is empty
    /// - The text contains anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use crossword_gen::core::Word;
    ///
    /// let word = Word::new(1, "Feline household pet", "cat").unwrap();
    /// assert_eq!(word.text(), "CAT");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new(2, "", "DOG").is_err());
    /// assert!(Word::new(3, "Not a word", "R2D2").is_err());
    /// ```
    pub fn new(
        id: WordId,
        clue: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, WordError> {
        let clue: String = clue.into();
        let text: String = text.into().to_ascii_uppercase();

        if clue.is_empty() {
            return Err(WordError::EmptyClue);
        }

        if text.is_empty() {
            return Err(WordError::EmptyText);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let length = text.len();

        Ok(Self {
            id,
            clue,
            text,
            length,
        })
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> WordId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Get the solution as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the solution as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters, fixed at construction
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new(7, "Opposite of night", "DAY").unwrap();
        assert_eq!(word.id(), 7);
        assert_eq!(word.clue(), "Opposite of night");
        assert_eq!(word.text(), "DAY");
        assert_eq!(word.letters(), b"DAY");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new(1, "Clue", "ocean").unwrap();
        assert_eq!(word.text(), "OCEAN");

        let word2 = Word::new(2, "Clue", "OcEaN").unwrap();
        assert_eq!(word2.text(), "OCEAN");
    }

    #[test]
    fn word_creation_empty_fields() {
        assert_eq!(Word::new(1, "", "CAT"), Err(WordError::EmptyClue));
        assert_eq!(Word::new(1, "Clue", ""), Err(WordError::EmptyText));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new(1, "Clue", "ICE CREAM").is_err()); // Space
        assert!(Word::new(1, "Clue", "R2D2").is_err()); // Digits
        assert!(Word::new(1, "Clue", "CAFÉ").is_err()); // Non-ASCII
        assert!(matches!(
            Word::new(1, "Clue", "e-mail"),
            Err(WordError::InvalidCharacters(text)) if text == "E-MAIL"
        ));
    }

    #[test]
    fn word_letters() {
        let word = Word::new(1, "Clue", "TAR").unwrap();
        assert_eq!(word.letters(), b"TAR");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_equality_is_by_id() {
        let word1 = Word::new(1, "Feline", "CAT").unwrap();
        let word2 = Word::new(1, "Different clue", "DOG").unwrap();
        let word3 = Word::new(2, "Feline", "CAT").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_display() {
        let word = Word::new(1, "Clue", "earth").unwrap();
        assert_eq!(format!("{word}"), "EARTH");
    }
}
