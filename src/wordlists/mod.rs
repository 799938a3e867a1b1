//! Word lists for crossword generation
//!
//! Word providers read clue/word pairs from a source and hand them to the
//! generator. A small sample list is compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_WORDS, SAMPLE_WORDS_COUNT};
pub use loader::{
    BuiltinWordProvider, CsvOptions, CsvWordProvider, LoadError, WordProvider, WordProviderType,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE_WORDS.len(), SAMPLE_WORDS_COUNT);
    }

    #[test]
    fn sample_entries_are_valid_words() {
        for &(clue, word) in SAMPLE_WORDS {
            assert!(!clue.is_empty(), "Empty clue for '{word}'");
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn sample_words_are_distinct() {
        let unique: std::collections::HashSet<_> =
            SAMPLE_WORDS.iter().map(|(_, word)| word).collect();
        assert_eq!(unique.len(), SAMPLE_WORDS.len());
    }
}
