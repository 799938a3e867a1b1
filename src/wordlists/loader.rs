//! Word list loading utilities
//!
//! Providers append clue/word pairs to a [`WordList`], numbering them after
//! the highest id already present.

use super::SAMPLE_WORDS;
use crate::core::{Word, WordError, WordId, WordList};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    TooManyColumns {
        line: usize,
        content: String,
        delimiter: char,
    },
    InvalidEntry {
        line: usize,
        content: String,
        source: WordError,
    },
    UnknownProvider(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not read word list {}: {source}", path.display())
            }
            Self::TooManyColumns {
                line,
                content,
                delimiter,
            } => write!(
                f,
                "Line {line}: expected two columns separated by '{delimiter}': {content}"
            ),
            Self::InvalidEntry {
                line,
                content,
                source,
            } => write!(f, "Line {line}: {source}: {content}"),
            Self::UnknownProvider(name) => {
                write!(f, "Unknown word list type '{name}' (expected 'csv' or 'builtin')")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A source of crossword words
pub trait WordProvider {
    /// Append this provider's words to `words`
    ///
    /// New ids continue after the highest id already in `words`.
    ///
    /// # Errors
    /// Returns `LoadError` if the source cannot be read or holds an invalid
    /// entry. `words` is left unchanged on error.
    fn retrieve_word_list(&self, words: &mut WordList) -> Result<(), LoadError>;
}

/// First id to hand out when appending to `words`
fn next_id(words: &[Word]) -> WordId {
    words.iter().map(Word::id).max().unwrap_or(0) + 1
}

/// Parsing options for CSV word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Skip the first line
    pub ignore_header: bool,
    /// Column separator between clue and word
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            ignore_header: true,
            delimiter: ',',
        }
    }
}

/// Reads `clue<delimiter>word` lines from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvWordProvider {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvWordProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, options: CsvOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordProvider for CsvWordProvider {
    fn retrieve_word_list(&self, words: &mut WordList) -> Result<(), LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let parsed = parse_csv(&content, self.options, next_id(words))?;
        words.extend(parsed);
        Ok(())
    }
}

/// Parse CSV word list content
///
/// Blank lines are skipped. Clue and word are trimmed and the word is
/// upper-cased.
///
/// # Errors
///
/// Returns `LoadError` naming the 1-based line number for lines with more
/// than two columns, an empty clue or word, or a word with non-letters.
///
/// # Examples
/// ```
/// use crossword_gen::wordlists::loader::{CsvOptions, parse_csv};
///
/// let words = parse_csv("clue,word\nFeline pet, cat\n", CsvOptions::default(), 1).unwrap();
/// assert_eq!(words.len(), 1);
/// assert_eq!(words[0].text(), "CAT");
/// assert_eq!(words[0].clue(), "Feline pet");
/// ```
pub fn parse_csv(content: &str, options: CsvOptions, first_id: WordId) -> Result<WordList, LoadError> {
    let skip = usize::from(options.ignore_header);
    let mut id = first_id;
    let mut words = WordList::new();

    for (index, line) in content.lines().enumerate().skip(skip) {
        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split(options.delimiter).collect();
        if columns.len() > 2 {
            return Err(LoadError::TooManyColumns {
                line: index + 1,
                content: line.to_string(),
                delimiter: options.delimiter,
            });
        }

        let clue = columns[0].trim();
        let text = columns.get(1).copied().map_or("", str::trim);

        let word = Word::new(id, clue, text).map_err(|source| LoadError::InvalidEntry {
            line: index + 1,
            content: line.to_string(),
            source,
        })?;
        words.push(word);
        id += 1;
    }

    Ok(words)
}

/// Provides the sample list compiled into the binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinWordProvider;

impl WordProvider for BuiltinWordProvider {
    fn retrieve_word_list(&self, words: &mut WordList) -> Result<(), LoadError> {
        let first = next_id(words);
        let parsed = words_from_pairs(SAMPLE_WORDS, first).map_err(|(index, source)| {
            let (clue, word) = SAMPLE_WORDS[index];
            LoadError::InvalidEntry {
                line: index + 1,
                content: format!("{clue},{word}"),
                source,
            }
        })?;
        words.extend(parsed);
        Ok(())
    }
}

/// Convert `(clue, word)` pairs to words numbered from `first_id`
///
/// # Errors
/// Returns the index of the first invalid pair with its `WordError`.
pub fn words_from_pairs(
    pairs: &[(&str, &str)],
    first_id: WordId,
) -> Result<WordList, (usize, WordError)> {
    pairs
        .iter()
        .zip(first_id..)
        .enumerate()
        .map(|(index, (&(clue, text), id))| Word::new(id, clue, text).map_err(|e| (index, e)))
        .collect()
}

/// Enum wrapper for all word provider types
///
/// Resolved explicitly from the configured type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordProviderType {
    Csv(CsvWordProvider),
    Builtin(BuiltinWordProvider),
}

impl WordProvider for WordProviderType {
    fn retrieve_word_list(&self, words: &mut WordList) -> Result<(), LoadError> {
        match self {
            Self::Csv(p) => p.retrieve_word_list(words),
            Self::Builtin(p) => p.retrieve_word_list(words),
        }
    }
}

impl WordProviderType {
    /// Create a provider from its configured type name
    ///
    /// Supported names: "csv", "builtin". `location` is only used by "csv".
    ///
    /// # Errors
    /// Returns `LoadError::UnknownProvider` for any other name.
    pub fn from_name(
        name: &str,
        location: impl Into<PathBuf>,
        options: CsvOptions,
    ) -> Result<Self, LoadError> {
        match name {
            "csv" => Ok(Self::Csv(CsvWordProvider::new(location, options))),
            "builtin" => Ok(Self::Builtin(BuiltinWordProvider)),
            other => Err(LoadError::UnknownProvider(other.to_string())),
        }
    }

    /// Load a complete word list from this provider
    ///
    /// # Errors
    /// Propagates the provider's `LoadError`.
    pub fn load(&self) -> Result<WordList, LoadError> {
        let mut words = WordList::new();
        self.retrieve_word_list(&mut words)?;
        Ok(words)
    }
}
