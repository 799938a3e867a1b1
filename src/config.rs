//! Generator configuration
//!
//! A JSON document with three sections:
//!
//! ```json
//! {
//!   "wordlist": {
//!     "type": "csv",
//!     "location": "words.csv",
//!     "ignore_header": true,
//!     "delimiter": ","
//!   },
//!   "constraints": {
//!     "crossword_generation_count": 1000,
//!     "max_width": 15,
//!     "max_height": 15
//!   },
//!   "scoring": {
//!     "type": "simple",
//!     "base_score": 1000,
//!     "placed_word_bonus": 50
//!   }
//! }
//! ```
//!
//! Every key is optional. Missing scoring weights are zero. A relative
//! `location` is resolved against the directory of the config file; `type`
//! is `"csv"` or `"builtin"`. `max_width` and `max_height` may not exceed
//! [`MAX_GRID_SIDE`].

use crate::core::MAX_GRID_SIDE;
use crate::generator::{GeneratorSettings, ScorerType, SimpleScorer};
use crate::wordlists::{CsvOptions, LoadError, WordProviderType};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration bundled with the binary, used when no file is given
pub const BUNDLED_CONFIG: &str = include_str!("../data/crossword.json");

/// Error type for configuration loading and validation
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    InvalidConstraint {
        name: &'static str,
        value: i64,
    },
    ConstraintTooLarge {
        name: &'static str,
        value: i64,
        max: usize,
    },
    UnknownScorer(String),
    MissingLocation,
    WordList(LoadError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Could not read config {}: {source}", path.display())
            }
            Self::Parse {
                path: Some(path),
                source,
            } => write!(f, "Invalid config {}: {source}", path.display()),
            Self::Parse { path: None, source } => write!(f, "Invalid config: {source}"),
            Self::InvalidConstraint { name, value } => {
                write!(f, "Constraint '{name}' must be positive, got {value}")
            }
            Self::ConstraintTooLarge { name, value, max } => {
                write!(f, "Constraint '{name}' must be at most {max}, got {value}")
            }
            Self::UnknownScorer(name) => write!(
                f,
                "Unknown scoring type '{name}' (expected one of: {})",
                ScorerType::NAMES.join(", ")
            ),
            Self::MissingLocation => {
                write!(f, "Word list type 'csv' requires a 'location' entry")
            }
            Self::WordList(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::WordList(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for ConfigError {
    fn from(e: LoadError) -> Self {
        Self::WordList(e)
    }
}

/// `wordlist` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: Option<PathBuf>,
    pub ignore_header: bool,
    pub delimiter: char,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            kind: "builtin".to_string(),
            location: None,
            ignore_header: true,
            delimiter: ',',
        }
    }
}

/// `constraints` section
///
/// Signed so that negative values are reported as invalid constraints
/// rather than as parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConstraintsConfig {
    pub crossword_generation_count: i64,
    pub max_width: i64,
    pub max_height: i64,
}

impl Default for ConstraintsConfig {
    fn default() -> Self {
        let settings = GeneratorSettings::default();
        Self {
            crossword_generation_count: settings.trial_count as i64,
            max_width: settings.max_width as i64,
            max_height: settings.max_height as i64,
        }
    }
}

/// `scoring` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub weights: SimpleScorer,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            kind: "simple".to_string(),
            weights: SimpleScorer::default(),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wordlist: WordListConfig,
    pub constraints: ConstraintsConfig,
    pub scoring: ScoringConfig,
    /// Directory relative word list locations are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Config {
    /// Parse a configuration document
    ///
    /// Relative locations resolve against the current directory.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed JSON or mistyped values.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Read and parse a configuration file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            })?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Ok(config)
    }

    /// The configuration compiled into the binary
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` if the bundled document is malformed.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::parse(BUNDLED_CONFIG)
    }

    /// Validated generator settings from `constraints`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConstraint` for zero or negative values
    /// and `ConfigError::ConstraintTooLarge` for a side above
    /// [`MAX_GRID_SIDE`].
    pub fn generator_settings(&self) -> Result<GeneratorSettings, ConfigError> {
        let c = &self.constraints;
        Ok(GeneratorSettings {
            trial_count: positive("crossword_generation_count", c.crossword_generation_count)?,
            max_width: grid_side("max_width", c.max_width)?,
            max_height: grid_side("max_height", c.max_height)?,
        })
    }

    /// Scorer selected by `scoring`
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownScorer` for an unsupported type name.
    pub fn scorer(&self) -> Result<ScorerType, ConfigError> {
        ScorerType::from_name(&self.scoring.kind, self.scoring.weights.clone())
            .ok_or_else(|| ConfigError::UnknownScorer(self.scoring.kind.clone()))
    }

    /// Path of the configured word list, resolved against `base_dir`
    #[must_use]
    pub fn wordlist_path(&self) -> Option<PathBuf> {
        self.wordlist
            .location
            .as_ref()
            .map(|location| self.base_dir.join(location))
    }

    /// Word provider selected by `wordlist`
    ///
    /// # Errors
    /// Returns `ConfigError` for an unknown type or a csv list with no
    /// location.
    pub fn word_provider(&self) -> Result<WordProviderType, ConfigError> {
        let options = CsvOptions {
            ignore_header: self.wordlist.ignore_header,
            delimiter: self.wordlist.delimiter,
        };

        let location = match (self.wordlist.kind.as_str(), self.wordlist_path()) {
            ("csv", None) => return Err(ConfigError::MissingLocation),
            (_, path) => path.unwrap_or_default(),
        };

        Ok(WordProviderType::from_name(
            &self.wordlist.kind,
            location,
            options,
        )?)
    }

    /// Point the word list at a CSV file given on the command line
    ///
    /// The path is used as given, not relative to the config file.
    pub fn use_csv_wordlist(&mut self, path: &Path) {
        self.wordlist.kind = "csv".to_string();
        self.wordlist.location = Some(path.to_path_buf());
        self.base_dir = PathBuf::new();
    }
}

fn positive(name: &'static str, value: i64) -> Result<usize, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::InvalidConstraint { name, value });
    }
    usize::try_from(value).map_err(|_| ConfigError::InvalidConstraint { name, value })
}

fn grid_side(name: &'static str, value: i64) -> Result<usize, ConfigError> {
    let side = positive(name, value)?;
    if side > MAX_GRID_SIDE {
        return Err(ConfigError::ConstraintTooLarge {
            name,
            value,
            max: MAX_GRID_SIDE,
        });
    }
    Ok(side)
}
