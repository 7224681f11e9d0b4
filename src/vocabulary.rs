// SPDX-License-Identifier: PMPL-1.0-or-later
//! Common-word vocabularies for the jargon check.
//!
//! The process-wide default is initialised once, either explicitly at startup
//! via [`Vocabulary::install_default`] or lazily on first use from
//! [`DEFAULT_WORDS_PATH`], and is never mutated afterwards. Callers that want
//! a different dictionary build their own [`Vocabulary`] and pass it to a
//! single analysis.

use crate::error::{AnalyzerError, Result};
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Word list looked up, relative to the working directory, when no default
/// was installed
pub const DEFAULT_WORDS_PATH: &str = "common_words_1000.txt";

/// Used when no word list file is available
const BUILTIN_WORDS: &[&str] = &[
    "the", "and", "a", "in", "to", "have", "it", "i", "that", "for", "you", "he",
    "with", "on", "do", "say", "this", "they", "at", "but", "we", "his", "from",
    "not", "by", "she", "or", "as", "what", "go", "their", "can", "who", "get",
    "if", "would", "her", "all", "my", "make", "about", "know", "will", "up",
    "one", "time", "there", "year", "so", "think", "when", "which", "them", "some",
    "me", "people", "take", "out", "into", "just", "see", "him", "your", "come",
    "could", "now", "than", "like", "other", "how", "then", "its", "our", "two",
    "more", "these", "want", "way", "look", "first", "also", "new", "because",
    "day", "use", "no", "man", "find", "here", "thing", "give",
];

static DEFAULT: OnceLock<Vocabulary> = OnceLock::new();

/// An immutable set of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Build from any list of words. Entries are trimmed and lowercased;
    /// blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The small built-in list
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS)
    }

    /// Read a word list with one word per line
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// Read a word list, falling back to the built-in list if it cannot be read
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(vocab) => {
                debug!("Loaded {} common words from {}", vocab.len(), path.display());
                vocab
            }
            Err(AnalyzerError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No word list at {}, using built-in list", path.display());
                Self::builtin()
            }
            Err(e) => {
                warn!("Failed to read word list {}: {}; using built-in list", path.display(), e);
                Self::builtin()
            }
        }
    }

    /// Read a word list meant to replace the default for one run. A list with
    /// no words does not replace anything and the default is returned.
    pub fn load_override(path: &Path) -> Result<Cow<'static, Vocabulary>> {
        let vocabulary = Self::load(path)?;
        if vocabulary.is_empty() {
            warn!("Word list {} is empty; using the default vocabulary", path.display());
            return Ok(Cow::Borrowed(Self::default_words()));
        }
        debug!("Using {} common words from {}", vocabulary.len(), path.display());
        Ok(Cow::Owned(vocabulary))
    }

    /// The process-wide default vocabulary
    pub fn default_words() -> &'static Vocabulary {
        DEFAULT.get_or_init(|| Self::load_or_builtin(Path::new(DEFAULT_WORDS_PATH)))
    }

    /// Set the process-wide default. Fails once the default is in use.
    pub fn install_default(vocabulary: Vocabulary) -> Result<()> {
        DEFAULT.set(vocabulary).map_err(|_| {
            AnalyzerError::Config("default vocabulary is already initialised".to_string())
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
