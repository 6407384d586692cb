//! Stopword reference sets and the optional filtering stage.
//!
//! The English list is embedded in the binary and built once, on first use.
//! Custom lists can be loaded from a word-per-line file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use once_cell::sync::Lazy;

const ENGLISH_WORDS: &str = include_str!("../data/english_stopwords.txt");

static ENGLISH: Lazy<StopwordSet> =
    Lazy::new(|| StopwordSet::from_words(parse_list(ENGLISH_WORDS)));

/// Lines of a word list, minus blanks and `#` comments.
fn parse_list(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Read-only set of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The embedded English list, shared for the lifetime of the process.
    pub fn english() -> &'static StopwordSet {
        &ENGLISH
    }

    /// Build a set from arbitrary words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Read a word-per-line list. Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            words.extend(parse_list(&line).map(str::to_lowercase));
        }
        Ok(Self { words })
    }

    /// Load a word-per-line list from a file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Exact, whole-word membership. Callers pass already-lowercased tokens.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every token in the set, keeping survivors in their original order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }
}

/// What the optional fourth stage does with the tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopwordMode {
    /// Pass tokens through untouched.
    #[default]
    Keep,
    /// Drop tokens that are members of the stopword set.
    Remove,
}

impl StopwordMode {
    pub fn apply(self, stopwords: &StopwordSet, tokens: Vec<String>) -> Vec<String> {
        match self {
            StopwordMode::Keep => tokens,
            StopwordMode::Remove => stopwords.filter(tokens),
        }
    }
}

impl From<bool> for StopwordMode {
    fn from(remove_stopwords: bool) -> Self {
        if remove_stopwords {
            StopwordMode::Remove
        } else {
            StopwordMode::Keep
        }
    }
}
