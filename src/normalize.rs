//! The normalizer: markup stripping, letters-only tokenization, optional
//! stopword filtering, in that order.

use crate::markup;
use crate::stopwords::{StopwordMode, StopwordSet};
use crate::tokenize;

/// Normalize one document against the embedded English stopword list.
///
/// Total over any input: empty or letter-free documents yield `[]`, and
/// malformed markup yields whatever text could be recovered.
pub fn normalize(document: &str, remove_stopwords: bool) -> Vec<String> {
    Normalizer::english()
        .with_remove_stopwords(remove_stopwords)
        .normalize(document)
}

/// A reusable normalizer bound to a stopword set.
///
/// Holds only a shared reference, so it is `Copy` and can be handed to as
/// many threads as needed.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    stopwords: &'a StopwordSet,
    mode: StopwordMode,
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self::english()
    }
}

impl Normalizer<'static> {
    pub fn english() -> Self {
        Normalizer::new(StopwordSet::english())
    }
}

impl<'a> Normalizer<'a> {
    /// Starts in [`StopwordMode::Keep`].
    pub fn new(stopwords: &'a StopwordSet) -> Self {
        Self {
            stopwords,
            mode: StopwordMode::Keep,
        }
    }

    pub fn with_mode(mut self, mode: StopwordMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_remove_stopwords(self, remove_stopwords: bool) -> Self {
        self.with_mode(remove_stopwords.into())
    }

    pub fn normalize(&self, document: &str) -> Vec<String> {
        let text = markup::strip_markup(document);
        let tokens = tokenize::words(&text);
        self.mode.apply(self.stopwords, tokens)
    }

    /// Normalize each document in turn; one token list per document.
    pub fn normalize_all<I, S>(&self, documents: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        documents
            .into_iter()
            .map(|doc| self.normalize(doc.as_ref()))
            .collect()
    }
}
