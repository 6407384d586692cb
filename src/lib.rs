//! review-wordlist: turn free-text documents (often HTML) into lowercase word lists.

pub mod markup;
pub mod normalize;
pub mod server;
pub mod stopwords;
pub mod tokenize;

pub use normalize::{normalize, Normalizer};
pub use stopwords::{StopwordMode, StopwordSet};
