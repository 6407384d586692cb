//! Text to word tokenization: replace non-letters, lowercase, split.

/// Replace every character that is not an ASCII letter with one space.
///
/// One space per character, so `"a--b"` becomes `"a  b"`; runs collapse later
/// in [`tokenize`].
pub fn replace_non_letters(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect()
}

/// Lowercase and split on whitespace runs. Never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Letters-only lowercase words, in order.
pub fn words(text: &str) -> Vec<String> {
    tokenize(&replace_non_letters(text))
}
