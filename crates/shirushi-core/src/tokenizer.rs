//! # Sentence Tokenizer
//!
//! Splits raw sentences into word and punctuation tokens for tagging.
//! Token text is produced by the same [`normalize`] function the estimator
//! applies to training observations, so training and decoding always agree
//! on symbols.

use regex::Regex;

use crate::error::Result;

/// Case-normalizes one observation symbol.
///
/// This is the single normalization rule shared by training and decoding:
/// trim surrounding whitespace and Unicode-lowercase the token.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// A token extracted from a sentence with positional information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Normalized token text.
    pub text: String,
    /// Start byte offset in the original string.
    pub start: usize,
    /// End byte offset in the original string.
    pub end: usize,
    /// Token index in the sequence.
    pub index: usize,
}

/// Sentence tokenizer producing word and punctuation tokens.
pub struct Tokenizer {
    re_token: Regex,
}

impl Tokenizer {
    /// Constructs a new `Tokenizer` with a pre-compiled token pattern.
    ///
    /// # Errors
    ///
    /// Returns `ShirushiError::RegexError` if the pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Words (keeping internal apostrophes) or single punctuation marks.
            re_token: Regex::new(r"\w+(?:'\w+)*|[^\w\s]")?,
        })
    }

    /// Tokenizes a sentence into a sequence of normalized tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use shirushi_core::tokenizer::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new().unwrap();
    /// let tokens = tokenizer.tokenize("Time flies like an arrow.");
    /// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    /// assert_eq!(texts, ["time", "flies", "like", "an", "arrow", "."]);
    /// ```
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        self.re_token
            .find_iter(input)
            .enumerate()
            .map(|(index, m)| Token {
                text: normalize(m.as_str()),
                start: m.start(),
                end: m.end(),
                index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_punctuation() {
        let tokenizer = Tokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("The dog runs, quickly!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, ["the", "dog", "runs", ",", "quickly", "!"]);
    }

    #[test]
    fn keeps_contractions_together() {
        let tokenizer = Tokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("it doesn't work");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, ["it", "doesn't", "work"]);
    }

    #[test]
    fn spans_recover_original_text() {
        let tokenizer = Tokenizer::new().unwrap();
        let input = "Time flies.";
        let tokens = tokenizer.tokenize(input);

        assert_eq!(&input[tokens[0].start..tokens[0].end], "Time");
        assert_eq!(&input[tokens[1].start..tokens[1].end], "flies");
        assert_eq!(&input[tokens[2].start..tokens[2].end], ".");
        assert_eq!(tokens[2].index, 2);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let tokenizer = Tokenizer::new().unwrap();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize(" The "), "the");
        assert_eq!(normalize("ÜBER"), "über");
    }
}
