//! Regex-based word tokenizer.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TwosenseError};

/// Default token pattern: two or more word characters between word boundaries.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// A tokenizer that lowercases its input and extracts regex matches as tokens.
///
/// Single-character words ("a", "I") are dropped by the default pattern.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with [`DEFAULT_TOKEN_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Lowercased token texts, in order.
    pub fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .words(text)
            .into_iter()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("I took A Bag of rubbish!")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["took", "bag", "of", "rubbish"]);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_apostrophes_split_words() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(
            tokenizer.words("The director's cut"),
            vec!["the", "director", "cut"]
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::with_pattern("(").unwrap_err();
        assert!(matches!(err, TwosenseError::Regex(_)));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
