//! Tokenizer implementations feeding the TF-IDF vectorizers.
//!
//! - [`regex::RegexTokenizer`] - lowercased word tokens of two or more word characters
//! - [`ngram::WordNgramTokenizer`] - contiguous word n-grams joined by a space
//! - [`ngram::CharNgramTokenizer`] - character n-grams bounded by whitespace
//!
//! # Examples
//!
//! ```
//! use twosense::analysis::tokenizer::Tokenizer;
//! use twosense::analysis::tokenizer::ngram::WordNgramTokenizer;
//!
//! let tokenizer = WordNgramTokenizer::new(1, 2).unwrap();
//! let grams: Vec<_> = tokenizer.tokenize("Empty the bin").unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(grams, vec!["empty", "the", "bin", "empty the", "the bin"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod ngram;
pub mod regex;
