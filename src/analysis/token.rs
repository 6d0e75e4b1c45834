//! Token types produced by the tokenizers.

use serde::{Deserialize, Serialize};

/// A single unit of analyzed text.
///
/// ```
/// use twosense::analysis::token::Token;
///
/// let token = Token::new("rubbish bin", 3);
/// assert_eq!(token.text, "rubbish bin");
/// assert_eq!(token.position, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
