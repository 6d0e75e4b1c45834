//! N-gram tokenizers over words and over whitespace-bounded characters.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::{Result, TwosenseError};

fn validate_range(min_gram: usize, max_gram: usize) -> Result<()> {
    if min_gram == 0 {
        return Err(TwosenseError::configuration(
            "min_gram must be at least 1".to_string(),
        ));
    }
    if max_gram < min_gram {
        return Err(TwosenseError::configuration(format!(
            "max_gram ({}) must be >= min_gram ({})",
            max_gram, min_gram
        )));
    }
    Ok(())
}

/// A tokenizer that emits contiguous word n-grams.
///
/// Words come from a [`RegexTokenizer`], so the text is lowercased first.
/// All unigrams are emitted before bigrams, bigrams before trigrams, and so on.
#[derive(Clone, Debug)]
pub struct WordNgramTokenizer {
    min_gram: usize,
    max_gram: usize,
    words: RegexTokenizer,
}

impl WordNgramTokenizer {
    /// Create a new word n-gram tokenizer for the inclusive range `min_gram..=max_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        validate_range(min_gram, max_gram)?;
        Ok(Self {
            min_gram,
            max_gram,
            words: RegexTokenizer::new()?,
        })
    }

    fn ngrams(&self, text: &str) -> Vec<String> {
        let words = self.words.words(text);
        let mut grams = Vec::new();
        for n in self.min_gram..=self.max_gram.min(words.len()) {
            for window in words.windows(n) {
                grams.push(window.join(" "));
            }
        }
        grams
    }
}

impl Tokenizer for WordNgramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .ngrams(text)
            .into_iter()
            .enumerate()
            .map(|(position, gram)| Token::new(gram, position))
            .collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_ngram"
    }
}

/// A tokenizer that generates character n-grams inside word boundaries.
///
/// The lowercased text is split on whitespace and each word is padded with
/// one space on either side, so n-grams never span two words but do carry
/// word-start and word-end information. A padded word no longer than `n`
/// yields itself once and stops the range for that word.
///
/// ```
/// use twosense::analysis::tokenizer::Tokenizer;
/// use twosense::analysis::tokenizer::ngram::CharNgramTokenizer;
///
/// let tokenizer = CharNgramTokenizer::new(3, 3).unwrap();
/// let grams: Vec<_> = tokenizer.tokenize("Bin").unwrap().map(|t| t.text).collect();
/// assert_eq!(grams, vec![" bi", "bin", "in "]);
/// ```
#[derive(Clone, Debug)]
pub struct CharNgramTokenizer {
    min_gram: usize,
    max_gram: usize,
}

impl CharNgramTokenizer {
    /// Create a new character n-gram tokenizer for the inclusive range `min_gram..=max_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        validate_range(min_gram, max_gram)?;
        Ok(Self { min_gram, max_gram })
    }

    fn ngrams(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut grams = Vec::new();

        for word in lowered.split_whitespace() {
            let padded: Vec<char> = std::iter::once(' ')
                .chain(word.chars())
                .chain(std::iter::once(' '))
                .collect();
            let len = padded.len();

            for n in self.min_gram..=self.max_gram {
                let mut offset = 0;
                grams.push(padded[offset..(offset + n).min(len)].iter().collect());
                while offset + n < len {
                    offset += 1;
                    grams.push(padded[offset..offset + n].iter().collect());
                }
                if offset == 0 {
                    break;
                }
            }
        }

        grams
    }
}

impl Tokenizer for CharNgramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .ngrams(text)
            .into_iter()
            .enumerate()
            .map(|(position, gram)| Token::new(gram, position))
            .collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "char_wb"
    }
}
