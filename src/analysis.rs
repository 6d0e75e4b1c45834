//! Text analysis for Twosense.
//!
//! Sentences are normalized once into a canonical surface form, then broken
//! into the units the vectorizers count: word tokens, word n-grams and
//! whitespace-bounded character n-grams.

pub mod normalize;
pub mod token;
pub mod tokenizer;

pub use normalize::{normalize_sentence, normalize_sentences, split_lines};
