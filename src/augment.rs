//! Cheap text augmentation for small training corpora.
//!
//! Each variant applies one randomly chosen rewrite (tense flip, article swap,
//! or a comma inserted before the target word) to the first match in a
//! sentence. The random source is seeded, so the output depends only on the
//! input sentences, the pass count and the seed.

use std::sync::LazyLock;

use rand::prelude::*;
use regex::{Regex, RegexBuilder};

use crate::word::TargetWord;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Sentences with fewer tokens are left alone.
const MIN_SOURCE_TOKENS: usize = 4;

/// Variants with fewer tokens are dropped.
const MIN_VARIANT_TOKENS: usize = 3;

struct Rewrite {
    pattern: Regex,
    replacement: String,
}

impl Rewrite {
    fn new(pattern: &str, replacement: impl Into<String>) -> Self {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("augmentation regex");
        Self {
            pattern,
            replacement: replacement.into(),
        }
    }

    /// Rewrite the first match only.
    fn apply(&self, sentence: &str) -> String {
        self.pattern
            .replacen(sentence, 1, self.replacement.as_str())
            .into_owned()
    }
}

static REWRITES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    let targets = TargetWord::ALL
        .iter()
        .map(|w| w.as_str())
        .collect::<Vec<_>>()
        .join("|");
    vec![
        Rewrite::new(r"\bis\b", "was"),
        Rewrite::new(r"\bhas\b", "had"),
        Rewrite::new(r"\bdoes\b", "did"),
        Rewrite::new(r"\bthe\s+", "a "),
        Rewrite::new(r"\ba\s+", "the "),
        Rewrite::new(format!(r"\b(\w+)\s+({targets})").as_str(), "${1}, the ${2}"),
    ]
});

/// Augment with the default seed.
pub fn augment_sentences<S: AsRef<str>>(sentences: &[S], passes: usize) -> Vec<String> {
    augment_sentences_with_seed(sentences, passes, DEFAULT_SEED)
}

/// Return the originals followed by up to `passes` variants per sentence.
///
/// Each pass walks the whole sentence list once, so the variants of one
/// pass all come before those of the next. The result never holds more than
/// `len * (1 + passes)` sentences, and the originals always come first in
/// their original order.
pub fn augment_sentences_with_seed<S: AsRef<str>>(
    sentences: &[S],
    passes: usize,
    seed: u64,
) -> Vec<String> {
    let mut out: Vec<String> = sentences.iter().map(|s| s.as_ref().to_string()).collect();
    let cap = sentences.len() * (1 + passes);
    let mut rng = StdRng::seed_from_u64(seed);

    'passes: for _ in 0..passes {
        for sentence in sentences.iter().map(AsRef::as_ref) {
            if sentence.split_whitespace().count() < MIN_SOURCE_TOKENS {
                continue;
            }
            let Some(rewrite) = REWRITES.choose(&mut rng) else {
                break 'passes;
            };
            let variant = rewrite.apply(sentence);
            if variant != sentence && variant.split_whitespace().count() >= MIN_VARIANT_TOKENS {
                out.push(variant);
                if out.len() >= cap {
                    break 'passes;
                }
            }
        }
    }

    out.truncate(cap);
    out
}
