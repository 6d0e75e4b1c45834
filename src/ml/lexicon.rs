//! Lexicon cue features.
//!
//! Each sentence gets two numbers: how many sense-1 cue patterns match it and
//! how many sense-2 cue patterns match it. A pattern counts once per
//! sentence no matter how often it matches.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TwosenseError};
use crate::word::{CueRules, TargetWord};

/// Number of columns produced by [`LexiconFeatures::transform`].
pub const LEXICON_FEATURE_DIM: usize = 2;

/// An ordered list of case-insensitive cue patterns.
///
/// Serializes as the pattern sources and recompiles when deserialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CueSet {
    patterns: Vec<Regex>,
}

impl CueSet {
    /// Compile a list of patterns.
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|source| {
                Ok(RegexBuilder::new(source.as_ref())
                    .case_insensitive(true)
                    .build()?)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern matches anywhere in `sentence`.
    pub fn matches(&self, sentence: &str) -> bool {
        self.patterns.iter().any(|rx| rx.is_match(sentence))
    }

    /// Number of distinct patterns that match `sentence`.
    pub fn count(&self, sentence: &str) -> usize {
        self.patterns.iter().filter(|rx| rx.is_match(sentence)).count()
    }

    /// Pattern sources, in order.
    pub fn sources(&self) -> Vec<String> {
        self.patterns.iter().map(|rx| rx.as_str().to_string()).collect()
    }
}

impl TryFrom<Vec<String>> for CueSet {
    type Error = TwosenseError;

    fn try_from(sources: Vec<String>) -> Result<Self> {
        CueSet::compile(&sources)
    }
}

impl From<CueSet> for Vec<String> {
    fn from(set: CueSet) -> Self {
        set.sources()
    }
}

/// Per-sense cue counts used as two extra feature columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFeatures {
    sense1: CueSet,
    sense2: CueSet,
}

impl LexiconFeatures {
    /// Configure the extractor from a rule set.
    pub fn fit(rules: &CueRules) -> Result<Self> {
        Ok(Self {
            sense1: CueSet::compile(rules.sense1)?,
            sense2: CueSet::compile(rules.sense2)?,
        })
    }

    /// Configure the extractor for a word given by name.
    ///
    /// Names that are not a known target word get no cues at all.
    pub fn for_word(name: &str) -> Result<Self> {
        match name.parse::<TargetWord>() {
            Ok(word) => Self::fit(&word.config().lexicon),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Whether both cue lists are empty.
    pub fn is_empty(&self) -> bool {
        self.sense1.is_empty() && self.sense2.is_empty()
    }

    /// One `[sense1_hits, sense2_hits]` row per sentence.
    pub fn transform<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<[f64; LEXICON_FEATURE_DIM]> {
        if self.is_empty() {
            return vec![[0.0; LEXICON_FEATURE_DIM]; sentences.len()];
        }
        sentences
            .iter()
            .map(|s| {
                let s = s.as_ref();
                [self.sense1.count(s) as f64, self.sense2.count(s) as f64]
            })
            .collect()
    }
}
