//! Target words, sense labels and the per-word configuration registry.
//!
//! Every behavioural difference between the supported words lives in a
//! [`WordConfig`] record: n-gram ranges, which classifier to train, the
//! lexicon cues used as features and the (optional) cues allowed to override
//! the classifier. Components take the record as a parameter instead of
//! branching on the word.

pub mod cues;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TwosenseError};
use crate::ml::classifier::ClassifierKind;

/// One of the fixed ambiguous nouns this crate disambiguates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TargetWord {
    Director,
    Overtime,
    Rubbish,
}

impl TargetWord {
    /// All supported words, in a stable order.
    pub const ALL: [TargetWord; 3] = [
        TargetWord::Director,
        TargetWord::Overtime,
        TargetWord::Rubbish,
    ];

    /// The lowercase surface form of the word.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetWord::Director => "director",
            TargetWord::Overtime => "overtime",
            TargetWord::Rubbish => "rubbish",
        }
    }

    /// Look up the static configuration for this word.
    pub fn config(&self) -> &'static WordConfig {
        match self {
            TargetWord::Director => &DIRECTOR,
            TargetWord::Overtime => &OVERTIME,
            TargetWord::Rubbish => &RUBBISH,
        }
    }

    /// Corpus file name, e.g. `director.txt`.
    pub fn corpus_file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }

    /// Supplementary stage-1 file name, e.g. `stage1_director_new_sentences.txt`.
    pub fn stage1_file_name(&self) -> String {
        format!("stage1_{}_new_sentences.txt", self.as_str())
    }

    /// Model artifact file name, e.g. `director_model.bin`.
    pub fn model_file_name(&self) -> String {
        format!("{}_model.bin", self.as_str())
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetWord {
    type Err = TwosenseError;

    fn from_str(s: &str) -> Result<Self> {
        TargetWord::ALL
            .into_iter()
            .find(|word| word.as_str() == s)
            .ok_or_else(|| TwosenseError::configuration(format!("unknown target word: {s}")))
    }
}

/// One of the two senses of a target word.
///
/// The numeric labels 1 and 2 are what callers and result files see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sense {
    First,
    Second,
}

impl Sense {
    /// The external integer label (1 or 2).
    pub fn label(&self) -> u8 {
        match self {
            Sense::First => 1,
            Sense::Second => 2,
        }
    }

    /// Parse an external integer label.
    pub fn from_label(label: u8) -> Result<Self> {
        match label {
            1 => Ok(Sense::First),
            2 => Ok(Sense::Second),
            other => Err(TwosenseError::data(format!(
                "sense labels must be 1 or 2, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Two ordered lists of cue patterns, one per sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueRules {
    pub sense1: &'static [&'static str],
    pub sense2: &'static [&'static str],
}

impl CueRules {
    /// Rules that never fire.
    pub const EMPTY: CueRules = CueRules {
        sense1: &[],
        sense2: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.sense1.is_empty() && self.sense2.is_empty()
    }
}

/// Immutable per-word configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordConfig {
    pub word: TargetWord,
    /// Inclusive word n-gram range.
    pub word_ngram_range: (usize, usize),
    /// Inclusive whitespace-bounded character n-gram range.
    pub char_ngram_range: (usize, usize),
    pub classifier: ClassifierKind,
    /// Cues counted as features.
    pub lexicon: CueRules,
    /// Cues that may overrule the classifier; `None` disables the override layer.
    pub overrides: Option<CueRules>,
}

static DIRECTOR: WordConfig = WordConfig {
    word: TargetWord::Director,
    word_ngram_range: (1, 4),
    char_ngram_range: (3, 6),
    classifier: ClassifierKind::LinearSvc {
        c: 1.5,
        max_iter: 1000,
    },
    lexicon: CueRules {
        sense1: cues::DIRECTOR_LEXICON_SENSE1,
        sense2: cues::DIRECTOR_LEXICON_SENSE2,
    },
    overrides: Some(CueRules {
        sense1: cues::DIRECTOR_OVERRIDE_SENSE1,
        sense2: cues::DIRECTOR_OVERRIDE_SENSE2,
    }),
};

// No cues: the classifier alone decides.
static OVERTIME: WordConfig = WordConfig {
    word: TargetWord::Overtime,
    word_ngram_range: (1, 4),
    char_ngram_range: (3, 6),
    classifier: ClassifierKind::LinearSvc {
        c: 1.5,
        max_iter: 1000,
    },
    lexicon: CueRules::EMPTY,
    overrides: None,
};

static RUBBISH: WordConfig = WordConfig {
    word: TargetWord::Rubbish,
    word_ngram_range: (1, 5),
    char_ngram_range: (3, 7),
    classifier: ClassifierKind::LogisticRegression {
        c: 1.0,
        balanced: true,
        max_iter: 2000,
    },
    lexicon: CueRules {
        sense1: cues::RUBBISH_LEXICON_SENSE1,
        sense2: cues::RUBBISH_LEXICON_SENSE2,
    },
    overrides: Some(CueRules {
        sense1: cues::RUBBISH_OVERRIDE_SENSE1,
        sense2: cues::RUBBISH_OVERRIDE_SENSE2,
    }),
};
