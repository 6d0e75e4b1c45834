//! Training corpus parsing.
//!
//! A corpus file for one word looks like:
//!
//! ```text
//! director
//! 1: a person who manages an organization or department
//! 2: a person who directs a film or play
//!
//! 1
//! The director of finance signed the report.
//! ...
//! 2
//! The director shouted "cut" after the final take.
//! ...
//! ```
//!
//! Lines between the `1` and `2` markers are sense-1 examples, lines after
//! `2` are sense-2 examples. Optional gloss lines near the top and an optional
//! stage-1 file of numbered sentences add further examples.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::analysis::{normalize_sentences, split_lines};
use crate::augment::augment_sentences_with_seed;
use crate::error::{Result, TwosenseError};
use crate::word::{Sense, TargetWord};

/// Only this many leading lines are searched for glosses.
const GLOSS_SEARCH_LINES: usize = 15;

/// Below this many labeled sentences a word gets an extra augmentation pass.
const SMALL_CORPUS_THRESHOLD: usize = 60;

static GLOSS1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[.:]?\s+(.*)$").expect("sense-1 gloss regex"));
static GLOSS2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^2[.:]?\s+(.*)$").expect("sense-2 gloss regex"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[).]\s*(.+)$").expect("numbered line regex"));

/// Characters at least one of which a sentence line must contain.
const SENTENCE_CHARS: &[char] = &[' ', '.', ',', '\'', ';', ':', '!', '?', '-'];

fn token_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Heuristic filter for stray headers and labels.
fn is_probable_sentence(s: &str) -> bool {
    s.contains(SENTENCE_CHARS) && token_count(s) >= 3
}

/// Split a corpus file into its sense-1 and sense-2 example sentences.
///
/// The scan stops at the first line that is exactly `2`; if no `1` line was
/// seen before it, or no `2` line exists, the file is rejected.
pub fn parse_two_sense_file(contents: &str) -> Result<(Vec<String>, Vec<String>)> {
    let lines = split_lines(contents);

    let mut sense1_idx = None;
    let mut sense2_idx = None;
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if sense1_idx.is_none() && trimmed == "1" {
            sense1_idx = Some(i);
        } else if trimmed == "2" {
            sense2_idx = Some(i);
            break;
        }
    }

    let (Some(sense1_idx), Some(sense2_idx)) = (sense1_idx, sense2_idx) else {
        return Err(TwosenseError::configuration(
            "Could not locate sense markers '1' and '2' in file.",
        ));
    };

    let collect = |block: &[&str]| -> Vec<String> {
        block
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && is_probable_sentence(l))
            .map(str::to_string)
            .collect()
    };

    Ok((
        collect(&lines[sense1_idx + 1..sense2_idx]),
        collect(&lines[sense2_idx + 1..]),
    ))
}

/// Find the optional `1: ...` / `2: ...` gloss lines near the top of a corpus file.
pub fn parse_glosses(contents: &str) -> (Option<String>, Option<String>) {
    let mut gloss1: Option<String> = None;
    let mut gloss2: Option<String> = None;

    for line in split_lines(contents).into_iter().take(GLOSS_SEARCH_LINES).map(str::trim) {
        if gloss1.is_none()
            && let Some(caps) = GLOSS1.captures(line)
        {
            gloss1 = Some(caps[1].trim().to_string());
            continue;
        }
        if gloss2.is_none()
            && let Some(caps) = GLOSS2.captures(line)
        {
            gloss2 = Some(caps[1].trim().to_string());
        }
    }

    (
        gloss1.filter(|g| !g.is_empty()),
        gloss2.filter(|g| !g.is_empty()),
    )
}

/// Extract numbered sentences from stage-1 file contents.
///
/// Lines mentioning "sense 1" / "sense 2" (any case) switch sections;
/// lines like `3) text` or `3. text` inside a section are its sentences.
pub fn parse_stage1_sentences(contents: &str) -> (Vec<String>, Vec<String>) {
    let mut sense1 = Vec::new();
    let mut sense2 = Vec::new();
    let mut section: Option<Sense> = None;

    for line in split_lines(contents).into_iter().map(str::trim) {
        let lowered = line.to_lowercase();
        if lowered.contains("sense 1") {
            section = Some(Sense::First);
            continue;
        }
        if lowered.contains("sense 2") {
            section = Some(Sense::Second);
            continue;
        }
        if let Some(caps) = NUMBERED.captures(line) {
            let sentence = caps[1].trim();
            if sentence.is_empty() || token_count(sentence) < 3 {
                continue;
            }
            match section {
                Some(Sense::First) => sense1.push(sentence.to_string()),
                Some(Sense::Second) => sense2.push(sentence.to_string()),
                None => {}
            }
        }
    }

    (sense1, sense2)
}

/// Load stage-1 sentences from `path`; a missing file yields two empty lists.
pub fn load_stage1_sentences(path: &Path) -> Result<(Vec<String>, Vec<String>)> {
    if !path.exists() {
        return Ok((Vec::new(), Vec::new()));
    }
    let contents = fs::read_to_string(path)?;
    Ok(parse_stage1_sentences(&contents))
}

/// What to include when assembling training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub use_stage1: bool,
    pub use_augmentation: bool,
    pub augmentation_seed: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            use_stage1: true,
            use_augmentation: true,
            augmentation_seed: crate::augment::DEFAULT_SEED,
        }
    }
}

/// Labeled, normalized training sentences for one word.
///
/// All sense-1 examples come first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingData {
    pub sentences: Vec<String>,
    pub senses: Vec<Sense>,
}

impl TrainingData {
    fn from_blocks(sense1: Vec<String>, sense2: Vec<String>) -> Self {
        let senses = std::iter::repeat_n(Sense::First, sense1.len())
            .chain(std::iter::repeat_n(Sense::Second, sense2.len()))
            .collect();
        let sentences = sense1.into_iter().chain(sense2).collect();
        Self { sentences, senses }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of examples labeled `sense`.
    pub fn count(&self, sense: Sense) -> usize {
        self.senses.iter().filter(|s| **s == sense).count()
    }
}

/// Assemble the training set for `word` from already-read corpus text.
///
/// `stage1` holds the contents of the stage-1 file, if there is one.
pub fn build_training_data(
    word: TargetWord,
    corpus: &str,
    stage1: Option<&str>,
    options: &LoadOptions,
) -> Result<TrainingData> {
    let (mut sense1, mut sense2) = parse_two_sense_file(corpus)?;
    debug!(%word, sense1 = sense1.len(), sense2 = sense2.len(), "parsed corpus");

    if options.use_stage1
        && let Some(stage1) = stage1
    {
        let (extra1, extra2) = parse_stage1_sentences(stage1);
        debug!(%word, sense1 = extra1.len(), sense2 = extra2.len(), "parsed stage-1 sentences");
        sense1.extend(extra1);
        sense2.extend(extra2);
    }

    let (gloss1, gloss2) = parse_glosses(corpus);
    sense1.extend(gloss1);
    sense2.extend(gloss2);

    let mut sense1 = normalize_sentences(&sense1);
    let mut sense2 = normalize_sentences(&sense2);

    if options.use_augmentation {
        let passes = if sense1.len() + sense2.len() < SMALL_CORPUS_THRESHOLD {
            3
        } else {
            2
        };
        let before = sense1.len() + sense2.len();
        sense1 = normalize_sentences(&augment_sentences_with_seed(
            &sense1,
            passes,
            options.augmentation_seed,
        ));
        sense2 = normalize_sentences(&augment_sentences_with_seed(
            &sense2,
            passes,
            options.augmentation_seed,
        ));
        debug!(%word, passes, before, after = sense1.len() + sense2.len(), "augmented corpus");
    }

    let data = TrainingData::from_blocks(sense1, sense2);
    info!(
        %word,
        sense1 = data.count(Sense::First),
        sense2 = data.count(Sense::Second),
        "loaded training data"
    );
    Ok(data)
}

/// Read `{base_dir}/{word}.txt` (and the stage-1 file, when present) and
/// assemble the training set.
pub fn load_word_data(base_dir: &Path, word: TargetWord, options: &LoadOptions) -> Result<TrainingData> {
    let corpus = fs::read_to_string(base_dir.join(word.corpus_file_name()))?;

    let stage1_path = base_dir.join(word.stage1_file_name());
    let stage1 = if options.use_stage1 && stage1_path.exists() {
        Some(fs::read_to_string(&stage1_path)?)
    } else {
        None
    };

    build_training_data(word, &corpus, stage1.as_deref(), options)
}

/// Read a labeled file in corpus format as `(sentences, expected senses)`.
///
/// Used for evaluation; no glosses, stage-1 data or augmentation.
pub fn load_labeled_file(path: &Path) -> Result<TrainingData> {
    let contents = fs::read_to_string(path)?;
    let (sense1, sense2) = parse_two_sense_file(&contents)?;
    Ok(TrainingData::from_blocks(
        normalize_sentences(&sense1),
        normalize_sentences(&sense2),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = "rubbish
1: waste material that is thrown away
2: nonsense; something worthless

1
Please put the rubbish in the bin.
The rubbish was collected on Tuesday morning.

Bins
They dumped rubbish behind the old shed.
2
That is complete rubbish, and you know it.
He talks rubbish whenever he is tired.
";

    #[test]
    fn test_parse_two_sense_file() {
        let (s1, s2) = parse_two_sense_file(CORPUS).unwrap();
        assert_eq!(
            s1,
            vec![
                "Please put the rubbish in the bin.",
                "The rubbish was collected on Tuesday morning.",
                "They dumped rubbish behind the old shed.",
            ]
        );
        assert_eq!(
            s2,
            vec![
                "That is complete rubbish, and you know it.",
                "He talks rubbish whenever he is tired.",
            ]
        );
    }

    #[test]
    fn test_missing_second_marker() {
        let err = parse_two_sense_file("1\nOne sentence about bins here.\n").unwrap_err();
        assert!(matches!(err, TwosenseError::Configuration(_)));
    }

    #[test]
    fn test_second_marker_before_first_is_rejected() {
        let err = parse_two_sense_file("2\nA b c.\n1\nD e f.\n").unwrap_err();
        assert!(matches!(err, TwosenseError::Configuration(_)));
    }

    #[test]
    fn test_stray_two_inside_sense1_ends_the_block() {
        let (s1, s2) =
            parse_two_sense_file("1\nFirst real sentence here.\n2\nSecond block sentence here.\n2\nAnother one right here.\n")
                .unwrap();
        assert_eq!(s1, vec!["First real sentence here."]);
        assert_eq!(
            s2,
            vec!["Second block sentence here.", "Another one right here."]
        );
    }

    #[test]
    fn test_old_mac_and_unicode_line_breaks() {
        let contents = "rubbish\r1\rPlease put the rubbish in the bin.\r2\u{2028}He talks rubbish whenever he is tired.\u{2029}";
        let (s1, s2) = parse_two_sense_file(contents).unwrap();
        assert_eq!(s1, vec!["Please put the rubbish in the bin."]);
        assert_eq!(s2, vec!["He talks rubbish whenever he is tired."]);

        let (s1, _) = parse_stage1_sentences("Sense 1\u{0c}1) The rubbish bin is full.\u{85}");
        assert_eq!(s1, vec!["The rubbish bin is full."]);
    }

    #[test]
    fn test_line_patterns_compile() {
        assert!(GLOSS1.is_match("1: waste"));
        assert!(GLOSS2.is_match("2. nonsense"));
        assert!(NUMBERED.is_match("3) A sentence."));
    }

    #[test]
    fn test_tab_separated_line_is_not_a_sentence() {
        assert!(!is_probable_sentence("one\ttwo\tthree"));
        assert!(is_probable_sentence("one two three"));
        assert!(!is_probable_sentence("two words"));
    }

    #[test]
    fn test_parse_glosses() {
        let (g1, g2) = parse_glosses(CORPUS);
        assert_eq!(g1.as_deref(), Some("waste material that is thrown away"));
        assert_eq!(g2.as_deref(), Some("nonsense; something worthless"));

        assert_eq!(parse_glosses("1\nno glosses here\n2\n"), (None, None));
    }

    #[test]
    fn test_glosses_only_in_first_lines() {
        let mut contents = "\n".repeat(15);
        contents.push_str("1. late gloss\n");
        assert_eq!(parse_glosses(&contents), (None, None));
    }

    #[test]
    fn test_parse_stage1_sentences() {
        let contents = "Stage 1 submissions
SENSE 1 (waste)
1) The rubbish bin is overflowing again.
2. Too short
3. We hauled the rubbish to the tip.
Sense 2 (nonsense)
1) Don't talk such rubbish to me.
";
        let (s1, s2) = parse_stage1_sentences(contents);
        assert_eq!(
            s1,
            vec![
                "The rubbish bin is overflowing again.",
                "We hauled the rubbish to the tip.",
            ]
        );
        assert_eq!(s2, vec!["Don't talk such rubbish to me."]);
    }

    #[test]
    fn test_missing_stage1_file_is_empty() {
        let (s1, s2) = load_stage1_sentences(Path::new("/nonexistent/stage1.txt")).unwrap();
        assert!(s1.is_empty());
        assert!(s2.is_empty());
    }

    #[test]
    fn test_build_training_data_without_augmentation() {
        let options = LoadOptions {
            use_stage1: true,
            use_augmentation: false,
            ..LoadOptions::default()
        };
        let data = build_training_data(
            TargetWord::Rubbish,
            CORPUS,
            Some("Sense 2\n1) What a load of old rubbish that was.\n"),
            &options,
        )
        .unwrap();

        // 3 corpus + gloss for sense 1; 2 corpus + 1 stage-1 + gloss for sense 2.
        assert_eq!(data.count(Sense::First), 4);
        assert_eq!(data.count(Sense::Second), 4);
        assert_eq!(data.senses[0], Sense::First);
        assert_eq!(data.senses[data.len() - 1], Sense::Second);
        assert_eq!(data.sentences[3], "waste material that is thrown away");
    }

    #[test]
    fn test_build_training_data_with_augmentation_grows() {
        let plain = build_training_data(
            TargetWord::Rubbish,
            CORPUS,
            None,
            &LoadOptions {
                use_augmentation: false,
                ..LoadOptions::default()
            },
        )
        .unwrap();
        let augmented =
            build_training_data(TargetWord::Rubbish, CORPUS, None, &LoadOptions::default())
                .unwrap();

        assert!(augmented.len() >= plain.len());
        assert!(augmented.len() <= plain.len() * 4);
        assert_eq!(&augmented.sentences[..4], &plain.sentences[..4]);
    }
}
