//! The combined feature representation shared by training and prediction.
//!
//! A row is `[word tf-idf | lexicon cue counts | char tf-idf]`. Both
//! vectorizers are fitted once on the training sentences and only transform
//! afterwards, so the row width is fixed at fit time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::ml::lexicon::{LEXICON_FEATURE_DIM, LexiconFeatures};
use crate::ml::sparse::SparseVector;
use crate::ml::tfidf::{NgramAnalyzer, TfIdfVectorizer};
use crate::word::WordConfig;

/// Fitted word vectorizer, lexicon extractor and character vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturePipeline {
    word_tfidf: TfIdfVectorizer,
    lexicon: LexiconFeatures,
    char_tfidf: TfIdfVectorizer,
}

impl FeaturePipeline {
    /// Fit all three blocks for `config` on the training sentences.
    pub fn fit<S: AsRef<str>>(config: &WordConfig, sentences: &[S]) -> Result<Self> {
        let (word_min, word_max) = config.word_ngram_range;
        let (char_min, char_max) = config.char_ngram_range;

        let mut word_tfidf = TfIdfVectorizer::new(NgramAnalyzer::Word(word_min, word_max), true);
        word_tfidf.fit(sentences)?;

        let mut char_tfidf =
            TfIdfVectorizer::new(NgramAnalyzer::CharWb(char_min, char_max), true);
        char_tfidf.fit(sentences)?;

        let lexicon = LexiconFeatures::fit(&config.lexicon)?;

        debug!(
            word = %config.word,
            word_terms = word_tfidf.vocabulary_size(),
            char_terms = char_tfidf.vocabulary_size(),
            "fitted feature pipeline"
        );

        Ok(Self {
            word_tfidf,
            lexicon,
            char_tfidf,
        })
    }

    /// Transform sentences into combined rows of width [`width`](Self::width).
    pub fn transform<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Vec<SparseVector>> {
        let word_rows = self.word_tfidf.transform(sentences)?;
        let char_rows = self.char_tfidf.transform(sentences)?;
        let lexicon_rows = self.lexicon.transform(sentences);

        let lexicon_offset = self.word_tfidf.vocabulary_size();
        let char_offset = lexicon_offset + LEXICON_FEATURE_DIM;

        let rows = word_rows
            .into_iter()
            .zip(lexicon_rows)
            .zip(char_rows)
            .map(|((mut row, cues), chars)| {
                let cues = SparseVector::from_pairs(cues.into_iter().enumerate().collect());
                row.extend_shifted(&cues, lexicon_offset);
                row.extend_shifted(&chars, char_offset);
                row
            })
            .collect();

        Ok(rows)
    }

    /// Total number of feature columns.
    pub fn width(&self) -> usize {
        self.word_tfidf.vocabulary_size() + LEXICON_FEATURE_DIM + self.char_tfidf.vocabulary_size()
    }

    pub fn word_vectorizer(&self) -> &TfIdfVectorizer {
        &self.word_tfidf
    }

    pub fn char_vectorizer(&self) -> &TfIdfVectorizer {
        &self.char_tfidf
    }

    pub fn lexicon(&self) -> &LexiconFeatures {
        &self.lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::TargetWord;

    fn training() -> Vec<String> {
        vec![
            "Please empty the rubbish bin before the garbage truck arrives.".to_string(),
            "That theory is complete rubbish and total nonsense.".to_string(),
        ]
    }

    #[test]
    fn test_width_is_fixed_after_fit() {
        let pipeline = FeaturePipeline::fit(TargetWord::Rubbish.config(), &training()).unwrap();
        let width = pipeline.width();
        assert_eq!(
            width,
            pipeline.word_vectorizer().vocabulary_size()
                + 2
                + pipeline.char_vectorizer().vocabulary_size()
        );

        let rows = pipeline
            .transform(&["Completely unseen vocabulary: xylophone quartz."])
            .unwrap();
        assert_eq!(pipeline.width(), width);
        assert!(rows[0].indices().iter().all(|&i| i < width));
    }

    #[test]
    fn test_lexicon_columns_sit_between_blocks() {
        let pipeline = FeaturePipeline::fit(TargetWord::Rubbish.config(), &training()).unwrap();
        let offset = pipeline.word_vectorizer().vocabulary_size();

        let rows = pipeline.transform(&["the garbage bin"]).unwrap();
        assert!(rows[0].get(offset) >= 1.0);
        assert_eq!(rows[0].get(offset + 1), 0.0);
    }

    #[test]
    fn test_overtime_lexicon_columns_are_zero() {
        let sentences = vec![
            "He worked overtime every weekend this month.".to_string(),
            "The match went into overtime after a late goal.".to_string(),
        ];
        let pipeline = FeaturePipeline::fit(TargetWord::Overtime.config(), &sentences).unwrap();
        let offset = pipeline.word_vectorizer().vocabulary_size();

        let rows = pipeline.transform(&sentences).unwrap();
        for row in rows {
            assert_eq!(row.get(offset), 0.0);
            assert_eq!(row.get(offset + 1), 0.0);
        }
    }
}
