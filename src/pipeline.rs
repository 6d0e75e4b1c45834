//! A trained per-word model: fitted features plus a fitted classifier.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TwosenseError};
use crate::ml::classifier::{Classifier, LinearClassifier};
use crate::ml::features::FeaturePipeline;
use crate::word::{Sense, TargetWord};

/// Everything needed to classify new sentences for one word.
///
/// This is the unit that gets persisted as a model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedPipeline {
    word: TargetWord,
    features: FeaturePipeline,
    classifier: Classifier,
}

impl FittedPipeline {
    /// Fit features and classifier for `word` on labeled sentences.
    pub fn fit<S: AsRef<str>>(word: TargetWord, sentences: &[S], senses: &[Sense]) -> Result<Self> {
        if sentences.len() != senses.len() {
            return Err(TwosenseError::data(format!(
                "{} sentences but {} labels",
                sentences.len(),
                senses.len()
            )));
        }
        if !(senses.contains(&Sense::First) && senses.contains(&Sense::Second)) {
            return Err(TwosenseError::data(format!(
                "training data for '{word}' needs examples of both senses"
            )));
        }

        let config = word.config();
        let features = FeaturePipeline::fit(config, sentences)?;
        let rows = features.transform(sentences)?;
        let classifier = Classifier::fit(&config.classifier, &rows, senses, features.width())?;

        debug!(%word, classifier = classifier.name(), width = features.width(), "fitted pipeline");

        Ok(Self {
            word,
            features,
            classifier,
        })
    }

    /// Classify sentences, one sense per sentence, in order.
    pub fn predict<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Vec<Sense>> {
        let rows = self.features.transform(sentences)?;
        Ok(self.classifier.predict(&rows))
    }

    pub fn word(&self) -> TargetWord {
        self.word
    }

    /// Feature row width fixed at fit time.
    pub fn width(&self) -> usize {
        self.features.width()
    }

    pub fn features(&self) -> &FeaturePipeline {
        &self.features
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}
