//! Prediction API.
//!
//! [`Predictor`] loads each word's model on first use and keeps it for the
//! rest of the process. The free functions [`wsd_test_director`],
//! [`wsd_test_overtime`] and [`wsd_test_rubbish`] are the per-word entry
//! points over the default model store.

use std::collections::HashMap;

use tracing::debug;

use crate::analysis::normalize_sentences;
use crate::error::{Result, TwosenseError};
use crate::overrides::{HeuristicOverride, apply_overrides};
use crate::pipeline::FittedPipeline;
use crate::store::ModelStore;
use crate::word::{Sense, TargetWord};

/// A loaded model together with its compiled override layer.
#[derive(Debug, Clone)]
struct LoadedModel {
    pipeline: FittedPipeline,
    overrides: Option<HeuristicOverride>,
}

impl LoadedModel {
    fn predict(&self, sentences: &[String]) -> Result<Vec<Sense>> {
        let predictions = self.pipeline.predict(sentences)?;
        Ok(apply_overrides(
            self.overrides.as_ref(),
            sentences,
            predictions,
        ))
    }
}

/// Predicts senses with models read from a [`ModelStore`].
#[derive(Debug)]
pub struct Predictor {
    store: ModelStore,
    cache: HashMap<TargetWord, LoadedModel>,
}

impl Predictor {
    pub fn new(store: ModelStore) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    fn model(&mut self, word: TargetWord) -> Result<&LoadedModel> {
        if !self.cache.contains_key(&word) {
            let model = LoadedModel {
                pipeline: self.store.load(word)?,
                overrides: HeuristicOverride::for_word(word)?,
            };
            self.cache.insert(word, model);
        }
        self.cache
            .get(&word)
            .ok_or_else(|| TwosenseError::not_found(word.as_str(), self.store.path_for(word)))
    }

    /// Predict one sense per sentence, in order.
    ///
    /// `None` is rejected with an input error before any model is loaded.
    pub fn predict_senses<S: AsRef<str>>(
        &mut self,
        word: TargetWord,
        sentences: Option<&[S]>,
    ) -> Result<Vec<Sense>> {
        let Some(sentences) = sentences else {
            return Err(TwosenseError::input(format!(
                "no sentence list given for '{word}'"
            )));
        };

        let normalized = normalize_sentences(sentences);
        let senses = self.model(word)?.predict(&normalized)?;
        debug!(%word, count = senses.len(), "predicted senses");
        Ok(senses)
    }

    /// Like [`predict_senses`](Self::predict_senses) but returns labels 1 and 2.
    pub fn predict<S: AsRef<str>>(
        &mut self,
        word: TargetWord,
        sentences: Option<&[S]>,
    ) -> Result<Vec<u8>> {
        let senses = self.predict_senses(word, sentences)?;
        Ok(senses.iter().map(Sense::label).collect())
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(ModelStore::from_env())
    }
}

fn predict_with_default_store(word: TargetWord, sentences: Option<&[String]>) -> Result<Vec<u8>> {
    Predictor::default().predict(word, sentences)
}

/// Senses of "director": 1 = organizational role, 2 = film or theatre director.
pub fn wsd_test_director(sentences: Option<&[String]>) -> Result<Vec<u8>> {
    predict_with_default_store(TargetWord::Director, sentences)
}

/// Senses of "overtime": 1 = extra working hours, 2 = extra period of play.
pub fn wsd_test_overtime(sentences: Option<&[String]>) -> Result<Vec<u8>> {
    predict_with_default_store(TargetWord::Overtime, sentences)
}

/// Senses of "rubbish": 1 = waste material, 2 = nonsense.
pub fn wsd_test_rubbish(sentences: Option<&[String]>) -> Result<Vec<u8>> {
    predict_with_default_store(TargetWord::Rubbish, sentences)
}
