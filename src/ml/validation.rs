//! Stratified k-fold cross-validation.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::pipeline::FittedPipeline;
use crate::word::{Sense, TargetWord};

/// Per-fold accuracies with their mean and population standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossValidation {
    pub scores: Vec<f64>,
    pub mean: f64,
    pub std: f64,
}

impl CrossValidation {
    pub fn from_scores(scores: Vec<f64>) -> Self {
        let n = scores.len().max(1) as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        Self {
            scores,
            mean,
            std: variance.sqrt(),
        }
    }

    pub fn folds(&self) -> usize {
        self.scores.len()
    }
}

/// Assign every example a fold in `0..folds`.
///
/// Examples of each sense are dealt round-robin in input order, so every
/// fold gets an even share of both senses.
pub fn stratified_folds(senses: &[Sense], folds: usize) -> Vec<usize> {
    let mut assignment = vec![0; senses.len()];
    for sense in [Sense::First, Sense::Second] {
        for (k, (i, _)) in senses
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == sense)
            .enumerate()
        {
            assignment[i] = k % folds;
        }
    }
    assignment
}

/// Estimate accuracy of a fresh pipeline for `word` by stratified k-fold CV.
///
/// Returns `Ok(None)` when `folds < 2` or either sense has fewer than
/// `folds` examples.
pub fn cross_validate<S: AsRef<str>>(
    word: TargetWord,
    sentences: &[S],
    senses: &[Sense],
    folds: usize,
) -> Result<Option<CrossValidation>> {
    if folds < 2 {
        return Ok(None);
    }
    let smallest = [Sense::First, Sense::Second]
        .iter()
        .map(|sense| senses.iter().filter(|s| *s == sense).count())
        .min()
        .unwrap_or(0);
    if smallest < folds {
        warn!(%word, folds, smallest, "too few examples per sense for cross-validation");
        return Ok(None);
    }

    let assignment = stratified_folds(senses, folds);
    let mut scores = Vec::with_capacity(folds);

    for fold in 0..folds {
        let mut train_x = Vec::new();
        let mut train_y = Vec::new();
        let mut test_x = Vec::new();
        let mut test_y = Vec::new();
        for ((sentence, &sense), &f) in sentences.iter().zip(senses).zip(&assignment) {
            if f == fold {
                test_x.push(sentence.as_ref());
                test_y.push(sense);
            } else {
                train_x.push(sentence.as_ref());
                train_y.push(sense);
            }
        }

        let pipeline = FittedPipeline::fit(word, &train_x, &train_y)?;
        let predicted = pipeline.predict(&test_x)?;
        let correct = predicted.iter().zip(&test_y).filter(|(p, e)| p == e).count();
        scores.push(correct as f64 / test_y.len() as f64);
    }

    let cv = CrossValidation::from_scores(scores);
    info!(%word, folds, mean = cv.mean, std = cv.std, "cross-validation accuracy");
    Ok(Some(cv))
}
