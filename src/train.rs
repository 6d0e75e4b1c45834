//! Training driver.
//!
//! For each configured word: assemble the training data, optionally estimate
//! accuracy by cross-validation, fit the final pipeline on everything and
//! save it to the model store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::augment::DEFAULT_SEED;
use crate::corpus::{LoadOptions, load_word_data};
use crate::error::Result;
use crate::ml::validation::{CrossValidation, cross_validate};
use crate::pipeline::FittedPipeline;
use crate::store::ModelStore;
use crate::word::{Sense, TargetWord};

/// Environment variable naming the default corpus directory.
pub const DATA_DIR_ENV: &str = "TWOSENSE_DATA_DIR";

/// Settings for a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Directory holding `{word}.txt` and the stage-1 files.
    pub base_dir: PathBuf,
    /// Directory the model artifacts are written to.
    pub models_dir: PathBuf,
    /// Words to train, by name.
    pub words: Vec<String>,
    /// Cross-validation folds; 0 disables cross-validation.
    pub cv_folds: usize,
    pub use_stage1: bool,
    pub use_augmentation: bool,
    pub augmentation_seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            models_dir: PathBuf::from("./models"),
            words: TargetWord::ALL.iter().map(|w| w.to_string()).collect(),
            cv_folds: 5,
            use_stage1: true,
            use_augmentation: true,
            augmentation_seed: DEFAULT_SEED,
        }
    }
}

impl TrainConfig {
    /// Read a config from a JSON file; missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            use_stage1: self.use_stage1,
            use_augmentation: self.use_augmentation,
            augmentation_seed: self.augmentation_seed,
        }
    }

    /// The configured words that are known, in configured order.
    ///
    /// Unknown names are logged and skipped.
    pub fn target_words(&self) -> Vec<TargetWord> {
        let mut words = Vec::new();
        for name in &self.words {
            match name.parse::<TargetWord>() {
                Ok(word) if !words.contains(&word) => words.push(word),
                Ok(_) => {}
                Err(_) => warn!(word = %name, "skipping unknown word"),
            }
        }
        words
    }
}

/// What training produced for one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordReport {
    pub word: TargetWord,
    pub sense1_examples: usize,
    pub sense2_examples: usize,
    pub feature_width: usize,
    pub cross_validation: Option<CrossValidation>,
    pub model_path: PathBuf,
    pub model_size_bytes: u64,
}

/// A word that could not be trained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFailure {
    pub word: TargetWord,
    pub error: String,
}

/// Outcome of [`Trainer::train_all`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub trained: Vec<WordReport>,
    pub failed: Vec<WordFailure>,
}

impl TrainReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Trains and stores per-word pipelines.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainConfig,
    store: ModelStore,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Self {
        let store = ModelStore::new(&config.models_dir);
        Self { config, store }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Train, evaluate and save the model for one word.
    pub fn train_word(&self, word: TargetWord) -> Result<WordReport> {
        info!(%word, base_dir = %self.config.base_dir.display(), "training");
        let data = load_word_data(&self.config.base_dir, word, &self.config.load_options())?;

        let cross_validation = if self.config.cv_folds > 0 && data.len() >= self.config.cv_folds {
            cross_validate(word, &data.sentences, &data.senses, self.config.cv_folds)?
        } else {
            None
        };

        let pipeline = FittedPipeline::fit(word, &data.sentences, &data.senses)?;
        let model_path = self.store.save(&pipeline)?;
        let model_size_bytes = fs::metadata(&model_path)?.len();

        Ok(WordReport {
            word,
            sense1_examples: data.count(Sense::First),
            sense2_examples: data.count(Sense::Second),
            feature_width: pipeline.width(),
            cross_validation,
            model_path,
            model_size_bytes,
        })
    }

    /// Train every configured word.
    ///
    /// A failing word is recorded in the report and does not stop the others.
    pub fn train_all(&self) -> TrainReport {
        let mut report = TrainReport::default();
        for word in self.config.target_words() {
            match self.train_word(word) {
                Ok(word_report) => report.trained.push(word_report),
                Err(e) => {
                    error!(%word, error = %e, "training failed");
                    report.failed.push(WordFailure {
                        word,
                        error: e.to_string(),
                    });
                }
            }
        }
        report
    }
}
