//! # Twosense
//!
//! Two-sense word disambiguation for the nouns "director", "overtime" and
//! "rubbish".
//!
//! ## Features
//!
//! - Corpus parsing with optional glosses and stage-1 sentence files
//! - Seeded text augmentation for small corpora
//! - Word and character n-gram TF-IDF plus lexicon cue features
//! - Logistic regression and linear SVM classifiers
//! - Rule-based overrides on top of the classifier
//! - Per-word model artifacts on disk
//!
//! ## Example
//!
//! ```no_run
//! use twosense::predict::wsd_test_rubbish;
//!
//! let sentences = vec!["Take out the rubbish bin tonight".to_string()];
//! let labels = wsd_test_rubbish(Some(sentences.as_slice())).unwrap();
//! assert_eq!(labels.len(), 1);
//! ```

pub mod analysis;
pub mod augment;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod ml;
pub mod overrides;
pub mod pipeline;
pub mod predict;
pub mod store;
pub mod train;
pub mod word;

pub mod prelude {
    pub use crate::error::{Result, TwosenseError};
    pub use crate::pipeline::FittedPipeline;
    pub use crate::predict::{Predictor, wsd_test_director, wsd_test_overtime, wsd_test_rubbish};
    pub use crate::store::ModelStore;
    pub use crate::train::{TrainConfig, Trainer};
    pub use crate::word::{Sense, TargetWord};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
