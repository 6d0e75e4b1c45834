//! Feature extraction and linear classification for sense disambiguation.
//!
//! # Architecture
//!
//! - [`tfidf::TfIdfVectorizer`]: term-weighted word or character n-gram rows
//! - [`lexicon::LexiconFeatures`]: per-sense cue hit counts
//! - [`features::FeaturePipeline`]: the three blocks joined side by side
//! - [`classifier::Classifier`]: logistic regression or a linear SVM
//! - [`validation`]: stratified k-fold accuracy estimates
//!
//! All rows are [`sparse::SparseVector`]s; only the learned weights are dense.

pub mod classifier;
pub mod features;
pub mod lexicon;
pub mod logistic;
pub mod sparse;
pub mod svm;
pub mod tfidf;
pub mod validation;

pub use classifier::{Classifier, ClassifierKind};
pub use features::FeaturePipeline;
pub use lexicon::{CueSet, LexiconFeatures};
pub use sparse::SparseVector;
pub use tfidf::{NgramAnalyzer, TfIdfVectorizer};
