//! Linear sense classifiers.
//!
//! Both models learn a weight vector over the combined feature row plus a
//! bias. A positive decision value means the second sense.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TwosenseError};
use crate::ml::logistic::LogisticRegression;
use crate::ml::sparse::SparseVector;
use crate::ml::svm::LinearSvc;
use crate::word::Sense;

/// Which linear model to train, with its hyper-parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClassifierKind {
    /// L2-regularized logistic regression.
    LogisticRegression {
        /// Inverse regularization strength.
        c: f64,
        /// Weight each class by `n / (2 * n_class)`.
        balanced: bool,
        max_iter: usize,
    },
    /// L2-regularized linear SVM with squared hinge loss.
    LinearSvc { c: f64, max_iter: usize },
}

/// Common interface of the trained linear models.
pub trait LinearClassifier: Send + Sync {
    /// Signed distance from the decision boundary; positive means sense 2.
    fn decision_function(&self, row: &SparseVector) -> f64;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;

    fn predict_row(&self, row: &SparseVector) -> Sense {
        if self.decision_function(row) > 0.0 {
            Sense::Second
        } else {
            Sense::First
        }
    }
}

/// Learned weights and bias shared by both models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearWeights {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearWeights {
    pub fn zeros(width: usize) -> Self {
        Self {
            weights: vec![0.0; width],
            bias: 0.0,
        }
    }

    pub fn decision(&self, row: &SparseVector) -> f64 {
        row.dot(&self.weights) + self.bias
    }
}

/// Map senses to the `±1` targets the solvers work with.
pub(crate) fn signed_targets(senses: &[Sense]) -> Vec<f64> {
    senses
        .iter()
        .map(|sense| match sense {
            Sense::First => -1.0,
            Sense::Second => 1.0,
        })
        .collect()
}

/// A fitted classifier of either kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Classifier {
    Logistic(LogisticRegression),
    Svc(LinearSvc),
}

impl Classifier {
    /// Train a classifier of `kind` on rows of width `width`.
    ///
    /// Fails with a data error unless both senses are present.
    pub fn fit(
        kind: &ClassifierKind,
        rows: &[SparseVector],
        senses: &[Sense],
        width: usize,
    ) -> Result<Self> {
        if rows.len() != senses.len() {
            return Err(TwosenseError::data(format!(
                "{} feature rows but {} labels",
                rows.len(),
                senses.len()
            )));
        }
        let has_first = senses.contains(&Sense::First);
        let has_second = senses.contains(&Sense::Second);
        if !(has_first && has_second) {
            return Err(TwosenseError::data(
                "training data needs examples of both senses",
            ));
        }

        let classifier = match *kind {
            ClassifierKind::LogisticRegression {
                c,
                balanced,
                max_iter,
            } => {
                let mut model = LogisticRegression::new(c, balanced, max_iter);
                model.fit(rows, senses, width)?;
                Classifier::Logistic(model)
            }
            ClassifierKind::LinearSvc { c, max_iter } => {
                let mut model = LinearSvc::new(c, max_iter);
                model.fit(rows, senses, width)?;
                Classifier::Svc(model)
            }
        };
        debug!(classifier = classifier.name(), rows = rows.len(), width, "fitted classifier");

        Ok(classifier)
    }

    /// Predict one sense per row.
    pub fn predict(&self, rows: &[SparseVector]) -> Vec<Sense> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    fn inner(&self) -> &dyn LinearClassifier {
        match self {
            Classifier::Logistic(model) => model,
            Classifier::Svc(model) => model,
        }
    }
}

impl LinearClassifier for Classifier {
    fn decision_function(&self, row: &SparseVector) -> f64 {
        self.inner().decision_function(row)
    }

    fn name(&self) -> &str {
        self.inner().name()
    }
}
