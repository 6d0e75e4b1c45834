//! L2-regularized logistic regression.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::ml::classifier::{LinearClassifier, LinearWeights, signed_targets};
use crate::ml::sparse::SparseVector;
use crate::word::Sense;

/// Stop once every gradient component is smaller than this.
const GRADIENT_TOLERANCE: f64 = 1e-4;

/// Numerically stable sigmoid.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

/// Logistic regression trained by full-batch gradient descent.
///
/// Minimizes `0.5 * (|w|² + b²) + C * Σ c_i * ln(1 + exp(-y_i (w·x_i + b)))`,
/// where `c_i` is 1, or `n / (2 * n_class)` with balanced class weights. The
/// bias is regularized like any other weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    c: f64,
    balanced: bool,
    max_iter: usize,
    model: LinearWeights,
    iterations: usize,
}

impl LogisticRegression {
    pub fn new(c: f64, balanced: bool, max_iter: usize) -> Self {
        Self {
            c,
            balanced,
            max_iter,
            model: LinearWeights::default(),
            iterations: 0,
        }
    }

    /// Per-example weights `c_i`.
    fn sample_weights(&self, targets: &[f64]) -> Vec<f64> {
        if !self.balanced {
            return vec![1.0; targets.len()];
        }
        let n = targets.len() as f64;
        let positives = targets.iter().filter(|&&y| y > 0.0).count() as f64;
        let negatives = n - positives;
        targets
            .iter()
            .map(|&y| {
                let class_count = if y > 0.0 { positives } else { negatives };
                n / (2.0 * class_count)
            })
            .collect()
    }

    /// Fit on rows of width `width`. Callers guarantee both senses are present.
    pub fn fit(&mut self, rows: &[SparseVector], senses: &[Sense], width: usize) -> Result<()> {
        let targets = signed_targets(senses);
        let sample_weights = self.sample_weights(&targets);

        // Lipschitz constant of the gradient; 1/L is a safe step size.
        let lipschitz = 1.0
            + self.c / 4.0
                * rows
                    .iter()
                    .zip(&sample_weights)
                    .map(|(row, ci)| ci * (row.norm_squared() + 1.0))
                    .sum::<f64>();
        let step = 1.0 / lipschitz;

        let mut model = LinearWeights::zeros(width);
        let mut iterations = 0;
        while iterations < self.max_iter {
            iterations += 1;

            let mut grad_w = model.weights.clone();
            let mut grad_b = model.bias;
            for ((row, &y), &ci) in rows.iter().zip(&targets).zip(&sample_weights) {
                let margin = y * model.decision(row);
                let coef = -self.c * ci * y * sigmoid(-margin);
                row.add_scaled_to(&mut grad_w, coef);
                grad_b += coef;
            }

            let max_gradient = grad_w
                .iter()
                .fold(grad_b.abs(), |acc, g| acc.max(g.abs()));
            if max_gradient < GRADIENT_TOLERANCE {
                break;
            }

            for (w, g) in model.weights.iter_mut().zip(&grad_w) {
                *w -= step * g;
            }
            model.bias -= step * grad_b;
        }

        debug!(iterations, max_iter = self.max_iter, "logistic regression finished");
        self.model = model;
        self.iterations = iterations;
        Ok(())
    }

    /// Probability of the second sense.
    pub fn predict_proba(&self, row: &SparseVector) -> f64 {
        sigmoid(self.model.decision(row))
    }

    /// Gradient steps taken by the last fit.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn weights(&self) -> &LinearWeights {
        &self.model
    }
}

impl LinearClassifier for LogisticRegression {
    fn decision_function(&self, row: &SparseVector) -> f64 {
        self.model.decision(row)
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(40.0) > 0.999);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!(sigmoid(-800.0).is_finite());
    }

    #[test]
    fn test_balanced_weights() {
        let model = LogisticRegression::new(1.0, true, 10);
        let weights = model.sample_weights(&[-1.0, -1.0, -1.0, 1.0]);
        assert!((weights[0] - 4.0 / 6.0).abs() < 1e-12);
        assert!((weights[3] - 2.0).abs() < 1e-12);

        let model = LogisticRegression::new(1.0, false, 10);
        assert_eq!(model.sample_weights(&[-1.0, 1.0]), vec![1.0, 1.0]);
    }

    #[test]
    fn test_learns_separable_data() {
        let rows = vec![
            SparseVector::from_pairs(vec![(0, 1.0)]),
            SparseVector::from_pairs(vec![(0, 1.0), (1, 0.1)]),
            SparseVector::from_pairs(vec![(1, 1.0)]),
        ];
        let senses = vec![Sense::First, Sense::First, Sense::Second];
        let mut model = LogisticRegression::new(1.0, true, 2000);
        model.fit(&rows, &senses, 2).unwrap();

        assert!(model.iterations() > 0);
        assert_eq!(model.predict_row(&rows[0]), Sense::First);
        assert_eq!(model.predict_row(&rows[2]), Sense::Second);
        assert!(model.predict_proba(&rows[2]) > 0.5);
        assert!(model.weights().weights[0] < 0.0);
    }
}
