//! Linear support vector classifier.

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::ml::classifier::{LinearClassifier, LinearWeights, signed_targets};
use crate::ml::sparse::SparseVector;
use crate::word::Sense;

/// Stop once the projected gradient spread falls below this.
const TOLERANCE: f64 = 1e-4;

/// Seed for the per-epoch coordinate order.
const SHUFFLE_SEED: u64 = 0;

/// Linear SVM with squared hinge loss, solved by dual coordinate descent.
///
/// Minimizes `0.5 * (|w|² + b²) + C * Σ max(0, 1 - y_i (w·x_i + b))²` through
/// its dual, updating one example's multiplier at a time. The coordinate
/// order is shuffled with a fixed seed, so training is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSvc {
    c: f64,
    max_iter: usize,
    model: LinearWeights,
    iterations: usize,
}

impl LinearSvc {
    pub fn new(c: f64, max_iter: usize) -> Self {
        Self {
            c,
            max_iter,
            model: LinearWeights::default(),
            iterations: 0,
        }
    }

    /// Fit on rows of width `width`. Callers guarantee both senses are present.
    pub fn fit(&mut self, rows: &[SparseVector], senses: &[Sense], width: usize) -> Result<()> {
        let targets = signed_targets(senses);
        let diag = 1.0 / (2.0 * self.c);
        // Q_ii including the constant bias feature.
        let q_diag: Vec<f64> = rows.iter().map(|r| r.norm_squared() + 1.0 + diag).collect();

        let mut alpha = vec![0.0; rows.len()];
        let mut model = LinearWeights::zeros(width);
        let mut order: Vec<usize> = (0..rows.len()).collect();
        let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);

        let mut iterations = 0;
        while iterations < self.max_iter {
            iterations += 1;
            order.shuffle(&mut rng);

            let mut pg_max = f64::NEG_INFINITY;
            let mut pg_min = f64::INFINITY;
            for &i in &order {
                let y = targets[i];
                let gradient = y * model.decision(&rows[i]) - 1.0 + diag * alpha[i];
                let projected = if alpha[i] == 0.0 {
                    gradient.min(0.0)
                } else {
                    gradient
                };
                pg_max = pg_max.max(projected);
                pg_min = pg_min.min(projected);

                if projected.abs() > 1e-12 {
                    let previous = alpha[i];
                    alpha[i] = (previous - gradient / q_diag[i]).max(0.0);
                    let delta = (alpha[i] - previous) * y;
                    rows[i].add_scaled_to(&mut model.weights, delta);
                    model.bias += delta;
                }
            }

            if pg_max - pg_min <= TOLERANCE {
                break;
            }
        }

        debug!(iterations, max_iter = self.max_iter, "linear svc finished");
        self.model = model;
        self.iterations = iterations;
        Ok(())
    }

    /// Passes over the data taken by the last fit.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn weights(&self) -> &LinearWeights {
        &self.model
    }
}

impl LinearClassifier for LinearSvc {
    fn decision_function(&self, row: &SparseVector) -> f64 {
        self.model.decision(row)
    }

    fn name(&self) -> &str {
        "linear_svc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> (Vec<SparseVector>, Vec<Sense>) {
        let rows = vec![
            SparseVector::from_pairs(vec![(0, 1.0), (2, 0.3)]),
            SparseVector::from_pairs(vec![(0, 0.7)]),
            SparseVector::from_pairs(vec![(1, 1.0), (2, 0.3)]),
            SparseVector::from_pairs(vec![(1, 0.6)]),
        ];
        let senses = vec![Sense::First, Sense::First, Sense::Second, Sense::Second];
        (rows, senses)
    }

    #[test]
    fn test_learns_separable_data() {
        let (rows, senses) = data();
        let mut model = LinearSvc::new(1.5, 1000);
        model.fit(&rows, &senses, 3).unwrap();

        for (row, sense) in rows.iter().zip(&senses) {
            assert_eq!(model.predict_row(row), *sense);
        }
        assert!(model.weights().weights[0] < 0.0);
        assert!(model.weights().weights[1] > 0.0);
    }

    #[test]
    fn test_training_is_deterministic() {
        let (rows, senses) = data();
        let mut first = LinearSvc::new(1.5, 1000);
        let mut second = LinearSvc::new(1.5, 1000);
        first.fit(&rows, &senses, 3).unwrap();
        second.fit(&rows, &senses, 3).unwrap();

        assert_eq!(first.weights(), second.weights());
        assert_eq!(first.iterations(), second.iterations());
    }

    #[test]
    fn test_unseen_row_uses_bias_only() {
        let (rows, senses) = data();
        let mut model = LinearSvc::new(1.5, 1000);
        model.fit(&rows, &senses, 3).unwrap();

        let empty = SparseVector::new();
        assert_eq!(model.decision_function(&empty), model.weights().bias);
    }
}
