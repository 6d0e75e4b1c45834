//! Accuracy of predictions against known senses.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TwosenseError};
use crate::word::Sense;

/// Correct and total counts for one sense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseScore {
    pub correct: usize,
    pub total: usize,
}

impl SenseScore {
    /// Fraction correct, or `None` when there were no examples.
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
    pub sense1: SenseScore,
    pub sense2: SenseScore,
}

/// Compare predictions with the expected senses, position by position.
pub fn evaluate(predicted: &[Sense], expected: &[Sense]) -> Result<EvaluationReport> {
    if predicted.len() != expected.len() {
        return Err(TwosenseError::input(format!(
            "{} predictions for {} expected senses",
            predicted.len(),
            expected.len()
        )));
    }

    let mut report = EvaluationReport {
        total: expected.len(),
        ..EvaluationReport::default()
    };
    for (p, e) in predicted.iter().zip(expected) {
        let score = match e {
            Sense::First => &mut report.sense1,
            Sense::Second => &mut report.sense2,
        };
        score.total += 1;
        if p == e {
            score.correct += 1;
            report.correct += 1;
        }
    }
    if report.total > 0 {
        report.accuracy = report.correct as f64 / report.total as f64;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let expected = [Sense::First, Sense::First, Sense::Second, Sense::Second];
        let predicted = [Sense::First, Sense::Second, Sense::Second, Sense::Second];
        let report = evaluate(&predicted, &expected).unwrap();

        assert_eq!(report.correct, 3);
        assert_eq!(report.total, 4);
        assert!((report.accuracy - 0.75).abs() < 1e-12);
        assert_eq!(report.sense1, SenseScore { correct: 1, total: 2 });
        assert_eq!(report.sense2.accuracy(), Some(1.0));
    }

    #[test]
    fn test_empty_and_mismatched() {
        let report = evaluate(&[], &[]).unwrap();
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.sense1.accuracy(), None);

        assert!(evaluate(&[Sense::First], &[]).is_err());
    }
}
