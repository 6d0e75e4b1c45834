//! Rule-based correction of classifier output.
//!
//! Runs after classification on the normalized sentences. When exactly one
//! sense's cues match a sentence, that sense wins; when both or neither
//! match, the classifier's prediction stands.

use tracing::debug;

use crate::error::Result;
use crate::ml::lexicon::CueSet;
use crate::word::{CueRules, Sense, TargetWord};

/// Compiled override cues for one word.
#[derive(Debug, Clone)]
pub struct HeuristicOverride {
    sense1: CueSet,
    sense2: CueSet,
}

impl HeuristicOverride {
    pub fn new(rules: &CueRules) -> Result<Self> {
        Ok(Self {
            sense1: CueSet::compile(rules.sense1)?,
            sense2: CueSet::compile(rules.sense2)?,
        })
    }

    /// The override layer for `word`, or `None` if the word has none.
    pub fn for_word(word: TargetWord) -> Result<Option<Self>> {
        word.config().overrides.as_ref().map(Self::new).transpose()
    }

    /// Decide the final sense for one sentence given the classifier's guess.
    pub fn decide(&self, sentence: &str, predicted: Sense) -> Sense {
        match (self.sense1.matches(sentence), self.sense2.matches(sentence)) {
            (true, false) => Sense::First,
            (false, true) => Sense::Second,
            _ => predicted,
        }
    }

    /// Apply [`decide`](Self::decide) across a batch.
    pub fn apply<S: AsRef<str>>(&self, sentences: &[S], predictions: &[Sense]) -> Vec<Sense> {
        let revised: Vec<Sense> = sentences
            .iter()
            .zip(predictions)
            .map(|(sentence, &predicted)| self.decide(sentence.as_ref(), predicted))
            .collect();

        let changed = revised
            .iter()
            .zip(predictions)
            .filter(|(after, before)| after != before)
            .count();
        debug!(changed, total = revised.len(), "applied heuristic overrides");

        revised
    }
}

/// Run the override layer if there is one; otherwise pass predictions through.
pub fn apply_overrides<S: AsRef<str>>(
    layer: Option<&HeuristicOverride>,
    sentences: &[S],
    predictions: Vec<Sense>,
) -> Vec<Sense> {
    match layer {
        Some(layer) => layer.apply(sentences, &predictions),
        None => predictions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn director() -> HeuristicOverride {
        HeuristicOverride::for_word(TargetWord::Director)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_exclusive_sense2_match_overrides() {
        let layer = director();
        let sentence = "The film director shouted cut";
        assert_eq!(layer.decide(sentence, Sense::First), Sense::Second);
        assert_eq!(layer.decide(sentence, Sense::Second), Sense::Second);
    }

    #[test]
    fn test_exclusive_sense1_match_overrides() {
        let layer = director();
        assert_eq!(
            layer.decide("The finance director approved the budget", Sense::Second),
            Sense::First
        );
    }

    #[test]
    fn test_both_or_neither_keeps_classifier_output() {
        let layer = director();
        let both = "The marketing director attended the film premiere";
        let neither = "She became the director last year";
        for predicted in [Sense::First, Sense::Second] {
            assert_eq!(layer.decide(both, predicted), predicted);
            assert_eq!(layer.decide(neither, predicted), predicted);
        }
    }

    #[test]
    fn test_override_cues_are_narrower_than_lexicon() {
        // "director announced" is a lexicon cue but not an override cue.
        let layer = director();
        assert_eq!(
            layer.decide("The director announced new hires", Sense::Second),
            Sense::Second
        );
    }

    #[test]
    fn test_rubbish_overrides() {
        let layer = HeuristicOverride::for_word(TargetWord::Rubbish)
            .unwrap()
            .unwrap();
        let sentences = ["Take out the rubbish bin tonight", "That argument is complete rubbish"];
        let revised = layer.apply(&sentences, &[Sense::Second, Sense::First]);
        assert_eq!(revised, vec![Sense::First, Sense::Second]);
    }

    #[test]
    fn test_overtime_has_no_layer() {
        assert!(HeuristicOverride::for_word(TargetWord::Overtime)
            .unwrap()
            .is_none());

        let predictions = vec![Sense::Second, Sense::First];
        assert_eq!(
            apply_overrides(None, &["film director", "garbage bin"], predictions.clone()),
            predictions
        );
    }
}
