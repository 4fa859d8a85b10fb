use std::fmt;

use super::{Probability, TransientClass};

/// Per-class probabilities for one spectrum, in model output order.
///
/// Produced by softmax over the model logits: every value is non-negative
/// and the values sum to 1 within floating-point tolerance. Output-only;
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScores {
    scores: Vec<(TransientClass, Probability)>,
}

impl ClassScores {
    /// Zip the taxonomy with a probability vector.
    /// Returns `None` when the vector length does not match the taxonomy.
    pub fn from_probabilities(probs: &[f64]) -> Option<Self> {
        if probs.len() != TransientClass::COUNT {
            return None;
        }
        let scores = TransientClass::ALL
            .iter()
            .copied()
            .zip(probs.iter().map(|&p| Probability::new(p)))
            .collect();
        Some(Self { scores })
    }

    /// Iterate classes with their probabilities, in model output order.
    pub fn iter(&self) -> impl Iterator<Item = (TransientClass, Probability)> + '_ {
        self.scores.iter().copied()
    }

    /// The highest-probability class and its probability.
    /// Ties resolve to the earlier class in model output order.
    pub fn best(&self) -> (TransientClass, Probability) {
        let mut best = (TransientClass::Agn, Probability::default());
        for (class, prob) in self.iter() {
            if prob.value() > best.1.value() {
                best = (class, prob);
            }
        }
        best
    }

    /// Probability assigned to a single class.
    pub fn probability(&self, class: TransientClass) -> Probability {
        self.scores
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, p)| *p)
            .unwrap_or_default()
    }

    /// Sum of all probabilities. ~1.0 for softmax output.
    pub fn total(&self) -> f64 {
        self.scores.iter().map(|(_, p)| p.value()).sum()
    }
}

impl fmt::Display for ClassScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (class, prob) = self.best();
        write!(f, "{} ({})", class, prob.as_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        assert!(ClassScores::from_probabilities(&[0.5, 0.5]).is_none());
        assert!(ClassScores::from_probabilities(&[]).is_none());
        assert!(ClassScores::from_probabilities(&[0.1; 11]).is_none());
    }

    #[test]
    fn preserves_model_output_order() {
        let mut probs = [0.0; 10];
        probs[6] = 1.0; // Ia slot
        let scores = ClassScores::from_probabilities(&probs).unwrap();
        let classes: Vec<_> = scores.iter().map(|(c, _)| c).collect();
        assert_eq!(classes, TransientClass::ALL.to_vec());
        assert_eq!(scores.probability(TransientClass::TypeIa).value(), 1.0);
    }

    #[test]
    fn best_is_argmax() {
        let probs = [0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.6, 0.07, 0.08, 0.04];
        let scores = ClassScores::from_probabilities(&probs).unwrap();
        let (class, prob) = scores.best();
        assert_eq!(class, TransientClass::TypeIa);
        assert!((prob.value() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn best_tie_resolves_to_earlier_class() {
        let probs = [0.2, 0.2, 0.1, 0.1, 0.1, 0.1, 0.05, 0.05, 0.05, 0.05];
        let scores = ClassScores::from_probabilities(&probs).unwrap();
        assert_eq!(scores.best().0, TransientClass::Agn);
    }

    #[test]
    fn uniform_scores_total_one() {
        let scores = ClassScores::from_probabilities(&[0.1; 10]).unwrap();
        assert!((scores.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn display_shows_best_class() {
        let mut probs = [0.0; 10];
        probs[9] = 0.97;
        let scores = ClassScores::from_probabilities(&probs).unwrap();
        assert_eq!(
            scores.to_string(),
            "Tidal Disruption Event (97.000%)"
        );
    }
}
