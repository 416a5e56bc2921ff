//! Match prediction and outcome classification.
//!
//! The blended strength mixes three signals on the 0-10 scale: the
//! weighted per-category scores, the average progress-bar level and the
//! recent-form factor. A fixed five-band table maps strength to a goal
//! pair; the bands are design constants, not derived values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::FormReport;
use crate::story::Category;

/// Blend weights over the three signals.
const CATEGORY_SIGNAL_WEIGHT: f64 = 0.5;
const PERFORMANCE_SIGNAL_WEIGHT: f64 = 0.3;
const FORM_SIGNAL_WEIGHT: f64 = 0.2;

/// Per-category importance in the weighted category signal.
fn category_weight(category: Category) -> f64 {
    match category {
        Category::Finance => 0.3,
        Category::TechnicalTeam => 0.3,
        Category::Sponsors => 0.2,
        Category::Fans => 0.2,
    }
}

/// Strength bands: upper bound (inclusive) → (own goals, opponent goals).
/// Monotonic: more strength, more own goals, fewer conceded.
const STRENGTH_BANDS: [(f64, u8, u8); 5] = [
    (3.0, 0, 3), // very poor: heavy loss
    (5.0, 1, 2), // below average: narrow loss
    (7.0, 2, 2), // average: competitive draw
    (8.5, 2, 1), // good: narrow win
    (10.0, 3, 0), // excellent: comfortable win
];

/// Final predicted goal pair, both sides capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub own_goals: u8,
    pub opponent_goals: u8,
}

/// Externally supplied result. `None` on either side means the match has
/// not been played yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualScore {
    pub own_goals: Option<u8>,
    pub opponent_goals: Option<u8>,
}

impl ActualScore {
    pub fn played(own: u8, opponent: u8) -> Self {
        ActualScore { own_goals: Some(own), opponent_goals: Some(opponent) }
    }

    pub fn pending() -> Self {
        ActualScore::default()
    }

    pub fn is_played(&self) -> bool {
        self.own_goals.is_some() && self.opponent_goals.is_some()
    }
}

/// How a prediction fared against the real result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both goal counts equal.
    ExactMatch,
    /// Win/draw/loss direction matches, score differs.
    CorrectResult,
    /// Direction differs.
    Miss,
    /// Match not yet played.
    Pending,
}

/// Weighted mean of the per-category scores, 0-10. Missing categories
/// contribute nothing; the result is normalized over the weights present.
pub fn weighted_category_score(scores: &BTreeMap<Category, f64>) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for (&category, &score) in scores {
        let weight = category_weight(category);
        weighted += score * weight;
        total_weight += weight;
    }
    if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    }
}

/// Blends the three signals into a 0-10 strength value.
pub fn blend_strength(avg_performance: f64, category_score: f64, form: &FormReport) -> f64 {
    let performance_signal = (avg_performance / 10.0).clamp(0.0, 10.0);
    let form_signal = form.form_factor() * 10.0;
    CATEGORY_SIGNAL_WEIGHT * category_score.clamp(0.0, 10.0)
        + PERFORMANCE_SIGNAL_WEIGHT * performance_signal
        + FORM_SIGNAL_WEIGHT * form_signal
}

/// Maps a blended strength through the band table.
pub fn predict(strength: f64, max_goals: u8) -> Prediction {
    for (upper, own, opponent) in STRENGTH_BANDS {
        if strength <= upper {
            return Prediction {
                own_goals: own.min(max_goals),
                opponent_goals: opponent.min(max_goals),
            };
        }
    }
    // Above the last bound only through out-of-range input; treat as the
    // top band.
    let (_, own, opponent) = STRENGTH_BANDS[STRENGTH_BANDS.len() - 1];
    Prediction { own_goals: own.min(max_goals), opponent_goals: opponent.min(max_goals) }
}

/// Classifies a prediction against the actual result.
pub fn classify(prediction: Prediction, actual: ActualScore) -> Outcome {
    let (actual_own, actual_opp) = match (actual.own_goals, actual.opponent_goals) {
        (Some(own), Some(opp)) => (own, opp),
        _ => return Outcome::Pending,
    };

    if prediction.own_goals == actual_own && prediction.opponent_goals == actual_opp {
        return Outcome::ExactMatch;
    }

    let predicted_direction = prediction.own_goals.cmp(&prediction.opponent_goals);
    let actual_direction = actual_own.cmp(&actual_opp);
    if predicted_direction == actual_direction {
        Outcome::CorrectResult
    } else {
        Outcome::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [f64; 4]) -> BTreeMap<Category, f64> {
        Category::ALL.into_iter().zip(values).collect()
    }

    #[test]
    fn band_table_matches_design_constants() {
        assert_eq!(predict(0.0, 6), Prediction { own_goals: 0, opponent_goals: 3 });
        assert_eq!(predict(3.0, 6), Prediction { own_goals: 0, opponent_goals: 3 });
        assert_eq!(predict(4.0, 6), Prediction { own_goals: 1, opponent_goals: 2 });
        assert_eq!(predict(6.5, 6), Prediction { own_goals: 2, opponent_goals: 2 });
        assert_eq!(predict(8.0, 6), Prediction { own_goals: 2, opponent_goals: 1 });
        assert_eq!(predict(9.9, 6), Prediction { own_goals: 3, opponent_goals: 0 });
    }

    #[test]
    fn bands_are_monotonic() {
        let mut last_own = 0i16;
        let mut last_opp = i16::MAX;
        for step in 0..=100 {
            let strength = step as f64 / 10.0;
            let p = predict(strength, 6);
            assert!(p.own_goals as i16 >= last_own);
            assert!((p.opponent_goals as i16) <= last_opp);
            last_own = p.own_goals as i16;
            last_opp = p.opponent_goals as i16;
        }
    }

    #[test]
    fn goal_cap_applies() {
        let p = predict(1.0, 2);
        assert_eq!(p.opponent_goals, 2);
    }

    #[test]
    fn weighted_category_score_normalizes() {
        assert_eq!(weighted_category_score(&scores([10.0, 10.0, 10.0, 10.0])), 10.0);
        // Finance and TechnicalTeam weigh 0.3 each, rest 0.2.
        let mixed = weighted_category_score(&scores([10.0, 10.0, 0.0, 0.0]));
        assert!((mixed - 6.0).abs() < 1e-9);
        assert_eq!(weighted_category_score(&BTreeMap::new()), 0.0);
    }

    #[test]
    fn blend_combines_three_signals() {
        let form = FormReport::fallback(); // factor 0.6
        let strength = blend_strength(80.0, 8.0, &form);
        // 0.5*8 + 0.3*8 + 0.2*6 = 7.6
        assert!((strength - 7.6).abs() < 1e-9);
    }

    #[test]
    fn classification_matrix() {
        let p = Prediction { own_goals: 2, opponent_goals: 1 };
        assert_eq!(classify(p, ActualScore::played(2, 1)), Outcome::ExactMatch);
        assert_eq!(classify(p, ActualScore::played(3, 0)), Outcome::CorrectResult);
        assert_eq!(classify(p, ActualScore::played(1, 1)), Outcome::Miss);
        assert_eq!(classify(p, ActualScore::played(0, 2)), Outcome::Miss);
        assert_eq!(classify(p, ActualScore::pending()), Outcome::Pending);

        let draw = Prediction { own_goals: 2, opponent_goals: 2 };
        assert_eq!(classify(draw, ActualScore::played(0, 0)), Outcome::CorrectResult);
    }
}
