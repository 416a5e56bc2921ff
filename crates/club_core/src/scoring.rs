//! Per-category realism scoring.
//!
//! A completed category is graded 0.0-10.0 from the final progress bars
//! through a category-specific weight vector. The score is deterministic:
//! some historical revisions added a ±0.5 jitter, which is intentionally
//! not carried here.

use crate::progress::{BarKind, ProgressBars};
use crate::story::Category;

/// Weights over the four bars. Each authored vector sums to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub finance: f64,
    pub technical_team: f64,
    pub sponsors: f64,
    pub fans: f64,
}

impl Weights {
    pub fn get(&self, kind: BarKind) -> f64 {
        match kind {
            BarKind::Finance => self.finance,
            BarKind::TechnicalTeam => self.technical_team,
            BarKind::Sponsors => self.sponsors,
            BarKind::Fans => self.fans,
        }
    }
}

const FINANCE_WEIGHTS: Weights =
    Weights { finance: 0.6, technical_team: 0.05, sponsors: 0.3, fans: 0.05 };
const TECHNICAL_TEAM_WEIGHTS: Weights =
    Weights { finance: 0.1, technical_team: 0.7, sponsors: 0.1, fans: 0.1 };
const SPONSORS_WEIGHTS: Weights =
    Weights { finance: 0.2, technical_team: 0.1, sponsors: 0.6, fans: 0.1 };
const FANS_WEIGHTS: Weights =
    Weights { finance: 0.1, technical_team: 0.1, sponsors: 0.1, fans: 0.7 };

/// Uniform fallback for names outside the closed category set. Should
/// never be hit in practice, but it is part of the contract.
pub const DEFAULT_WEIGHTS: Weights =
    Weights { finance: 0.25, technical_team: 0.25, sponsors: 0.25, fans: 0.25 };

/// Weight vector for a category display name.
pub fn weights_for(category: &str) -> Weights {
    match Category::parse(category) {
        Some(Category::Finance) => FINANCE_WEIGHTS,
        Some(Category::TechnicalTeam) => TECHNICAL_TEAM_WEIGHTS,
        Some(Category::Sponsors) => SPONSORS_WEIGHTS,
        Some(Category::Fans) => FANS_WEIGHTS,
        None => DEFAULT_WEIGHTS,
    }
}

/// Grades a completed category: weighted bar sum rescaled to [0, 10],
/// clamped, rounded to one decimal.
pub fn score_category(category: &str, bars: &ProgressBars) -> f64 {
    let weights = weights_for(category);
    let weighted: f64 =
        BarKind::ALL.iter().map(|&kind| bars.get(kind) as f64 * weights.get(kind)).sum();
    let score = (weighted / 10.0).clamp(0.0, 10.0);
    round_one_decimal(score)
}

/// Integer points awarded for a category score: 10.0 → 100.
pub fn points_for(score: f64) -> u32 {
    (score * 10.0).round() as u32
}

/// Flat bonus when the player's estimate equals the published real score
/// for the category; zero otherwise.
pub fn exact_score_bonus(estimated: f64, published: f64, bonus: u32) -> u32 {
    if (estimated - published).abs() < f64::EPSILON {
        bonus
    } else {
        0
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn perfect_bars_score_ten() {
        let bars = ProgressBars::uniform(100);
        let score = score_category("Teknik Ekip", &bars);
        assert_eq!(score, 10.0);
        assert_eq!(points_for(score), 100);
    }

    #[test]
    fn zero_bars_score_zero() {
        let bars = ProgressBars::uniform(0);
        assert_eq!(score_category("Finansal Yönetim", &bars), 0.0);
    }

    #[test]
    fn weights_follow_the_dominant_bar() {
        let bars = ProgressBars { finance: 100, technical_team: 0, sponsors: 0, fans: 0 };
        // Finance weight 0.6 → 60 weighted → 6.0
        assert_eq!(score_category("Finansal Yönetim", &bars), 6.0);
        // Fans category weighs finance only 0.1 → 1.0
        assert_eq!(score_category("Taraftar İlişkileri", &bars), 1.0);
    }

    #[test]
    fn unknown_category_uses_uniform_weights() {
        let bars = ProgressBars { finance: 40, technical_team: 60, sponsors: 20, fans: 80 };
        // Uniform 0.25 over (40+60+20+80) = 50 weighted → 5.0
        assert_eq!(score_category("NotARealCategory", &bars), 5.0);
    }

    #[test]
    fn exact_bonus_requires_equality() {
        assert_eq!(exact_score_bonus(7.5, 7.5, 10), 10);
        assert_eq!(exact_score_bonus(7.5, 7.4, 10), 0);
    }

    proptest! {
        #[test]
        fn score_is_bounded_and_one_decimal(
            finance in 0u8..=100, technical_team in 0u8..=100,
            sponsors in 0u8..=100, fans in 0u8..=100,
        ) {
            let bars = ProgressBars { finance, technical_team, sponsors, fans };
            for name in ["Finansal Yönetim", "Teknik Ekip", "Sponsorlar", "Taraftar İlişkileri", "???"] {
                let score = score_category(name, &bars);
                prop_assert!((0.0..=10.0).contains(&score));
                prop_assert!((score * 10.0 - (score * 10.0).round()).abs() < 1e-9);
            }
        }
    }
}
