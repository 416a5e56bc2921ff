//! Gameplay constants that varied across revisions of the original game.
//!
//! Every "pick one" decision lives here so the rest of the engine never
//! hardcodes a literal: initial bar baseline, per-category step limit,
//! replay cooldown, goal cap.

use chrono::Duration;

/// Replay cooldown tier. Privileged accounts (admin/test) get a short
/// wait so cycles can be exercised quickly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownPolicy {
    /// Ordinary accounts: fixed 4-day wait between cycles.
    Standard,
    /// Privileged accounts: 60-second wait.
    Privileged,
}

impl CooldownPolicy {
    pub fn duration(self) -> Duration {
        match self {
            CooldownPolicy::Standard => Duration::days(4),
            CooldownPolicy::Privileged => Duration::seconds(60),
        }
    }
}

/// Tunable constants for one game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Baseline for all four progress bars at game start.
    pub initial_bar_level: u8,
    /// Decision points per category before scoring.
    pub steps_per_category: u8,
    /// Wait between the end of one cycle and the start of the next.
    pub cooldown: Duration,
    /// Upper bound on predicted goals per side.
    pub max_goals: u8,
    /// Bar bonus carried by the category-aligned synthesized option.
    pub fallback_bar_bonus: i16,
    /// Flat bonus when a category score matches the published real score.
    pub exact_score_bonus: u32,
}

impl GameConfig {
    pub fn standard() -> Self {
        Self::with_policy(CooldownPolicy::Standard)
    }

    pub fn privileged() -> Self {
        Self::with_policy(CooldownPolicy::Privileged)
    }

    pub fn with_policy(policy: CooldownPolicy) -> Self {
        GameConfig {
            initial_bar_level: 10,
            steps_per_category: 5,
            cooldown: policy.duration(),
            max_goals: 6,
            fallback_bar_bonus: 5,
            exact_score_bonus: 10,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_tiers() {
        assert_eq!(CooldownPolicy::Standard.duration(), Duration::days(4));
        assert_eq!(CooldownPolicy::Privileged.duration(), Duration::seconds(60));
    }

    #[test]
    fn default_config_is_standard() {
        let config = GameConfig::default();
        assert_eq!(config.initial_bar_level, 10);
        assert_eq!(config.steps_per_category, 5);
        assert_eq!(config.cooldown, Duration::days(4));
    }
}
