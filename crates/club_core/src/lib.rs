//! # club_core - Fan-Engagement Club Management Core
//!
//! Deterministic game logic for a branching-narrative club management
//! game: four story categories with progress bars, realism scoring,
//! recent-form analysis and a match-score prediction per completed
//! cycle, with cooldown-gated replays.
//!
//! ## Features
//! - 100% deterministic: same choices = same bars, scores and prediction
//! - Authored Turkish story trees with synthesized fallback options
//! - Pluggable form source with a built-in offline fallback dataset
//! - Snapshot persistence behind a debounced writer

pub mod config;
pub mod cooldown;
pub mod error;
pub mod form;
pub mod persist;
pub mod prediction;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod story;

pub use config::{CooldownPolicy, GameConfig};
pub use cooldown::{iso_week_number, iso_week_year, replay_gate, ReplayGate};
pub use error::{CoreError, Result};
pub use form::{FallbackFormSource, FormReport, FormSource, MatchResult};
pub use persist::{DebouncedSaver, GameSnapshot, MemoryStore, StateStore};
pub use prediction::{ActualScore, Outcome, Prediction};
pub use progress::{BarKind, Effects, ProgressBars};
pub use session::{ChoiceOutcome, GameSession, WeeklyScore};
pub use story::{Category, StoryCatalog, StoryNode, StoryOption};

/// Library version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn public_surface_composes() {
        let session = GameSession::new(GameConfig::default());
        assert_eq!(*session.bars(), ProgressBars::uniform(10));
        assert_eq!(session.outcome(), Outcome::Pending);
    }
}
