//! One player's game session: category selection, option choices,
//! cycle completion, prediction and replay gating.
//!
//! The session is a small state machine. `Idle` means no category is in
//! progress; `InCategory` carries the current node and the number of
//! decisions already taken. All clock-dependent operations take `now` as
//! a parameter so tests control time.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::cooldown::{iso_week_number, iso_week_year, replay_gate, ReplayGate};
use crate::error::{CoreError, Result};
use crate::form::FormReport;
use crate::persist::GameSnapshot;
use crate::prediction::{
    blend_strength, classify, predict, weighted_category_score, ActualScore, Outcome, Prediction,
};
use crate::progress::ProgressBars;
use crate::scoring;
use crate::story::{fallback_options, Category, StoryCatalog, StoryNode, AUTHORED_CATALOG};

/// Where the session currently is.
#[derive(Debug, Clone)]
enum Phase {
    Idle,
    InCategory {
        category: Category,
        /// Working copy of the current node. Held by value so terminal
        /// authored nodes can have synthesized options spliced in.
        node: StoryNode,
        /// Decisions already taken in this category.
        step: u8,
    },
}

/// What a single `choose_option` call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceOutcome {
    /// Moved to the next node; `step` decisions taken so far.
    Advanced { step: u8 },
    /// The category's final decision was taken and it was scored.
    CategoryComplete {
        category: Category,
        score: f64,
        points_awarded: u32,
        /// True when this was the last of the four categories.
        cycle_complete: bool,
    },
}

/// Points tagged with the ISO week they were read in, for leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScore {
    pub iso_year: i32,
    pub week: u32,
    pub points: u32,
}

pub struct GameSession {
    config: GameConfig,
    catalog: StoryCatalog,
    phase: Phase,
    bars: ProgressBars,
    completed: Vec<Category>,
    category_scores: BTreeMap<Category, f64>,
    points: u32,
    prediction: Option<Prediction>,
    actual: ActualScore,
    last_completion: Option<DateTime<Utc>>,
    last_score_update: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Fresh session on the authored story trees.
    pub fn new(config: GameConfig) -> Self {
        Self::with_catalog(config, AUTHORED_CATALOG.clone())
    }

    /// Fresh session on an explicit catalog. Gameplay uses the authored
    /// trees; cut-down catalogs are for tests and tooling.
    pub fn with_catalog(config: GameConfig, catalog: StoryCatalog) -> Self {
        let bars = ProgressBars::uniform(config.initial_bar_level);
        GameSession {
            config,
            catalog,
            phase: Phase::Idle,
            bars,
            completed: Vec::new(),
            category_scores: BTreeMap::new(),
            points: 0,
            prediction: None,
            actual: ActualScore::pending(),
            last_completion: None,
            last_score_update: None,
        }
    }

    /// Rebuilds a session from persisted state. The in-category position
    /// and the prediction are not persisted; a restored session is idle
    /// with its bars, points and completed categories intact.
    pub fn from_snapshot(config: GameConfig, snapshot: &GameSnapshot) -> Result<Self> {
        let mut session = Self::new(config);
        session.bars = snapshot.progress_bars;
        session.points = snapshot.points;
        session.last_completion = snapshot.last_completion;
        for name in &snapshot.completed_categories {
            let category = Category::parse(name)
                .ok_or_else(|| CoreError::UnknownCategory(name.clone()))?;
            session.completed.push(category);
        }
        for (name, score) in &snapshot.category_scores {
            let category = Category::parse(name)
                .ok_or_else(|| CoreError::UnknownCategory(name.clone()))?;
            session.category_scores.insert(category, *score);
        }
        Ok(session)
    }

    /// Serializable view of the durable state.
    pub fn snapshot(&self, now: DateTime<Utc>) -> GameSnapshot {
        GameSnapshot {
            progress_bars: self.bars,
            completed_categories: self.completed.iter().map(|c| c.name().to_string()).collect(),
            points: self.points,
            category_scores: self
                .category_scores
                .iter()
                .map(|(c, s)| (c.name().to_string(), *s))
                .collect(),
            last_completion: self.last_completion,
            updated_at: now,
        }
    }

    pub fn bars(&self) -> &ProgressBars {
        &self.bars
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn completed_categories(&self) -> &[Category] {
        &self.completed
    }

    pub fn category_score(&self, category: Category) -> Option<f64> {
        self.category_scores.get(&category).copied()
    }

    pub fn prediction(&self) -> Option<Prediction> {
        self.prediction
    }

    pub fn actual_score(&self) -> ActualScore {
        self.actual
    }

    pub fn last_score_update(&self) -> Option<DateTime<Utc>> {
        self.last_score_update
    }

    pub fn story_week(&self) -> u32 {
        self.catalog.story_week()
    }

    pub fn cycle_complete(&self) -> bool {
        self.completed.len() == Category::ALL.len()
    }

    /// The node the player is currently looking at, if any.
    pub fn current_node(&self) -> Option<&StoryNode> {
        match &self.phase {
            Phase::InCategory { node, .. } => Some(node),
            Phase::Idle => None,
        }
    }

    /// Starts (or restarts) a category by display name. Blocked while a
    /// finished cycle is still inside its cooldown; blocked for
    /// categories already scored this cycle.
    pub fn select_category(&mut self, name: &str, now: DateTime<Utc>) -> Result<()> {
        let category =
            Category::parse(name).ok_or_else(|| CoreError::UnknownCategory(name.to_string()))?;
        if self.cycle_complete() {
            let gate = self.replay_status(now);
            if !gate.allowed {
                return Err(CoreError::CycleLocked { remaining_secs: gate.remaining_secs });
            }
        }
        if self.completed.contains(&category) {
            return Err(CoreError::CategoryAlreadyCompleted(name.to_string()));
        }
        let root = self
            .catalog
            .root(category)
            .ok_or_else(|| CoreError::UnknownCategory(name.to_string()))?;
        let node = self.prepared_node(category, root);
        log::debug!("category selected: {}", category.name());
        self.phase = Phase::InCategory { category, node, step: 0 };
        Ok(())
    }

    /// Takes one decision at the current node. Validates the index before
    /// touching any state; an invalid index leaves the session unchanged.
    pub fn choose_option(&mut self, index: usize, now: DateTime<Utc>) -> Result<ChoiceOutcome> {
        let (category, effects, next, step_after) = match &self.phase {
            Phase::InCategory { category, node, step } => {
                let (effects, next) = node.select_option(index).ok_or(
                    CoreError::InvalidOptionIndex { index, available: node.options.len() },
                )?;
                (*category, *effects, Arc::clone(next), step + 1)
            }
            Phase::Idle => return Err(CoreError::NoActiveCategory),
        };

        self.bars.apply(&effects);

        if step_after >= self.config.steps_per_category {
            return Ok(self.complete_category(category, now));
        }

        let node = self.prepared_node(category, &next);
        self.phase = Phase::InCategory { category, node, step: step_after };
        Ok(ChoiceOutcome::Advanced { step: step_after })
    }

    /// Working copy of a node; a terminal node mid-category gets
    /// synthesized options so the step count always reaches the limit.
    fn prepared_node(&self, category: Category, node: &Arc<StoryNode>) -> StoryNode {
        let mut node = (**node).clone();
        if node.is_terminal() {
            node.options = fallback_options(category, self.config.fallback_bar_bonus);
        }
        node
    }

    fn complete_category(&mut self, category: Category, now: DateTime<Utc>) -> ChoiceOutcome {
        let score = scoring::score_category(category.name(), &self.bars);
        let points_awarded = scoring::points_for(score);
        self.points += points_awarded;
        self.category_scores.insert(category, score);
        self.completed.push(category);
        self.phase = Phase::Idle;
        let cycle_complete = self.cycle_complete();
        if cycle_complete {
            self.last_completion = Some(now);
        }
        log::info!(
            "category scored: {} score={score:.1} points=+{points_awarded}",
            category.name()
        );
        ChoiceOutcome::CategoryComplete { category, score, points_awarded, cycle_complete }
    }

    /// Produces the match prediction for a finished cycle. Computed once:
    /// repeat calls return the stored prediction regardless of the form
    /// report passed in.
    pub fn complete_cycle(&mut self, form: &FormReport) -> Result<Prediction> {
        if !self.cycle_complete() {
            return Err(CoreError::CycleIncomplete {
                completed: self.completed.len(),
                required: Category::ALL.len(),
            });
        }
        if let Some(prediction) = self.prediction {
            return Ok(prediction);
        }
        let category_signal = weighted_category_score(&self.category_scores);
        let strength = blend_strength(self.bars.average(), category_signal, form);
        let prediction = predict(strength, self.config.max_goals);
        log::info!(
            "cycle complete: strength={strength:.2} prediction={}-{} vs {}",
            prediction.own_goals,
            prediction.opponent_goals,
            form.next_opponent
        );
        self.prediction = Some(prediction);
        Ok(prediction)
    }

    /// Records the published real score. Returns true only when the
    /// stored value actually changed; the update timestamp moves either
    /// way. The exact-prediction bonus is awarded at most once, when the
    /// score first arrives.
    pub fn apply_actual_score(&mut self, own: u8, opponent: u8, now: DateTime<Utc>) -> bool {
        let incoming = ActualScore::played(own, opponent);
        self.last_score_update = Some(now);
        if self.actual == incoming {
            return false;
        }
        let first_arrival = !self.actual.is_played();
        self.actual = incoming;
        if first_arrival {
            if let Some(prediction) = self.prediction {
                if classify(prediction, incoming) == Outcome::ExactMatch {
                    self.points += self.config.exact_score_bonus;
                    log::info!("exact prediction: +{} points", self.config.exact_score_bonus);
                }
            }
        }
        true
    }

    /// How the stored prediction fared. `Pending` until both a prediction
    /// and a real score exist.
    pub fn outcome(&self) -> Outcome {
        match self.prediction {
            Some(prediction) => classify(prediction, self.actual),
            None => Outcome::Pending,
        }
    }

    /// Awards the flat bonus when a category's realism score matches a
    /// published reference score. A category not yet scored earns nothing.
    pub fn check_published_score(&mut self, name: &str, published: f64) -> Result<u32> {
        let category =
            Category::parse(name).ok_or_else(|| CoreError::UnknownCategory(name.to_string()))?;
        let estimated = match self.category_scores.get(&category) {
            Some(score) => *score,
            None => return Ok(0),
        };
        let bonus = scoring::exact_score_bonus(estimated, published, self.config.exact_score_bonus);
        self.points += bonus;
        Ok(bonus)
    }

    pub fn replay_status(&self, now: DateTime<Utc>) -> ReplayGate {
        replay_gate(now, self.last_completion, self.config.cooldown)
    }

    /// Opens the next cycle once the cooldown has elapsed. Bars and points
    /// carry over; completed categories, scores, prediction and the real
    /// score are cleared.
    pub fn start_new_cycle(&mut self, now: DateTime<Utc>) -> Result<()> {
        if !self.cycle_complete() {
            return Err(CoreError::CycleIncomplete {
                completed: self.completed.len(),
                required: Category::ALL.len(),
            });
        }
        let gate = self.replay_status(now);
        if !gate.allowed {
            return Err(CoreError::CycleLocked { remaining_secs: gate.remaining_secs });
        }
        self.completed.clear();
        self.category_scores.clear();
        self.prediction = None;
        self.actual = ActualScore::pending();
        self.phase = Phase::Idle;
        log::info!("new cycle started");
        Ok(())
    }

    /// Back to a brand-new game: baseline bars, zero points, no history.
    pub fn reset(&mut self) {
        self.bars = ProgressBars::uniform(self.config.initial_bar_level);
        self.phase = Phase::Idle;
        self.completed.clear();
        self.category_scores.clear();
        self.points = 0;
        self.prediction = None;
        self.actual = ActualScore::pending();
        self.last_completion = None;
        self.last_score_update = None;
    }

    /// Current points stamped with the ISO week of `now`.
    pub fn weekly_score(&self, now: DateTime<Utc>) -> WeeklyScore {
        WeeklyScore {
            iso_year: iso_week_year(now),
            week: iso_week_number(now),
            points: self.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashMap;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
    }

    fn privileged_session() -> GameSession {
        GameSession::new(GameConfig::privileged())
    }

    /// Plays a category to completion by always taking the first option.
    fn play_category(session: &mut GameSession, category: Category, now: DateTime<Utc>) -> ChoiceOutcome {
        session.select_category(category.name(), now).unwrap();
        loop {
            match session.choose_option(0, now).unwrap() {
                ChoiceOutcome::Advanced { .. } => continue,
                done @ ChoiceOutcome::CategoryComplete { .. } => return done,
            }
        }
    }

    fn play_full_cycle(session: &mut GameSession, now: DateTime<Utc>) {
        for category in Category::ALL {
            play_category(session, category, now);
        }
    }

    /// A one-node catalog whose root is terminal, forcing synthesized
    /// options from the first decision on.
    fn stub_catalog() -> StoryCatalog {
        let terminal = Arc::new(StoryNode { text: "Son".to_string(), options: Vec::new() });
        let roots: HashMap<Category, Arc<StoryNode>> =
            Category::ALL.into_iter().map(|c| (c, Arc::clone(&terminal))).collect();
        StoryCatalog::with_roots(roots, 7)
    }

    #[test]
    fn full_cycle_on_authored_trees() {
        let mut session = privileged_session();
        let now = at(1, 12);
        let mut last = None;
        for category in Category::ALL {
            last = Some(play_category(&mut session, category, now));
        }
        match last.unwrap() {
            ChoiceOutcome::CategoryComplete { cycle_complete, .. } => assert!(cycle_complete),
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(session.cycle_complete());
        assert_eq!(session.completed_categories().len(), 4);
        assert!(session.points() > 0);
        for category in Category::ALL {
            let score = session.category_score(category).unwrap();
            assert!((0.0..=10.0).contains(&score));
        }
    }

    #[test]
    fn terminal_nodes_get_synthesized_options() {
        let config = GameConfig::privileged();
        let bonus = config.fallback_bar_bonus;
        let mut session = GameSession::with_catalog(config, stub_catalog());
        let now = at(1, 12);
        session.select_category(Category::Fans.name(), now).unwrap();

        let node = session.current_node().unwrap();
        assert_eq!(node.options.len(), 3);

        let fans_before = session.bars().fans;
        // First synthesized option always boosts the category's own bar.
        session.choose_option(0, now).unwrap();
        assert_eq!(session.bars().fans, fans_before + bonus as u8);

        // The synthesized successors are terminal too, so every later
        // step re-synthesizes and the category still reaches five steps.
        let outcome = loop {
            match session.choose_option(0, now).unwrap() {
                ChoiceOutcome::Advanced { .. } => continue,
                done => break done,
            }
        };
        assert!(matches!(outcome, ChoiceOutcome::CategoryComplete { .. }));
    }

    #[test]
    fn invalid_option_index_leaves_state_untouched() {
        let mut session = privileged_session();
        let now = at(1, 12);
        session.select_category(Category::Finance.name(), now).unwrap();
        let bars_before = *session.bars();
        let text_before = session.current_node().unwrap().text.clone();

        let err = session.choose_option(99, now).unwrap_err();
        assert!(matches!(err, CoreError::InvalidOptionIndex { index: 99, .. }));
        assert_eq!(*session.bars(), bars_before);
        assert_eq!(session.current_node().unwrap().text, text_before);
    }

    #[test]
    fn choosing_while_idle_is_rejected() {
        let mut session = privileged_session();
        let err = session.choose_option(0, at(1, 12)).unwrap_err();
        assert!(matches!(err, CoreError::NoActiveCategory));
    }

    #[test]
    fn unknown_category_name_is_rejected() {
        let mut session = privileged_session();
        let err = session.select_category("Stadyum", at(1, 12)).unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(_)));
    }

    #[test]
    fn completed_category_cannot_be_replayed_within_cycle() {
        let mut session = privileged_session();
        let now = at(1, 12);
        play_category(&mut session, Category::Finance, now);
        let err = session.select_category(Category::Finance.name(), now).unwrap_err();
        assert!(matches!(err, CoreError::CategoryAlreadyCompleted(_)));
    }

    #[test]
    fn prediction_is_computed_exactly_once() {
        let mut session = privileged_session();
        let now = at(1, 12);

        let err = session.complete_cycle(&FormReport::fallback()).unwrap_err();
        assert!(matches!(err, CoreError::CycleIncomplete { required: 4, .. }));

        play_full_cycle(&mut session, now);
        let first = session.complete_cycle(&FormReport::fallback()).unwrap();

        // A different form report does not change the stored prediction.
        let other_form = FormReport::from_matches(vec![], "Altay".to_string(), "test");
        let second = session.complete_cycle(&other_form).unwrap();
        assert_eq!(first, second);
        assert_eq!(session.prediction(), Some(first));
    }

    #[test]
    fn cooldown_blocks_selection_and_new_cycle() {
        let mut session = privileged_session();
        let completed_at = at(1, 12);
        play_full_cycle(&mut session, completed_at);

        let one_sec_short = completed_at + Duration::seconds(59);
        let err = session.select_category(Category::Finance.name(), one_sec_short).unwrap_err();
        assert!(matches!(err, CoreError::CycleLocked { remaining_secs: 1 }));
        let err = session.start_new_cycle(one_sec_short).unwrap_err();
        assert!(matches!(err, CoreError::CycleLocked { .. }));

        let unlocked = completed_at + Duration::seconds(60);
        session.start_new_cycle(unlocked).unwrap();
        assert!(!session.cycle_complete());
        assert!(session.completed_categories().is_empty());
    }

    #[test]
    fn bars_and_points_survive_a_new_cycle() {
        let mut session = privileged_session();
        let now = at(1, 12);
        play_full_cycle(&mut session, now);
        let bars = *session.bars();
        let points = session.points();
        assert!(points > 0);

        session.start_new_cycle(now + Duration::seconds(60)).unwrap();
        assert_eq!(*session.bars(), bars);
        assert_eq!(session.points(), points);
        assert_eq!(session.prediction(), None);
        assert!(!session.actual_score().is_played());
    }

    #[test]
    fn actual_score_updates_are_idempotent() {
        let mut session = privileged_session();
        let now = at(1, 12);
        play_full_cycle(&mut session, now);
        session.complete_cycle(&FormReport::fallback()).unwrap();

        assert!(session.apply_actual_score(2, 1, at(2, 10)));
        assert_eq!(session.last_score_update(), Some(at(2, 10)));

        // Same value: no change reported, timestamp still refreshed.
        assert!(!session.apply_actual_score(2, 1, at(2, 11)));
        assert_eq!(session.last_score_update(), Some(at(2, 11)));

        // Corrected value is a real change.
        assert!(session.apply_actual_score(3, 1, at(2, 12)));
    }

    #[test]
    fn exact_prediction_earns_the_bonus_once() {
        let mut session = privileged_session();
        let now = at(1, 12);
        play_full_cycle(&mut session, now);
        let prediction = session.complete_cycle(&FormReport::fallback()).unwrap();

        let before = session.points();
        session.apply_actual_score(prediction.own_goals, prediction.opponent_goals, at(2, 10));
        assert_eq!(session.points(), before + session.config.exact_score_bonus);
        assert_eq!(session.outcome(), Outcome::ExactMatch);

        // Re-publishing the same score does not pay again.
        session.apply_actual_score(prediction.own_goals, prediction.opponent_goals, at(2, 11));
        assert_eq!(session.points(), before + session.config.exact_score_bonus);
    }

    #[test]
    fn outcome_is_pending_without_prediction_or_score() {
        let mut session = privileged_session();
        assert_eq!(session.outcome(), Outcome::Pending);
        let now = at(1, 12);
        play_full_cycle(&mut session, now);
        session.complete_cycle(&FormReport::fallback()).unwrap();
        assert_eq!(session.outcome(), Outcome::Pending);
    }

    #[test]
    fn published_realism_score_bonus() {
        let mut session = privileged_session();
        let now = at(1, 12);
        play_category(&mut session, Category::Finance, now);
        let estimated = session.category_score(Category::Finance).unwrap();

        // Unscored category earns nothing.
        assert_eq!(session.check_published_score(Category::Fans.name(), 5.0).unwrap(), 0);

        let before = session.points();
        let bonus = session.check_published_score(Category::Finance.name(), estimated).unwrap();
        assert_eq!(bonus, session.config.exact_score_bonus);
        assert_eq!(session.points(), before + bonus);

        assert_eq!(session.check_published_score(Category::Finance.name(), estimated + 1.0).unwrap(), 0);
    }

    #[test]
    fn reset_returns_to_baseline() {
        let mut session = privileged_session();
        let now = at(1, 12);
        play_full_cycle(&mut session, now);
        session.reset();

        assert_eq!(*session.bars(), ProgressBars::uniform(10));
        assert_eq!(session.points(), 0);
        assert!(session.completed_categories().is_empty());
        assert_eq!(session.prediction(), None);
        assert!(session.replay_status(now + Duration::seconds(1)).allowed);
    }

    #[test]
    fn snapshot_round_trip() {
        let mut session = privileged_session();
        let now = at(1, 12);
        play_category(&mut session, Category::Finance, now);
        play_category(&mut session, Category::Sponsors, now);

        let snapshot = session.snapshot(now);
        let restored = GameSession::from_snapshot(GameConfig::privileged(), &snapshot).unwrap();

        assert_eq!(*restored.bars(), *session.bars());
        assert_eq!(restored.points(), session.points());
        assert_eq!(restored.completed_categories(), session.completed_categories());
        assert_eq!(
            restored.category_score(Category::Finance),
            session.category_score(Category::Finance)
        );
        assert!(restored.current_node().is_none());
    }

    #[test]
    fn weekly_score_uses_iso_weeks() {
        let mut session = privileged_session();
        play_full_cycle(&mut session, at(1, 12));
        let score = session.weekly_score(Utc.with_ymd_and_hms(2024, 12, 30, 0, 0, 0).unwrap());
        assert_eq!(score.iso_year, 2025);
        assert_eq!(score.week, 1);
        assert_eq!(score.points, session.points());
    }

    #[test]
    fn story_week_comes_from_the_catalog() {
        let session = GameSession::with_catalog(GameConfig::standard(), stub_catalog());
        assert_eq!(session.story_week(), 7);
    }
}
