//! Club-health progress bars and the option effects that mutate them.
//!
//! The four bars are a closed set. Effects are a fixed four-field record
//! of signed deltas rather than a string-keyed map, so a typo in authored
//! data cannot silently no-op an effect.

use serde::{Deserialize, Serialize};

pub const BAR_MIN: u8 = 0;
pub const BAR_MAX: u8 = 100;

/// One of the four club-health tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarKind {
    Finance,
    TechnicalTeam,
    Sponsors,
    Fans,
}

impl BarKind {
    pub const ALL: [BarKind; 4] =
        [BarKind::Finance, BarKind::TechnicalTeam, BarKind::Sponsors, BarKind::Fans];

    /// Turkish label shown next to the bar in the UI.
    pub fn label(self) -> &'static str {
        match self {
            BarKind::Finance => "Finans",
            BarKind::TechnicalTeam => "Teknik Ekip",
            BarKind::Sponsors => "Sponsorlar",
            BarKind::Fans => "Taraftarlar",
        }
    }
}

/// The four club-health counters, each held inside [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressBars {
    pub finance: u8,
    pub technical_team: u8,
    pub sponsors: u8,
    pub fans: u8,
}

impl ProgressBars {
    /// All four bars at the same level, capped at [`BAR_MAX`].
    pub fn uniform(level: u8) -> Self {
        let level = level.min(BAR_MAX);
        ProgressBars { finance: level, technical_team: level, sponsors: level, fans: level }
    }

    pub fn get(&self, kind: BarKind) -> u8 {
        match kind {
            BarKind::Finance => self.finance,
            BarKind::TechnicalTeam => self.technical_team,
            BarKind::Sponsors => self.sponsors,
            BarKind::Fans => self.fans,
        }
    }

    fn set(&mut self, kind: BarKind, value: u8) {
        let slot = match kind {
            BarKind::Finance => &mut self.finance,
            BarKind::TechnicalTeam => &mut self.technical_team,
            BarKind::Sponsors => &mut self.sponsors,
            BarKind::Fans => &mut self.fans,
        };
        *slot = value;
    }

    /// Applies a delta set, clamping every bar into [0, 100].
    pub fn apply(&mut self, effects: &Effects) {
        for kind in BarKind::ALL {
            let delta = effects.get(kind);
            if delta == 0 {
                continue;
            }
            let next = (self.get(kind) as i16 + delta).clamp(BAR_MIN as i16, BAR_MAX as i16);
            self.set(kind, next as u8);
        }
    }

    /// Arithmetic mean of the four bars, on the 0-100 scale.
    pub fn average(&self) -> f64 {
        (self.finance as f64 + self.technical_team as f64 + self.sponsors as f64 + self.fans as f64)
            / 4.0
    }
}

/// Signed bar deltas carried by a story option. Missing fields are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    pub finance: i16,
    pub technical_team: i16,
    pub sponsors: i16,
    pub fans: i16,
}

impl Effects {
    pub const NONE: Effects = Effects { finance: 0, technical_team: 0, sponsors: 0, fans: 0 };

    pub fn new() -> Self {
        Self::NONE
    }

    /// A delta on a single bar.
    pub fn on(kind: BarKind, delta: i16) -> Self {
        let mut effects = Self::NONE;
        match kind {
            BarKind::Finance => effects.finance = delta,
            BarKind::TechnicalTeam => effects.technical_team = delta,
            BarKind::Sponsors => effects.sponsors = delta,
            BarKind::Fans => effects.fans = delta,
        }
        effects
    }

    pub fn finance(mut self, delta: i16) -> Self {
        self.finance = delta;
        self
    }

    pub fn technical_team(mut self, delta: i16) -> Self {
        self.technical_team = delta;
        self
    }

    pub fn sponsors(mut self, delta: i16) -> Self {
        self.sponsors = delta;
        self
    }

    pub fn fans(mut self, delta: i16) -> Self {
        self.fans = delta;
        self
    }

    pub fn get(&self, kind: BarKind) -> i16 {
        match kind {
            BarKind::Finance => self.finance,
            BarKind::TechnicalTeam => self.technical_team,
            BarKind::Sponsors => self.sponsors,
            BarKind::Fans => self.fans,
        }
    }

    /// Summed delta across all bars, used by the UI to color options.
    pub fn total_impact(&self) -> i16 {
        self.finance + self.technical_team + self.sponsors + self.fans
    }
}
