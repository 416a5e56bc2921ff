//! Replay gating between completed cycles.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Whether a new cycle may start, and how long is left if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayGate {
    pub allowed: bool,
    /// Remaining wait. Zero when `allowed`.
    pub remaining_secs: i64,
}

impl ReplayGate {
    pub fn open() -> Self {
        ReplayGate { allowed: true, remaining_secs: 0 }
    }
}

/// Evaluates the cooldown against the last cycle completion time.
/// A session that never completed a cycle is always allowed to play.
pub fn replay_gate(
    now: DateTime<Utc>,
    last_completion: Option<DateTime<Utc>>,
    cooldown: Duration,
) -> ReplayGate {
    let completed_at = match last_completion {
        Some(t) => t,
        None => return ReplayGate::open(),
    };
    let unlock_at = completed_at + cooldown;
    if now >= unlock_at {
        ReplayGate::open()
    } else {
        let remaining = unlock_at - now;
        ReplayGate { allowed: false, remaining_secs: remaining.num_seconds().max(1) }
    }
}

/// ISO 8601 week number for bucketing weekly scores.
pub fn iso_week_number(date: DateTime<Utc>) -> u32 {
    date.iso_week().week()
}

/// ISO week-based year; differs from the calendar year around new year.
pub fn iso_week_year(date: DateTime<Utc>) -> i32 {
    date.iso_week().year()
}
