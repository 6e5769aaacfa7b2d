use chrono::{
    DateTime,
    Duration,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::models::WordStatus;

pub const DEFAULT_EASE: f32 = 2.5;
pub const MIN_EASE: f32 = 1.3;
pub const MAX_EASE: f32 = 3.0;
pub const EASE_REWARD: f32 = 0.1;
pub const EASE_PENALTY: f32 = 0.2;

// Second successful review jumps straight to three days instead of
// multiplying by ease.
const GRADUATE_INTERVAL: i64 = 3;

const MASTERED_STREAK: u32 = 5;
const MASTERED_INTERVAL: i64 = 14;
const REVIEWING_STREAK: u32 = 2;

/// Retention state for one word. Owned by the caller's store; this module
/// only ever computes the next state from the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrsState {
    pub last_review_at: Option<DateTime<Utc>>,
    pub next_review_at: Option<DateTime<Utc>>,
    pub ease: f32,
    pub interval_days: i64,
    pub streak: u32,
    pub lapses: u32,
}

impl Default for SrsState {
    fn default() -> Self {
        Self {
            last_review_at: None,
            next_review_at: None,
            ease: DEFAULT_EASE,
            interval_days: 1,
            streak: 0,
            lapses: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SrsUpdate {
    pub state: SrsState,
    pub status: WordStatus,
}

/// Pure state transition for one review event. A missing previous state is
/// treated as a fresh word rather than an error, so an unreadable row never
/// blocks a review.
pub fn next_state(previous: Option<&SrsState>, passed: bool, now: DateTime<Utc>) -> SrsUpdate {
    let fresh = SrsState::default();
    let state = previous.unwrap_or(&fresh);

    let mut ease = state.ease;
    let mut interval = state.interval_days;
    let mut streak = state.streak;
    let mut lapses = state.lapses;

    if passed {
        interval = match streak {
            0 => 1,
            1 => GRADUATE_INTERVAL,
            _ => ((interval as f32 * ease).round() as i64).max(1),
        };
        ease = round2(ease + EASE_REWARD).min(MAX_EASE);
        streak += 1;
    } else {
        interval = 1;
        ease = round2(ease - EASE_PENALTY).max(MIN_EASE);
        streak = 0;
        lapses += 1;
    }

    let status = derive_status(streak, interval, passed);

    SrsUpdate {
        state: SrsState {
            last_review_at: Some(now),
            next_review_at: Some(now + Duration::days(interval)),
            ease,
            interval_days: interval,
            streak,
            lapses,
        },
        status,
    }
}

pub fn derive_status(streak: u32, interval_days: i64, passed: bool) -> WordStatus {
    if !passed {
        return WordStatus::Learning;
    }
    if streak >= MASTERED_STREAK && interval_days >= MASTERED_INTERVAL {
        return WordStatus::Mastered;
    }
    if streak >= REVIEWING_STREAK {
        return WordStatus::Reviewing;
    }
    WordStatus::Learning
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
