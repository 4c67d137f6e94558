//! Scoring module - keystroke rewards and miss penalties
//!
//! A correct keystroke is worth more the faster it follows the previous one:
//! - gap >= 1s: a flat 1 point
//! - gap < 1s: `100 * (1 - gap)` points, truncated
//!
//! A wrong letter while a word is selected costs 10 points, never going
//! below zero.

use crate::types::{MAX_KEYSTROKE_POINTS, MISS_PENALTY, SLOW_KEYSTROKE_POINTS};

/// Points for a correct keystroke typed `gap` seconds after the previous one.
pub fn keystroke_points(gap: f64) -> u32 {
    if gap >= 1.0 {
        return SLOW_KEYSTROKE_POINTS;
    }
    let gap = gap.max(0.0);
    (MAX_KEYSTROKE_POINTS as f64 * (1.0 - gap)) as u32
}

/// Score after a wrong keystroke.
pub fn apply_miss_penalty(score: u32) -> u32 {
    score.saturating_sub(MISS_PENALTY)
}
