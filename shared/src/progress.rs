use serde::{Deserialize, Serialize};

use super::*;

/// Points required to advance one level.
pub const POINTS_PER_LEVEL: u32 = 100;

/// The level is a pure function of the point total and is only ever stored
/// as a cache of this formula.
pub const fn level_for_points(total_points: u32) -> u32 {
    total_points / POINTS_PER_LEVEL + 1
}

/// Per-user gamification record. Points, the games counter and the unlocked
/// badge set only ever grow; the level cache moves together with the points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: UserId,
    pub total_points: u32,
    pub level: u32,
    pub games_played: u32,
    pub unlocked_badges: Vec<BadgeId>,
    pub streak: StreakData,
}

impl UserProgress {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            total_points: 0,
            level: level_for_points(0),
            games_played: 0,
            unlocked_badges: Vec::new(),
            streak: StreakData::default(),
        }
    }

    /// Applies one accepted game result: the point delta, the games counter
    /// and the level cache move in a single step.
    pub fn record_game(&mut self, points: u32) {
        self.total_points += points;
        self.games_played += 1;
        self.level = level_for_points(self.total_points);
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.unlocked_badges.iter().any(|id| id == badge_id)
    }

    /// Adds a badge id to the owned set. Membership stays unique and badges
    /// are never removed.
    pub fn unlock(&mut self, badge_id: BadgeId) {
        if !self.has_badge(&badge_id) {
            self.unlocked_badges.push(badge_id);
        }
    }
}
