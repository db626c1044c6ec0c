use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Daily-activity streak counters. `advance` is the only mutation path and
/// takes the calendar day as input so callers own the clock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    pub current: u32,
    pub longest: u32,
    pub last_played: Option<NaiveDate>,
}

/// What a streak update did, keyed by the gap between `last_played` and
/// the supplied day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakAdvance {
    /// First recorded activity ever.
    Started,
    /// Already counted for this day; nothing changed.
    AlreadyCounted,
    /// Exactly one day after the previous activity.
    Extended,
    /// Gap of more than one day; the streak restarts at 1.
    Reset,
}

impl StreakData {
    pub fn advance(&mut self, today: NaiveDate) -> StreakAdvance {
        let outcome = match self.last_played {
            None => {
                self.current = 1;
                self.longest = self.longest.max(1);
                StreakAdvance::Started
            }
            Some(last) if last == today => return StreakAdvance::AlreadyCounted,
            Some(last) if today.checked_sub_days(Days::new(1)) == Some(last) => {
                self.current += 1;
                self.longest = self.longest.max(self.current);
                StreakAdvance::Extended
            }
            Some(_) => {
                self.current = 1;
                StreakAdvance::Reset
            }
        };

        self.last_played = Some(today);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn first_activity_starts_streak() {
        let mut streak = StreakData::default();

        assert_eq!(streak.advance(day(1)), StreakAdvance::Started);
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 1);
        assert_eq!(streak.last_played, Some(day(1)));
    }

    #[test]
    fn same_day_is_idempotent() {
        let mut streak = StreakData::default();
        streak.advance(day(1));
        let before = streak.clone();

        assert_eq!(streak.advance(day(1)), StreakAdvance::AlreadyCounted);
        assert_eq!(streak, before);
        assert_eq!(streak.advance(day(1)), StreakAdvance::AlreadyCounted);
        assert_eq!(streak, before);
    }

    #[test]
    fn consecutive_days_extend() {
        let mut streak = StreakData::default();
        streak.advance(day(1));

        assert_eq!(streak.advance(day(2)), StreakAdvance::Extended);
        assert_eq!(streak.advance(day(3)), StreakAdvance::Extended);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn gap_resets_current_but_keeps_longest() {
        let mut streak = StreakData::default();
        streak.advance(day(1));
        streak.advance(day(2));
        streak.advance(day(3));

        assert_eq!(streak.advance(day(10)), StreakAdvance::Reset);
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 3);
        assert_eq!(streak.last_played, Some(day(10)));

        assert_eq!(streak.advance(day(11)), StreakAdvance::Extended);
        assert_eq!(streak.current, 2);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn longest_tracks_high_water_mark() {
        let mut streak = StreakData::default();
        for d in 1..=5 {
            streak.advance(day(d));
        }
        streak.advance(day(20));
        for d in 21..=27 {
            streak.advance(day(d));
        }

        assert_eq!(streak.current, 8);
        assert_eq!(streak.longest, 8);
    }
}
