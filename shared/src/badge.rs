use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::*;

pub type BadgeId = String;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Unlock thresholds for one badge. A badge unlocks as soon as any present
/// field is satisfied by the updated progress snapshot; a block with no
/// fields set never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_played: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    pub perfect_score: bool,
}

impl BadgeCriteria {
    pub fn is_met(&self, progress: &UserProgress, perfect_score: bool) -> bool {
        if let Some(games) = self.games_played {
            if progress.games_played >= games {
                return true;
            }
        }
        if let Some(points) = self.total_points {
            if progress.total_points >= points {
                return true;
            }
        }
        if let Some(level) = self.level {
            if progress.level >= level {
                return true;
            }
        }
        self.perfect_score && perfect_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    pub criteria: BadgeCriteria,
}

/// Immutable badge rule set, constructed once at startup and injected into
/// the ledger. Declaration order is display order and is preserved by the
/// evaluator.
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<BadgeDefinition>) -> Self {
        Self { badges }
    }

    pub fn badges(&self) -> &[BadgeDefinition] {
        &self.badges
    }

    /// Returns the catalog entries newly earned by `progress`, in catalog
    /// order. Entries already owned are skipped regardless of how well
    /// their criteria are satisfied. Pure: identical inputs always produce
    /// identical output.
    pub fn newly_unlocked(
        &self,
        progress: &UserProgress,
        perfect_score: bool,
    ) -> Vec<BadgeDefinition> {
        self.badges
            .iter()
            .filter(|badge| !progress.has_badge(&badge.id))
            .filter(|badge| badge.criteria.is_met(progress, perfect_score))
            .cloned()
            .collect()
    }

    /// The badge set shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![
            def(
                "first_steps",
                "First Steps",
                "Complete your first game",
                "🎯",
                Rarity::Common,
                BadgeCriteria {
                    games_played: Some(1),
                    ..Default::default()
                },
            ),
            def(
                "perfect_score",
                "Perfect Score",
                "Get 100% accuracy in a game",
                "💯",
                Rarity::Rare,
                BadgeCriteria {
                    perfect_score: true,
                    ..Default::default()
                },
            ),
            def(
                "quick_learner",
                "Quick Learner",
                "Play 5 games",
                "⚡",
                Rarity::Common,
                BadgeCriteria {
                    games_played: Some(5),
                    ..Default::default()
                },
            ),
            def(
                "dedicated",
                "Dedicated Player",
                "Play 10 games",
                "🔥",
                Rarity::Rare,
                BadgeCriteria {
                    games_played: Some(10),
                    ..Default::default()
                },
            ),
            def(
                "point_collector",
                "Point Collector",
                "Earn 500 total points",
                "💎",
                Rarity::Epic,
                BadgeCriteria {
                    total_points: Some(500),
                    ..Default::default()
                },
            ),
            def(
                "nutrition_master",
                "Nutrition Master",
                "Earn 1000 total points",
                "👑",
                Rarity::Legendary,
                BadgeCriteria {
                    total_points: Some(1000),
                    ..Default::default()
                },
            ),
            def(
                "level_up",
                "Level Up",
                "Reach Level 5",
                "⭐",
                Rarity::Epic,
                BadgeCriteria {
                    level: Some(5),
                    ..Default::default()
                },
            ),
        ])
    }
}

fn def(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    rarity: Rarity,
    criteria: BadgeCriteria,
) -> BadgeDefinition {
    BadgeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        rarity,
        criteria,
    }
}
