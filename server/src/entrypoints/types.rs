use chrono::NaiveDate;
use nutri_play_server::ledger::{BadgeStatus, ProgressSnapshot, UpdatedProgress};
use serde::{Deserialize, Serialize};
use shared::{BadgeDefinition, GameResult, StreakData};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct GameResultPayload {
    pub game_id: String,
    pub points: i64,
    #[serde(default)]
    pub perfect_score: bool,
}

impl From<GameResultPayload> for GameResult {
    fn from(payload: GameResultPayload) -> Self {
        GameResult::new(payload.game_id, payload.points, payload.perfect_score)
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct BadgeResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: String,
}

impl From<BadgeDefinition> for BadgeResponse {
    fn from(definition: BadgeDefinition) -> Self {
        Self {
            id: definition.id,
            name: definition.name,
            description: definition.description,
            icon: definition.icon,
            rarity: definition.rarity.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ApplyResultResponse {
    pub total_points: u32,
    pub level: u32,
    pub games_played: u32,
    pub new_badges: Vec<BadgeResponse>,
}

impl From<UpdatedProgress> for ApplyResultResponse {
    fn from(updated: UpdatedProgress) -> Self {
        Self {
            total_points: updated.total_points,
            level: updated.level,
            games_played: updated.games_played,
            new_badges: updated.new_badges.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct BadgeStatusResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: String,
    pub is_unlocked: bool,
}

impl From<BadgeStatus> for BadgeStatusResponse {
    fn from(status: BadgeStatus) -> Self {
        let badge = BadgeResponse::from(status.definition);
        Self {
            id: badge.id,
            name: badge.name,
            description: badge.description,
            icon: badge.icon,
            rarity: badge.rarity,
            is_unlocked: status.is_unlocked,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct StreakResponse {
    pub current: u32,
    pub longest: u32,
    pub last_played: Option<NaiveDate>,
}

impl From<StreakData> for StreakResponse {
    fn from(streak: StreakData) -> Self {
        Self {
            current: streak.current,
            longest: streak.longest,
            last_played: streak.last_played,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ProgressResponse {
    pub total_points: u32,
    pub level: u32,
    pub games_played: u32,
    pub streak: StreakResponse,
}

impl From<ProgressSnapshot> for ProgressResponse {
    fn from(snapshot: ProgressSnapshot) -> Self {
        Self {
            total_points: snapshot.total_points,
            level: snapshot.level,
            games_played: snapshot.games_played,
            streak: snapshot.streak.into(),
        }
    }
}
