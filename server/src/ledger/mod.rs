use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use rocket::tokio::sync::Mutex;
use shared::{
    BadgeCatalog, BadgeDefinition, GameResult, StreakAdvance, StreakData, UserProgress,
};
use tracing::{info, instrument};

use crate::db::ProgressStore;
use crate::error::GamificationError;


/// What to do when an operation references a user without a progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingUserPolicy {
    /// Start a zeroed record on first contact.
    #[default]
    CreateOnFirstResult,
    /// Reject with `NotFound`; accounts are provisioned elsewhere.
    RequireExisting,
}

/// Totals returned to the caller after a game result lands, plus the badges
/// that unlocked on exactly this submission.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedProgress {
    pub total_points: u32,
    pub level: u32,
    pub games_played: u32,
    pub new_badges: Vec<BadgeDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub total_points: u32,
    pub level: u32,
    pub games_played: u32,
    pub streak: StreakData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStatus {
    pub definition: BadgeDefinition,
    pub is_unlocked: bool,
}

/// The single authoritative mutator of per-user progress records.
///
/// Updates for one user are serialized through a per-user async lock, so two
/// concurrent submissions both land instead of overwriting each other.
/// Updates for different users proceed in parallel. Identical resubmissions
/// are not deduplicated and double-count.
pub struct Ledger<S> {
    store: S,
    catalog: Arc<BadgeCatalog>,
    policy: MissingUserPolicy,
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: ProgressStore> Ledger<S> {
    pub fn new(store: S, catalog: Arc<BadgeCatalog>, policy: MissingUserPolicy) -> Self {
        Self {
            store,
            catalog,
            policy,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    /// Applies one game result: point/counter/level delta, badge evaluation
    /// against the updated snapshot, then a single durable write. Any
    /// failure leaves the stored record untouched.
    #[instrument(skip(self, result), fields(game = %result.game_id))]
    pub async fn apply_game_result(
        &self,
        user_id: &str,
        result: &GameResult,
    ) -> Result<UpdatedProgress, GamificationError> {
        let points = validate(result)?;

        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        let mut progress = self.load_for(user_id).await?;
        progress.record_game(points);

        let new_badges = self.catalog.newly_unlocked(&progress, result.perfect_score);
        for badge in &new_badges {
            progress.unlock(badge.id.clone());
        }

        self.store.save(&progress).await?;

        if !new_badges.is_empty() {
            info!(
                "{user_id} unlocked {} badge(s) on {}",
                new_badges.len(),
                result.game_id
            );
        }

        Ok(UpdatedProgress {
            total_points: progress.total_points,
            level: progress.level,
            games_played: progress.games_played,
            new_badges,
        })
    }

    /// Counts today towards the daily streak. Calling it twice on one
    /// calendar day is a no-op that skips the write entirely.
    pub async fn update_daily_streak(
        &self,
        user_id: &str,
    ) -> Result<StreakData, GamificationError> {
        self.update_streak_on(user_id, Local::now().date_naive())
            .await
    }

    async fn update_streak_on(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<StreakData, GamificationError> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        let mut progress = self.load_for(user_id).await?;
        if progress.streak.advance(today) != StreakAdvance::AlreadyCounted {
            self.store.save(&progress).await?;
        }

        Ok(progress.streak)
    }

    pub async fn get_progress_snapshot(
        &self,
        user_id: &str,
    ) -> Result<ProgressSnapshot, GamificationError> {
        let progress = self.load_for(user_id).await?;

        Ok(ProgressSnapshot {
            total_points: progress.total_points,
            level: progress.level,
            games_played: progress.games_played,
            streak: progress.streak,
        })
    }

    /// Catalog-order projection of every badge with its unlock flag.
    pub async fn get_badge_status(
        &self,
        user_id: &str,
    ) -> Result<Vec<BadgeStatus>, GamificationError> {
        let progress = self.load_for(user_id).await?;

        Ok(self
            .catalog
            .badges()
            .iter()
            .map(|definition| BadgeStatus {
                is_unlocked: progress.has_badge(&definition.id),
                definition: definition.clone(),
            })
            .collect())
    }

    /// Loads the user's record, or a zeroed one under the lazy-create
    /// policy. Nothing is persisted until a mutation lands.
    async fn load_for(&self, user_id: &str) -> Result<UserProgress, GamificationError> {
        match self.store.load(user_id).await? {
            Some(progress) => Ok(progress),
            None => match self.policy {
                MissingUserPolicy::CreateOnFirstResult => {
                    Ok(UserProgress::new(user_id.to_string()))
                }
                MissingUserPolicy::RequireExisting => {
                    Err(GamificationError::NotFound(user_id.to_string()))
                }
            },
        }
    }

    async fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.user_locks
            .lock()
            .await
            .entry(user_id.to_string())
            .or_default()
            .clone()
    }
}

fn validate(result: &GameResult) -> Result<u32, GamificationError> {
    if result.game_id.trim().is_empty() {
        return Err(GamificationError::Validation(
            "game id must not be empty".to_string(),
        ));
    }

    u32::try_from(result.points).map_err(|_| {
        GamificationError::Validation(format!(
            "points must be a non-negative integer, got {}",
            result.points
        ))
    })
}
