use nutri_play_server::{error::GamificationError, AppLedger};
use rocket::{fairing::AdHoc, serde::json::Json, State};

use super::types::{
    ApplyResultResponse, BadgeStatusResponse, GameResultPayload, ProgressResponse, StreakResponse,
};
use super::AuthedUser;

#[utoipa::path(context_path = "/api/gamification", responses(
    (status = 200, description = "Apply a finished game result and report newly unlocked badges", body = ApplyResultResponse),
    (status = 400, description = "Rejected submission; no counters moved"),
))]
#[post("/points", data = "<payload>")]
pub(super) async fn submit_result(
    caller: AuthedUser,
    payload: Json<GameResultPayload>,
    ledger: &State<AppLedger>,
) -> Result<Json<ApplyResultResponse>, GamificationError> {
    let result = payload.into_inner().into();
    let updated = ledger.apply_game_result(&caller.0, &result).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(context_path = "/api/gamification", responses(
    (status = 200, description = "Progress snapshot including the daily streak", body = ProgressResponse)
))]
#[get("/progress/<username>")]
pub(super) async fn get_progress(
    username: &str,
    ledger: &State<AppLedger>,
) -> Result<Json<ProgressResponse>, GamificationError> {
    let snapshot = ledger.get_progress_snapshot(username).await?;
    Ok(Json(snapshot.into()))
}

#[utoipa::path(context_path = "/api/gamification", responses(
    (status = 200, description = "Every badge in catalog order with its unlock flag", body = [BadgeStatusResponse])
))]
#[get("/badges/<username>")]
pub(super) async fn get_badges(
    username: &str,
    ledger: &State<AppLedger>,
) -> Result<Json<Vec<BadgeStatusResponse>>, GamificationError> {
    let statuses = ledger.get_badge_status(username).await?;
    Ok(Json(statuses.into_iter().map(Into::into).collect()))
}

#[utoipa::path(context_path = "/api/gamification", responses(
    (status = 200, description = "Count today towards the caller's daily streak", body = StreakResponse)
))]
#[post("/streak")]
pub(super) async fn update_streak(
    caller: AuthedUser,
    ledger: &State<AppLedger>,
) -> Result<Json<StreakResponse>, GamificationError> {
    let streak = ledger.update_daily_streak(&caller.0).await?;
    Ok(Json(streak.into()))
}

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("Installing gamification entrypoints", |rocket| async {
        rocket.mount(
            "/api/gamification",
            routes![submit_result, get_progress, get_badges, update_streak],
        )
    })
}
