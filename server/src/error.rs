use rocket::{
    http::Status,
    response::{self, Responder},
    serde::json::{json, Json},
    Request,
};
use thiserror::Error;

/// Failure taxonomy of the gamification engine.
///
/// `Validation` and `NotFound` are final; `Storage` is transient and may be
/// retried by the caller with the same input. A retry after a write that
/// succeeded but whose acknowledgment was lost will double-apply points:
/// submissions carry no idempotency token.
#[derive(Error, Debug)]
pub enum GamificationError {
    #[error("invalid game result: {0}")]
    Validation(String),

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl GamificationError {
    pub fn status(&self) -> Status {
        match self {
            Self::Validation(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Storage(_) => Status::ServiceUnavailable,
        }
    }
}

impl<'r> Responder<'r, 'static> for GamificationError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::ServiceUnavailable {
            tracing::error!("storage failure while handling {}: {self:#}", request.uri());
        }

        let mut response = Json(json!({
            "success": false,
            "message": self.to_string(),
        }))
        .respond_to(request)?;
        response.set_status(status);
        Ok(response)
    }
}
