use rocket::{
    fairing::AdHoc,
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod gamification;
pub mod types;

/// Caller identity forwarded by the upstream auth layer after it has
/// validated the bearer credential. Requests without it are rejected before
/// any handler runs.
pub struct AuthedUser(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthedUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.headers().get_one("x-user-id") {
            Some(user) if !user.trim().is_empty() => Outcome::Success(AuthedUser(user.to_string())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        gamification::submit_result,
        gamification::get_progress,
        gamification::get_badges,
        gamification::update_streak,
    ),
    components(schemas(
        types::GameResultPayload,
        types::ApplyResultResponse,
        types::BadgeResponse,
        types::BadgeStatusResponse,
        types::ProgressResponse,
        types::StreakResponse,
    ))
)]
struct ApiDoc;

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("Installing entrypoints", |rocket| async {
        rocket
            .mount(
                "/",
                SwaggerUi::new("/swagger-ui/<_..>")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .attach(gamification::stage())
    })
}
