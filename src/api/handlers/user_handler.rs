//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::USER_ADDED_MESSAGE;
use crate::domain::UserDocument;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/add_user", post(add_user))
        .route("/get_users", get(get_users))
}

/// Add a user
///
/// Any fields beyond `name` and `email` are stored as sent.
#[utoipa::path(
    post,
    path = "/add_user",
    tag = "Users",
    request_body = crate::domain::CreateUser,
    responses(
        (status = 201, description = "User added", body = MessageResponse),
        (status = 400, description = "Missing fields or malformed body", body = crate::errors::ErrorResponse),
        (status = 500, description = "Store unavailable", body = crate::errors::ErrorResponse)
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<UserDocument>,
) -> AppResult<Created<MessageResponse>> {
    state.user_service.create_user(user).await?;

    Ok(Created(MessageResponse::new(USER_ADDED_MESSAGE)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/get_users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user, without the store id", body = [crate::domain::CreateUser]),
        (status = 500, description = "Store unavailable", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserDocument>>> {
    let users = state.user_service.list_users().await?;
    tracing::debug!(count = users.len(), "Listed users");

    Ok(Json(users))
}
