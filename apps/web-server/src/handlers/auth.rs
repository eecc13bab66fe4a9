//! Authentication handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::middleware::auth::BasicCredentials;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /auth/sign-in
///
/// The token goes into a cookie; the body carries only the user fields.
pub async fn sign_in(
    state: web::Data<AppState>,
    credentials: BasicCredentials,
) -> AppResult<HttpResponse> {
    let BasicCredentials(credentials) = credentials;
    let principal = state.auth.verify(&credentials).await?;
    let (token, user) = principal.into_parts();

    tracing::info!(user_id = ?user.get("id"), "User signed in");

    Ok(HttpResponse::Ok()
        .cookie(state.cookies.token_cookie(token))
        .json(user))
}

/// POST /auth/sign-up
pub async fn sign_up(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let created = state.api.sign_up(&body).await?;
    Ok(HttpResponse::Created().json(created))
}
