//! "My list" proxy handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::state::AppState;

/// POST /user-movies
pub async fn create(
    state: web::Data<AppState>,
    session: Session,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let reply = state
        .api
        .create_user_movie(session.token.as_deref(), &body)
        .await?;

    if reply.status != 201 {
        return Err(AppError::BadImplementation {
            status: reply.status,
        });
    }

    Ok(HttpResponse::Created().json(reply.body))
}

/// DELETE /user-movies/{user_movie_id}
pub async fn delete(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_movie_id = path.into_inner();
    let reply = state
        .api
        .delete_user_movie(session.token.as_deref(), &user_movie_id)
        .await?;

    if !matches!(reply.status, 200 | 204) {
        return Err(AppError::BadImplementation {
            status: reply.status,
        });
    }

    Ok(HttpResponse::Created().json(reply.body))
}
