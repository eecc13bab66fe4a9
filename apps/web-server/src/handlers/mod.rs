//! HTTP handlers and route configuration.

mod auth;
mod movies;
mod render;
mod user_movies;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .route("/auth/sign-in", web::post().to(auth::sign_in))
    .route("/auth/sign-up", web::post().to(auth::sign_up))
    .route("/movies", web::get().to(movies::list))
    .route("/user-movies", web::post().to(user_movies::create))
    .route(
        "/user-movies/{user_movie_id}",
        web::delete().to(user_movies::delete),
    )
    // Every other GET is a page.
    .route("/{tail:.*}", web::get().to(render::render_app));
}
