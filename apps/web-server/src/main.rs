//! # Platzi Video Web Server
//!
//! Server-side renders the Platzi Video pages and proxies sign-in,
//! sign-up and "my list" calls to the movies API.

use actix_web::middleware::Condition;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod render;
mod state;
mod telemetry;

#[cfg(test)]
mod testing;

use config::AppConfig;
use middleware::headers::security_headers;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        env = ?config.env,
        api_url = %config.api_url,
        "Starting Platzi Video web server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await?;
    let hardened = !config.env.is_development();

    HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(hardened, security_headers()))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
