//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use platzi_core::ports::{AuthStrategy, MoviesApi};
use platzi_infra::{BasicAuthStrategy, HttpMoviesApi};

use crate::config::AppConfig;
use crate::middleware::session::CookiePolicy;
use crate::render::{AssetPaths, Manifest, Renderer};

/// Shared application state.
///
/// Built once at startup. Requests only read from it; each request's
/// hydration state is its own.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn MoviesApi>,
    pub auth: Arc<dyn AuthStrategy>,
    pub renderer: Arc<Renderer>,
    pub cookies: CookiePolicy,
}

impl AppState {
    /// Build the application state from configuration.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let api: Arc<dyn MoviesApi> = Arc::new(
            HttpMoviesApi::new(&config.api_url).context("API_URL is not a usable base URL")?,
        );
        let auth = Arc::new(BasicAuthStrategy::new(
            api.clone(),
            config.api_key_token.clone(),
        ));

        let assets = AssetPaths::resolve(load_manifest(config).await.as_ref());
        let renderer = Renderer::new(assets).context("Failed to compile page templates")?;
        tracing::info!(assets = ?renderer.assets(), "Page templates compiled");

        tracing::info!("Application state initialized");

        Ok(Self {
            api,
            auth,
            renderer: Arc::new(renderer),
            cookies: CookiePolicy::from_config(config),
        })
    }
}

/// The manifest is only read in production. A missing or broken file
/// degrades to the unhashed asset paths.
async fn load_manifest(config: &AppConfig) -> Option<Manifest> {
    if config.env.is_development() {
        tracing::info!("Development mode - serving unhashed asset paths");
        return None;
    }

    match Manifest::load(&config.manifest_path).await {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            tracing::warn!(
                path = %config.manifest_path.display(),
                "Asset manifest unavailable: {}. Using default asset paths.",
                e
            );
            None
        }
    }
}
