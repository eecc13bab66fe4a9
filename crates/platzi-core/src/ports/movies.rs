//! Upstream movies/auth API port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Credentials, Movie, SignInReply};
use crate::error::ApiError;

/// Raw upstream answer for calls whose status the caller must judge.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

impl UpstreamReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

/// The external movie/auth service.
///
/// `token` is forwarded as a bearer token when present. List and sign-up
/// calls unwrap the upstream `{data}` envelope; create/delete hand back the
/// status and body untouched.
#[async_trait]
pub trait MoviesApi: Send + Sync {
    /// Full catalogue.
    async fn list_movies(&self, token: Option<&str>) -> Result<Vec<Movie>, ApiError>;

    /// Movies on a user's list.
    async fn list_user_movies(
        &self,
        token: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Vec<Movie>, ApiError>;

    /// Add a movie to a user's list.
    async fn create_user_movie(
        &self,
        token: Option<&str>,
        payload: &Value,
    ) -> Result<UpstreamReply, ApiError>;

    /// Remove an entry from a user's list.
    async fn delete_user_movie(
        &self,
        token: Option<&str>,
        user_movie_id: &str,
    ) -> Result<UpstreamReply, ApiError>;

    /// Register a new user; returns the created user.
    async fn sign_up(&self, payload: &Value) -> Result<Value, ApiError>;

    /// Check credentials upstream.
    async fn sign_in(
        &self,
        credentials: &Credentials,
        api_key_token: Option<&str>,
    ) -> Result<SignInReply, ApiError>;
}
