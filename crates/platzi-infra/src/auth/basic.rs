//! Email/password strategy backed by the upstream sign-in endpoint.

use std::sync::Arc;

use async_trait::async_trait;

use platzi_core::domain::{Credentials, Principal};
use platzi_core::error::AuthError;
use platzi_core::ports::{AuthStrategy, MoviesApi};

/// Verifies credentials by presenting them to the upstream API.
pub struct BasicAuthStrategy {
    api: Arc<dyn MoviesApi>,
    api_key_token: Option<String>,
}

impl BasicAuthStrategy {
    pub fn new(api: Arc<dyn MoviesApi>, api_key_token: Option<String>) -> Self {
        Self { api, api_key_token }
    }
}

#[async_trait]
impl AuthStrategy for BasicAuthStrategy {
    async fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        if credentials.email.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let reply = match self
            .api
            .sign_in(credentials, self.api_key_token.as_deref())
            .await
        {
            Ok(reply) => reply,
            Err(err) if matches!(err.status(), Some(401 | 403)) => {
                tracing::debug!(email = %credentials.email, "Upstream rejected credentials");
                return Err(AuthError::InvalidCredentials);
            }
            Err(err) => return Err(err.into()),
        };

        // An upstream that answers without a token has not authenticated anyone.
        if reply.token.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(reply.into())
    }
}
