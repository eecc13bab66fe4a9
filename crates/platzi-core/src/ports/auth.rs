//! Authentication ports.

use async_trait::async_trait;

use crate::domain::{Credentials, Principal};
use crate::error::AuthError;

/// Pluggable credential verification.
///
/// A strategy turns presented credentials into a [`Principal`] carrying the
/// opaque upstream token. Handlers only see this trait, so new strategies
/// plug in without touching them.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Verify credentials and return the authenticated principal.
    async fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError>;
}
