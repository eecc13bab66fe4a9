//! Basic credentials extractor for the sign-in endpoint.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::future::{Ready, ready};

use platzi_core::domain::Credentials;
use platzi_core::error::AuthError;

use crate::middleware::error::AppError;

/// Credentials taken from an `Authorization: Basic base64(email:password)`
/// header.
///
/// ```ignore
/// async fn sign_in(credentials: BasicCredentials) -> impl Responder {
///     format!("Hello, {}!", credentials.0.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BasicCredentials(pub Credentials);

impl BasicCredentials {
    /// Parse the value of an `Authorization` header.
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        let encoded = value
            .strip_prefix("Basic ")
            .or_else(|| value.strip_prefix("basic "))
            .ok_or_else(|| AuthError::MalformedCredentials("Expected Basic scheme".to_string()))?;

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|_| AuthError::MalformedCredentials("Credentials are not UTF-8".to_string()))?;

        let (email, password) = decoded
            .split_once(':')
            .ok_or_else(|| AuthError::MalformedCredentials("Missing ':' separator".to_string()))?;

        Ok(Self(Credentials::new(email, password)))
    }
}

impl FromRequest for BasicCredentials {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)
            .and_then(|value| {
                value.to_str().map_err(|_| {
                    AuthError::MalformedCredentials("Invalid authorization header".to_string())
                })
            })
            .and_then(BasicCredentials::parse);

        ready(result.map_err(AppError::from))
    }
}
