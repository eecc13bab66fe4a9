//! Cookie-backed session identity.

use actix_web::cookie::Cookie;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use platzi_core::domain::SessionUser;

use crate::config::AppConfig;

/// Name of the cookie carrying the upstream bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Identity read from the `token`, `id`, `email` and `name` cookies.
///
/// There is no server-side session store. A missing cookie is not an
/// error; it just leaves the field unset.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: SessionUser,
}

impl Session {
    fn from_cookies(req: &HttpRequest) -> Self {
        let cookie = |name: &str| {
            req.cookie(name)
                .map(|c| c.value().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            token: cookie(TOKEN_COOKIE),
            user: SessionUser {
                id: cookie("id"),
                email: cookie("email"),
                name: cookie("name"),
            },
        }
    }
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Session::from_cookies(req)))
    }
}

/// Attributes of the `token` cookie issued at sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePolicy {
    pub http_only: bool,
    pub secure: bool,
    pub domain: Option<String>,
}

impl CookiePolicy {
    /// Cookies are locked down everywhere except development.
    pub fn from_config(config: &AppConfig) -> Self {
        let locked = !config.env.is_development();
        Self {
            http_only: locked,
            secure: locked,
            domain: config.cookie_domain.clone(),
        }
    }

    pub fn token_cookie(&self, token: String) -> Cookie<'static> {
        let mut builder = Cookie::build(TOKEN_COOKIE, token)
            .path("/")
            .http_only(self.http_only)
            .secure(self.secure);
        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }
        builder.finish()
    }
}
