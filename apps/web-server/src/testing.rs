//! In-memory fakes of the ports, for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};

use platzi_core::domain::{Credentials, Movie, Principal, SignInReply};
use platzi_core::error::{ApiError, AuthError};
use platzi_core::ports::{AuthStrategy, MoviesApi, UpstreamReply};

use crate::middleware::session::CookiePolicy;
use crate::render::{AssetPaths, Renderer};
use crate::state::AppState;

fn refused() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}

/// Upstream fake. `None` answers fail with a transport error.
#[derive(Default)]
pub struct FakeApi {
    pub movies: Option<Vec<Movie>>,
    pub user_movies: Option<Vec<Movie>>,
    pub create_reply: Option<UpstreamReply>,
    pub delete_reply: Option<UpstreamReply>,
    pub sign_up_reply: Option<Result<Value, u16>>,
    /// Every bearer token presented, in call order.
    pub tokens: Mutex<Vec<Option<String>>>,
}

impl FakeApi {
    fn saw(&self, token: Option<&str>) {
        self.tokens.lock().unwrap().push(token.map(String::from));
    }
}

#[async_trait]
impl MoviesApi for FakeApi {
    async fn list_movies(&self, token: Option<&str>) -> Result<Vec<Movie>, ApiError> {
        self.saw(token);
        self.movies.clone().ok_or_else(refused)
    }

    async fn list_user_movies(
        &self,
        token: Option<&str>,
        _user_id: Option<&str>,
    ) -> Result<Vec<Movie>, ApiError> {
        self.saw(token);
        self.user_movies.clone().ok_or_else(refused)
    }

    async fn create_user_movie(
        &self,
        token: Option<&str>,
        _payload: &Value,
    ) -> Result<UpstreamReply, ApiError> {
        self.saw(token);
        self.create_reply.clone().ok_or_else(refused)
    }

    async fn delete_user_movie(
        &self,
        token: Option<&str>,
        _user_movie_id: &str,
    ) -> Result<UpstreamReply, ApiError> {
        self.saw(token);
        self.delete_reply.clone().ok_or_else(refused)
    }

    async fn sign_up(&self, _payload: &Value) -> Result<Value, ApiError> {
        match self.sign_up_reply.clone() {
            Some(Ok(created)) => Ok(created),
            Some(Err(status)) => Err(ApiError::Status {
                status,
                body: "rejected".to_string(),
            }),
            None => Err(refused()),
        }
    }

    async fn sign_in(
        &self,
        _credentials: &Credentials,
        _api_key_token: Option<&str>,
    ) -> Result<SignInReply, ApiError> {
        Err(refused())
    }
}

/// Strategy fake: accepts exactly one email/password pair.
pub struct FakeAuth {
    pub accepts: Credentials,
    pub principal: Principal,
}

impl FakeAuth {
    /// Accepts `a@b.com` / `x` and yields token `abc` with the given user fields.
    pub fn accepting(user: Value) -> Self {
        let user = match user {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        Self {
            accepts: Credentials::new("a@b.com", "x"),
            principal: Principal {
                token: "abc".to_string(),
                user,
            },
        }
    }
}

#[async_trait]
impl AuthStrategy for FakeAuth {
    async fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        if *credentials == self.accepts {
            Ok(self.principal.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

pub fn cookie_policy() -> CookiePolicy {
    CookiePolicy {
        http_only: true,
        secure: true,
        domain: Some("platzivideo.com".to_string()),
    }
}

pub fn app_state(api: Arc<FakeApi>, auth: FakeAuth) -> AppState {
    app_state_with_renderer(api, auth, Renderer::new(AssetPaths::default()).unwrap())
}

pub fn app_state_with_renderer(api: Arc<FakeApi>, auth: FakeAuth, renderer: Renderer) -> AppState {
    AppState {
        api,
        auth: Arc::new(auth),
        renderer: Arc::new(renderer),
        cookies: cookie_policy(),
    }
}
