//! reqwest-based client for the upstream movies/auth API.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use platzi_core::domain::{Credentials, Movie, SignInReply};
use platzi_core::error::ApiError;
use platzi_core::ports::{MoviesApi, UpstreamReply};
use platzi_shared::{Envelope, SignInBody};

/// HTTP implementation of [`MoviesApi`].
///
/// One outbound call per operation. No retries and no timeout policy; a
/// failed call is reported to the caller as is.
#[derive(Clone)]
pub struct HttpMoviesApi {
    base_url: Url,
    client: Client,
}

impl HttpMoviesApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&str>,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "Upstream request");
        let builder = self.client.request(method, url);
        Ok(match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Keep the status and body of a successful call; an empty body is `null`.
async fn reply(response: Response) -> Result<UpstreamReply, ApiError> {
    let status = response.status().as_u16();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?
    };
    Ok(UpstreamReply::new(status, body))
}

#[async_trait]
impl MoviesApi for HttpMoviesApi {
    async fn list_movies(&self, token: Option<&str>) -> Result<Vec<Movie>, ApiError> {
        let request = self.request(Method::GET, &["api", "movies"], token)?;
        let envelope: Envelope<Vec<Movie>> = decode(send(request).await?).await?;
        Ok(envelope.into_data())
    }

    async fn list_user_movies(
        &self,
        token: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Vec<Movie>, ApiError> {
        let mut request = self.request(Method::GET, &["api", "movies"], token)?;
        if let Some(user_id) = user_id {
            request = request.query(&[("userId", user_id)]);
        }
        let envelope: Envelope<Vec<Movie>> = decode(send(request).await?).await?;
        Ok(envelope.into_data())
    }

    async fn create_user_movie(
        &self,
        token: Option<&str>,
        payload: &Value,
    ) -> Result<UpstreamReply, ApiError> {
        let request = self
            .request(Method::POST, &["api", "user-movies"], token)?
            .json(payload);
        reply(send(request).await?).await
    }

    async fn delete_user_movie(
        &self,
        token: Option<&str>,
        user_movie_id: &str,
    ) -> Result<UpstreamReply, ApiError> {
        let request = self.request(Method::DELETE, &["api", "user-movies", user_movie_id], token)?;
        reply(send(request).await?).await
    }

    async fn sign_up(&self, payload: &Value) -> Result<Value, ApiError> {
        let request = self
            .request(Method::POST, &["api", "auth", "sign-up"], None)?
            .json(payload);
        let envelope: Envelope<Value> = decode(send(request).await?).await?;
        Ok(envelope.into_data())
    }

    async fn sign_in(
        &self,
        credentials: &Credentials,
        api_key_token: Option<&str>,
    ) -> Result<SignInReply, ApiError> {
        let body = SignInBody {
            api_key_token: api_key_token.map(String::from),
        };
        let request = self
            .request(Method::POST, &["api", "auth", "sign-in"], None)?
            .basic_auth(&credentials.email, Some(&credentials.password))
            .json(&body);
        decode(send(request).await?).await
    }
}
