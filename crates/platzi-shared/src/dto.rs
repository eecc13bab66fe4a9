//! Data Transfer Objects exchanged with the upstream API.

use serde::{Deserialize, Serialize};

/// Upstream response envelope: `{ "data": ..., "message": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Body of the upstream sign-in call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_token: Option<String>,
}
