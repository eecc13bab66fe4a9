use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identity of the signed-in user as seen by the client.
///
/// Built from request cookies; absent fields are omitted from JSON so an
/// anonymous visitor serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SessionUser {
    pub fn is_logged(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Email/password pair presented at sign-in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Verified identity returned by an authentication strategy.
///
/// `user` holds every field the strategy produced besides the token, as
/// the upstream shaped them.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub token: String,
    pub user: Map<String, Value>,
}

impl Principal {
    /// Split into the opaque token and the client-visible user fields.
    pub fn into_parts(self) -> (String, Map<String, Value>) {
        (self.token, self.user)
    }
}

/// Payload of a successful upstream sign-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignInReply {
    pub token: String,
    #[serde(default)]
    pub user: Map<String, Value>,
}

impl From<SignInReply> for Principal {
    fn from(reply: SignInReply) -> Self {
        Self {
            token: reply.token,
            user: reply.user,
        }
    }
}
