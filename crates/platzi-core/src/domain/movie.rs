use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content rating that places a movie in the "Trends" row.
pub const TRENDS_RATING: &str = "PG";

/// Content rating that places a movie in the "Originals" row.
pub const ORIGINALS_RATING: &str = "G";

/// Movie entity as served by the upstream API.
///
/// The upstream owns the schema; every field is kept verbatim so the
/// client receives exactly what the API returned. Only `id` and
/// `contentRating` carry meaning on this side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Movie(Map<String, Value>);

impl Movie {
    /// Whether the movie carries a usable id.
    ///
    /// Absent, `null`, `""`, `0` and `false` ids all count as undefined.
    pub fn has_id(&self) -> bool {
        match self.0.get("id") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Some(_) => true,
        }
    }

    /// The id as text, for matching against path parameters.
    pub fn id(&self) -> Option<String> {
        if !self.has_id() {
            return None;
        }
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn content_rating(&self) -> Option<&str> {
        self.0.get("contentRating").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Movie {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
