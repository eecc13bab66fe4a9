use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Movie, SessionUser};

/// Initial application state serialized into the page for hydration.
///
/// Assembled fresh for every request and never persisted. All five keys
/// are always present, even when the upstream fetch failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreloadedState {
    pub user: SessionUser,
    pub playing: Map<String, Value>,
    pub my_list: Vec<Movie>,
    pub trends: Vec<Movie>,
    pub originals: Vec<Movie>,
}

impl PreloadedState {
    /// The anonymous fallback state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_logged(&self) -> bool {
        self.user.is_logged()
    }

    /// Find a movie by id across every row of the state.
    pub fn find_movie(&self, id: &str) -> Option<&Movie> {
        self.my_list
            .iter()
            .chain(&self.trends)
            .chain(&self.originals)
            .find(|movie| movie.id().as_deref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_state_shape() {
        let json = serde_json::to_value(PreloadedState::empty()).unwrap();
        assert_eq!(
            json,
            json!({
                "user": {},
                "playing": {},
                "myList": [],
                "trends": [],
                "originals": []
            })
        );
    }

    #[test]
    fn test_find_movie_searches_all_rows() {
        let state = PreloadedState {
            originals: vec![serde_json::from_value(json!({ "id": "9", "title": "Hidden" })).unwrap()],
            ..PreloadedState::empty()
        };
        assert_eq!(state.find_movie("9").and_then(Movie::title), Some("Hidden"));
        assert!(state.find_movie("10").is_none());
    }
}
