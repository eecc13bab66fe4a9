//! Initial state assembly for server-side rendering.

use futures::future::try_join;
use serde_json::Map;

use crate::domain::{Movie, ORIGINALS_RATING, PreloadedState, SessionUser, TRENDS_RATING};
use crate::ports::MoviesApi;

/// Split the catalogue into the "Trends" and "Originals" rows.
///
/// Movies without a usable id are dropped from both rows. A movie matching
/// neither rating lands in neither.
pub fn partition(movies: &[Movie]) -> (Vec<Movie>, Vec<Movie>) {
    let row = |rating: &str| {
        movies
            .iter()
            .filter(|movie| movie.content_rating() == Some(rating) && movie.has_id())
            .cloned()
            .collect::<Vec<_>>()
    };
    (row(TRENDS_RATING), row(ORIGINALS_RATING))
}

/// Build the state a page is rendered and hydrated from.
///
/// Both upstream lists are fetched concurrently. If either fetch fails the
/// whole personalized state is discarded and the anonymous empty state is
/// returned instead; nothing from the successful call leaks through.
pub async fn initial_state(
    api: &dyn MoviesApi,
    token: Option<&str>,
    user: SessionUser,
) -> PreloadedState {
    let user_id = user.id.as_deref();
    let fetched = try_join(api.list_movies(token), api.list_user_movies(token, user_id)).await;

    match fetched {
        Ok((movies, my_list)) => {
            let (trends, originals) = partition(&movies);
            tracing::debug!(
                catalogue = movies.len(),
                my_list = my_list.len(),
                trends = trends.len(),
                originals = originals.len(),
                "Initial state assembled"
            );
            PreloadedState {
                user,
                playing: Map::new(),
                my_list,
                trends,
                originals,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Upstream fetch failed, rendering anonymous state");
            PreloadedState::empty()
        }
    }
}
