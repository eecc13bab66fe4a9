//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod movies;

pub use auth::AuthStrategy;
pub use movies::{MoviesApi, UpstreamReply};
