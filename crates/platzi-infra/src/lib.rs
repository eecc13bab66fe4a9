//! # Platzi Infrastructure
//!
//! Concrete implementations of the ports defined in `platzi-core`:
//! the HTTP client for the upstream movies/auth API and the
//! credential-checking strategy built on top of it.

pub mod api;
pub mod auth;

pub use api::HttpMoviesApi;
pub use auth::BasicAuthStrategy;
