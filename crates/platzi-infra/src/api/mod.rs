//! Upstream API adapters.

mod client;

pub use client::HttpMoviesApi;
