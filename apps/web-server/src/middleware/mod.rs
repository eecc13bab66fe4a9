//! Middleware, extractors and error mapping.

pub mod auth;
pub mod error;
pub mod headers;
pub mod session;
