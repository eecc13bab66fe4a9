//! # Platzi Core
//!
//! The domain layer of the Platzi Video front end.
//! This crate holds the hydration state model, the ports the server talks
//! through, and the logic that assembles a request's initial state.
//! It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::{ApiError, AuthError};
pub use store::initial_state;
