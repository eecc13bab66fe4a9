//! # Platzi Shared
//!
//! Wire types shared by the web server, the upstream API adapter and the
//! browser client: the upstream `{data}` envelope and the JSON error body.

pub mod dto;
pub mod response;

pub use dto::{Envelope, SignInBody};
pub use response::ErrorResponse;
