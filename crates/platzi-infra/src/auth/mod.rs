//! Authentication strategies.

mod basic;

pub use basic::BasicAuthStrategy;
