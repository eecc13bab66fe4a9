//! Domain entities - the objects the front end hydrates from.

mod movie;
mod state;
mod user;

pub use movie::{Movie, ORIGINALS_RATING, TRENDS_RATING};
pub use state::PreloadedState;
pub use user::{Credentials, Principal, SessionUser, SignInReply};
