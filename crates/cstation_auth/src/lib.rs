//! Identity and authorization for the C-Station backend.
//!
//! [`TokenService`] issues and verifies signed identity claims.
//! [`middleware::authenticate`] runs in front of every route and attaches the
//! verified [`Identity`] to the request, or nothing when the token is missing
//! or bad. Handlers take a [`Caller`] and decide with
//! [`Caller::require_logged_in`] or [`Caller::require_same_user`].

pub mod error;
pub mod identity;
pub mod middleware;
pub mod tokens;

pub use error::AuthError;
pub use identity::{Caller, Identity};
pub use middleware::authenticate;
pub use tokens::{Claims, TokenService, DEV_SECRET_KEY};
