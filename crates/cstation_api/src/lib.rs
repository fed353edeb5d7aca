//! HTTP surface of the C-Station backend.
//!
//! Routers for `/auth`, `/user`, `/station` and `/review`, the shared
//! [`ApiState`], and request validation. The backend binary mounts
//! [`routes`] and adds the outer layers.

#[cfg(feature = "openapi")]
pub mod doc;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod validation;

pub use routes::routes;
pub use state::ApiState;
