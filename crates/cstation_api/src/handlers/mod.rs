//! HTTP handlers, one module per resource.

use cstation_auth::{Caller, Identity};
use cstation_common::{unauthorized, CStationError};
use cstation_db::UserRepository;
use serde::Serialize;

use crate::state::ApiState;

pub mod auth;
pub mod reviews;
pub mod stations;
pub mod users;

/// Acknowledgement body for deletes.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeletedResponse {
    pub deleted: i64,
}

/// Same-user check for routes that address a user by username.
pub(crate) async fn require_same_username(
    state: &ApiState,
    caller: &Caller,
    username: &str,
) -> Result<(), CStationError> {
    let identity = caller.require_same_user(username)?;
    require_current_account(state, identity).await
}

/// Same-user check for routes that address a user by surrogate id.
///
/// Unknown ids are reported as unauthorized, not as missing.
pub(crate) async fn require_same_user_id(
    state: &ApiState,
    caller: &Caller,
    user_id: i64,
) -> Result<(), CStationError> {
    caller.require_logged_in()?;
    let username = state
        .users
        .username_for_id(user_id)
        .await?
        .ok_or_else(|| unauthorized("Not authorized for this user"))?;
    require_same_username(state, caller, &username).await
}

/// The token's account must still exist under the username it names.
async fn require_current_account(state: &ApiState, identity: &Identity) -> Result<(), CStationError> {
    match state.users.username_for_id(identity.user_id).await? {
        Some(username) if username == identity.username => Ok(()),
        _ => Err(unauthorized("Token no longer matches an account")),
    }
}
