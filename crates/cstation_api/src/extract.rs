//! Extractors that reject with the structured error body.

use axum::extract::{FromRequest, Request};
use axum::Json;
use cstation_common::{validation_error, CStationError};
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejection is a 400 [`CStationError::ValidationError`].
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CStationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| validation_error(rejection.body_text()))?;
        Ok(Self(value))
    }
}
