//! JSON body extractor
//!
//! Wraps `axum::Json` so that every rejection uses the API's error body.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// JSON body extractor
///
/// Every JSON rejection (syntax, shape, content type, unreadable body)
/// becomes `ApiError::InvalidBody`. Field-level checks are left to the
/// service so that a missing field is reported before any length cap.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
