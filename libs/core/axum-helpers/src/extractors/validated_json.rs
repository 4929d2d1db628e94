//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Any body that cannot be deserialized (bad syntax, missing JSON content
/// type, wrong field types) is `422 JSON_EXTRACTION`. Failed `Validate`
/// rules become `422 VALIDATION_ERROR` with per-field details.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateOrder {
///     #[validate(length(min = 1))]
///     reference: String,
/// }
///
/// async fn create_order(ValidatedJson(payload): ValidatedJson<CreateOrder>) -> String {
///     payload.reference
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
