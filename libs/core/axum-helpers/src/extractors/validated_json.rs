//! JSON extractor with validation through the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs `Validate::validate` on the decoded body.
///
/// Field errors are returned as 400 `VALIDATION_ERROR` with the
/// validator's per-field report in `details`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateAccount {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateAccount>) -> String {
///     payload.email
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
