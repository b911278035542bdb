//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::domain::Validate;
use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Rejections keep axum's status: `415` without a JSON content type, `400`
/// for a syntax error, `422` for a body that is not a JSON object.
///
/// # Example
///
/// ```rust,ignore
/// use user_api::api::extractors::ValidatedJson;
/// use user_api::domain::UserDocument;
///
/// async fn add_user(ValidatedJson(user): ValidatedJson<UserDocument>) {
///     // name and email are present and non-empty
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
