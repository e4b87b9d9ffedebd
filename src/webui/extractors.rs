use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use garde::Validate;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// `Json<T>` that also runs `garde` validation. Both failures become a 400.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate<Context = ()> + 'static,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = match Json::<T>::from_request(req, state).await {
            Ok(Json(payload)) => payload,
            Err(rejection) => return Err(ApiError::BadRequest(rejection.body_text())),
        };
        if let Err(report) = payload.validate() {
            return Err(ApiError::BadRequest(report.to_string()));
        }
        Ok(ValidJson(payload))
    }
}
