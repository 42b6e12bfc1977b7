//! Request-body extraction

use axum::async_trait;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Dispatches body deserialization on the request content type.
///
/// JSON bodies go through [`Json`], everything else through [`Form`], so each
/// content type has exactly one deserialization entry point. Unparseable
/// bodies surface as an invalid-argument response carrying the parse message.
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|err| Error::MalformedBody(err.body_text()))?;
            Ok(FormOrJson(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|err| Error::MalformedBody(err.body_text()))?;
            Ok(FormOrJson(value))
        }
    }
}
