//! JSON request body extractor.
//!
//! A request without a body decodes as the payload type's default, so a
//! bare `POST /todos` fails description validation instead of JSON parsing.
//! Non-empty bodies must be declared as JSON and must decode; anything else
//! becomes [`ApiError::InvalidJson`].

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use super::error::ApiError;

const NOT_JSON: &str = "request body is not declared as application/json";

/// Decoded JSON body of type `T`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    /// Unwrap the decoded payload.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let declared_json = is_json_content_type(req.content_type());
        let body = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = body.await.map_err(|err| ApiError::invalid_json(&err))?;
            decode_body(&bytes, declared_json).map(Self)
        })
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    content_type == "application/json" || content_type.ends_with("+json")
}

fn decode_body<T>(body: &[u8], declared_json: bool) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    if !declared_json {
        return Err(ApiError::invalid_json(&NOT_JSON));
    }
    serde_json::from_slice(body).map_err(|err| ApiError::invalid_json(&err))
}
