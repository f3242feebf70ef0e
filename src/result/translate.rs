//! The response-to-result translator.
//!
//! Pure functions that turn a raw [`HttpResponse`] into a [`PolarResult`].
//! All three variants share one status-code classification; they differ only
//! in how they treat a 2xx body and a 404:
//!
//! | status            | [`translate`]              | [`translate_nullable`] | [`translate_void`] |
//! |-------------------|----------------------------|------------------------|--------------------|
//! | 2xx, valid body   | `Success(value)`           | `Success(Some(value))` | `Success(())`      |
//! | 2xx, empty body   | `Failure(Deserialization)` | `Success(None)`        | `Success(())`      |
//! | 404               | `Failure(NotFound)`        | `Success(None)`        | `Failure(NotFound)`|
//! | 400/422           | `Failure(Validation)`      | same                   | same               |
//! | 429               | `Failure(RateLimited)`     | same                   | same               |
//! | 5xx               | `Failure(ServerError)`     | same                   | same               |
//! | anything else     | `Failure(Unknown)`         | same                   | same               |
//!
//! The nullable variant exists for singleton get-by-id lookups, where the
//! wrapped API conflates "resource absent" with "no content". Collection
//! and action endpoints use [`translate`] / [`translate_void`] and surface
//! 404 as an explicit failure.
//!
//! Every function is total: malformed input produces a `Failure`, never a
//! panic, and equal responses always produce equal results.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::HttpResponse;

use super::error::{ErrorKind, PolarError};
use super::outcome::PolarResult;

/// Translates a response into a typed result.
///
/// A 2xx response must carry a body deserializable into `T`; an empty or
/// malformed body is a [`ErrorKind::Deserialization`] failure.
pub fn translate<T: DeserializeOwned>(response: &HttpResponse) -> PolarResult<T> {
    if !response.is_ok() {
        return PolarResult::failure(classify_failure(response));
    }

    if response.is_body_empty() {
        return PolarResult::failure(PolarError::new(
            ErrorKind::Deserialization,
            response.code,
            "Expected a response body but received none",
        ));
    }

    deserialize_body(response)
}

/// Translates a response for a nullable get-by-id lookup.
///
/// Both a 404 and a 2xx with an empty body map to `Success(None)`, since
/// several singleton endpoints of the wrapped API report an absent
/// resource either way.
pub fn translate_nullable<T: DeserializeOwned>(
    response: &HttpResponse,
) -> PolarResult<Option<T>> {
    if response.code == 404 {
        return PolarResult::success(None);
    }

    if !response.is_ok() {
        return PolarResult::failure(classify_failure(response));
    }

    if response.is_body_empty() {
        return PolarResult::success(None);
    }

    deserialize_body(response).map(Some)
}

/// Translates a response for a side-effect-only operation.
///
/// Any 2xx response is a success; the body, if present, is ignored.
pub fn translate_void(response: &HttpResponse) -> PolarResult<()> {
    if response.is_ok() {
        PolarResult::success(())
    } else {
        PolarResult::failure(classify_failure(response))
    }
}

/// Deserializes a non-empty 2xx body into the target type.
fn deserialize_body<T: DeserializeOwned>(response: &HttpResponse) -> PolarResult<T> {
    match serde_json::from_str(&response.body) {
        Ok(value) => PolarResult::success(value),
        Err(source) => PolarResult::failure(PolarError::new(
            ErrorKind::Deserialization,
            response.code,
            format!("Failed to deserialize response body: {source}"),
        )),
    }
}

/// Classifies a non-2xx response into the error taxonomy.
fn classify_failure(response: &HttpResponse) -> PolarError {
    match response.code {
        400 | 422 => validation_error(response),
        404 => PolarError::new(ErrorKind::NotFound, 404, "Resource not found"),
        429 => PolarError::new(ErrorKind::RateLimited, 429, "Rate limit exceeded"),
        code @ 500..=599 => PolarError::new(
            ErrorKind::ServerError,
            code,
            format!("The API returned a server error (status {code})"),
        ),
        code => PolarError::new(
            ErrorKind::Unknown,
            code,
            format!("Unmapped status code {code}"),
        ),
    }
}

/// Builds a validation error, preserving the API's structured `detail` body.
///
/// Polar returns validation errors as `{"detail": ...}` where the detail is
/// either a plain string or an array of per-field error objects.
fn validation_error(response: &HttpResponse) -> PolarError {
    let detail = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("detail").cloned());

    let message = match &detail {
        Some(Value::String(text)) => text.clone(),
        _ => "The request failed validation".to_string(),
    };

    match detail {
        Some(payload) => {
            PolarError::with_detail(ErrorKind::Validation, response.code, message, payload)
        }
        None => PolarError::new(ErrorKind::Validation, response.code, message),
    }
}
