/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Axum extractor that accepts a request body as either JSON or a URL-encoded form.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the body according to its `Content-Type`.
///
/// A request without a `Content-Type` and without a body is treated as an
/// empty object, so bodies whose fields are all optional may be omitted
/// entirely. A non-empty body always needs a supported `Content-Type`.
///
/// Usage in a handler:
/// ```ignore
/// async fn my_handler(JsonOrForm(body): JsonOrForm<TokenRequest>) { ... }
/// ```
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else if content_type.is_empty() {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(&e.body_text()))?;
            if !body.is_empty() {
                return Err(AppError::bad_request(
                    "unsupported content type ``; send application/json or a form",
                ));
            }
            serde_json::from_value(serde_json::Value::Object(Default::default()))
                .map(Self)
                .map_err(|e| AppError::bad_request(&e.to_string()))
        } else {
            Err(AppError::bad_request(&format!(
                "unsupported content type `{content_type}`"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use comms_api_types::requests::{SendNotificationRequest, TokenRequest};

    async fn extract<T: DeserializeOwned + Send>(
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<T, AppError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/test");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        JsonOrForm::<T>::from_request(req, &()).await.map(|JsonOrForm(v)| v)
    }

    #[tokio::test]
    async fn json_body_is_parsed() {
        let req: TokenRequest = extract(Some("application/json"), r#"{"identity":"alice"}"#)
            .await
            .expect("should parse");
        assert_eq!(req.identity(), Some("alice"));
    }

    #[tokio::test]
    async fn form_body_is_parsed() {
        let req: SendNotificationRequest = extract(
            Some("application/x-www-form-urlencoded; charset=UTF-8"),
            "identity=bob",
        )
        .await
        .expect("should parse");
        assert_eq!(req.identity, "bob");
    }

    #[tokio::test]
    async fn missing_content_type_yields_empty_object() {
        let req: TokenRequest = extract(None, "").await.expect("should default");
        assert_eq!(req.identity(), None);
    }

    #[tokio::test]
    async fn missing_required_field_is_bad_request() {
        let err = extract::<SendNotificationRequest>(None, "").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn body_without_content_type_is_rejected() {
        let err = extract::<SendNotificationRequest>(None, "identity=bob")
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.body.message.contains("unsupported content type"));
        assert!(!err.body.message.contains("missing field"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = extract::<TokenRequest>(Some("application/json"), "{not json")
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unsupported_content_type_is_bad_request() {
        let err = extract::<TokenRequest>(Some("text/plain"), "identity=alice")
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.body.message.contains("text/plain"));
    }
}
