//! HTTP client for the admin REST API.
//!
//! The client is built once with the base URL and the [`Session`] it
//! authenticates with, then shared through context. Every request carries
//! `Authorization: Bearer <token>` when signed in; a 401 ends the session.

use std::collections::BTreeMap;
use std::sync::Arc;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::FormData;

use crate::system::auth::context::Session;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },
    #[error("session expired")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx answer from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .get("message")
            .or_else(|| parsed.get("error"))
            .and_then(|m| m.as_str())
            .unwrap_or_default()
            .trim()
            .to_string();
        let errors = field_errors(parsed.get("errors"));

        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            422 => ApiError::Validation { message, errors },
            400..=499 if !errors.is_empty() => ApiError::Validation { message, errors },
            _ => ApiError::Status { status, message },
        }
    }

    /// Text for a notification: the server's message, then the first field
    /// error, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation { message, errors } => {
                if !message.is_empty() {
                    message.clone()
                } else {
                    errors
                        .values()
                        .flatten()
                        .next()
                        .cloned()
                        .unwrap_or_else(|| fallback.to_string())
                }
            }
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::NotFound => "The requested record was not found.".to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Laravel sends `errors` as `{field: [messages]}`; single strings and
/// plain arrays are accepted too.
fn field_errors(raw: Option<&serde_json::Value>) -> BTreeMap<String, Vec<String>> {
    let mut out = BTreeMap::new();
    match raw {
        Some(serde_json::Value::Object(map)) => {
            for (field, value) in map {
                let messages: Vec<String> = match value {
                    serde_json::Value::Array(items) => items
                        .iter()
                        .filter_map(|m| m.as_str().map(str::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    _ => Vec::new(),
                };
                if !messages.is_empty() {
                    out.insert(field.clone(), messages);
                }
            }
        }
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect();
            if !messages.is_empty() {
                out.insert("general".to_string(), messages);
            }
        }
        _ => {}
    }
    out
}

/// Decode a 2xx body; an empty body reads as `{}`.
///
/// A body that is not JSON is offered to `T` as a plain string, which only
/// lenient types like [`Ack`] accept.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = body.trim();
    let body = if body.is_empty() { "{}" } else { body };
    serde_json::from_str(body).or_else(|e| {
        serde_json::from_value(serde_json::Value::String(body.to_string()))
            .map_err(|_| ApiError::Decode(e.to_string()))
    })
}

/// Acknowledgement returned by mutations.
///
/// Any 2xx body is an acknowledgement; `message` is taken when the body is
/// an object with a string `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct Ack {
    pub message: Option<String>,
}

impl From<serde_json::Value> for Ack {
    fn from(value: serde_json::Value) -> Self {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string);
        Self { message }
    }
}

impl Ack {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Single record, sent bare or wrapped in `{ data: ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Record<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Record<T> {
    pub fn into_inner(self) -> T {
        match self {
            Record::Wrapped { data } | Record::Bare(data) => data,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            session,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Absolute URL for an API path such as `/clients/4`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn url_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, ApiError> {
        let qs = serde_qs::to_string(query)
            .map_err(|e| ApiError::Transport(format!("failed to encode query: {}", e)))?;
        if qs.is_empty() {
            Ok(self.url(path))
        } else {
            Ok(format!("{}?{}", self.url(path), qs))
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(transport)?;
        self.send(request).await
    }

    pub async fn get_with<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url_with_query(path, query)?;
        let request = self
            .authorize(Request::get(&url))
            .build()
            .map_err(transport)?;
        self.send(request).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(transport)?;
        self.send(request).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(transport)?;
        self.send(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .build()
            .map_err(transport)?;
        self.send(request).await
    }

    pub async fn delete_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .json(body)
            .map_err(transport)?;
        self.send(request).await
    }

    /// Multipart `POST`; updates travel this way with a `_method` field.
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: FormData) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(transport)?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let method = request.method();
        let url = request.url();
        log::debug!("{:?} {}", method, url);

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = read_body(&response).await;

        if response.ok() {
            return decode(&body);
        }

        let err = ApiError::from_response(status, &body);
        if err.is_unauthorized() {
            log::warn!("{:?} {} answered 401, ending session", method, url);
            self.session.invalidate();
        } else {
            log::warn!("{:?} {} failed: {}", method, url, err);
        }
        Err(err)
    }
}

async fn read_body(response: &Response) -> String {
    response.text().await.unwrap_or_default()
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Client provided by the app root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_statuses() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(404, r#"{"message":"gone"}"#), ApiError::NotFound);
        assert_eq!(
            ApiError::from_response(500, r#"{"message":"Server Error"}"#),
            ApiError::Status { status: 500, message: "Server Error".into() }
        );
        assert_eq!(
            ApiError::from_response(502, "<html>bad gateway</html>"),
            ApiError::Status { status: 502, message: String::new() }
        );
    }

    #[test]
    fn test_validation_errors() {
        let body = r#"{"message":"","errors":{"film_name":["The film name field is required."],"year":"Bad year"}}"#;
        let err = ApiError::from_response(422, body);
        match &err {
            ApiError::Validation { errors, .. } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors["year"], vec!["Bad year".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(err.user_message("Failed"), "The film name field is required.");

        let err = ApiError::from_response(400, r#"{"errors":["Image too large"]}"#);
        assert_eq!(err.user_message("Failed"), "Image too large");
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::from_response(422, r#"{"message":"Email taken","errors":{"email":["x"]}}"#);
        assert_eq!(err.user_message("Failed"), "Email taken");

        let err = ApiError::Transport("offline".into());
        assert_eq!(err.user_message("Failed to update status"), "Failed to update status");

        let err = ApiError::from_response(500, r#"{"error":"Boom"}"#);
        assert_eq!(err.user_message("Failed"), "Boom");
    }

    #[test]
    fn test_record_shapes() {
        let bare: Record<Ack> = decode(r#"{"message":"x"}"#).unwrap();
        assert_eq!(bare.into_inner().message.as_deref(), Some("x"));
        let wrapped: Record<Vec<i64>> = decode(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(wrapped.into_inner(), vec![1, 2]);
    }

    #[test]
    fn test_decode_empty_body_as_ack() {
        let ack: Ack = decode("").unwrap();
        assert_eq!(ack.message_or("Deleted"), "Deleted");

        let ack: Ack = decode(r#"{"message":"Poster deleted successfully"}"#).unwrap();
        assert_eq!(ack.message_or("Deleted"), "Poster deleted successfully");

        let err = decode::<Vec<i64>>("{").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_any_success_body_is_an_ack() {
        for body in ["true", "1", r#"{"message": 42}"#, r#"{"status":"ok"}"#, "OK", "[]"] {
            let ack: Ack = decode(body).unwrap();
            assert_eq!(ack.message_or("Status updated"), "Status updated", "body {}", body);
        }
        let ack: Ack = decode(r#"{"status":true,"message":"Saved"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Saved"));
    }
}
