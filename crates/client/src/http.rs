//! HTTP wrapper around `reqwest` for the content API.
//!
//! Attaches the bearer token when configured, normalizes error bodies into
//! [`ApiError`], and retries idempotent GETs with exponential backoff.
//! Mutations (POST/PUT/DELETE, multipart) never retry: create/update/delete
//! are not idempotent-safe by default.
//!
//! There is no explicit per-request timeout; cancellation is dropping the
//! returned future, which aborts the in-flight request.

use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;

/// Total GET attempts, including the first one.
const MAX_GET_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(200);

pub(crate) struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl HttpClient {
    pub(crate) fn new(base_url: &str, token: Option<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub(crate) const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn apply_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        }
    }

    /// GET returning the parsed JSON body, retrying transport failures and
    /// 5xx responses up to [`MAX_GET_ATTEMPTS`]. 404 is terminal.
    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, ApiError> {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            let req = self.apply_auth(self.client.get(self.url(path)).query(query));
            match Self::dispatch(req).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < MAX_GET_ATTEMPTS && err.is_retryable() => {
                    let delay = RETRY_BASE_DELAY * 2u32.saturating_pow(attempt - 1);
                    warn!(path, attempt, error = %err, "GET failed, retrying");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let req = self.apply_auth(self.client.post(self.url(path)).json(body));
        Self::dispatch(req).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let req = self.apply_auth(self.client.put(self.url(path)).json(body));
        Self::dispatch(req).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let req = self.apply_auth(self.client.delete(self.url(path)));
        Self::dispatch(req).await
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let req = self.apply_auth(self.client.post(self.url(path)).multipart(form));
        Self::dispatch(req).await
    }

    pub(crate) async fn put_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let req = self.apply_auth(self.client.put(self.url(path)).multipart(form));
        Self::dispatch(req).await
    }

    /// Send one request and normalize the outcome.
    ///
    /// Non-2xx bodies are parsed as JSON and their `message` field becomes
    /// the error message; a body that is not JSON falls back to the HTTP
    /// status text. Empty 2xx bodies (DELETE) become `Value::Null`.
    async fn dispatch(req: RequestBuilder) -> Result<Value, ApiError> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(
                extract_message(&text).unwrap_or_else(|| "resource not found".to_string()),
            ));
        }
        if !status.is_success() {
            let message = extract_message(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Pull the human-readable `message` field out of an error envelope.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_from_envelope() {
        let body = r#"{"message": "slug already exists", "data": null}"#;
        assert_eq!(
            extract_message(body),
            Some("slug already exists".to_string())
        );
    }

    #[test]
    fn test_extract_message_missing_field() {
        assert_eq!(extract_message(r#"{"error": "boom"}"#), None);
    }

    #[test]
    fn test_extract_message_not_json() {
        assert_eq!(extract_message("<html>502 Bad Gateway</html>"), None);
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let http = HttpClient::new("http://localhost:3000/api/", None);
        assert_eq!(http.url("/categories"), "http://localhost:3000/api/categories");
    }
}
