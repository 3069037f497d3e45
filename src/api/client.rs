//! HTTP client for the scoring and generation service.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;

use super::types::{
    detail_message, EvaluateRequest, EvaluationBody, GenerateBody, GeneratePasswordResponse, GenerateRequest,
    HealthStatus, PasswordEvaluation,
};

/// Which call failed; picks the generic message shown when the server gives none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Evaluate,
    Generate,
    Health,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Evaluate => "Failed to evaluate password",
            Self::Generate => "Failed to generate password",
            Self::Health => "Failed to reach password service",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            Self::Evaluate => "/evaluate",
            Self::Generate => "/generate_password",
            Self::Health => "/",
        }
    }
}

/// Errors surfaced by [`ApiClient`]. `Display` is the user-facing message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .operation.failure_message())]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Invalid response format from server")]
    Shape { reason: String },
    #[error("Failed to build HTTP client: {0}")]
    Builder(reqwest::Error),
}

impl ApiError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::Shape { reason: reason.into() }
    }
}

/// Client for the evaluate / generate endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` must already be normalized (no trailing slash).
    /// `timeout` of `None` keeps the transport default.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Builder)?;

        Ok(Self { http, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    pub async fn evaluate_password(&self, password: &SecretString) -> Result<PasswordEvaluation, ApiError> {
        let request = EvaluateRequest { password: password.expose_secret() };
        let body: EvaluationBody = self.post(Operation::Evaluate, &request).await?;
        PasswordEvaluation::try_from(body)
    }

    pub async fn generate_password(&self, request: &GenerateRequest) -> Result<GeneratePasswordResponse, ApiError> {
        let body: GenerateBody = self.post(Operation::Generate, request).await?;
        body.into_response(request)
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let operation = Operation::Health;
        let response = self
            .http
            .get(self.endpoint(operation))
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;
        decode(operation, response).await
    }

    async fn post<B, R>(&self, operation: Operation, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(operation);
        tracing::debug!(%url, "sending request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        decode(operation, response).await
    }
}

async fn decode<R: serde::de::DeserializeOwned>(operation: Operation, response: reqwest::Response) -> Result<R, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|source| ApiError::Transport { operation, source })?;

    if !status.is_success() {
        return Err(server_error(operation, status, &text));
    }

    serde_json::from_str(&text).map_err(|e| ApiError::shape(e.to_string()))
}

fn server_error(operation: Operation, status: StatusCode, body: &str) -> ApiError {
    let message = detail_message(body).unwrap_or_else(|| operation.failure_message().to_string());
    ApiError::Server { status: status.as_u16(), message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let client = ApiClient::new("http://127.0.0.1:8000", None).unwrap();
        assert_eq!(client.endpoint(Operation::Evaluate), "http://127.0.0.1:8000/evaluate");
        assert_eq!(client.endpoint(Operation::Generate), "http://127.0.0.1:8000/generate_password");
        assert_eq!(client.endpoint(Operation::Health), "http://127.0.0.1:8000/");
    }

    #[test]
    fn test_server_error_prefers_detail() {
        let err = server_error(Operation::Evaluate, StatusCode::BAD_REQUEST, r#"{"detail":"Password too long"}"#);
        assert_eq!(err.to_string(), "Password too long");
        assert!(matches!(err, ApiError::Server { status: 400, .. }));
    }

    #[test]
    fn test_server_error_falls_back_to_generic() {
        let err = server_error(Operation::Generate, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
        assert_eq!(err.to_string(), "Failed to generate password");
    }
}
