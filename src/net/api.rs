//! Shared HTTP plumbing for the PeopleMover REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every resource module (`spaces`, `people`, `products`, ...) is a set of
//! `impl ApiClient` blocks built on the four verbs defined here. This file
//! owns URL joining, headers, status mapping, and JSON decoding so the
//! resource modules only describe paths and bodies.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError` via `ApiError::from_status`; bodies
//! that fail to decode surface as `ApiError::InvalidJson` with the path.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Whether a call needs the bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Bearer,
    Anonymous,
}

/// Typed client for one PeopleMover backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    /// Build a client from config: JSON default headers plus the configured
    /// timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            access_token: config.access_token.clone(),
        })
    }

    /// Replace the bearer token used for subsequent calls.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // VERBS
    // =========================================================================

    /// `GET` a path and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send(Method::GET, path, None, Access::Bearer).await?;
        decode(path, &text)
    }

    /// `GET` a path and return the body as text.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        self.send(Method::GET, path, None, Access::Bearer).await
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_json`].
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode(path, body)?;
        let text = self.send(Method::POST, path, Some(body), Access::Bearer).await?;
        decode(path, &text)
    }

    /// `POST` a JSON body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = encode(path, body)?;
        self.send(Method::POST, path, Some(body), Access::Bearer).await?;
        Ok(())
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_json`].
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode(path, body)?;
        let text = self.send(Method::PUT, path, Some(body), Access::Bearer).await?;
        decode(path, &text)
    }

    /// `PUT` with an optional body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn put(&self, path: &str, body: Option<Value>) -> Result<(), ApiError> {
        self.send(Method::PUT, path, body, Access::Bearer).await?;
        Ok(())
    }

    /// `DELETE` a path, optionally carrying a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn delete(&self, path: &str, body: Option<Value>) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, body, Access::Bearer).await?;
        Ok(())
    }

    /// `GET` a path that does not require a token.
    pub(crate) async fn get_public_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send(Method::GET, path, None, Access::Anonymous).await?;
        decode(path, &text)
    }

    /// `POST` to a path that does not require a token.
    pub(crate) async fn post_public<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = encode(path, body)?;
        self.send(Method::POST, path, Some(body), Access::Anonymous).await?;
        Ok(())
    }

    /// Issue one request and return the response text on 2xx.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        access: Access,
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        tracing::debug!(%method, path, "api request");

        let mut request = self.http.request(method.clone(), &url);
        match (access, self.access_token.as_deref()) {
            (_, Some(token)) => {
                request = request.header(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
            }
            (Access::Bearer, None) => return Err(ApiError::MissingAccessToken),
            (Access::Anonymous, None) => {}
        }
        if let Some(json) = body {
            request = request.json(&json);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%method, path, status = status.as_u16(), "api request failed");
            return Err(ApiError::from_status(status, path, text));
        }
        Ok(text)
    }
}

fn encode<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|source| ApiError::InvalidJson { path: path.to_owned(), source })
}

fn decode<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|source| ApiError::InvalidJson { path: path.to_owned(), source })
}
