//! HTTP execution against the PostgREST-style table API.

use super::Query;
use crate::config::PostgrestConfig;
use reqwest::{Method, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

/// Result type for PostgREST operations.
pub type PostgrestResult<T> = Result<T, PostgrestError>;

/// Errors returned while talking to the table API.
#[derive(Debug, Clone, Error)]
pub enum PostgrestError {
    /// The backend answered with a non-success status.
    #[error("{method} {table} failed ({status}): {body}")]
    Upstream {
        /// HTTP method of the failing request.
        method: &'static str,
        /// Table the request targeted.
        table: String,
        /// Upstream HTTP status code.
        status: u16,
        /// Raw upstream response body.
        body: String,
    },

    /// The request could not be sent or the response not read.
    #[error("transport error: {0}")]
    Transport(Arc<reqwest::Error>),

    /// The response body did not match the expected row shape.
    #[error("response decoding failed for {table}: {source}")]
    Decode {
        /// Table the request targeted.
        table: String,
        /// Underlying JSON error.
        source: Arc<serde_json::Error>,
    },
}

impl From<reqwest::Error> for PostgrestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Arc::new(err))
    }
}

/// Client for a single PostgREST backend.
///
/// Every request carries the service key as both `apikey` and bearer token;
/// mutating requests ask for `return=representation` so the affected rows
/// come back in the response body.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl PostgrestClient {
    /// Creates a client from backend settings and a shared HTTP client.
    #[must_use]
    pub fn new(http: reqwest::Client, config: &PostgrestConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            service_key: config.service_key.clone(),
        }
    }

    /// Fetches rows from `table` with the given filter.
    ///
    /// # Errors
    ///
    /// Returns [`PostgrestError`] on transport failure, non-success status,
    /// or a response that does not decode as `Vec<T>`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> PostgrestResult<Vec<T>> {
        self.execute(Method::GET, table, query, None::<&()>).await
    }

    /// Inserts a row into `table` and returns the created rows.
    ///
    /// # Errors
    ///
    /// Returns [`PostgrestError`] on transport failure, non-success status,
    /// or an undecodable response.
    pub async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        body: &impl Serialize,
    ) -> PostgrestResult<Vec<T>> {
        self.execute(Method::POST, table, &Query::new(), Some(body))
            .await
    }

    /// Patches rows matching `query` and returns the updated rows.
    ///
    /// # Errors
    ///
    /// Returns [`PostgrestError`] on transport failure, non-success status,
    /// or an undecodable response.
    pub async fn update<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
        body: &impl Serialize,
    ) -> PostgrestResult<Vec<T>> {
        self.execute(Method::PATCH, table, query, Some(body)).await
    }

    /// Deletes rows matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`PostgrestError`] on transport failure or non-success
    /// status.
    pub async fn delete(&self, table: &str, query: &Query) -> PostgrestResult<()> {
        let _rows: Vec<serde_json::Value> = self
            .execute(Method::DELETE, table, query, None::<&()>)
            .await?;
        Ok(())
    }

    async fn execute<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        table: &str,
        query: &Query,
        body: Option<&B>,
    ) -> PostgrestResult<Vec<T>> {
        let method_name = method_name(&method);
        let url = format!("{}/rest/v1/{table}", self.base_url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header(header::CONTENT_TYPE, "application/json")
            .query(query.params());
        if method != Method::GET {
            request = request.header("Prefer", "return=representation");
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(PostgrestError::Upstream {
                method: method_name,
                table: table.to_owned(),
                status: status.as_u16(),
                body: body_text,
            });
        }

        // DELETE responses may carry no content.
        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let body_text = response.text().await?;
        if body_text.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&body_text).map_err(|err| PostgrestError::Decode {
            table: table.to_owned(),
            source: Arc::new(err),
        })
    }
}

fn method_name(method: &Method) -> &'static str {
    if *method == Method::POST {
        "POST"
    } else if *method == Method::PATCH {
        "PATCH"
    } else if *method == Method::DELETE {
        "DELETE"
    } else {
        "GET"
    }
}
