//! Hosted data store client
//!
//! Thin REST client for the hosted relational backend. Every table is
//! exposed at `{base}/rest/v1/{table}`; requests authenticate with the
//! public API key sent as both `apikey` and bearer token. Reads return
//! JSON row arrays, writes use `Prefer: return=minimal`.

pub mod chapters;
pub mod contacts;
pub mod members;
pub mod newsletter;
pub mod partners;

use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Store client errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or protocol failure (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("store rejected {table} request ({status}): {body}")]
    Rejected {
        table: String,
        status: StatusCode,
        body: String,
    },
}

/// REST client for the hosted data store
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl StoreClient {
    /// Create a new store client
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Read rows from a table, filtered by PostgREST-style query pairs
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await?;

        let response = Self::check_status(table, response).await?;
        Ok(response.json().await?)
    }

    /// Insert one row into a table; the store-assigned row is not returned
    pub(crate) async fn insert<B: Serialize>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        Self::check_status(table, response).await?;
        Ok(())
    }

    async fn check_status(
        table: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            table: table.to_string(),
            status,
            body,
        })
    }
}
