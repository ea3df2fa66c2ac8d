//! Thin typed client for the contacts HTTP API.
//!
//! One call per route: [`ContactsClient::list`], [`ContactsClient::create`],
//! [`ContactsClient::update`], [`ContactsClient::delete`]. Any non-2xx
//! response surfaces as [`ClientError::Api`] carrying the server's `error`
//! message.

use contacts_store_contract::{Contact, ContactInput};
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never produced an HTTP response.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub struct ContactsClient {
    base_url: String,
    http: reqwest::Client,
}

impl ContactsClient {
    /// Create a client for an API served at `base_url`
    /// (e.g. `http://localhost:4000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Contact>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/contacts", self.base_url))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn create(&self, input: &ContactInput) -> Result<Contact, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/contacts", self.base_url))
            .json(input)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn update(&self, id: &str, input: &ContactInput) -> Result<Contact, ClientError> {
        let resp = self
            .http
            .put(format!("{}/api/contacts/{id}", self.base_url))
            .json(input)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!("{}/api/contacts/{id}", self.base_url))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Turn a non-2xx response into [`ClientError::Api`], using the `error`
    /// field of the JSON body when one is present.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Err(ClientError::Api { status, message })
    }
}
