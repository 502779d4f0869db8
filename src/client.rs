//! Client side of the country API, as used by the list view.
//!
//! Every failure (transport, non-2xx status, `success: false` envelope) is reduced to a
//! message string at this boundary.

use crate::model::{Country, NewCountry};
use crate::response::Envelope;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Api(String),
}

#[async_trait]
pub trait CountriesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Country>, ClientError>;
    async fn create(&self, name: &str) -> Result<Country, ClientError>;
    async fn delete(&self, country_id: i32) -> Result<(), ClientError>;
}

/// `reqwest`-backed client rooted at a base URL such as `http://127.0.0.1:3000`.
#[derive(Clone)]
pub struct HttpCountriesApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpCountriesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        HttpCountriesApi {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn read_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let message = match resp.json::<Envelope<serde_json::Value>>().await {
            Ok(Envelope { error: Some(e), .. }) => e,
            _ => status.canonical_reason().unwrap_or("request failed").to_string(),
        };
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }
    resp.json::<Envelope<T>>()
        .await?
        .into_result()
        .map_err(ClientError::Api)
}

#[async_trait]
impl CountriesApi for HttpCountriesApi {
    async fn list(&self) -> Result<Vec<Country>, ClientError> {
        let resp = self.http.get(self.url("/api/countries")).send().await?;
        read_envelope(resp).await
    }

    async fn create(&self, name: &str) -> Result<Country, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/countries"))
            .json(&NewCountry {
                country: name.to_string(),
            })
            .send()
            .await?;
        read_envelope(resp).await
    }

    async fn delete(&self, country_id: i32) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/countries/{}", country_id)))
            .send()
            .await?;
        if resp.status().is_success() {
            return Ok(());
        }
        read_envelope::<serde_json::Value>(resp).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = HttpCountriesApi::new("http://localhost:3000/");
        assert_eq!(api.url("/api/countries"), "http://localhost:3000/api/countries");
    }
}
