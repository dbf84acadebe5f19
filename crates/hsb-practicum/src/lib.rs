//! Practicum adapter (reqwest).
//!
//! This crate implements the `hsb-core` StatusSource port over the homework
//! statuses HTTP API. The client carries a hard request timeout: an
//! unbounded hang on the remote endpoint would stall the whole poll loop.

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;

use hsb_core::{config::Config, errors::Error, ports::StatusSource, Result};

#[derive(Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    auth_header: String,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|e| Error::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            auth_header: format!("OAuth {}", cfg.practicum_token),
        })
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request to homework api failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Transport(format!(
                "homework api returned {status}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Shape(format!("response body is not valid json: {e}")))
    }
}
