use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, header};
use std::fmt::Debug;

use crate::{binding::QuoteResponse, error::GatewayError};

/// Default address of the local supplier service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:38080/massages";

/// Source of massage quotes for a given date.
///
/// [`HttpGateway`] is the production implementation; tests substitute stubs.
#[async_trait]
pub trait MassageGateway: Send + Sync + Debug {
    async fn fetch(&self, date: NaiveDate) -> Result<QuoteResponse, GatewayError>;
}

/// HTTP client for the supplier's quote endpoint.
///
/// Holds no mutable state; every call issues exactly one outbound request.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    http: Client,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    /// URL of the quote endpoint for `date`, e.g. `<base>/quote/2024-03-07`.
    pub fn quote_url(&self, date: NaiveDate) -> String {
        format!("{}/quote/{}", self.base_url, date.format("%Y-%m-%d"))
    }
}

#[async_trait]
impl MassageGateway for HttpGateway {
    async fn fetch(&self, date: NaiveDate) -> Result<QuoteResponse, GatewayError> {
        let url = self.quote_url(date);

        let res = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(GatewayError::Transport)?;

        if !status.is_success() {
            return Err(GatewayError::Status { status, body: truncate_body(&body) });
        }

        serde_json::from_str(&body)
            .map_err(|source| GatewayError::Decode { source, body: truncate_body(&body) })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
