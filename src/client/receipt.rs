//! Receipt backend and mock-PDF clients
//!
//! [`HttpReceiptBackend`] is shared by the form controller (pointed at the
//! remote API) and the proxy endpoint (pointed at the local backend); both
//! get the same status / content-type / empty-body checks.

use crate::core::error::BackendError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

/// Receipt-generation backend: JSON payload in, PDF bytes out
#[async_trait]
pub trait ReceiptBackend: Send + Sync {
    async fn generate(&self, payload: &Value) -> Result<Bytes, BackendError>;
}

/// Source of the fixed demonstration PDF used as the proxy fallback
#[async_trait]
pub trait PdfSource: Send + Sync {
    async fn fetch(&self) -> Result<Bytes, BackendError>;
}

/// HTTP implementation of [`ReceiptBackend`]
#[derive(Debug, Clone)]
pub struct HttpReceiptBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReceiptBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ReceiptBackend for HttpReceiptBackend {
    async fn generate(&self, payload: &Value) -> Result<Bytes, BackendError> {
        debug!(endpoint = %self.endpoint, "enviando pedido de recibo");

        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Prefer the backend's own error message when the body is JSON.
            let fallback = format!(
                "Erro {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("erro desconhecido")
            );
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or(fallback);
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        if !content_type.contains("application/pdf") {
            return Err(BackendError::NotPdf { content_type });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(BackendError::EmptyPdf);
        }

        debug!(len = bytes.len(), "PDF recebido");
        Ok(bytes)
    }
}

/// HTTP implementation of [`PdfSource`] fetching a fixed public PDF
#[derive(Debug, Clone)]
pub struct HttpPdfSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPdfSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl PdfSource for HttpPdfSource {
    async fn fetch(&self) -> Result<Bytes, BackendError> {
        debug!(url = %self.url, "buscando PDF de demonstração");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: format!("Erro ao buscar PDF mock: {}", status.as_u16()),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(BackendError::EmptyPdf);
        }
        Ok(bytes)
    }
}
