//! HTTP handler for the receipt proxy endpoint
//!
//! Validates the raw request body, forwards it to the local backend in
//! development and falls back to the fixed demonstration PDF on any upstream
//! failure (or unconditionally in production). Only a failure of the
//! fallback itself is surfaced.

use crate::client::receipt::{HttpPdfSource, HttpReceiptBackend, PdfSource, ReceiptBackend};
use crate::config::{AppConfig, Environment};
use crate::core::error::ProxyError;
use crate::core::receipt::{missing_field, receipt_filename};
use crate::server::fallback::attempt_or_fallback;
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub environment: Environment,
    /// Local receipt backend tried in development
    pub backend: Arc<dyn ReceiptBackend>,
    /// Fallback demonstration PDF
    pub mock_pdf: Arc<dyn PdfSource>,
}

impl AppState {
    /// Wire up the HTTP collaborators from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            environment: config.environment,
            backend: Arc::new(HttpReceiptBackend::new(config.local_backend_url.clone())),
            mock_pdf: Arc::new(HttpPdfSource::new(config.mock_pdf_url.clone())),
        }
    }
}

/// `POST /api/gerar-recibo`
pub async fn gerar_recibo(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ProxyError> {
    debug!("recebendo requisição de recibo");

    if let Some(field) = missing_field(&body) {
        warn!(%field, "campo obrigatório ausente");
        return Err(ProxyError::MissingField {
            field: field.to_string(),
        });
    }

    let pdf = match state.environment {
        Environment::Development => {
            attempt_or_fallback(state.backend.generate(&body), state.mock_pdf.fetch()).await
        }
        Environment::Production => {
            debug!("ambiente de produção, usando PDF de demonstração");
            state.mock_pdf.fetch().await
        }
    }
    .map_err(|err| ProxyError::Upstream {
        message: err.to_string(),
    })?;

    let nome_cliente = body
        .get("nomeCliente")
        .and_then(Value::as_str)
        .unwrap_or("cliente");
    info!(len = pdf.len(), "recibo pronto para download");
    Ok(pdf_response(&receipt_filename(nome_cliente), pdf))
}

/// Build the PDF download response (content-type + attachment filename).
fn pdf_response(filename: &str, bytes: Bytes) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(bytes))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
