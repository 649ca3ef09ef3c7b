//! # Gerador de Recibos
//!
//! A small service-receipt generator: a form controller that collects client,
//! equipment and address details (with CEP auto-fill), submits them to a
//! remote receipt API and exposes the returned PDF for download, plus a
//! proxy endpoint that serves the same contract with a mock-PDF fallback.
//!
//! ## Features
//!
//! - **Reducer-style form state**: every input handler is a pure
//!   `(state, change) -> state` function
//! - **CEP auto-fill**: ViaCEP lookup on blur, with masking and validation
//! - **Typed errors**: exact user-facing messages live on `Display`
//! - **Environment-injected proxy**: development forwards to a local
//!   backend and falls back to a demonstration PDF; production serves the
//!   demonstration PDF directly
//! - **Trait seams**: every remote collaborator is an `Arc<dyn Trait>` so
//!   tests run without a network
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gerador_recibos::prelude::*;
//! use std::sync::Arc;
//!
//! let config = AppConfig::default();
//! let mut form = FormController::new(
//!     Arc::new(ViaCepClient::new(config.viacep_base_url.clone())),
//!     Arc::new(HttpReceiptBackend::new(config.remote_backend_url.clone())),
//! );
//!
//! form.update(FieldChange::NomeCliente("Maria Silva".into()));
//! form.update(FieldChange::Cep("01310930".into()));
//! form.cep_blur().await;
//! form.submit().await;
//!
//! if let Some(pdf) = form.download() {
//!     std::fs::write(&pdf.filename, &pdf.bytes)?;
//! }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod form;
pub mod server;

/// Re-exports of commonly used types
pub mod prelude {
    // === Config ===
    pub use crate::config::{AppConfig, Environment};

    // === Domain ===
    pub use crate::core::format::{format_cep, format_currency};
    pub use crate::core::receipt::{ReceiptPayload, ReceiptPdf, ReceiptRequest};
    pub use crate::core::{BackendError, CepError, ProxyError, ValidationError};

    // === Clients ===
    pub use crate::client::{
        CepAddress, CepLookup, HttpPdfSource, HttpReceiptBackend, PdfSource, ReceiptBackend,
        ViaCepClient,
    };

    // === Form ===
    pub use crate::form::{FieldChange, FormController, Notice, NoticeLevel, Submission};

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use bytes::Bytes;
}
