//! Core module: receipt domain model, formatting helpers and typed errors

pub mod error;
pub mod format;
pub mod receipt;

pub use error::{BackendError, CepError, ConfigError, ErrorBody, ProxyError, ValidationError};
pub use receipt::{ReceiptPayload, ReceiptPdf, ReceiptRequest};
