//! Typed error handling for the receipt generator
//!
//! Errors are grouped by category so callers can react to specific failures
//! instead of matching on strings:
//!
//! - [`ValidationError`]: pre-submit form validation failures
//! - [`CepError`]: postal-code lookup failures
//! - [`BackendError`]: receipt backend failures (transport, status, payload)
//! - [`ProxyError`]: proxy endpoint failures, mapped to HTTP responses
//! - [`ConfigError`]: configuration loading failures
//!
//! `Display` implementations carry the exact user-facing messages, so a
//! surfaced error is always `err.to_string()`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// JSON body returned by the proxy endpoint on failure
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

// =============================================================================
// Validation Errors (form, pre-submit)
// =============================================================================

/// Pre-submit validation failures for the receipt form
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more required fields are empty
    MissingFields,

    /// Total must be greater than zero
    NonPositiveTotal,

    /// The service date could not be parsed
    InvalidDate { value: String },
}

impl ValidationError {
    /// Notice title matching the failure category
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Campos obrigatórios",
            ValidationError::NonPositiveTotal => "Valor inválido",
            ValidationError::InvalidDate { .. } => "Data inválida",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => {
                write!(f, "Por favor, preencha todos os campos obrigatórios")
            }
            ValidationError::NonPositiveTotal => {
                write!(f, "O valor total deve ser maior que zero")
            }
            ValidationError::InvalidDate { value } => {
                write!(f, "Data do serviço inválida: '{}'", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// =============================================================================
// CEP Lookup Errors
// =============================================================================

/// Failures of the postal-code lookup service
#[derive(Debug, Clone, PartialEq)]
pub enum CepError {
    /// The service answered but flagged the code as unknown
    NotFound,

    /// The service could not be reached or answered garbage
    Transport { message: String },
}

impl fmt::Display for CepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CepError::NotFound => write!(f, "CEP não encontrado"),
            CepError::Transport { message } => {
                write!(f, "Erro ao buscar CEP: {}", message)
            }
        }
    }
}

impl std::error::Error for CepError {}

impl From<reqwest::Error> for CepError {
    fn from(err: reqwest::Error) -> Self {
        CepError::Transport {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Backend Errors
// =============================================================================

/// Failures of the receipt-generation backend
///
/// `Display` yields the message the form surfaces to the user: for
/// `Status` that is the message extracted from the backend's JSON error
/// body when one exists.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendError {
    /// Request never completed
    Transport { message: String },

    /// Non-success HTTP status; `message` already resolved from the body
    Status { status: u16, message: String },

    /// Success status but the body is not a PDF
    NotPdf { content_type: String },

    /// Success status but the PDF is zero-length
    EmptyPdf,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Transport { message } => write!(f, "{}", message),
            BackendError::Status { message, .. } => write!(f, "{}", message),
            BackendError::NotPdf { .. } => write!(f, "A resposta não é um PDF válido"),
            BackendError::EmptyPdf => write!(f, "O PDF gerado está vazio"),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Transport {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Proxy Errors
// =============================================================================

/// Failures of the proxy endpoint, mapped to the HTTP error contract:
/// 400 `{"error": "Campo obrigatório: <field>"}` for missing fields,
/// 500 `{"error": "Erro ao gerar o recibo: <message>"}` for the rest.
#[derive(Debug)]
pub enum ProxyError {
    /// A required field is absent or blank in the request body
    MissingField { field: String },

    /// Neither the upstream backend nor the mock PDF could produce a receipt
    Upstream { message: String },
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::MissingField { field } => {
                write!(f, "Campo obrigatório: {}", field)
            }
            ProxyError::Upstream { message } => {
                write!(f, "Erro ao gerar o recibo: {}", message)
            }
        }
    }
}

impl std::error::Error for ProxyError {}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingField { .. } => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// IO error while reading a configuration file
    Io { path: String, message: String },

    /// Failed to parse configuration
    Parse { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::Parse { message } => {
                write!(f, "Failed to parse config: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Por favor, preencha todos os campos obrigatórios"
        );
        assert_eq!(
            ValidationError::NonPositiveTotal.to_string(),
            "O valor total deve ser maior que zero"
        );
    }

    #[test]
    fn test_validation_error_titles() {
        assert_eq!(ValidationError::MissingFields.title(), "Campos obrigatórios");
        assert_eq!(ValidationError::NonPositiveTotal.title(), "Valor inválido");
    }

    #[test]
    fn test_backend_status_error_surfaces_resolved_message() {
        let err = BackendError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_backend_not_pdf_message() {
        let err = BackendError::NotPdf {
            content_type: "text/plain".to_string(),
        };
        assert_eq!(err.to_string(), "A resposta não é um PDF válido");
    }

    #[test]
    fn test_backend_empty_pdf_message() {
        assert_eq!(BackendError::EmptyPdf.to_string(), "O PDF gerado está vazio");
    }

    #[test]
    fn test_proxy_missing_field_is_400() {
        let err = ProxyError::MissingField {
            field: "uf".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Campo obrigatório: uf");
    }

    #[test]
    fn test_proxy_upstream_is_500_with_prefix() {
        let err = ProxyError::Upstream {
            message: "sem rede".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Erro ao gerar o recibo: sem rede");
    }

    #[test]
    fn test_cep_not_found_message() {
        assert_eq!(CepError::NotFound.to_string(), "CEP não encontrado");
    }

    #[test]
    fn test_config_error_from_yaml() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{invalid").unwrap_err();
        let err: ConfigError = yaml_err.into();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
