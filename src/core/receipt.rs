//! Receipt domain model
//!
//! [`ReceiptRequest`] is the in-memory form state; [`ReceiptPayload`] is the
//! normalized wire shape the backend expects (CEP without mask, data as an
//! RFC 3339 UTC timestamp). The returned document is carried as an opaque
//! [`ReceiptPdf`].

use crate::core::error::ValidationError;
use crate::core::format::{normalize_datetime, strip_cep};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields the proxy endpoint requires, in validation order
pub const REQUIRED_FIELDS: &[&str] = &[
    "nomeCliente",
    "equipamento",
    "descricaoServico",
    "cep",
    "uf",
    "cidade",
    "bairro",
    "logradouro",
    "data",
    "total",
];

/// In-memory state of the receipt form
///
/// `data` holds a datetime-local value ("YYYY-MM-DDTHH:MM") and `cep` the
/// masked code ("00000-000"); both are normalized by [`ReceiptRequest::normalize`]
/// before submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    pub nome_cliente: String,
    pub equipamento: String,
    pub descricao_servico: String,
    pub cep: String,
    pub uf: String,
    pub cidade: String,
    pub bairro: String,
    pub logradouro: String,
    pub data: String,
    pub total: f64,
}

impl ReceiptRequest {
    /// Fresh form state: empty fields, the given datetime-local value and a
    /// zeroed total.
    pub fn new(data: String) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Pre-submit validation: every string field non-empty, total > 0.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            &self.nome_cliente,
            &self.equipamento,
            &self.descricao_servico,
            &self.cep,
            &self.uf,
            &self.cidade,
            &self.bairro,
            &self.logradouro,
            &self.data,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if self.total <= 0.0 {
            return Err(ValidationError::NonPositiveTotal);
        }
        Ok(())
    }

    /// Validate and produce the wire payload: CEP unmasked, data converted
    /// to an RFC 3339 UTC timestamp, total carried as a number.
    pub fn normalize(&self) -> Result<ReceiptPayload, ValidationError> {
        self.validate()?;
        let data = normalize_datetime(&self.data).map_err(|_| ValidationError::InvalidDate {
            value: self.data.clone(),
        })?;
        Ok(ReceiptPayload {
            nome_cliente: self.nome_cliente.clone(),
            equipamento: self.equipamento.clone(),
            descricao_servico: self.descricao_servico.clone(),
            cep: strip_cep(&self.cep),
            uf: self.uf.clone(),
            cidade: self.cidade.clone(),
            bairro: self.bairro.clone(),
            logradouro: self.logradouro.clone(),
            data,
            total: self.total,
        })
    }

    /// Download filename convention shared with the proxy endpoint.
    pub fn download_filename(&self) -> String {
        receipt_filename(&self.nome_cliente)
    }
}

/// Normalized payload sent to the receipt backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub nome_cliente: String,
    pub equipamento: String,
    pub descricao_servico: String,
    pub cep: String,
    pub uf: String,
    pub cidade: String,
    pub bairro: String,
    pub logradouro: String,
    pub data: String,
    pub total: f64,
}

/// A generated receipt, ready for download
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptPdf {
    pub filename: String,
    pub bytes: Bytes,
}

/// `recibo-<nomeCliente>.pdf`
pub fn receipt_filename(nome_cliente: &str) -> String {
    format!("recibo-{}.pdf", nome_cliente)
}

/// First required field missing from a raw proxy request body, if any.
///
/// Presence follows the JS-falsy semantics of the original contract: absent,
/// null, empty string, zero and false all count as missing, so `total: 0`
/// is rejected here as well.
pub fn missing_field(body: &Value) -> Option<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .find(|field| is_blank(body.get(**field)))
        .copied()
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v == 0.0).unwrap_or(false),
        Some(_) => false,
    }
}
