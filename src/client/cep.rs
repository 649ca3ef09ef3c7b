//! Postal-code lookup client (ViaCEP)

use crate::core::error::CepError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Address returned by a successful lookup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CepAddress {
    pub logradouro: String,
    pub bairro: String,
    /// City; ViaCEP names this field "localidade"
    pub localidade: String,
    pub uf: String,
}

/// Postal-code lookup service
#[async_trait]
pub trait CepLookup: Send + Sync {
    /// Resolve a digits-only CEP ("01310930") into an address.
    async fn lookup(&self, cep_digits: &str) -> Result<CepAddress, CepError>;
}

/// ViaCEP HTTP client (`GET {base}/{cep}/json/`)
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CepLookup for ViaCepClient {
    async fn lookup(&self, cep_digits: &str) -> Result<CepAddress, CepError> {
        let url = format!("{}/{}/json/", self.base_url.trim_end_matches('/'), cep_digits);
        debug!(%url, "consultando CEP");

        let body: Value = self.client.get(&url).send().await?.json().await?;

        // ViaCEP signals an unknown code with {"erro": true} (older
        // deployments return the string "true").
        let not_found = match body.get("erro") {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag == "true",
            _ => false,
        };
        if not_found {
            return Err(CepError::NotFound);
        }

        serde_json::from_value(body).map_err(|err| CepError::Transport {
            message: err.to_string(),
        })
    }
}
