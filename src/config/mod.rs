//! Configuration loading and management
//!
//! The development/production split is decided once at startup and injected
//! into the server state as an explicit [`Environment`] value; handlers never
//! consult the process environment themselves.

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Runtime environment discriminator
///
/// Development forwards receipt requests to the local backend before falling
/// back to the mock PDF; production goes straight to the mock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Read `APP_ENV`; anything other than "development" means production.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(value) if value.eq_ignore_ascii_case("development") => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

/// Complete configuration for the receipt generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Runtime environment (decides the proxy's upstream strategy)
    #[serde(default)]
    pub environment: Environment,

    /// Address the proxy server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Remote receipt API the form submits to directly
    #[serde(default = "default_remote_backend_url")]
    pub remote_backend_url: String,

    /// Local receipt API the proxy forwards to in development
    #[serde(default = "default_local_backend_url")]
    pub local_backend_url: String,

    /// Base URL of the ViaCEP lookup service
    #[serde(default = "default_viacep_base_url")]
    pub viacep_base_url: String,

    /// Public demonstration PDF used as the fallback
    #[serde(default = "default_mock_pdf_url")]
    pub mock_pdf_url: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_remote_backend_url() -> String {
    "https://frio-api.onrender.com/api/Recibos".to_string()
}

fn default_local_backend_url() -> String {
    "http://localhost:5207/api/Recibos".to_string()
}

fn default_viacep_base_url() -> String {
    "https://viacep.com.br/ws".to_string()
}

fn default_mock_pdf_url() -> String {
    "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            bind_addr: default_bind_addr(),
            remote_backend_url: default_remote_backend_url(),
            local_backend_url: default_local_backend_url(),
            viacep_base_url: default_viacep_base_url(),
            mock_pdf_url: default_mock_pdf_url(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_string(),
            message: err.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the startup configuration: the file named by `RECIBOS_CONFIG`
    /// when set, defaults otherwise. `APP_ENV`, when set, overrides the
    /// environment either way.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("RECIBOS_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        if std::env::var("APP_ENV").is_ok() {
            config.environment = Environment::from_env();
        }
        Ok(config)
    }
}
