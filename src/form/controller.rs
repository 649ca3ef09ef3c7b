//! Form controller: owns the form state and drives lookups and submission
//!
//! The controller is UI-agnostic. A frontend feeds it [`FieldChange`]s and
//! blur/submit events, then renders the current [`Submission`] state and any
//! pending [`Notice`]s.

use crate::client::cep::CepLookup;
use crate::client::receipt::ReceiptBackend;
use crate::core::error::CepError;
use crate::core::receipt::{ReceiptPdf, ReceiptRequest};
use crate::form::notice::Notice;
use crate::form::state::{self, FieldChange};
use std::sync::Arc;
use tracing::{debug, warn};

/// Submission lifecycle of the form
///
/// States are mutually exclusive; submitting again from `Failed` clears the
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Idle,
    Submitting,
    Completed(ReceiptPdf),
    Failed(String),
}

impl Submission {
    /// Whether a request is outstanding (the submit control is disabled).
    pub fn is_busy(&self) -> bool {
        matches!(self, Submission::Submitting)
    }
}

/// Controller for the service-receipt form
pub struct FormController {
    state: ReceiptRequest,
    submission: Submission,
    looking_up: bool,
    notices: Vec<Notice>,
    cep_lookup: Arc<dyn CepLookup>,
    backend: Arc<dyn ReceiptBackend>,
}

impl FormController {
    /// New controller with a fresh form state (current local datetime,
    /// zeroed total).
    pub fn new(cep_lookup: Arc<dyn CepLookup>, backend: Arc<dyn ReceiptBackend>) -> Self {
        Self {
            state: state::initial_state(),
            submission: Submission::Idle,
            looking_up: false,
            notices: Vec::new(),
            cep_lookup,
            backend,
        }
    }

    pub fn state(&self) -> &ReceiptRequest {
        &self.state
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Whether a CEP lookup is in flight.
    pub fn is_looking_up(&self) -> bool {
        self.looking_up
    }

    /// The generated receipt, once submission completed.
    pub fn download(&self) -> Option<&ReceiptPdf> {
        match &self.submission {
            Submission::Completed(pdf) => Some(pdf),
            _ => None,
        }
    }

    /// Drain pending notices for rendering.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Merge an input change into the form state.
    pub fn update(&mut self, change: FieldChange) {
        self.state = state::apply(self.state.clone(), change);
    }

    /// CEP field lost focus: look up the address when the code is complete.
    ///
    /// On success the address fields are overwritten; on failure they are
    /// left untouched and a notice is surfaced.
    pub async fn cep_blur(&mut self) {
        if self.looking_up || !crate::core::format::is_complete_cep(&self.state.cep) {
            return;
        }

        self.looking_up = true;
        let digits = crate::core::format::strip_cep(&self.state.cep);
        let result = self.cep_lookup.lookup(&digits).await;
        self.looking_up = false;

        match result {
            Ok(address) => {
                debug!(cep = %digits, "endereço preenchido automaticamente");
                self.state.logradouro = address.logradouro;
                self.state.bairro = address.bairro;
                self.state.cidade = address.localidade;
                self.state.uf = address.uf;
            }
            Err(CepError::NotFound) => {
                self.notices.push(Notice::destructive(
                    "CEP não encontrado",
                    "Verifique o CEP informado",
                ));
            }
            Err(CepError::Transport { message }) => {
                warn!(%message, "falha na consulta de CEP");
                self.notices.push(Notice::destructive(
                    "Erro ao buscar CEP",
                    "Ocorreu um erro ao buscar o CEP",
                ));
            }
        }
    }

    /// Validate, normalize and submit the form, updating the submission
    /// state. Validation failures abort before any network call.
    pub async fn submit(&mut self) {
        if self.submission.is_busy() {
            return;
        }
        // Re-submission from the error state resets the error.
        if matches!(self.submission, Submission::Failed(_)) {
            self.submission = Submission::Idle;
        }

        let payload = match self.state.normalize() {
            Ok(payload) => payload,
            Err(err) => {
                self.notices
                    .push(Notice::destructive(err.title(), err.to_string()));
                return;
            }
        };
        let body = match serde_json::to_value(&payload) {
            Ok(body) => body,
            Err(err) => {
                self.submission = Submission::Failed(err.to_string());
                return;
            }
        };

        self.submission = Submission::Submitting;
        self.notices.push(Notice::info(
            "Gerando recibo",
            "Aguarde enquanto o recibo está sendo gerado...",
        ));

        match self.backend.generate(&body).await {
            Ok(bytes) => {
                self.submission = Submission::Completed(ReceiptPdf {
                    filename: self.state.download_filename(),
                    bytes,
                });
                self.notices.push(Notice::success(
                    "Recibo gerado com sucesso!",
                    "Clique no botão para fazer o download",
                ));
            }
            Err(err) => {
                let message = err.to_string();
                warn!(%message, "falha ao gerar recibo");
                self.notices
                    .push(Notice::destructive("Erro ao gerar recibo", message.clone()));
                self.submission = Submission::Failed(message);
            }
        }
    }
}
