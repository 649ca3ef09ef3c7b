//! Outbound HTTP collaborators
//!
//! Every remote service sits behind a trait so the form controller and the
//! proxy handlers can be exercised with stub implementations in tests.

pub mod cep;
pub mod receipt;

pub use cep::{CepAddress, CepLookup, ViaCepClient};
pub use receipt::{HttpPdfSource, HttpReceiptBackend, PdfSource, ReceiptBackend};
