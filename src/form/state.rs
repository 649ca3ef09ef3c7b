//! Reducer-style form state updates
//!
//! Each input handler is a pure function from the previous state plus a
//! [`FieldChange`] to the next state; the controller never mutates fields in
//! place.

use crate::core::format::{datetime_local_value, format_cep};
use crate::core::receipt::ReceiptRequest;
use chrono::offset::Local;

/// A single input change coming from the form
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    NomeCliente(String),
    Equipamento(String),
    DescricaoServico(String),
    /// Raw CEP input; masked by the reducer
    Cep(String),
    Uf(String),
    Cidade(String),
    Bairro(String),
    Logradouro(String),
    Data(String),
    /// Raw total input; coerced to a number, invalid input becomes 0
    Total(String),
}

/// Fresh form state: current local datetime, zeroed total, everything else
/// empty.
pub fn initial_state() -> ReceiptRequest {
    ReceiptRequest::new(datetime_local_value(Local::now()))
}

/// Apply one field change, returning the next state.
pub fn apply(state: ReceiptRequest, change: FieldChange) -> ReceiptRequest {
    let mut next = state;
    match change {
        FieldChange::NomeCliente(value) => next.nome_cliente = value,
        FieldChange::Equipamento(value) => next.equipamento = value,
        FieldChange::DescricaoServico(value) => next.descricao_servico = value,
        FieldChange::Cep(raw) => next.cep = format_cep(&raw),
        FieldChange::Uf(value) => next.uf = value.chars().take(2).collect(),
        FieldChange::Cidade(value) => next.cidade = value,
        FieldChange::Bairro(value) => next.bairro = value,
        FieldChange::Logradouro(value) => next.logradouro = value,
        FieldChange::Data(value) => next.data = value,
        FieldChange::Total(raw) => next.total = raw.trim().parse().unwrap_or(0.0),
    }
    next
}
