//! Wire-level tests for the HTTP clients
//!
//! Each test spins up an in-process axum server on a random port and points
//! the real reqwest-backed clients at it, verifying the status /
//! content-type / empty-body checks and the ViaCEP response handling.

use axum::Json;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use gerador_recibos::client::cep::{CepLookup, ViaCepClient};
use gerador_recibos::client::receipt::{
    HttpPdfSource, HttpReceiptBackend, PdfSource, ReceiptBackend,
};
use gerador_recibos::core::error::{BackendError, CepError};
use serde_json::json;
use std::net::SocketAddr;

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn payload() -> serde_json::Value {
    json!({ "nomeCliente": "Maria", "total": 150.0 })
}

// =============================================================================
// HttpReceiptBackend
// =============================================================================

#[tokio::test]
async fn test_backend_returns_pdf_bytes() {
    let app = Router::new().route(
        "/api/Recibos",
        post(|| async {
            ([(header::CONTENT_TYPE, "application/pdf")], "%PDF-1.4 ok").into_response()
        }),
    );
    let addr = spawn(app).await;

    let backend = HttpReceiptBackend::new(format!("http://{addr}/api/Recibos"));
    let bytes = backend.generate(&payload()).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-1.4 ok");
}

#[tokio::test]
async fn test_backend_error_status_extracts_json_message() {
    let app = Router::new().route(
        "/api/Recibos",
        post(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" }))).into_response()
        }),
    );
    let addr = spawn(app).await;

    let backend = HttpReceiptBackend::new(format!("http://{addr}/api/Recibos"));
    let err = backend.generate(&payload()).await.unwrap_err();
    assert_eq!(
        err,
        BackendError::Status {
            status: 500,
            message: "boom".to_string()
        }
    );
    assert_eq!(err.to_string(), "boom");
}

#[tokio::test]
async fn test_backend_error_status_without_json_uses_status_text() {
    let app = Router::new().route(
        "/api/Recibos",
        post(|| async { (StatusCode::BAD_GATEWAY, "plain failure").into_response() }),
    );
    let addr = spawn(app).await;

    let backend = HttpReceiptBackend::new(format!("http://{addr}/api/Recibos"));
    let err = backend.generate(&payload()).await.unwrap_err();
    match err {
        BackendError::Status { status, message } => {
            assert_eq!(status, 502);
            assert!(message.starts_with("Erro 502:"), "got: {message}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_backend_rejects_non_pdf_content_type() {
    let app = Router::new().route("/api/Recibos", post(|| async { "tudo certo" }));
    let addr = spawn(app).await;

    let backend = HttpReceiptBackend::new(format!("http://{addr}/api/Recibos"));
    let err = backend.generate(&payload()).await.unwrap_err();
    assert!(matches!(err, BackendError::NotPdf { .. }));
    assert_eq!(err.to_string(), "A resposta não é um PDF válido");
}

#[tokio::test]
async fn test_backend_rejects_empty_pdf() {
    let app = Router::new().route(
        "/api/Recibos",
        post(|| async { ([(header::CONTENT_TYPE, "application/pdf")], "").into_response() }),
    );
    let addr = spawn(app).await;

    let backend = HttpReceiptBackend::new(format!("http://{addr}/api/Recibos"));
    let err = backend.generate(&payload()).await.unwrap_err();
    assert_eq!(err, BackendError::EmptyPdf);
}

#[tokio::test]
async fn test_backend_unreachable_is_transport_error() {
    // Port 1 is never listening.
    let backend = HttpReceiptBackend::new("http://127.0.0.1:1/api/Recibos");
    let err = backend.generate(&payload()).await.unwrap_err();
    assert!(matches!(err, BackendError::Transport { .. }));
}

// =============================================================================
// HttpPdfSource
// =============================================================================

#[tokio::test]
async fn test_pdf_source_fetches_bytes() {
    let app = Router::new().route(
        "/dummy.pdf",
        get(|| async { ([(header::CONTENT_TYPE, "application/pdf")], "%PDF mock").into_response() }),
    );
    let addr = spawn(app).await;

    let source = HttpPdfSource::new(format!("http://{addr}/dummy.pdf"));
    let bytes = source.fetch().await.unwrap();
    assert_eq!(&bytes[..], b"%PDF mock");
}

#[tokio::test]
async fn test_pdf_source_404_is_fatal() {
    let app = Router::new();
    let addr = spawn(app).await;

    let source = HttpPdfSource::new(format!("http://{addr}/missing.pdf"));
    let err = source.fetch().await.unwrap_err();
    assert_eq!(err.to_string(), "Erro ao buscar PDF mock: 404");
}

// =============================================================================
// ViaCepClient
// =============================================================================

#[tokio::test]
async fn test_viacep_success_parses_address() {
    let app = Router::new().route(
        "/ws/{cep}/json/",
        get(|| async {
            Json(json!({
                "cep": "01310-930",
                "logradouro": "Av. Paulista",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP"
            }))
        }),
    );
    let addr = spawn(app).await;

    let client = ViaCepClient::new(format!("http://{addr}/ws"));
    let address = client.lookup("01310930").await.unwrap();
    assert_eq!(address.logradouro, "Av. Paulista");
    assert_eq!(address.bairro, "Bela Vista");
    assert_eq!(address.localidade, "São Paulo");
    assert_eq!(address.uf, "SP");
}

#[tokio::test]
async fn test_viacep_erro_flag_is_not_found() {
    let app = Router::new().route(
        "/ws/{cep}/json/",
        get(|| async { Json(json!({ "erro": true })) }),
    );
    let addr = spawn(app).await;

    let client = ViaCepClient::new(format!("http://{addr}/ws"));
    let err = client.lookup("99999999").await.unwrap_err();
    assert_eq!(err, CepError::NotFound);
}

#[tokio::test]
async fn test_viacep_string_erro_flag_is_not_found() {
    let app = Router::new().route(
        "/ws/{cep}/json/",
        get(|| async { Json(json!({ "erro": "true" })) }),
    );
    let addr = spawn(app).await;

    let client = ViaCepClient::new(format!("http://{addr}/ws"));
    let err = client.lookup("99999999").await.unwrap_err();
    assert_eq!(err, CepError::NotFound);
}

#[tokio::test]
async fn test_viacep_unreachable_is_transport_error() {
    let client = ViaCepClient::new("http://127.0.0.1:1/ws");
    let err = client.lookup("01310930").await.unwrap_err();
    assert!(matches!(err, CepError::Transport { .. }));
}
