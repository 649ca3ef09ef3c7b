//! Proxy server module
//!
//! The endpoint mirrors the receipt backend contract but masks upstream
//! failures behind a fixed demonstration PDF; see `handlers` for the branch
//! and `fallback` for the combinator.

pub mod fallback;
pub mod handlers;
pub mod router;

pub use fallback::attempt_or_fallback;
pub use handlers::AppState;
pub use router::build_router;
