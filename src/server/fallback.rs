//! Attempt-or-fallback combinator
//!
//! Runs a fallible primary operation and, whenever it fails for any reason,
//! returns the fallback's result instead. The primary error is logged, never
//! surfaced.

use std::fmt::Display;
use std::future::Future;
use tracing::warn;

/// Return the primary result when it succeeds, the fallback's result
/// otherwise.
pub async fn attempt_or_fallback<T, PE, FE, P, F>(primary: P, fallback: F) -> Result<T, FE>
where
    PE: Display,
    P: Future<Output = Result<T, PE>>,
    F: Future<Output = Result<T, FE>>,
{
    match primary.await {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!("operação primária falhou, usando fallback: {err}");
            fallback.await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_primary_success_skips_fallback() {
        let result: Result<i32, &str> =
            block_on(attempt_or_fallback(async { Ok::<_, &str>(1) }, async {
                Ok(2)
            }));
        assert_eq!(result, Ok(1));
    }

    #[test]
    fn test_primary_failure_uses_fallback() {
        let result: Result<i32, &str> =
            block_on(attempt_or_fallback(
                async { Err::<i32, _>("down") },
                async { Ok(2) },
            ));
        assert_eq!(result, Ok(2));
    }

    #[test]
    fn test_both_failing_surfaces_fallback_error() {
        let result: Result<i32, &str> = block_on(attempt_or_fallback(
            async { Err::<i32, _>("down") },
            async { Err::<i32, _>("mock down") },
        ));
        assert_eq!(result, Err("mock down"));
    }

    #[test]
    fn test_fallback_not_awaited_on_success() {
        // The fallback future must stay cold when the primary succeeds.
        let touched = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = touched.clone();
        let fallback = async move {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
            Ok::<_, &str>(2)
        };
        let result = block_on(attempt_or_fallback(async { Ok::<_, &str>(1) }, fallback));
        assert_eq!(result, Ok(1));
        assert!(!touched.load(std::sync::atomic::Ordering::SeqCst));
    }
}
