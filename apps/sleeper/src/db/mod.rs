pub mod txn;

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Bound a store call by `limit`. Expiry drops the in-flight query and
/// surfaces as an infra timeout.
pub async fn with_timeout<T, Fut>(limit: Duration, op: &'static str, fut: Fut) -> Result<T, DomainError>
where
    Fut: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            let timeout_ms = limit.as_millis() as u64;
            warn!(op, timeout_ms, "store call timed out");
            Err(DomainError::infra(
                InfraErrorKind::Timeout,
                format!("{op} exceeded {timeout_ms}ms"),
            ))
        }
    }
}
