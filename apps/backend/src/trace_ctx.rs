//! Task-local trace id for the request being served.
//!
//! `RequestTrace` scopes each request future with its id so that error
//! responses and DB error mapping can tag themselves without threading the
//! request through every layer.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_outside_scope() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn scoped_id_visible_then_released() {
        let seen = with_trace_id("abc-123".to_string(), async { trace_id() }).await;
        assert_eq!(seen, "abc-123");
        assert_eq!(trace_id(), "unknown");
    }
}
