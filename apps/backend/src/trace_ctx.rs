//! Task-local trace context for web requests.
//!
//! Minimal API for reading the current request's trace_id from anywhere in
//! the request pipeline, backed by Tokio task-local storage. The scope is
//! established by the `TraceSpan` middleware; error rendering reads it so
//! every error body ships with the id of the request that produced it.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Get the trace_id for the current task.
/// Returns "unknown" outside of a request context.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn outside_context_is_unknown() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn inside_context_returns_the_set_id() {
        let id = "trace-abc-123".to_string();
        with_trace_id(id.clone(), async {
            assert_eq!(trace_id(), id);
        })
        .await;
        assert_eq!(trace_id(), "unknown");
    }
}
