//! Request Context
//!
//! Task-local state for the request currently being handled. The HTTP
//! layer sets it; error rendering reads it.

use std::future::Future;

tokio::task_local! {
    static CURRENT_REQUEST_ID: String;
}

/// Run `future` with `request_id` visible to [`current_request_id`]
pub async fn scope<F: Future>(request_id: String, future: F) -> F::Output {
    CURRENT_REQUEST_ID.scope(request_id, future).await
}

/// Request ID of the request being handled on this task, if any
#[must_use]
pub fn current_request_id() -> Option<String> {
    CURRENT_REQUEST_ID.try_with(Clone::clone).ok()
}
