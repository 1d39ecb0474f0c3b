//! Delivery of the finished record to the form endpoint

pub mod backend;
pub mod http;

pub use backend::SubmitBackend;
pub use http::HttpBackend;

use serde_json::Value;
use tracing::{info, warn};

use crate::response::Submission;

/// Shown when the endpoint reports an error without saying which
pub const UNKNOWN_ERROR_MESSAGE: &str = "Ocorreu um erro desconhecido.";

/// What one submission attempt amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// The endpoint answered and said no
    Rejected(String),
    /// The request could not complete
    TransportFailed,
}

/// Send `submission` once. No retries; a second call sends a duplicate.
pub async fn submit(backend: &dyn SubmitBackend, submission: &Submission) -> SubmitOutcome {
    match backend.send(submission).await {
        Ok(reply) => {
            let outcome = interpret_reply(reply.as_deref());
            info!(backend = backend.name(), ?outcome, "submission finished");
            outcome
        }
        Err(e) => {
            warn!(backend = backend.name(), error = %e, "submission transport failure");
            SubmitOutcome::TransportFailed
        }
    }
}

/// Decide the outcome from the reply body.
///
/// Only a parsed JSON body can reject. A missing or non-JSON body counts as
/// accepted because the endpoint's transport does not reliably expose it.
pub fn interpret_reply(body: Option<&str>) -> SubmitOutcome {
    let Some(body) = body else {
        return SubmitOutcome::Accepted;
    };

    let Ok(reply) = serde_json::from_str::<Value>(body) else {
        return SubmitOutcome::Accepted;
    };

    if reply.get("result").and_then(Value::as_str) == Some("success") {
        return SubmitOutcome::Accepted;
    }

    let reason = reply
        .get("error")
        .and_then(error_text)
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
    SubmitOutcome::Rejected(reason)
}

/// Readable form of the reply's `error` field. Empty, false, zero and null
/// say nothing, so they fall back to the generic reason.
fn error_text(error: &Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(code) if code.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
