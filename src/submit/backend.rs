//! Submission backend trait - abstraction over the form endpoint
//!
//! - `HttpBackend` posts to the real endpoint
//! - tests plug in canned replies or failures

use async_trait::async_trait;

use crate::response::Submission;
use crate::Result;

/// Trait for anything that can deliver a completed record
#[async_trait]
pub trait SubmitBackend: Send + Sync {
    /// Send the record and hand back the reply body.
    ///
    /// `Ok(None)` means the request went through but the body could not be
    /// read. `Err` is reserved for transport failures.
    async fn send(&self, submission: &Submission) -> Result<Option<String>>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;
}

/// Backend that replies with a fixed body, for tests
#[cfg(test)]
pub struct MockBackend {
    pub reply: Option<String>,
}

#[cfg(test)]
#[async_trait]
impl SubmitBackend for MockBackend {
    async fn send(&self, _submission: &Submission) -> Result<Option<String>> {
        Ok(self.reply.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
