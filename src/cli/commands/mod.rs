pub mod calendar;
pub mod contact;
pub mod form;
pub mod map;
pub mod submit;

use async_trait::async_trait;

use crate::Result;

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}
