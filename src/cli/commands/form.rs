use async_trait::async_trait;

use super::CommandHandler;
use crate::config::RsvpConfig;
use crate::Result;

/// Handler for the interactive `form` command
pub struct FormCommand {
    pub config: RsvpConfig,
}

#[async_trait]
impl CommandHandler for FormCommand {
    #[cfg(feature = "tui")]
    async fn execute(&self) -> Result<()> {
        crate::cli::tui::run(self.config.clone()).await
    }

    #[cfg(not(feature = "tui"))]
    async fn execute(&self) -> Result<()> {
        Err(crate::RsvpError::Config(
            "this build has no interactive wizard; use `rsvp submit` instead".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "form"
    }
}

impl FormCommand {
    pub fn new(config: RsvpConfig) -> Self {
        Self { config }
    }
}
