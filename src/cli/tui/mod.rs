/// Terminal User Interface for the RSVP wizard
pub mod app;
pub mod effects;
pub mod events;
pub mod screens;
pub mod theme;

use std::sync::Arc;

use crate::config::RsvpConfig;
use crate::submit::HttpBackend;
use crate::Result;

/// Run the interactive wizard against the configured endpoint
pub async fn run(config: RsvpConfig) -> Result<()> {
    let backend = Arc::new(HttpBackend::new(&config.submit)?);
    let app = app::App::new(config, backend);
    app.run().await
}
