use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use super::CommandHandler;
use crate::cli::CalendarTarget;
use crate::config::RsvpConfig;
use crate::io::RsvpPaths;
use crate::party::{self, PartyEvent};
use crate::Result;

/// Handler for `calendar google` and `calendar ics`
pub struct CalendarCommand {
    pub target: CalendarTarget,
    pub config: RsvpConfig,
}

#[async_trait]
impl CommandHandler for CalendarCommand {
    async fn execute(&self) -> Result<()> {
        let event = PartyEvent::birthday();
        match &self.target {
            CalendarTarget::Google { open } => {
                let url = party::google_calendar_url(&event);
                if *open {
                    party::open_url(&url)?;
                    info!("opened Google Calendar");
                } else {
                    println!("{}", url);
                }
            }
            CalendarTarget::Ics { output } => {
                let dir = self.output_dir(output.as_ref());
                let path = party::write_ics(&dir, &event)?;
                println!("{}", path.display());
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "calendar"
    }
}

impl CalendarCommand {
    pub fn new(target: CalendarTarget, config: RsvpConfig) -> Self {
        Self { target, config }
    }

    fn output_dir(&self, output: Option<&PathBuf>) -> PathBuf {
        output
            .cloned()
            .unwrap_or_else(|| RsvpPaths::download_dir(&self.config.downloads))
    }
}
