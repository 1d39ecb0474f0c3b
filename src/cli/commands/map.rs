use async_trait::async_trait;
use tracing::info;

use super::CommandHandler;
use crate::party::{self, PartyEvent};
use crate::Result;

/// Handler for the `map` command
pub struct MapCommand {
    pub open: bool,
}

#[async_trait]
impl CommandHandler for MapCommand {
    async fn execute(&self) -> Result<()> {
        let event = PartyEvent::birthday();
        let url = party::google_maps_url(&event);
        if self.open {
            info!(location = event.location, "opening the venue map");
            party::open_url(&url)
        } else {
            println!("{}", url);
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "map"
    }
}

impl MapCommand {
    pub fn new(open: bool) -> Self {
        Self { open }
    }
}
