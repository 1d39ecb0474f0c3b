use async_trait::async_trait;

use super::CommandHandler;
use crate::party::{self, CONTACT_MESSAGE};
use crate::Result;

/// Handler for the `contact` command
pub struct ContactCommand {
    pub open: bool,
}

#[async_trait]
impl CommandHandler for ContactCommand {
    async fn execute(&self) -> Result<()> {
        let link = party::contact_link(CONTACT_MESSAGE);
        if self.open {
            party::open_url(&link)
        } else {
            println!("{}", link);
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "contact"
    }
}

impl ContactCommand {
    pub fn new(open: bool) -> Self {
        Self { open }
    }
}
