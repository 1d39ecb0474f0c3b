use reqwest::Url;
use tracing::debug;

use crate::{Result, RsvpError};

/// Open `url` in the system browser without waiting for it.
///
/// Only `http` and `https` links are handed to the browser.
pub fn open_url(url: &str) -> Result<()> {
    let url = web_url(url)?;
    debug!(%url, "opening browser");
    webbrowser::open(url.as_str()).map_err(|e| RsvpError::Launch(format!("{} ({})", url, e)))
}

fn web_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| RsvpError::Launch(format!("{} ({})", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RsvpError::Launch(format!(
            "{} (unsupported scheme {})",
            raw, other
        ))),
    }
}
