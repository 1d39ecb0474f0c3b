use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Google Apps Script web app that appends rows to the guest spreadsheet
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbx-MZrNd63RtdYK_xXmmA0eYJAakpKxMNAYWQJX6Tq87ZGGb_hgHSrVR03lNeN81FzF/exec";

/// Top-level configuration, every section optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsvpConfig {
    pub submit: SubmitConfig,
    pub ui: UiConfig,
    pub downloads: DownloadsConfig,
}

/// Where and how the record is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Confetti, balloons, fish and glasses
    pub animations: bool,
    /// Terminal bell on pops and catches
    pub sound: bool,
    /// Redraw interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animations: true,
            sound: true,
            tick_rate_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadsConfig {
    /// Where the calendar file is saved. Defaults to the user's download folder.
    pub directory: Option<PathBuf>,
}

/// Values given on the command line, applied over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub no_animations: bool,
    pub mute: bool,
}
