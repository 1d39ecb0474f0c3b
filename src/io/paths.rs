use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};

use crate::config::DownloadsConfig;
use crate::{Result, RsvpError};

/// Platform locations used by the wizard
#[derive(Debug, Clone)]
pub struct RsvpPaths {
    /// Configuration directory holding `config.yaml`
    pub config_dir: PathBuf,
    /// Rolling log files for the interactive wizard
    pub log_dir: PathBuf,
}

impl RsvpPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "rsvp").ok_or_else(|| {
            RsvpError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            log_dir: dirs.data_local_dir().join("logs"),
        })
    }

    /// Paths rooted in an arbitrary directory
    pub fn under(root: &Path) -> Self {
        Self {
            config_dir: root.join("config"),
            log_dir: root.join("logs"),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.yaml")
    }

    /// Folder the calendar file goes to: configured, else the user's
    /// download folder, else the working directory
    pub fn download_dir(config: &DownloadsConfig) -> PathBuf {
        if let Some(dir) = &config.directory {
            return dir.clone();
        }

        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_download_dir_wins() {
        let config = DownloadsConfig {
            directory: Some(PathBuf::from("/tmp/convites")),
        };
        assert_eq!(RsvpPaths::download_dir(&config), PathBuf::from("/tmp/convites"));
    }

    #[test]
    fn paths_under_root() {
        let paths = RsvpPaths::under(Path::new("/srv/rsvp"));
        assert_eq!(paths.config_file(), PathBuf::from("/srv/rsvp/config/config.yaml"));
        assert_eq!(paths.log_dir, PathBuf::from("/srv/rsvp/logs"));
    }
}
