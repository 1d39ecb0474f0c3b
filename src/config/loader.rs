use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::types::{ConfigOverrides, RsvpConfig};
use crate::io::paths::RsvpPaths;
use crate::{Result, RsvpError};

const MIN_TIMEOUT_SECONDS: u64 = 1;
const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 1000;

/// Configuration loader for `config.yaml`
pub struct ConfigLoader {
    /// Path given with `--config`; must exist when set
    explicit: Option<PathBuf>,
    /// Fallback path in the platform config directory; may be absent
    default_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(explicit: Option<PathBuf>, paths: Option<&RsvpPaths>) -> Self {
        Self {
            explicit,
            default_path: paths.map(RsvpPaths::config_file),
        }
    }

    /// Resolve, read, override and validate the configuration
    pub fn load(&self, overrides: &ConfigOverrides) -> Result<RsvpConfig> {
        let mut config = match (&self.explicit, &self.default_path) {
            (Some(path), _) => Self::load_file(path)?,
            (None, Some(path)) if path.exists() => Self::load_file(path)?,
            _ => {
                debug!("no configuration file, using defaults");
                RsvpConfig::default()
            }
        };

        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from path
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<RsvpConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RsvpError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: RsvpConfig = serde_yaml_ng::from_str(&contents)
            .inspect_err(|e| warn!(path = %path.display(), error = %e, "config file is not valid YAML"))?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

impl RsvpConfig {
    /// Apply command line values on top of the file
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(endpoint) = &overrides.endpoint {
            self.submit.endpoint = endpoint.clone();
        }
        if overrides.no_animations {
            self.ui.animations = false;
        }
        if overrides.mute {
            self.ui.sound = false;
        }
    }

    /// Reject unusable values and clamp out-of-range ones
    pub fn validate(&mut self) -> Result<()> {
        let endpoint = reqwest::Url::parse(&self.submit.endpoint).map_err(|e| {
            RsvpError::Config(format!("Invalid endpoint '{}': {}", self.submit.endpoint, e))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(RsvpError::Config(format!(
                "Endpoint must be http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        if self.submit.timeout_seconds < MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                self.submit.timeout_seconds, MIN_TIMEOUT_SECONDS
            );
            self.submit.timeout_seconds = MIN_TIMEOUT_SECONDS;
        }

        let tick = self.ui.tick_rate_ms.clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS);
        if tick != self.ui.tick_rate_ms {
            warn!(
                "Configured tick_rate_ms={} is out of range; using {}",
                self.ui.tick_rate_ms, tick
            );
            self.ui.tick_rate_ms = tick;
        }

        Ok(())
    }
}
