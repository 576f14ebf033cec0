//! Kiosk configuration.
//!
//! Sources, later wins:
//! 1. built-in defaults
//! 2. `kiosk.toml` in the working directory (optional)
//! 3. `KIOSK_*` environment variables (`KIOSK_API_URL=http://10.0.0.5:3001`)

use std::time::Duration;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};

use super::error::{KioskError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

const CONFIG_FILE: &str = "kiosk";
const ENV_PREFIX: &str = "KIOSK";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KioskConfig {
    /// Backend origin; `/api/...` paths are appended to it.
    pub api_url: String,
    /// Session poll period.
    pub poll_interval_ms: u64,
    /// Per-request timeout for every HTTP call.
    pub request_timeout_secs: u64,
    /// Third-party QR rendering endpoint.
    pub qr_service_url: String,
    /// QR image edge in pixels.
    pub qr_size: u32,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval_ms: 1000,
            request_timeout_secs: 10,
            qr_service_url: DEFAULT_QR_SERVICE_URL.to_string(),
            qr_size: 400,
        }
    }
}

impl KioskConfig {
    /// Defaults, then `kiosk.toml` if present, then `KIOSK_*` env vars.
    pub fn load() -> Result<Self> {
        let builder = defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX));

        finish(builder)
    }

    /// Defaults overridden by an inline TOML document.
    #[cfg(test)]
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        use config::FileFormat;
        finish(defaults()?.add_source(File::from_str(toml, FileFormat::Toml)))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(self) -> Result<Self> {
        if self.poll_interval_ms == 0 {
            return Err(KioskError::Config("poll_interval_ms must be > 0".into()));
        }
        if self.qr_size == 0 {
            return Err(KioskError::Config("qr_size must be > 0".into()));
        }
        Ok(self)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder().add_source(Config::try_from(&KioskConfig::default())?))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<KioskConfig> {
    let config: KioskConfig = builder.build()?.try_deserialize()?;
    config.validate()
}
