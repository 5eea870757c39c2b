//! Configuration model loaded from external sources.

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::DEFAULT_ITEMS_PER_PAGE;

/// Prefix of the environment variables overriding file settings,
/// e.g. `YATRISETU_BASE_URL`.
pub const ENV_PREFIX: &str = "YATRISETU";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings of the admin console client.
pub struct ConsoleConfig {
    /// Root of the backend, e.g. `http://localhost:5000`.
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ConsoleConfig {
    /// Reads the optional YAML file at `path`, then the environment on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
