/*
[INPUT]:  Optional config file plus GEMINI_* environment variables
[OUTPUT]: Credentials, environment, and HTTP settings for the client
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result};
use gemini_adapter::{ClientConfig, Credentials, Environment, GeminiClient};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration for the CLI.
///
/// Values come from the file given with `--config` (YAML, TOML or JSON by
/// extension), overridden by `GEMINI_API_KEY`, `GEMINI_API_SECRET`,
/// `GEMINI_SANDBOX` and `GEMINI_HTTP__*`.
#[derive(Clone, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    /// Use api.sandbox.gemini.com instead of production
    #[serde(default)]
    pub sandbox: bool,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Timeouts in seconds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_public_timeout_secs")]
    pub public_timeout_secs: u64,
    #[serde(default = "default_private_timeout_secs")]
    pub private_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            public_timeout_secs: default_public_timeout_secs(),
            private_timeout_secs: default_private_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_public_timeout_secs() -> u64 {
    600
}

fn default_private_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let cfg = builder
            .add_source(
                config::Environment::with_prefix("GEMINI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("read configuration sources")?;

        let config: Self = cfg.try_deserialize().context("parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.api_key.is_empty() == self.api_secret.is_empty(),
            "api_key and api_secret must be set together"
        );
        anyhow::ensure!(
            self.http.public_timeout_secs > 0
                && self.http.private_timeout_secs > 0
                && self.http.connect_timeout_secs > 0,
            "timeouts must be positive"
        );
        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn environment(&self) -> Environment {
        Environment::from_sandbox(self.sandbox)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            public_timeout: Duration::from_secs(self.http.public_timeout_secs),
            private_timeout: Duration::from_secs(self.http.private_timeout_secs),
            connect_timeout: Duration::from_secs(self.http.connect_timeout_secs),
            ..ClientConfig::default()
        }
    }

    pub fn build_client(&self) -> Result<GeminiClient> {
        GeminiClient::with_config(
            Credentials::new(self.api_key.as_str(), self.api_secret.as_bytes()),
            self.environment(),
            self.client_config(),
        )
        .context("build Gemini client")
    }
}
