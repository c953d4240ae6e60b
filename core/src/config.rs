//! Construction-time configuration for `BanggoodClient`.

use std::collections::HashMap;
use std::time::Duration;

use config::{Config, ConfigError};
use serde::Deserialize;

pub const PRODUCTION_URL: &str = "https://api.banggood.com";
pub const BETA_URL: &str = "https://apibeta.banggood.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which vendor host the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    /// The vendor's test host. Requests are tagged with `apiTest=1`.
    Beta,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Beta => BETA_URL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub app_id: String,
    pub app_secret: String,
    pub environment: Environment,
    /// Replaces the environment's host, e.g. to point at a local mock.
    pub base_url_override: Option<String>,
    /// Upper bound on every request. A `RequestContext` deadline can only
    /// shorten it.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(app_id: &str, app_secret: &str) -> Self {
        Self {
            app_id: app_id.to_string(),
            app_secret: app_secret.to_string(),
            environment: Environment::Production,
            base_url_override: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn beta(mut self) -> Self {
        self.environment = Environment::Beta;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url_override = Some(base_url.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with any trailing `/` removed.
    pub fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or(self.environment.base_url())
            .trim_end_matches('/')
    }

    pub fn api_test(&self) -> bool {
        self.environment == Environment::Beta
    }

    /// Load configuration from `BANGGOOD_*` environment variables.
    ///
    /// `BANGGOOD_APP_ID` and `BANGGOOD_APP_SECRET` are required.
    /// `BANGGOOD_ENVIRONMENT` (`production` | `beta`), `BANGGOOD_BASE_URL` and
    /// `BANGGOOD_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(config::Environment::with_prefix("BANGGOOD"))
    }

    /// Same as `from_env` but reads from the given variables instead of the
    /// process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(config::Environment::with_prefix("BANGGOOD").source(Some(vars)))
    }

    fn load(source: config::Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(Self {
            app_id: settings.app_id,
            app_secret: settings.app_secret,
            environment: settings.environment,
            base_url_override: settings.base_url,
            timeout: settings
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

#[derive(Debug, Deserialize)]
struct EnvSettings {
    app_id: String,
    app_secret: String,
    #[serde(default)]
    environment: Environment,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}
