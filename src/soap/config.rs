//! Endpoint configuration.
//!
//! Defaults point to the carrier's stage system. Override via environment
//! variables or explicit construction for production or local mocks.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::core::PaketError;

pub const DEFAULT_STAGE_URL: &str = "https://public-ws-stage.dpd.com/";
pub const DEFAULT_PRODUCTION_URL: &str = "https://public-ws.dpd.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which carrier system requests are sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    #[default]
    Stage,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stage => "stage",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = PaketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stage" => Ok(Self::Stage),
            "production" | "live" => Ok(Self::Production),
            other => Err(PaketError::Config(format!(
                "unknown environment '{other}', expected stage or production"
            ))),
        }
    }
}

/// Base URLs, selected environment and transport timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub environment: Environment,
    /// Request timeout in seconds, applied by the HTTP transport.
    pub timeout_secs: u64,
    pub stage_url: Url,
    pub production_url: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Stage,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            stage_url: default_url(DEFAULT_STAGE_URL),
            production_url: default_url(DEFAULT_PRODUCTION_URL),
        }
    }
}

impl ApiConfig {
    /// Default URLs with the production system selected.
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `DPD_ENVIRONMENT`: `stage` or `production` (default: `stage`)
    /// - `DPD_TIMEOUT_SECS` (default: 30)
    /// - `DPD_STAGE_URL` (default: `https://public-ws-stage.dpd.com/`)
    /// - `DPD_PRODUCTION_URL` (default: `https://public-ws.dpd.com/`)
    pub fn from_env() -> Result<Self, PaketError> {
        let environment = match std::env::var("DPD_ENVIRONMENT") {
            Ok(raw) => raw.parse()?,
            Err(_) => Environment::Stage,
        };
        let timeout_secs = match std::env::var("DPD_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                PaketError::Config(format!("invalid DPD_TIMEOUT_SECS '{raw}': {e}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            environment,
            timeout_secs,
            stage_url: env_url("DPD_STAGE_URL", DEFAULT_STAGE_URL)?,
            production_url: env_url("DPD_PRODUCTION_URL", DEFAULT_PRODUCTION_URL)?,
        })
    }

    /// Point both environments at one base URL, e.g. a local mock server.
    pub fn with_base_url(base: &str) -> Result<Self, PaketError> {
        let url = parse_url("base URL", base)?;
        Ok(Self {
            stage_url: url.clone(),
            production_url: url,
            ..Self::default()
        })
    }

    /// Base URL of the selected environment.
    pub fn base_url(&self) -> &Url {
        match self.environment {
            Environment::Stage => &self.stage_url,
            Environment::Production => &self.production_url,
        }
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, PaketError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}

/// Parse a base URL. The path always ends in `/` so that service paths are
/// joined below it rather than replacing its last segment.
fn parse_url(what: &str, raw: &str) -> Result<Url, PaketError> {
    let mut url =
        Url::parse(raw).map_err(|e| PaketError::Config(format!("invalid URL for {what}: {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn default_url(raw: &str) -> Url {
    Url::parse(raw).expect("built-in endpoint URL")
}
