//! Client configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file named by
//! `AUTOML_CONFIG`, then individual environment variables:
//!
//! - `AUTOML_ENDPOINT` (default `https://automl.googleapis.com`)
//! - `AUTOML_LOCATION` (default `us-central1`)
//! - `AUTOML_HTTP_TIMEOUT_SECS` (default 30)
//! - `AUTOML_PROXY_URL`

use crate::resource::{is_valid_location, DEFAULT_LOCATION};
use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://automl.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub endpoint: String,
    pub location: String,
    pub timeout_secs: u64,
    pub proxy_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy_url: None,
        }
    }
}

impl ClientConfig {
    /// Defaults, then `AUTOML_CONFIG`, then the process environment.
    pub fn load() -> Result<Self> {
        let base = match std::env::var("AUTOML_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_yaml_file(path)?,
            _ => Self::default(),
        };
        let config = base.with_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            Error::Configuration { message, context } => Error::Configuration {
                message,
                context: context.with_field_path(path.display().to_string()),
            },
            other => other,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid config file: {e}"),
                ErrorContext::new().with_source("config"),
            )
        })
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("AUTOML_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(location) = lookup("AUTOML_LOCATION") {
            self.location = location;
        }
        if let Some(raw) = lookup("AUTOML_HTTP_TIMEOUT_SECS") {
            self.timeout_secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    format!("'{raw}' is not a number of seconds"),
                    ErrorContext::new()
                        .with_field_path("AUTOML_HTTP_TIMEOUT_SECS")
                        .with_source("config"),
                )
            })?;
        }
        if let Some(proxy) = lookup("AUTOML_PROXY_URL") {
            self.proxy_url = Some(proxy).filter(|p| !p.trim().is_empty());
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.endpoint).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid endpoint '{}': {e}", self.endpoint),
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_source("config"),
            )
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("endpoint must be http(s), got '{}'", endpoint.scheme()),
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_source("config"),
            ));
        }
        if !is_valid_location(&self.location) {
            return Err(Error::configuration_with_context(
                format!("invalid location '{}'", self.location),
                ErrorContext::new()
                    .with_field_path("location")
                    .with_source("config"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::configuration_with_context(
                "timeout must be at least one second",
                ErrorContext::new()
                    .with_field_path("timeout_secs")
                    .with_source("config"),
            ));
        }
        Ok(())
    }
}
