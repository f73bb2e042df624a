use crate::client::core::AutoMlClient;
use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::Result;

/// Builder for [`AutoMlClient`].
///
/// Without an explicit config the environment is consulted through
/// [`ClientConfig::load`].
pub struct AutoMlClientBuilder {
    config: Option<ClientConfig>,
    access_token: Option<String>,
    /// Override the endpoint (primarily for testing with mock servers)
    endpoint_override: Option<String>,
    timeout_secs: Option<u64>,
}

impl AutoMlClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            access_token: None,
            endpoint_override: None,
            timeout_secs: None,
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this bearer token instead of the keyring or environment.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn endpoint_override(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn build(self) -> Result<AutoMlClient> {
        let mut config = match self.config {
            Some(config) => config,
            None => ClientConfig::load()?,
        };
        if let Some(endpoint) = self.endpoint_override {
            config.endpoint = endpoint;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        config.validate()?;

        let transport = HttpTransport::new(&config, self.access_token)?;
        Ok(AutoMlClient { transport })
    }
}

impl Default for AutoMlClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
