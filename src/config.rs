use serde::Deserialize;

/// Endpoint used when no configuration names another one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8090/url/categoria";

/// Configuration options for the category client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the category REST endpoint.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

#[cfg(feature = "cli")]
impl ClientConfig {
    /// Load an optional `config.yaml` and apply `INTRANET_*` environment
    /// overrides on top of it.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("INTRANET"))
            .build()?
            .try_deserialize()
    }
}
