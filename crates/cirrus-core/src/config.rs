//! Client configuration types.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a node client.
#[derive(Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ClientConfig {
    /// Credential forwarded as `apikey` with every remote command.
    pub apikey: String,

    /// Aggregate folder sizes when listing the current view.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_folder_size: bool,
}

fn default_true() -> bool {
    true
}

impl ClientConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.apikey {
            Some(ref key) if key.is_empty() => Err("API key cannot be empty".to_string()),
            Some(_) => Ok(()),
            None => Err("API key is required".to_string()),
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Create a config with defaults for a credential.
    pub fn new(apikey: impl Into<String>) -> Self {
        Self {
            apikey: apikey.into(),
            include_folder_size: true,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("apikey", &"<redacted>")
            .field("include_folder_size", &self.include_folder_size)
            .finish()
    }
}
