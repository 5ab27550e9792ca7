use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use folders_fixture::DEFAULT_ORG_ID;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Organization whose folders the demo fetches
    #[serde(default = "default_org_id")]
    pub org_id: String,

    /// Page size for the paginated walk; 0 disables the walk
    #[serde(default = "default_page_limit")]
    pub page_limit: i32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_org_id() -> String {
    DEFAULT_ORG_ID.to_string()
}

fn default_page_limit() -> i32 {
    0
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("FOLDERS"))
            .build()?
            .try_deserialize()
    }
}
