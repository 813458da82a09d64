use std::collections::BTreeMap;

use contracts::enums::ResourceKind;
use contracts::shared::ResourceEndpoints;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    pub resources: BTreeMap<String, ResourceEndpoints>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiSettings {
    /// Empty means the window host on port 3000
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("no endpoints configured for {0}")]
    MissingResource(&'static str),

    #[error("unknown resource section [resources.{0}]")]
    UnknownResource(String),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[resources.vehicle_types]
collection = "/api/vehicle-types/"
item = "/api/vehicle-types/{id}/"
activate = { method = "PUT", path = "/api/vehicle-types/{id}/activate/" }
deactivate = { method = "PUT", path = "/api/vehicle-types/{id}/deactivate/" }
delete = { method = "DELETE", path = "/api/vehicle-types/{id}/" }

[resources.vehicle_sizes]
collection = "/api/vehicle-sizes/"
item = "/api/vehicle-sizes/{id}/"
activate = { method = "PUT", path = "/api/vehicle-sizes/{id}/activate/" }
deactivate = { method = "PUT", path = "/api/vehicle-sizes/{id}/deactivate/" }
delete = { method = "DELETE", path = "/api/vehicle-sizes/{id}/" }

[resources.vehicle_categories]
collection = "/api/vehicle-categories/"
item = "/api/vehicle-categories/{id}/"
activate = { method = "PUT", path = "/api/vehicle-categories/{id}/activate/" }
deactivate = { method = "PUT", path = "/api/vehicle-categories/{id}/deactivate/" }
delete = { method = "DELETE", path = "/api/vehicle-categories/{id}/" }

[resources.services]
collection = "/api/services/"
item = "/api/services/{id}/"
activate = { method = "PUT", path = "/api/services/{id}/activate/" }
deactivate = { method = "PUT", path = "/api/services/{id}/deactivate/" }
delete = { method = "DELETE", path = "/api/services/{id}/" }

[resources.jobs]
collection = "/api/jobs/"
item = "/api/jobs/{id}/"
delete = { method = "DELETE", path = "/api/jobs/{id}/" }

[resources.bookings]
collection = "/api/bookings/"
item = "/api/bookings/{id}/"
delete = { method = "DELETE", path = "/api/bookings/{id}/" }

[resources.disputes]
collection = "/api/disputes/"
item = "/api/disputes/{id}/"

[resources.tickets]
collection = "/api/support/tickets/"
item = "/api/support/tickets/{id}/"
delete = { method = "DELETE", path = "/api/support/tickets/{id}/" }
"#;

impl AppConfig {
    pub fn endpoints(&self, kind: ResourceKind) -> Result<&ResourceEndpoints, ConfigError> {
        self.resources
            .get(kind.config_key())
            .ok_or(ConfigError::MissingResource(kind.config_key()))
    }
}

/// Load configuration
///
/// Uses the override document when one is given (e.g. injected by the host
/// page), otherwise the embedded default.
pub fn load_config(override_toml: Option<&str>) -> Result<AppConfig, ConfigError> {
    let source = match override_toml {
        Some(doc) => {
            log::info!("Loading configuration override");
            doc
        }
        None => {
            log::info!("Using default embedded configuration");
            DEFAULT_CONFIG
        }
    };

    let config: AppConfig = toml::from_str(source)?;
    if let Some(unknown) = config
        .resources
        .keys()
        .find(|key| ResourceKind::from_config_key(key).is_none())
    {
        return Err(ConfigError::UnknownResource(unknown.clone()));
    }
    Ok(config)
}
