use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::RecordId;

/// Vehicle type offered by providers (skip loader, tipper, flatbed...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}
