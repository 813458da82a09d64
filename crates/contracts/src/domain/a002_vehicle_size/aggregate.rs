use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::RecordId;

/// Size class of a vehicle type, with its load capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSize {
    pub id: RecordId,
    pub name: String,
    /// Owning vehicle type
    #[serde(default)]
    pub vehicle_type: Option<RecordId>,
    #[serde(default)]
    pub capacity_kg: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}
