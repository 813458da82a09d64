use serde::{Deserialize, Serialize};

/// Resources managed through the admin list pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    VehicleType,
    VehicleSize,
    VehicleCategory,
    Service,
    Job,
    Booking,
    Dispute,
    Ticket,
}

impl ResourceKind {
    /// Key of the resource section in the endpoint configuration
    pub fn config_key(&self) -> &'static str {
        match self {
            ResourceKind::VehicleType => "vehicle_types",
            ResourceKind::VehicleSize => "vehicle_sizes",
            ResourceKind::VehicleCategory => "vehicle_categories",
            ResourceKind::Service => "services",
            ResourceKind::Job => "jobs",
            ResourceKind::Booking => "bookings",
            ResourceKind::Dispute => "disputes",
            ResourceKind::Ticket => "tickets",
        }
    }

    /// Plural label used in page titles and result messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::VehicleType => "vehicle types",
            ResourceKind::VehicleSize => "vehicle sizes",
            ResourceKind::VehicleCategory => "vehicle categories",
            ResourceKind::Service => "services",
            ResourceKind::Job => "jobs",
            ResourceKind::Booking => "bookings",
            ResourceKind::Dispute => "disputes",
            ResourceKind::Ticket => "support tickets",
        }
    }

    pub fn all() -> Vec<ResourceKind> {
        vec![
            ResourceKind::VehicleType,
            ResourceKind::VehicleSize,
            ResourceKind::VehicleCategory,
            ResourceKind::Service,
            ResourceKind::Job,
            ResourceKind::Booking,
            ResourceKind::Dispute,
            ResourceKind::Ticket,
        ]
    }

    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.config_key() == key)
    }
}
