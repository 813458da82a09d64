use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Requested,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Requested => "requested",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Booking of a provider's service for a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: RecordId,
    pub reference: String,
    pub customer_name: String,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    pub status: BookingStatus,
    pub booking_date: NaiveDate,
    #[serde(default)]
    pub total_amount: Option<f64>,
}
