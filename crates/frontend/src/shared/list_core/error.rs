//! Error taxonomy of the list core.
//!
//! None of these are fatal: every variant ends up as a user-visible message
//! through [`ApiError::user_message`] or the `Display` impls below.

use std::fmt;

use contracts::enums::{BulkActionKind, ResourceKind};
use contracts::shared::RecordId;
use thiserror::Error;

/// Failure of a single remote call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message from the response body when there is one, else a generic fallback
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(msg), ..
            } => msg.clone(),
            ApiError::Status { status, .. } => format!("Request failed with status {}", status),
            ApiError::Network(_) => "Could not reach the server".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server".to_string(),
        }
    }
}

/// List fetch failed, the previous records are kept
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to load {}: {}", .resource.display_name(), .cause.user_message())]
pub struct LoadError {
    pub resource: ResourceKind,
    pub cause: ApiError,
}

/// One or more per-record calls of a bulk action failed
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFailure {
    pub kind: BulkActionKind,
    pub resource: ResourceKind,
    pub succeeded: Vec<RecordId>,
    pub failed: Vec<(RecordId, ApiError)>,
}

impl BulkFailure {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn failed_ids(&self) -> Vec<&RecordId> {
        self.failed.iter().map(|(id, _)| id).collect()
    }
}

impl fmt::Display for BulkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed for {} of {} {}: ",
            self.kind.display_name(),
            self.failed.len(),
            self.total(),
            self.resource.display_name()
        )?;
        for (i, (id, err)) in self.failed.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "#{}: {}", id, err.user_message())?;
        }
        Ok(())
    }
}

impl std::error::Error for BulkFailure {}

#[derive(Debug, Clone, PartialEq)]
pub struct MissingField {
    pub name: &'static str,
    pub label: &'static str,
}

/// Required draft fields are blank, caught before any network call
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub missing: Vec<MissingField>,
}

impl ValidationError {
    pub fn has_field(&self, name: &str) -> bool {
        self.missing.iter().any(|f| f.name == name)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.missing.iter().map(|m| m.label).collect();
        write!(f, "Required fields are empty: {}", labels.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Create/update call failed, the draft is kept
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to save: {}", .0.user_message())]
pub struct SubmitError(pub ApiError);

/// Outcome of a form submit that did not succeed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("No form is open")]
    NotOpen,

    #[error("A save is already in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_body() {
        let err = ApiError::Status {
            status: 400,
            message: Some("name: already exists".into()),
        };
        assert_eq!(err.user_message(), "name: already exists");
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Request failed with status 500");
    }

    #[test]
    fn test_bulk_failure_mentions_failed_ids() {
        let failure = BulkFailure {
            kind: BulkActionKind::Deactivate,
            resource: ResourceKind::VehicleType,
            succeeded: vec![RecordId::from(1)],
            failed: vec![(
                RecordId::from(3),
                ApiError::Status {
                    status: 409,
                    message: Some("Vehicle type is used by active jobs".into()),
                },
            )],
        };
        assert_eq!(
            failure.to_string(),
            "Deactivate failed for 1 of 2 vehicle types: #3: Vehicle type is used by active jobs"
        );
    }

    #[test]
    fn test_validation_lists_labels() {
        let err = ValidationError {
            missing: vec![
                MissingField { name: "name", label: "Name" },
                MissingField { name: "pickup_address", label: "Pickup address" },
            ],
        };
        assert!(err.has_field("name"));
        assert_eq!(err.to_string(), "Required fields are empty: Name, Pickup address");
    }
}
