use serde::{Deserialize, Serialize};

/// Operation applied to every selected row of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkActionKind {
    Activate,
    Deactivate,
    Delete,
}

impl BulkActionKind {
    /// Delete cannot be undone from the dashboard and must be confirmed first
    pub fn is_destructive(&self) -> bool {
        matches!(self, BulkActionKind::Delete)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BulkActionKind::Activate => "Activate",
            BulkActionKind::Deactivate => "Deactivate",
            BulkActionKind::Delete => "Delete",
        }
    }

    /// Past tense for result messages ("3 vehicle types deactivated")
    pub fn past_tense(&self) -> &'static str {
        match self {
            BulkActionKind::Activate => "activated",
            BulkActionKind::Deactivate => "deactivated",
            BulkActionKind::Delete => "deleted",
        }
    }

    pub fn all() -> [BulkActionKind; 3] {
        [
            BulkActionKind::Activate,
            BulkActionKind::Deactivate,
            BulkActionKind::Delete,
        ]
    }
}
