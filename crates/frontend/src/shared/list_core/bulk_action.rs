//! Activate / deactivate / delete applied to every selected row.
//!
//! One request per id, all in flight at once, joined before a single
//! aggregate outcome is reported. Calls that succeeded are not rolled back
//! when others fail: the operation is non-atomic and the list reload that
//! follows shows the true state.

use contracts::enums::{BulkActionKind, ResourceKind};
use contracts::shared::{ActionEndpoint, RecordId, ResourceEndpoints};
use futures::future::join_all;
use thiserror::Error;

use super::error::{ApiError, BulkFailure};
use super::remote::RemoteSource;
use super::selection::SelectionSet;

/// Caller-supplied answer to "are you sure?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
    /// No prompt was shown; enough for non-destructive actions only
    NotAsked,
}

/// Reason a bulk action was not started. Nothing was sent and no state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BulkSkip {
    #[error("Nothing selected")]
    EmptySelection,
    #[error("Another bulk action is still running")]
    Busy,
    #[error("{} is not available for this list", .0.display_name())]
    Unsupported(BulkActionKind),
    #[error("{} was not confirmed", .0.display_name())]
    NotConfirmed(BulkActionKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkState {
    Idle,
    Running,
}

/// Snapshot of one bulk action, taken when it starts
#[derive(Debug, Clone, PartialEq)]
pub struct BulkActionRequest {
    pub kind: BulkActionKind,
    pub resource: ResourceKind,
    pub ids: Vec<RecordId>,
    pub endpoint: ActionEndpoint,
}

impl BulkActionRequest {
    /// Fan out one call per id and wait for all of them to settle
    pub async fn run(&self, remote: &dyn RemoteSource) -> BulkReport {
        log::info!(
            "{} {} {}",
            self.kind.display_name(),
            self.ids.len(),
            self.resource.display_name()
        );

        let calls = self.ids.iter().map(|id| {
            let path = self.endpoint.path_for(id);
            async move {
                let result = remote.send(self.endpoint.method, &path, None).await;
                (id.clone(), result)
            }
        });

        let mut report = BulkReport {
            kind: self.kind,
            resource: self.resource,
            succeeded: Vec::new(),
            failed: Vec::new(),
        };
        for (id, result) in join_all(calls).await {
            match result {
                Ok(()) => report.succeeded.push(id),
                Err(err) => {
                    log::warn!("{} #{} failed: {}", self.kind.display_name(), id, err);
                    report.failed.push((id, err));
                }
            }
        }
        report
    }
}

/// Per-id results of a finished bulk action
#[derive(Debug, Clone, PartialEq)]
pub struct BulkReport {
    pub kind: BulkActionKind,
    pub resource: ResourceKind,
    pub succeeded: Vec<RecordId>,
    pub failed: Vec<(RecordId, ApiError)>,
}

impl BulkReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of mutated records, or the aggregate failure
    pub fn into_result(self) -> Result<usize, BulkFailure> {
        if self.failed.is_empty() {
            Ok(self.succeeded.len())
        } else {
            Err(BulkFailure {
                kind: self.kind,
                resource: self.resource,
                succeeded: self.succeeded,
                failed: self.failed,
            })
        }
    }
}

/// Runs at most one bulk action at a time.
///
/// `Idle → Running → Idle`; there is no retry state, a failed action is
/// re-triggered by the user against a fresh selection.
#[derive(Debug, Clone)]
pub struct BulkActionExecutor {
    state: BulkState,
}

impl BulkActionExecutor {
    pub fn new() -> Self {
        Self {
            state: BulkState::Idle,
        }
    }

    pub fn state(&self) -> BulkState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == BulkState::Running
    }

    /// Validate and snapshot the selection, entering `Running` on success
    pub fn begin(
        &mut self,
        kind: BulkActionKind,
        resource: ResourceKind,
        selection: &SelectionSet,
        endpoints: &ResourceEndpoints,
        confirmation: Confirmation,
    ) -> Result<BulkActionRequest, BulkSkip> {
        if self.is_busy() {
            return Err(BulkSkip::Busy);
        }
        if selection.is_empty() {
            return Err(BulkSkip::EmptySelection);
        }
        let endpoint = endpoints
            .action(kind)
            .cloned()
            .ok_or(BulkSkip::Unsupported(kind))?;
        if kind.is_destructive() && confirmation != Confirmation::Confirmed {
            return Err(BulkSkip::NotConfirmed(kind));
        }

        self.state = BulkState::Running;
        Ok(BulkActionRequest {
            kind,
            resource,
            ids: selection.snapshot(),
            endpoint,
        })
    }

    /// Back to `Idle` with the aggregate outcome
    pub fn finish(&mut self, report: BulkReport) -> Result<usize, BulkFailure> {
        self.state = BulkState::Idle;
        report.into_result()
    }
}

impl Default for BulkActionExecutor {
    fn default() -> Self {
        Self::new()
    }
}
