//! Create/edit modal state.

use std::marker::PhantomData;

use contracts::shared::{HttpMethod, RecordId, ResourceEndpoints};

use super::error::{ApiError, FormError, MissingField, SubmitError, ValidationError};
use super::record::{Draft, ListRecord};
use super::remote::RemoteSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(RecordId),
}

/// Draft of an open modal, keyed by what it will create or update
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEdit {
    pub target: EditTarget,
    pub draft: Draft,
}

/// Create or update call built from a validated draft
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub method: HttpMethod,
    pub path: String,
    pub draft: Draft,
    session: u64,
    seq: u64,
}

impl SubmitRequest {
    pub async fn send(&self, remote: &dyn RemoteSource) -> Result<(), ApiError> {
        remote.send(self.method, &self.path, Some(&self.draft)).await
    }
}

#[derive(Debug, Clone)]
pub struct CrudFormController<R> {
    pending: Option<PendingEdit>,
    error: Option<FormError>,
    /// Sequence number of the save on the wire. Survives close/reopen so a
    /// second save cannot start before the first one settles.
    in_flight: Option<u64>,
    submits: u64,
    /// Bumped on every open/close; a result for an older session leaves the modal alone
    session: u64,
    _record: PhantomData<fn() -> R>,
}

impl<R: ListRecord> CrudFormController<R> {
    pub fn new() -> Self {
        Self {
            pending: None,
            error: None,
            in_flight: None,
            submits: 0,
            session: 0,
            _record: PhantomData,
        }
    }

    pub fn open_create(&mut self) {
        self.reset(Some(PendingEdit {
            target: EditTarget::New,
            draft: R::schema().default_draft(),
        }));
    }

    /// The draft is a copy; the store's record is untouched until a save succeeds
    pub fn open_edit(&mut self, record: &R) {
        self.reset(Some(PendingEdit {
            target: EditTarget::Existing(record.id().clone()),
            draft: record.to_draft(),
        }));
    }

    /// Discard the pending edit, no confirmation
    pub fn close(&mut self) {
        self.reset(None);
    }

    fn reset(&mut self, pending: Option<PendingEdit>) {
        self.pending = pending;
        self.error = None;
        self.session += 1;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn pending(&self) -> Option<&PendingEdit> {
        self.pending.as_ref()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.pending.as_ref().map(|p| &p.draft)
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Inline marker for a field that failed validation
    pub fn field_invalid(&self, name: &str) -> bool {
        matches!(&self.error, Some(FormError::Validation(v)) if v.has_field(name))
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<serde_json::Value>) {
        if let Some(pending) = self.pending.as_mut() {
            pending.draft.set(name, value);
        }
    }

    pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
        let missing: Vec<MissingField> = R::schema()
            .required_fields()
            .filter(|f| draft.is_blank(f.name))
            .map(|f| MissingField {
                name: f.name,
                label: f.label,
            })
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Store `draft` as the pending draft, validate it and build the request.
    /// Validation failures never reach the network.
    pub fn begin_submit(&mut self, draft: Draft, endpoints: &ResourceEndpoints) -> Result<SubmitRequest, FormError> {
        if self.is_busy() {
            return Err(FormError::Busy);
        }
        let pending = self.pending.as_mut().ok_or(FormError::NotOpen)?;
        pending.draft = draft;

        if let Err(invalid) = Self::validate(&pending.draft) {
            let err = FormError::Validation(invalid);
            self.error = Some(err.clone());
            return Err(err);
        }

        let (method, path) = match &pending.target {
            EditTarget::New => (HttpMethod::Post, endpoints.collection.clone()),
            EditTarget::Existing(id) => (HttpMethod::Put, endpoints.item_path(id)),
        };
        self.submits += 1;
        let request = SubmitRequest {
            method,
            path,
            draft: pending.draft.clone(),
            session: self.session,
            seq: self.submits,
        };
        self.in_flight = Some(request.seq);
        self.error = None;
        Ok(request)
    }

    /// Apply the response. `Ok(true)` means the server accepted the save and
    /// the list must be reloaded; the modal is closed only if it still shows
    /// the submitted session. `Ok(false)` is a request this form never sent.
    pub fn finish_submit(&mut self, request: &SubmitRequest, result: Result<(), ApiError>) -> Result<bool, FormError> {
        if self.in_flight != Some(request.seq) {
            return Ok(false);
        }
        self.in_flight = None;
        let current = request.session == self.session;
        match result {
            Ok(()) => {
                if current {
                    self.pending = None;
                    self.error = None;
                    self.session += 1;
                }
                Ok(true)
            }
            Err(api) => {
                log::warn!("Save to {} failed: {}", request.path, api);
                let err = FormError::Submit(SubmitError(api));
                if current {
                    self.error = Some(err.clone());
                }
                Err(err)
            }
        }
    }

    pub async fn submit(&mut self, draft: Draft, endpoints: &ResourceEndpoints, remote: &dyn RemoteSource) -> Result<bool, FormError> {
        let request = self.begin_submit(draft, endpoints)?;
        let result = request.send(remote).await;
        self.finish_submit(&request, result)
    }
}

impl<R: ListRecord> Default for CrudFormController<R> {
    fn default() -> Self {
        Self::new()
    }
}
