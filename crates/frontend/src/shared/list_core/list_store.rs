//! Canonical, unfiltered records of one resource.

use contracts::enums::ResourceKind;
use contracts::shared::ListEnvelope;
use serde_json::Value;

use super::error::{ApiError, LoadError};
use super::record::ListRecord;
use super::remote::RemoteSource;

/// Handle for one outstanding load.
///
/// Completions carrying a ticket from before [`ListStore::abandon`] are
/// ignored, so a fetch resolving after its page went away changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket {
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Replaced { count: usize },
    Failed(LoadError),
    /// The ticket was abandoned before the response arrived
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListStore<R> {
    records: Vec<R>,
    error: Option<LoadError>,
    loaded: bool,
    in_flight: usize,
    epoch: u64,
    /// Bumped on every successful replace
    version: u64,
}

impl<R: ListRecord> ListStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            error: None,
            loaded: false,
            in_flight: 0,
            epoch: 0,
            version: 0,
        }
    }

    pub fn resource(&self) -> ResourceKind {
        R::schema().kind
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// At least one load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.in_flight += 1;
        LoadTicket { epoch: self.epoch }
    }

    /// Apply a list response. Success replaces everything, failure keeps the
    /// previous records. Loads are never merged: whichever completes last wins.
    pub fn finish_load(&mut self, ticket: LoadTicket, response: Result<Value, ApiError>) -> LoadOutcome {
        if ticket.epoch != self.epoch {
            log::debug!("Ignoring stale {} load", self.resource().display_name());
            return LoadOutcome::Stale;
        }
        self.in_flight = self.in_flight.saturating_sub(1);

        match response.and_then(Self::normalize) {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.error = None;
                self.loaded = true;
                self.version += 1;
                log::debug!("Loaded {} {}", count, self.resource().display_name());
                LoadOutcome::Replaced { count }
            }
            Err(cause) => {
                let err = LoadError {
                    resource: self.resource(),
                    cause,
                };
                log::error!("{}", err);
                self.error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Invalidate every outstanding ticket
    pub fn abandon(&mut self) {
        self.epoch += 1;
        self.in_flight = 0;
    }

    pub async fn load(&mut self, remote: &dyn RemoteSource, path: &str) -> LoadOutcome {
        let ticket = self.begin_load();
        let response = remote.fetch_list(path).await;
        self.finish_load(ticket, response)
    }

    /// Decode a bare array or a `results` envelope. The whole body must
    /// decode; a single bad element rejects the response.
    pub fn normalize(body: Value) -> Result<Vec<R>, ApiError> {
        let envelope = serde_json::from_value::<ListEnvelope<R>>(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if let Some(total) = envelope.total() {
            let received = envelope.record_count();
            if total > received as u64 {
                log::warn!(
                    "{}: server reports {} records, received {}",
                    R::schema().kind.display_name(),
                    total,
                    received
                );
            }
        }
        Ok(envelope.into_records())
    }
}

impl<R: ListRecord> Default for ListStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
