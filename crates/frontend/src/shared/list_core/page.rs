//! One list page: store, criteria, projection, selection, bulk actions and
//! the create/edit form of a single resource.
//!
//! Control flow: load → project → reconcile selection → bulk action or form
//! submit → reload. Every operation that waits on the network comes in two
//! halves (`begin_*` / `finish_*`) so a reactive view-model can release its
//! borrow while the request is in flight; the `async` methods chain both
//! halves for direct use.

use std::collections::BTreeSet;

use contracts::enums::{BulkActionKind, ResourceKind};
use contracts::shared::{RecordId, ResourceEndpoints};
use serde_json::Value;

use super::bulk_action::{BulkActionExecutor, BulkActionRequest, BulkReport, BulkSkip, Confirmation};
use super::crud_form::{CrudFormController, SubmitRequest};
use super::error::{ApiError, BulkFailure, FormError};
use super::filter::{project_indices, DateRange, EqualityFilter, FilterCriteria};
use super::list_store::{ListStore, LoadOutcome, LoadTicket};
use super::list_view::{sort_rows, Paging, SortSpec};
use super::record::{Draft, ListRecord};
use super::remote::RemoteSource;
use super::selection::{HeaderCheckState, SelectionSet};
use crate::shared::notify::{Notifier, Severity};

/// Collaborators of the async operations
#[derive(Clone, Copy)]
pub struct ListEnv<'a> {
    pub remote: &'a dyn RemoteSource,
    pub notifier: &'a dyn Notifier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BulkOutcome {
    /// Not started, nothing sent
    Skipped(BulkSkip),
    Succeeded { count: usize },
    PartiallyFailed(BulkFailure),
}

#[derive(Debug, Clone)]
pub struct ListPage<R> {
    endpoints: ResourceEndpoints,
    store: ListStore<R>,
    criteria: FilterCriteria,
    /// Indices into `store.records()`, in record order
    visible: Vec<usize>,
    visible_ids: BTreeSet<RecordId>,
    selection: SelectionSet,
    bulk: BulkActionExecutor,
    form: CrudFormController<R>,
    sort: SortSpec,
    paging: Paging,
}

impl<R: ListRecord> ListPage<R> {
    pub fn new(endpoints: ResourceEndpoints) -> Self {
        let default_sort = R::schema()
            .search_fields()
            .next()
            .unwrap_or("id");
        Self {
            endpoints,
            store: ListStore::new(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            visible_ids: BTreeSet::new(),
            selection: SelectionSet::new(),
            bulk: BulkActionExecutor::new(),
            form: CrudFormController::new(),
            sort: SortSpec::new(default_sort),
            paging: Paging::default(),
        }
    }

    pub fn resource(&self) -> ResourceKind {
        R::schema().kind
    }

    pub fn endpoints(&self) -> &ResourceEndpoints {
        &self.endpoints
    }

    pub fn store(&self) -> &ListStore<R> {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn form(&self) -> &CrudFormController<R> {
        &self.form
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn paging(&self) -> &Paging {
        &self.paging
    }

    pub fn is_bulk_running(&self) -> bool {
        self.bulk.is_busy()
    }

    /// Bulk actions with a configured endpoint, in toolbar order
    pub fn available_actions(&self) -> Vec<BulkActionKind> {
        BulkActionKind::all()
            .into_iter()
            .filter(|kind| self.endpoints.action(*kind).is_some())
            .collect()
    }

    // ------------------------------------------------------------------
    // Projection
    // ------------------------------------------------------------------

    /// Filtered records in record order
    pub fn visible_records(&self) -> Vec<&R> {
        let records = self.store.records();
        self.visible.iter().map(|&i| &records[i]).collect()
    }

    pub fn visible_ids(&self) -> &BTreeSet<RecordId> {
        &self.visible_ids
    }

    /// Rows of the current page, sorted for display
    pub fn page_rows(&self) -> Vec<&R> {
        let mut rows = self.visible_records();
        sort_rows(&mut rows, &self.sort);
        rows.get(self.paging.range()).map(<[&R]>::to_vec).unwrap_or_default()
    }

    fn refresh_projection(&mut self) {
        self.visible = project_indices(self.store.records(), &self.criteria);
        let records = self.store.records();
        self.visible_ids = self.visible.iter().map(|&i| records[i].id().clone()).collect();
        let dropped = self.selection.reconcile(&self.visible_ids);
        if dropped > 0 {
            log::debug!("Dropped {} hidden rows from selection", dropped);
        }
        self.paging.recalc(self.visible.len());
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.paging.page = 0;
        self.refresh_projection();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.paging.page = 0;
        self.refresh_projection();
    }

    pub fn set_filter(&mut self, field: &str, filter: EqualityFilter) {
        self.criteria.set_filter(field, filter);
        self.paging.page = 0;
        self.refresh_projection();
    }

    /// Filter-panel input for one of the schema's filterable fields.
    /// Returns false for a field that is not offered as a filter.
    pub fn set_filter_input(&mut self, field: &str, raw: &str) -> bool {
        let Some(spec) = R::schema().filter_fields().find(|f| f.name == field).copied() else {
            return false;
        };
        self.set_filter(field, EqualityFilter::from_input(&spec, raw));
        true
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.criteria.date_range = range;
        self.paging.page = 0;
        self.refresh_projection();
    }

    pub fn reset_criteria(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn sort_by(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.paging.go_to(page);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.paging.set_page_size(size);
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Hidden rows cannot be selected
    pub fn toggle(&mut self, id: &RecordId) {
        if self.visible_ids.contains(id) {
            self.selection.toggle(id);
        }
    }

    pub fn set_selected(&mut self, id: &RecordId, checked: bool) {
        if !checked || self.visible_ids.contains(id) {
            self.selection.set(id, checked);
        }
    }

    /// Header checkbox: select every visible row, or clear when all already are
    pub fn toggle_all(&mut self) {
        match self.header_state() {
            HeaderCheckState::Checked => self.selection.clear(),
            _ => self.selection.select_all(&self.visible_ids),
        }
    }

    pub fn select_all_visible(&mut self) {
        self.selection.select_all(&self.visible_ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn header_state(&self) -> HeaderCheckState {
        self.selection.header_state(&self.visible_ids)
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.store.begin_load()
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, response: Result<Value, ApiError>, notifier: &dyn Notifier) -> LoadOutcome {
        let outcome = self.store.finish_load(ticket, response);
        match &outcome {
            LoadOutcome::Replaced { .. } => self.refresh_projection(),
            LoadOutcome::Failed(err) => notifier.notify(&err.to_string(), Severity::Error),
            LoadOutcome::Stale => {}
        }
        outcome
    }

    pub async fn load(&mut self, env: ListEnv<'_>) -> LoadOutcome {
        let ticket = self.begin_load();
        let response = env.remote.fetch_list(&self.endpoints.collection).await;
        self.finish_load(ticket, response, env.notifier)
    }

    pub fn dismiss_load_error(&mut self) {
        self.store.dismiss_error();
    }

    /// The page went away: pending loads and submits resolve into nothing
    pub fn abandon(&mut self) {
        self.store.abandon();
        self.form.close();
    }

    // ------------------------------------------------------------------
    // Bulk actions
    // ------------------------------------------------------------------

    pub fn begin_bulk(&mut self, kind: BulkActionKind, confirmation: Confirmation) -> Result<BulkActionRequest, BulkSkip> {
        let resource = self.resource();
        self.bulk
            .begin(kind, resource, &self.selection, &self.endpoints, confirmation)
    }

    /// Settle a bulk action: notify, clear the selection whatever the outcome,
    /// and hand back the ticket of the reload that must follow.
    pub fn finish_bulk(&mut self, report: BulkReport, notifier: &dyn Notifier) -> (BulkOutcome, LoadTicket) {
        let kind = report.kind;
        let outcome = match self.bulk.finish(report) {
            Ok(count) => {
                notifier.notify(
                    &format!("{} {} {}", count, self.resource().display_name(), kind.past_tense()),
                    Severity::Success,
                );
                BulkOutcome::Succeeded { count }
            }
            Err(failure) => {
                notifier.notify(&failure.to_string(), Severity::Error);
                BulkOutcome::PartiallyFailed(failure)
            }
        };
        self.selection.clear();
        (outcome, self.store.begin_load())
    }

    /// Run a bulk action on the current selection, then reload exactly once.
    /// Delete needs `Confirmation::Confirmed` from the caller.
    pub async fn execute_bulk(&mut self, kind: BulkActionKind, confirmation: Confirmation, env: ListEnv<'_>) -> BulkOutcome {
        let request = match self.begin_bulk(kind, confirmation) {
            Ok(request) => request,
            Err(skip) => {
                log::debug!("Bulk {} skipped: {}", kind.display_name(), skip);
                return BulkOutcome::Skipped(skip);
            }
        };
        let report = request.run(env.remote).await;
        let (outcome, ticket) = self.finish_bulk(report, env.notifier);
        let response = env.remote.fetch_list(&self.endpoints.collection).await;
        self.finish_load(ticket, response, env.notifier);
        outcome
    }

    // ------------------------------------------------------------------
    // Create / edit
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Open the edit form for a loaded record; false when the id is unknown
    pub fn open_edit(&mut self, id: &RecordId) -> bool {
        match self.store.records().iter().find(|r| r.id() == id) {
            Some(record) => {
                self.form.open_edit(record);
                true
            }
            None => false,
        }
    }

    pub fn set_form_field(&mut self, name: &str, value: impl Into<Value>) {
        self.form.set_field(name, value);
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    pub fn begin_submit(&mut self, draft: Draft) -> Result<SubmitRequest, FormError> {
        self.form.begin_submit(draft, &self.endpoints)
    }

    /// Returns the ticket of the reload to run after a successful save
    pub fn finish_submit(
        &mut self,
        request: &SubmitRequest,
        result: Result<(), ApiError>,
        notifier: &dyn Notifier,
    ) -> Result<Option<LoadTicket>, FormError> {
        match self.form.finish_submit(request, result) {
            Ok(true) => {
                notifier.notify("Saved", Severity::Success);
                Ok(Some(self.store.begin_load()))
            }
            Ok(false) => Ok(None),
            Err(err) => {
                notifier.notify(&err.to_string(), Severity::Error);
                Err(err)
            }
        }
    }

    pub async fn submit_form(&mut self, draft: Draft, env: ListEnv<'_>) -> Result<(), FormError> {
        let request = self.begin_submit(draft)?;
        let result = request.send(env.remote).await;
        if let Some(ticket) = self.finish_submit(&request, result, env.notifier)? {
            let response = env.remote.fetch_list(&self.endpoints.collection).await;
            self.finish_load(ticket, response, env.notifier);
        }
        Ok(())
    }
}
