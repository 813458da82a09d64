//! Reactive binding of a [`ListPage`] for Leptos components.
//!
//! The page lives in one `RwSignal`; network calls are spawned with
//! `spawn_local` and their completions applied through the split-phase
//! `begin_*`/`finish_*` methods. Results arriving after the owning component
//! was cleaned up hit a disposed signal and are dropped.

use contracts::enums::BulkActionKind;
use contracts::shared::{RecordId, ResourceEndpoints};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::bulk_action::{BulkSkip, Confirmation};
use super::list_store::LoadTicket;
use super::page::ListPage;
use super::record::{Draft, FieldSpec, ListRecord};
use super::remote::RemoteSource;
use crate::shared::api_utils::HttpRemote;
use crate::shared::config::{AppConfig, ConfigError};
use crate::shared::notify::{NotificationQueue, Notifier, Severity};

pub struct ListPageViewModel<R: ListRecord + Send + Sync> {
    pub page: RwSignal<ListPage<R>>,
    pub notifications: NotificationQueue,
    remote: HttpRemote,
}

impl<R: ListRecord + Send + Sync> Clone for ListPageViewModel<R> {
    fn clone(&self) -> Self {
        Self {
            page: self.page,
            notifications: self.notifications,
            remote: self.remote.clone(),
        }
    }
}

impl<R: ListRecord + Send + Sync> ListPageViewModel<R> {
    /// Must be created inside a component: pending work is abandoned on cleanup
    pub fn new(endpoints: ResourceEndpoints, remote: HttpRemote, notifications: NotificationQueue) -> Self {
        let page = RwSignal::new(ListPage::new(endpoints));
        on_cleanup(move || {
            page.try_update(|p| p.abandon());
        });
        Self {
            page,
            notifications,
            remote,
        }
    }

    /// Endpoints and transport for `R` taken from the app configuration
    pub fn from_config(config: &AppConfig, notifications: NotificationQueue) -> Result<Self, ConfigError> {
        let endpoints = config.endpoints(R::schema().kind)?.clone();
        Ok(Self::new(endpoints, HttpRemote::from_settings(&config.api), notifications))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.store().is_loading()))
    }

    pub fn is_bulk_running(&self) -> Signal<bool> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.is_bulk_running()))
    }

    pub fn load(&self) {
        if let Some(ticket) = self.page.try_update(|p| p.begin_load()) {
            self.spawn_reload(ticket);
        }
    }

    fn spawn_reload(&self, ticket: LoadTicket) {
        let page = self.page;
        let notifications = self.notifications;
        let remote = self.remote.clone();
        let Some(path) = page.try_with_untracked(|p| p.endpoints().collection.clone()) else {
            return;
        };
        spawn_local(async move {
            let response = remote.fetch_list(&path).await;
            page.try_update(|p| p.finish_load(ticket, response, &notifications));
        });
    }

    pub fn set_search(&self, search: String) {
        self.page.update(|p| p.set_search(search));
    }

    pub fn toggle(&self, id: RecordId) {
        self.page.update(|p| p.toggle(&id));
    }

    pub fn toggle_all(&self) {
        self.page.update(|p| p.toggle_all());
    }

    pub fn set_filter_input(&self, field: &'static str, raw: String) {
        self.page.update(|p| {
            if !p.set_filter_input(field, &raw) {
                log::warn!("{} is not a filter", field);
            }
        });
    }

    /// Fields offered in the filter panel
    pub fn filter_fields(&self) -> Vec<FieldSpec> {
        R::schema().filter_fields().copied().collect()
    }

    pub fn sort_by(&self, field: &'static str) {
        self.page.update(|p| p.sort_by(field));
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        self.page.with(|p| p.sort().indicator(field))
    }

    pub fn available_actions(&self) -> Vec<BulkActionKind> {
        self.page.with_untracked(|p| p.available_actions())
    }

    pub fn dismiss_load_error(&self) {
        self.page.update(|p| p.dismiss_load_error());
    }

    /// Bulk action on the current selection. Delete asks the browser for
    /// confirmation first.
    pub fn bulk_action(&self, kind: BulkActionKind) {
        let count = self.page.with_untracked(|p| p.selection().len());
        let confirmation = if kind.is_destructive() && count > 0 {
            confirm(&format!("{} {} selected records?", kind.display_name(), count))
        } else {
            Confirmation::NotAsked
        };
        if let Err(skip) = self.run_bulk(kind, confirmation) {
            log::debug!("Bulk {} skipped: {}", kind.display_name(), skip);
        }
    }

    /// Start a bulk action with an answer already obtained from the user.
    /// A skipped action leaves the page, selection included, as it was.
    pub fn run_bulk(&self, kind: BulkActionKind, confirmation: Confirmation) -> Result<(), BulkSkip> {
        let request = match self.page.try_update(|p| p.begin_bulk(kind, confirmation)) {
            Some(started) => started?,
            None => return Ok(()),
        };

        let vm = self.clone();
        spawn_local(async move {
            let report = request.run(&vm.remote).await;
            let notifications = vm.notifications;
            if let Some((_, ticket)) = vm.page.try_update(|p| p.finish_bulk(report, &notifications)) {
                vm.spawn_reload(ticket);
            }
        });
        Ok(())
    }

    pub fn open_create(&self) {
        self.page.update(|p| p.open_create());
    }

    pub fn open_edit(&self, id: RecordId) {
        let found = self.page.try_update(|p| p.open_edit(&id)).unwrap_or(false);
        if !found {
            self.notifications
                .notify(&format!("Record #{} is no longer in the list", id), Severity::Warning);
        }
    }

    pub fn set_form_field(&self, name: &'static str, value: serde_json::Value) {
        self.page.update(|p| p.set_form_field(name, value));
    }

    pub fn close_form(&self) {
        self.page.update(|p| p.close_form());
    }

    /// Submit the draft; on failure the modal stays open with the error inline
    pub fn submit(&self, draft: Draft) {
        let request = match self.page.try_update(|p| p.begin_submit(draft)) {
            Some(Ok(request)) => request,
            _ => return,
        };
        let vm = self.clone();
        spawn_local(async move {
            let result = request.send(&vm.remote).await;
            let notifications = vm.notifications;
            if let Some(Ok(Some(ticket))) = vm.page.try_update(|p| p.finish_submit(&request, result, &notifications)) {
                vm.spawn_reload(ticket);
            }
        });
    }
}

fn confirm(message: &str) -> Confirmation {
    let answer = web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false);
    if answer {
        Confirmation::Confirmed
    } else {
        Confirmation::Declined
    }
}
