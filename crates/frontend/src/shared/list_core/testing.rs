//! Test doubles shared by the list core tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::domain::a001_vehicle_type::aggregate::VehicleType;
use contracts::domain::a005_job::aggregate::{Job, JobStatus};
use contracts::shared::{extract_error_message, ActionEndpoint, HttpMethod, RecordId, ResourceEndpoints};
use serde_json::{json, Value};

use super::error::ApiError;
use super::record::Draft;
use super::remote::RemoteSource;
use crate::shared::notify::{Notifier, Severity};

pub use futures::executor::block_on;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Draft>,
}

/// Remote that records every call and fails configured paths
pub struct MockRemote {
    list: Result<Value, ApiError>,
    failures: HashMap<String, ApiError>,
    yield_once: bool,
    calls: RefCell<Vec<Call>>,
    events: RefCell<Vec<String>>,
}

impl Default for MockRemote {
    fn default() -> Self {
        Self {
            list: Ok(json!([])),
            failures: HashMap::new(),
            yield_once: false,
            calls: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
        }
    }
}

impl MockRemote {
    pub fn with_list(body: Value) -> Self {
        Self {
            list: Ok(body),
            ..Self::default()
        }
    }

    pub fn failing_list(err: ApiError) -> Self {
        Self {
            list: Err(err),
            ..Self::default()
        }
    }

    pub fn fail_path(mut self, path: &str, status: u16, body: &str) -> Self {
        self.failures.insert(
            path.to_string(),
            ApiError::Status {
                status,
                message: extract_error_message(body),
            },
        );
        self
    }

    /// Every mutation suspends once before completing
    pub fn yielding(mut self) -> Self {
        self.yield_once = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls.borrow().iter().filter(|c| c.method == HttpMethod::Get).count()
    }

    pub fn mutation_paths(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.method != HttpMethod::Get)
            .map(|c| c.path.clone())
            .collect()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RemoteSource for MockRemote {
    async fn fetch_list(&self, path: &str) -> Result<Value, ApiError> {
        self.calls.borrow_mut().push(Call {
            method: HttpMethod::Get,
            path: path.to_string(),
            body: None,
        });
        self.list.clone()
    }

    async fn send(&self, method: HttpMethod, path: &str, body: Option<&Draft>) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        self.events.borrow_mut().push(format!("start {}", path));
        if self.yield_once {
            YieldNow { yielded: false }.await;
        }
        self.events.borrow_mut().push(format!("done {}", path));
        match self.failures.get(path) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<(String, Severity)> {
        self.messages.borrow().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages.borrow_mut().push((message.to_string(), severity));
    }
}

pub fn endpoints() -> ResourceEndpoints {
    ResourceEndpoints {
        collection: "/api/vehicle-types/".into(),
        item: "/api/vehicle-types/{id}/".into(),
        activate: Some(ActionEndpoint::new(HttpMethod::Put, "/api/vehicle-types/{id}/activate/")),
        deactivate: Some(ActionEndpoint::new(HttpMethod::Put, "/api/vehicle-types/{id}/deactivate/")),
        delete: Some(ActionEndpoint::new(HttpMethod::Delete, "/api/vehicle-types/{id}/")),
    }
}

pub fn vehicle_type(id: i64, name: &str, is_active: bool) -> VehicleType {
    VehicleType {
        id: RecordId::from(id),
        name: name.to_string(),
        description: None,
        is_active,
        created_at: None,
    }
}

pub fn vehicle_types_json() -> Value {
    json!([
        { "id": 1, "name": "Truck", "is_active": true },
        { "id": 2, "name": "Van", "is_active": false },
        { "id": 3, "name": "Tipper", "is_active": true }
    ])
}

pub fn job(id: i64, status: JobStatus, scheduled_date: Option<NaiveDate>) -> Job {
    Job {
        id: RecordId::from(id),
        reference: format!("JOB-{:04}", id),
        customer_name: "Acme Waste Ltd".into(),
        provider_name: None,
        pickup_address: "1 Depot Road".into(),
        waste_type: Some("general".into()),
        status,
        scheduled_date,
        created_at: None,
    }
}
