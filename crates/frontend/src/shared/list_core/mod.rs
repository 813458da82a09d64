//! Reusable list-management core behind every admin table: load, filter,
//! select, bulk-mutate and edit one resource.

pub mod bulk_action;
pub mod crud_form;
pub mod error;
pub mod filter;
pub mod list_store;
pub mod list_view;
pub mod page;
pub mod record;
pub mod remote;
pub mod selection;
pub mod view_model;

#[cfg(test)]
pub(crate) mod testing;

pub use bulk_action::{BulkActionExecutor, BulkActionRequest, BulkReport, BulkSkip, Confirmation};
pub use crud_form::{CrudFormController, EditTarget, PendingEdit, SubmitRequest};
pub use error::{ApiError, BulkFailure, FormError, LoadError, SubmitError, ValidationError};
pub use filter::{project, DateRange, EqualityFilter, FilterCriteria};
pub use list_store::{ListStore, LoadOutcome, LoadTicket};
pub use list_view::{Paging, SortSpec};
pub use page::{BulkOutcome, ListEnv, ListPage};
pub use record::{Draft, FieldDefault, FieldKind, FieldSpec, FieldValue, ListRecord, ResourceSchema};
pub use remote::RemoteSource;
pub use selection::{HeaderCheckState, SelectionSet};
pub use view_model::ListPageViewModel;
