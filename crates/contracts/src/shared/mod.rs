pub mod api_error;
pub mod endpoint;
pub mod list_envelope;
pub mod record_id;

pub use api_error::extract_error_message;
pub use endpoint::{ActionEndpoint, HttpMethod, ResourceEndpoints};
pub use list_envelope::ListEnvelope;
pub use record_id::RecordId;
