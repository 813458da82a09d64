pub mod bulk_action_kind;
pub mod resource_kind;

pub use bulk_action_kind::BulkActionKind;
pub use resource_kind::ResourceKind;
