use contracts::domain::a008_ticket::aggregate::Ticket;
use contracts::enums::ResourceKind;
use contracts::shared::RecordId;

use crate::shared::list_core::{FieldDefault, FieldKind, FieldSpec, FieldValue, ListRecord, ResourceSchema};

pub const TICKET_PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];
pub const TICKET_STATUSES: &[&str] = &["open", "pending", "closed"];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Ticket,
    fields: &[
        FieldSpec::new("subject", "Subject", FieldKind::Text)
            .searchable()
            .required(),
        FieldSpec::new("requester_email", "Requester", FieldKind::Text)
            .searchable()
            .required(),
        FieldSpec::new("message", "Message", FieldKind::Text).searchable(),
        FieldSpec::new("priority", "Priority", FieldKind::Choice(TICKET_PRIORITIES))
            .filterable()
            .default_value(FieldDefault::Text("medium")),
        FieldSpec::new("status", "Status", FieldKind::Choice(TICKET_STATUSES))
            .filterable()
            .default_value(FieldDefault::Text("open")),
        FieldSpec::new("created_at", "Created", FieldKind::Date),
    ],
    date_field: Some("created_at"),
};

impl ListRecord for Ticket {
    fn schema() -> &'static ResourceSchema {
        &SCHEMA
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => (&self.id).into(),
            "subject" => (&self.subject).into(),
            "requester_email" => (&self.requester_email).into(),
            "message" => self.message.as_ref().into(),
            "priority" => self.priority.as_str().into(),
            "status" => self.status.as_str().into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}
