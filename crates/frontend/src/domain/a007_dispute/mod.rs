use contracts::domain::a007_dispute::aggregate::Dispute;
use contracts::enums::ResourceKind;
use contracts::shared::RecordId;

use crate::shared::list_core::{FieldDefault, FieldKind, FieldSpec, FieldValue, ListRecord, ResourceSchema};

pub const DISPUTE_STATUSES: &[&str] = &["open", "under_review", "resolved", "rejected"];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Dispute,
    fields: &[
        FieldSpec::new("job_reference", "Job", FieldKind::Text)
            .searchable()
            .required(),
        FieldSpec::new("raised_by", "Raised by", FieldKind::Text).searchable(),
        FieldSpec::new("reason", "Reason", FieldKind::Text)
            .searchable()
            .required(),
        FieldSpec::new("status", "Status", FieldKind::Choice(DISPUTE_STATUSES))
            .filterable()
            .default_value(FieldDefault::Text("open")),
        FieldSpec::new("resolution_note", "Resolution", FieldKind::Text),
        FieldSpec::new("created_at", "Opened", FieldKind::Date),
    ],
    date_field: Some("created_at"),
};

impl ListRecord for Dispute {
    fn schema() -> &'static ResourceSchema {
        &SCHEMA
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => (&self.id).into(),
            "job_reference" => (&self.job_reference).into(),
            "raised_by" => (&self.raised_by).into(),
            "reason" => (&self.reason).into(),
            "status" => self.status.as_str().into(),
            "resolution_note" => self.resolution_note.as_ref().into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}
