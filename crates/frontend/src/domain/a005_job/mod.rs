use contracts::domain::a005_job::aggregate::Job;
use contracts::enums::ResourceKind;
use contracts::shared::RecordId;

use crate::shared::list_core::{FieldDefault, FieldKind, FieldSpec, FieldValue, ListRecord, ResourceSchema};

pub const JOB_STATUSES: &[&str] = &["pending", "assigned", "in_progress", "completed", "cancelled"];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Job,
    fields: &[
        FieldSpec::new("reference", "Reference", FieldKind::Text).searchable(),
        FieldSpec::new("customer_name", "Customer", FieldKind::Text)
            .searchable()
            .required(),
        FieldSpec::new("provider_name", "Provider", FieldKind::Text).searchable(),
        FieldSpec::new("pickup_address", "Pickup address", FieldKind::Text)
            .searchable()
            .required(),
        FieldSpec::new("waste_type", "Waste type", FieldKind::Text).filterable(),
        FieldSpec::new("status", "Status", FieldKind::Choice(JOB_STATUSES))
            .filterable()
            .required()
            .default_value(FieldDefault::Text("pending")),
        FieldSpec::new("scheduled_date", "Scheduled", FieldKind::Date),
        FieldSpec::new("created_at", "Created", FieldKind::Date),
    ],
    date_field: Some("scheduled_date"),
};

impl ListRecord for Job {
    fn schema() -> &'static ResourceSchema {
        &SCHEMA
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => (&self.id).into(),
            "reference" => (&self.reference).into(),
            "customer_name" => (&self.customer_name).into(),
            "provider_name" => self.provider_name.as_ref().into(),
            "pickup_address" => (&self.pickup_address).into(),
            "waste_type" => self.waste_type.as_ref().into(),
            "status" => self.status.as_str().into(),
            "scheduled_date" => self.scheduled_date.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_core::testing::job;
    use crate::shared::list_core::{EqualityFilter, FilterCriteria, project};
    use contracts::domain::a005_job::aggregate::JobStatus;

    #[test]
    fn test_status_filter_uses_wire_value() {
        let records = vec![
            job(1, JobStatus::InProgress, None),
            job(2, JobStatus::Pending, None),
        ];
        let spec = SCHEMA.field("status").copied().unwrap();
        let mut criteria = FilterCriteria::new();
        criteria.set_filter("status", EqualityFilter::from_input(&spec, "in_progress"));
        let hits = project(&records, &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].reference, "JOB-0001");
    }

    #[test]
    fn test_new_job_starts_pending() {
        let draft = SCHEMA.default_draft();
        assert_eq!(draft.get("status").and_then(|v| v.as_str()), Some("pending"));
        assert!(draft.get("scheduled_date").map_or(false, |v| v.is_null()));
    }
}
