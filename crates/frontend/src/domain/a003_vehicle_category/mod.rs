use contracts::domain::a003_vehicle_category::aggregate::VehicleCategory;
use contracts::enums::ResourceKind;
use contracts::shared::RecordId;

use crate::shared::list_core::{FieldDefault, FieldKind, FieldSpec, FieldValue, ListRecord, ResourceSchema};

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::VehicleCategory,
    fields: &[
        FieldSpec::new("name", "Name", FieldKind::Text).searchable().required(),
        FieldSpec::new("description", "Description", FieldKind::Text).searchable(),
        FieldSpec::new("is_active", "Active", FieldKind::Bool)
            .filterable()
            .default_value(FieldDefault::Bool(true)),
        FieldSpec::new("created_at", "Created", FieldKind::Date),
    ],
    date_field: Some("created_at"),
};

impl ListRecord for VehicleCategory {
    fn schema() -> &'static ResourceSchema {
        &SCHEMA
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => (&self.id).into(),
            "name" => (&self.name).into(),
            "description" => self.description.as_ref().into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}
