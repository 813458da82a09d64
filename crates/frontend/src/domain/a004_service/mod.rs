use contracts::domain::a004_service::aggregate::Service;
use contracts::enums::ResourceKind;
use contracts::shared::RecordId;

use crate::shared::list_core::{FieldDefault, FieldKind, FieldSpec, FieldValue, ListRecord, ResourceSchema};

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Service,
    fields: &[
        FieldSpec::new("name", "Name", FieldKind::Text).searchable().required(),
        FieldSpec::new("description", "Description", FieldKind::Text).searchable(),
        FieldSpec::new("category", "Category", FieldKind::Text)
            .searchable()
            .filterable(),
        FieldSpec::new("base_price", "Base price", FieldKind::Number).default_value(FieldDefault::Number(0.0)),
        FieldSpec::new("is_active", "Active", FieldKind::Bool)
            .filterable()
            .default_value(FieldDefault::Bool(true)),
        FieldSpec::new("created_at", "Created", FieldKind::Date),
    ],
    date_field: Some("created_at"),
};

impl ListRecord for Service {
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
            "category" => self.category.as_ref().into(),
            "base_price" => self.base_price.into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}
