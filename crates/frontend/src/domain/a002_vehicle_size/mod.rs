use contracts::domain::a002_vehicle_size::aggregate::VehicleSize;
use contracts::enums::ResourceKind;
use contracts::shared::RecordId;

use crate::shared::list_core::{FieldDefault, FieldKind, FieldSpec, FieldValue, ListRecord, ResourceSchema};

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::VehicleSize,
    fields: &[
        FieldSpec::new("name", "Name", FieldKind::Text).searchable().required(),
        // id of the owning vehicle type
        FieldSpec::new("vehicle_type", "Vehicle type", FieldKind::Text)
            .filterable()
            .required(),
        FieldSpec::new("capacity_kg", "Capacity, kg", FieldKind::Number),
        FieldSpec::new("is_active", "Active", FieldKind::Bool)
            .filterable()
            .default_value(FieldDefault::Bool(true)),
        FieldSpec::new("created_at", "Created", FieldKind::Date),
    ],
    date_field: Some("created_at"),
};

impl ListRecord for VehicleSize {
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
            "vehicle_type" => self.vehicle_type.as_ref().into(),
            "capacity_kg" => self.capacity_kg.into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_core::{project, FilterCriteria};

    fn size(id: i64, vehicle_type: Option<i64>) -> VehicleSize {
        VehicleSize {
            id: RecordId::from(id),
            name: format!("Size {}", id),
            vehicle_type: vehicle_type.map(RecordId::from),
            capacity_kg: Some(3500.0),
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_filter_by_parent_vehicle_type() {
        let records = vec![size(1, Some(7)), size(2, Some(8)), size(3, None)];
        let criteria = FilterCriteria::new().with_filter("vehicle_type", "7");
        let ids: Vec<String> = project(&records, &criteria).iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1"]);
    }
}
