use contracts::domain::a006_booking::aggregate::Booking;
use contracts::enums::ResourceKind;
use contracts::shared::RecordId;

use crate::shared::list_core::{FieldKind, FieldSpec, FieldValue, ListRecord, ResourceSchema};

pub const BOOKING_STATUSES: &[&str] = &["requested", "confirmed", "completed", "cancelled"];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Booking,
    fields: &[
        FieldSpec::new("reference", "Reference", FieldKind::Text).searchable(),
        FieldSpec::new("customer_name", "Customer", FieldKind::Text)
            .searchable()
            .required(),
        FieldSpec::new("provider_name", "Provider", FieldKind::Text).searchable(),
        FieldSpec::new("service_name", "Service", FieldKind::Text)
            .searchable()
            .filterable(),
        FieldSpec::new("status", "Status", FieldKind::Choice(BOOKING_STATUSES)).filterable(),
        FieldSpec::new("booking_date", "Date", FieldKind::Date).required(),
        FieldSpec::new("total_amount", "Total", FieldKind::Number),
    ],
    date_field: Some("booking_date"),
};

impl ListRecord for Booking {
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
            "service_name" => self.service_name.as_ref().into(),
            "status" => self.status.as_str().into(),
            "booking_date" => self.booking_date.into(),
            "total_amount" => self.total_amount.into(),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_core::{project, DateRange, FilterCriteria, SortSpec};
    use crate::shared::list_core::list_view::sort_rows;
    use chrono::NaiveDate;
    use contracts::domain::a006_booking::aggregate::BookingStatus;

    fn booking(id: i64, day: u32, total: Option<f64>) -> Booking {
        Booking {
            id: RecordId::from(id),
            reference: format!("BK-{}", id),
            customer_name: "Green Homes".into(),
            provider_name: None,
            service_name: Some("Skip hire".into()),
            status: BookingStatus::Confirmed,
            booking_date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            total_amount: total,
        }
    }

    #[test]
    fn test_date_range_on_booking_date() {
        let records = vec![booking(1, 1, None), booking(2, 15, None), booking(3, 30, None)];
        let criteria = FilterCriteria::new().with_date_range(DateRange::from_inputs("2024-06-10", ""));
        let refs: Vec<&str> = project(&records, &criteria).iter().map(|b| b.reference.as_str()).collect();
        assert_eq!(refs, vec!["BK-2", "BK-3"]);
    }

    #[test]
    fn test_sort_by_total_puts_missing_first() {
        let records = vec![booking(1, 1, Some(250.0)), booking(2, 2, None), booking(3, 3, Some(90.0))];
        let mut rows: Vec<&Booking> = records.iter().collect();
        sort_rows(&mut rows, &SortSpec::new("total_amount"));
        let ids: Vec<String> = rows.iter().map(|b| b.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }
}
