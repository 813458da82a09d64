//! Visible subset of a record collection for the current criteria.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::record::{FieldKind, FieldSpec, FieldValue, ListRecord};
use crate::shared::date_utils::parse_date;

/// Equality constraint on one field
#[derive(Debug, Clone, PartialEq)]
pub enum EqualityFilter {
    All,
    Is(FieldValue),
}

impl EqualityFilter {
    /// Interpret a select/input value for the given field.
    /// `""` and `"all"` mean no constraint.
    pub fn from_input(spec: &FieldSpec, raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return EqualityFilter::All;
        }
        let value = match spec.kind {
            FieldKind::Bool => match raw {
                "true" => FieldValue::Bool(true),
                "false" => FieldValue::Bool(false),
                other => FieldValue::text(other),
            },
            FieldKind::Number => raw
                .parse::<f64>()
                .map(FieldValue::Number)
                .unwrap_or_else(|_| FieldValue::text(raw)),
            FieldKind::Date => parse_date(raw)
                .map(FieldValue::Date)
                .unwrap_or_else(|| FieldValue::text(raw)),
            FieldKind::Text | FieldKind::Choice(_) => FieldValue::text(raw),
        };
        EqualityFilter::Is(value)
    }

    fn accepts(&self, value: &FieldValue) -> bool {
        match self {
            EqualityFilter::All => true,
            EqualityFilter::Is(expected) => expected == value,
        }
    }
}

/// Inclusive date bounds, each optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build from two date inputs; unparsable text leaves that bound unset
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: parse_date(start),
            end: parse_date(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub equals: BTreeMap<String, EqualityFilter>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// No constraint at all: projecting yields the input unchanged
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.equals.values().all(|f| *f == EqualityFilter::All)
            && self.date_range.is_unbounded()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.equals.insert(field.into(), EqualityFilter::Is(value.into()));
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    pub fn set_filter(&mut self, field: impl Into<String>, filter: EqualityFilter) {
        let field = field.into();
        match filter {
            EqualityFilter::All => {
                self.equals.remove(&field);
            }
            other => {
                self.equals.insert(field, other);
            }
        }
    }
}

/// Does a record satisfy every non-default criterion (AND).
///
/// The search text is matched as typed; whitespace only decides whether
/// there is a search at all. Date bounds apply independently: with only a
/// start date every later record passes, and once either bound is set a
/// record without a date is excluded.
pub fn matches<R: ListRecord>(record: &R, criteria: &FilterCriteria) -> bool {
    let schema = R::schema();

    if !criteria.search.trim().is_empty() {
        let needle = criteria.search.to_lowercase();
        let hit = schema.search_fields().any(|name| {
            record
                .field(name)
                .as_text()
                .map_or(false, |text| text.to_lowercase().contains(&needle))
        });
        if !hit {
            return false;
        }
    }

    if !criteria
        .equals
        .iter()
        .all(|(field, filter)| filter.accepts(&record.field(field)))
    {
        return false;
    }

    if !criteria.date_range.is_unbounded() {
        let date = schema
            .date_field
            .and_then(|name| record.field(name).as_date());
        match date {
            Some(d) if criteria.date_range.contains(d) => {}
            _ => return false,
        }
    }

    true
}

/// Order-preserving filter of `records`
pub fn project<'a, R: ListRecord>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    if criteria.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches(*r, criteria)).collect()
}

/// Positions of the projected records within `records`
pub fn project_indices<R: ListRecord>(records: &[R], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.is_empty() || matches(*r, criteria))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_core::testing::{job, vehicle_type};
    use contracts::domain::a005_job::aggregate::{Job, JobStatus};
    use contracts::domain::a001_vehicle_type::aggregate::VehicleType;
    use proptest::prelude::*;

    fn ids<R: ListRecord>(rows: &[&R]) -> Vec<String> {
        rows.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_equality_filter_on_lifecycle_flag() {
        let records = vec![
            vehicle_type(1, "Truck", true),
            vehicle_type(2, "Van", false),
            vehicle_type(3, "Tipper", true),
        ];
        let criteria = FilterCriteria::new().with_filter("is_active", true);
        assert_eq!(ids(&project(&records, &criteria)), vec!["1", "3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![vehicle_type(1, "Truck A", true), vehicle_type(2, "Van B", true)];
        let criteria = FilterCriteria::new().with_search("truck");
        assert_eq!(ids(&project(&records, &criteria)), vec!["1"]);
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let records = vec![vehicle_type(1, "Truck A", true), vehicle_type(2, "Truckload", true)];
        let criteria = FilterCriteria::new().with_search("truck ");
        assert_eq!(ids(&project(&records, &criteria)), vec!["1"]);

        let blank = FilterCriteria::new().with_search("   ");
        assert!(blank.is_empty());
        assert_eq!(project(&records, &blank).len(), 2);
    }

    #[test]
    fn test_search_matches_any_configured_field() {
        let mut with_desc = vehicle_type(2, "Flatbed", true);
        with_desc.description = Some("Rigid truck with open deck".into());
        let records = vec![vehicle_type(1, "Van", true), with_desc];
        let criteria = FilterCriteria::new().with_search("TRUCK");
        assert_eq!(ids(&project(&records, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_date_range_is_inclusive_and_bounds_independent() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        let records = vec![
            job(1, JobStatus::Pending, Some(d(1))),
            job(2, JobStatus::Pending, Some(d(10))),
            job(3, JobStatus::Pending, Some(d(20))),
            job(4, JobStatus::Pending, None),
        ];

        let both = FilterCriteria::new().with_date_range(DateRange::new(Some(d(1)), Some(d(10))));
        assert_eq!(ids(&project(&records, &both)), vec!["1", "2"]);

        let from = FilterCriteria::new().with_date_range(DateRange::new(Some(d(10)), None));
        assert_eq!(ids(&project(&records, &from)), vec!["2", "3"]);

        let none = FilterCriteria::new();
        assert_eq!(project(&records, &none).len(), 4);
    }

    #[test]
    fn test_criteria_are_combined_with_and() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let records = vec![
            job(1, JobStatus::Pending, Some(d)),
            job(2, JobStatus::Completed, Some(d)),
        ];
        let criteria = FilterCriteria::new()
            .with_search("JOB-")
            .with_filter("status", JobStatus::Completed.as_str());
        assert_eq!(ids(&project(&records, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_all_filter_is_no_constraint() {
        let records = vec![vehicle_type(1, "Truck", true), vehicle_type(2, "Van", false)];
        let mut criteria = FilterCriteria::new().with_filter("is_active", true);
        criteria.set_filter("is_active", EqualityFilter::All);
        assert!(criteria.is_empty());
        assert_eq!(project(&records, &criteria).len(), 2);
    }

    #[test]
    fn test_filter_from_input() {
        let spec = VehicleType::schema().field("is_active").copied().unwrap();
        assert_eq!(EqualityFilter::from_input(&spec, "all"), EqualityFilter::All);
        assert_eq!(EqualityFilter::from_input(&spec, ""), EqualityFilter::All);
        assert_eq!(
            EqualityFilter::from_input(&spec, "false"),
            EqualityFilter::Is(FieldValue::Bool(false))
        );
    }

    fn arb_records() -> impl Strategy<Value = Vec<VehicleType>> {
        prop::collection::vec(
            (prop::sample::select(vec!["Truck A", "Van B", "tipper", "Hook lift", "truck XL"]), any::<bool>()),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, active))| vehicle_type(i as i64, name, active))
                .collect()
        })
    }

    fn arb_jobs() -> impl Strategy<Value = Vec<Job>> {
        prop::collection::vec(prop::option::of(1u32..=28), 0..20).prop_map(|days| {
            days.into_iter()
                .enumerate()
                .map(|(i, day)| job(i as i64, JobStatus::Pending, day.and_then(|d| NaiveDate::from_ymd_opt(2024, 5, d))))
                .collect()
        })
    }

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day.clamp(1, 28)).unwrap()
    }

    proptest! {
        #[test]
        fn empty_criteria_is_identity(records in arb_records()) {
            let projected = project(&records, &FilterCriteria::new());
            prop_assert_eq!(projected.len(), records.len());
            for (a, b) in projected.iter().zip(records.iter()) {
                prop_assert_eq!(*a, b);
            }
        }

        #[test]
        fn stricter_criteria_yield_subset(
            records in arb_records(),
            search in prop::sample::select(vec!["", "truck", "b", "lift"]),
            active in any::<bool>(),
        ) {
            let loose = FilterCriteria::new().with_search(search);
            let strict = loose.clone().with_filter("is_active", active);
            let loose_ids = ids(&project(&records, &loose));
            let strict_ids = ids(&project(&records, &strict));
            for id in &strict_ids {
                prop_assert!(loose_ids.contains(id));
            }
        }

        #[test]
        fn longer_search_yields_subset(
            records in arb_records(),
            base in prop::sample::select(vec!["t", "tr", "a", "v", "l"]),
            extra in prop::sample::select(vec!["", "r", "uck", " b", "ift"]),
        ) {
            let loose = FilterCriteria::new().with_search(base);
            let strict = FilterCriteria::new().with_search(format!("{}{}", base, extra));
            let loose_ids = ids(&project(&records, &loose));
            for id in ids(&project(&records, &strict)) {
                prop_assert!(loose_ids.contains(&id));
            }
        }

        #[test]
        fn narrower_date_range_yields_subset(
            records in arb_jobs(),
            start in prop::option::of(1u32..=28),
            end in prop::option::of(1u32..=28),
            shrink_start in 0u32..5,
            shrink_end in 0u32..5,
        ) {
            let loose = FilterCriteria::new().with_date_range(DateRange::new(start.map(may), end.map(may)));
            let narrowed = DateRange::new(
                Some(may(start.unwrap_or(1) + shrink_start)),
                end.map(|e| may(e.saturating_sub(shrink_end))),
            );
            let strict = FilterCriteria::new().with_date_range(narrowed);
            let loose_ids = ids(&project(&records, &loose));
            for id in ids(&project(&records, &strict)) {
                prop_assert!(loose_ids.contains(&id));
            }
        }
    }
}
