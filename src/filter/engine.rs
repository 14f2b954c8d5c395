//! Faceted filtering over record snapshots.
//!
//! A record is retained iff, for every constrained field, its value is a
//! member of that field's accepted set (AND across fields, OR within a
//! field). The filter is stable and pure: input order is preserved and
//! neither argument is mutated. A record with no value for a constrained
//! field is excluded.

use std::collections::HashSet;

use crate::schema::RuleRecord;

use super::selection::{FieldOption, FilterSelection};

/// Applies filter selections to record snapshots.
pub struct FilterEngine;

impl FilterEngine {
    /// The subset of `records` passing `selection`, in input order
    pub fn apply(records: &[RuleRecord], selection: &FilterSelection) -> Vec<RuleRecord> {
        records
            .iter()
            .filter(|record| Self::matches(record, selection))
            .cloned()
            .collect()
    }

    /// Whether a single record passes every constrained field
    pub fn matches(record: &RuleRecord, selection: &FilterSelection) -> bool {
        selection
            .constrained_fields()
            .all(|field| selection.accepts(field, record.value(field)))
    }

    /// Distinct non-empty values observed for `field`, deduplicated,
    /// in first-observed order, each paired with its label.
    pub fn distinct_values(records: &[RuleRecord], field: &str) -> Vec<FieldOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();

        for record in records {
            if let Some(value) = record.value(field) {
                if seen.insert(value.to_string()) {
                    options.push(FieldOption::new(value));
                }
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RecordDraft, RecordId, RuleSchema};
    use chrono::Utc;

    fn record(extra: &[(&str, &str)]) -> RuleRecord {
        let mut draft = RecordDraft::new()
            .with("Rule Type", "Standard")
            .with("MD State", "NY")
            .with("Ship to State", "CA")
            .with("Zip Code", "90210")
            .with("Channel", "Retail")
            .with("Reg Cat Code", "RC001");
        for (field, value) in extra {
            draft.set(*field, *value);
        }
        RuleRecord::new(RecordId::generate(), &RuleSchema::default(), draft, Utc::now()).unwrap()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let records = vec![record(&[]), record(&[("MD State", "CA")])];
        let filtered = FilterEngine::apply(&records, &FilterSelection::new());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_and_across_fields() {
        let records = vec![
            record(&[("MD State", "NY"), ("Channel", "Retail")]),
            record(&[("MD State", "NY"), ("Channel", "Mail")]),
            record(&[("MD State", "CA"), ("Channel", "Retail")]),
        ];

        let mut selection = FilterSelection::new();
        selection.set("MD State", vec!["NY".into()]);
        selection.set("Channel", vec!["Retail".into()]);

        let filtered = FilterEngine::apply(&records, &selection);
        assert_eq!(filtered, vec![records[0].clone()]);
    }

    #[test]
    fn test_or_within_field() {
        let records = vec![
            record(&[("MD State", "NY")]),
            record(&[("MD State", "CA")]),
            record(&[("MD State", "TX")]),
        ];

        let mut selection = FilterSelection::new();
        selection.set("MD State", vec!["NY".into(), "TX".into()]);

        let filtered = FilterEngine::apply(&records, &selection);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].value("MD State"), Some("NY"));
        assert_eq!(filtered[1].value("MD State"), Some("TX"));
    }

    #[test]
    fn test_missing_field_excluded_when_constrained() {
        let with_schedule = record(&[("Drug Schedule", "II")]);
        let without = record(&[]);
        let records = vec![with_schedule.clone(), without];

        let mut selection = FilterSelection::new();
        selection.set("Drug Schedule", vec!["II".into()]);

        let filtered = FilterEngine::apply(&records, &selection);
        assert_eq!(filtered, vec![with_schedule]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![
            record(&[("Channel", "Retail")]),
            record(&[("Channel", "Mail")]),
        ];
        let mut selection = FilterSelection::new();
        selection.set("Channel", vec!["Mail".into()]);

        let once = FilterEngine::apply(&records, &selection);
        let twice = FilterEngine::apply(&once, &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_distinct_values_dedupes() {
        let records = vec![
            record(&[("Drug Schedule", "II")]),
            record(&[("Drug Schedule", "III")]),
            record(&[("Drug Schedule", "II")]),
        ];

        let options = FilterEngine::distinct_values(&records, "Drug Schedule");
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "II");
        assert_eq!(options[1].value, "III");
    }

    #[test]
    fn test_distinct_values_skips_missing() {
        let records = vec![record(&[]), record(&[("Protocol", "Standard")])];

        let options = FilterEngine::distinct_values(&records, "Protocol");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "Standard");
        assert_eq!(options[0].label, "Standard");
    }
}
