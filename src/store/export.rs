//! CSV encoding for the "Extract Data" action.
//!
//! Format:
//! - Header: `id` followed by the 18 schema fields in canonical order.
//!   The header is derived from the schema, not from the first record,
//!   so a sparse or absent first record cannot change the export shape.
//! - Each data row carries one JSON-string-quoted cell per header
//!   column; a missing value encodes as `""`.
//! - Rows are joined with `\n`; an empty collection yields the header
//!   line alone.

use crate::schema::{RuleRecord, RuleSchema};

/// Download filename offered to the browser
pub const EXPORT_FILENAME: &str = "regulatory-rules.csv";

/// MIME type of the export body
pub const EXPORT_MIME: &str = "text/csv";

/// Encodes a record snapshot as CSV.
pub fn encode(schema: &RuleSchema, records: &[RuleRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);

    let header: Vec<&str> = std::iter::once("id")
        .chain(schema.fields().iter().map(|f| f.name()))
        .collect();
    lines.push(header.join(","));

    for record in records {
        let mut cells = Vec::with_capacity(header.len());
        cells.push(quote(&record.id().to_string()));
        for field in schema.fields() {
            cells.push(quote(record.value(field.name()).unwrap_or("")));
        }
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// JSON-string-quote a single cell
fn quote(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RecordDraft, RecordId};
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
    fn test_empty_collection_exports_header_only() {
        let csv = encode(&RuleSchema::default(), &[]);
        assert!(csv.starts_with("id,Rule Type,MD State,"));
        assert!(!csv.contains('\n'));
    }

    #[test]
    fn test_header_covers_full_schema() {
        let csv = encode(&RuleSchema::default(), &[]);
        let columns: Vec<&str> = csv.split(',').collect();
        assert_eq!(columns.len(), 19);
        assert_eq!(columns[0], "id");
        assert_eq!(columns[18], "Max Days Allowed to Expiry Date");
    }

    #[test]
    fn test_cells_are_json_quoted() {
        let record = record(&[]);
        let csv = encode(&RuleSchema::default(), &[record.clone()]);
        let row = csv.lines().nth(1).unwrap();

        assert!(row.starts_with(&format!("\"{}\"", record.id())));
        assert!(row.contains("\"Standard\""));
        assert!(row.contains("\"NY\""));
    }

    #[test]
    fn test_missing_values_encode_empty() {
        let csv = encode(&RuleSchema::default(), &[record(&[])]);
        let row = csv.lines().nth(1).unwrap();
        // 12 optional fields are unset on this record
        assert_eq!(row.matches("\"\"").count(), 12);
    }

    #[test]
    fn test_quote_escapes_embedded_quotes() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
