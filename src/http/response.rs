//! # HTTP Response Envelopes
//!
//! Typed response bodies for the JSON surface.

use serde::{Deserialize, Serialize};

use crate::filter::FieldOption;
use crate::schema::{RecordId, RuleRecord};

/// List response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub status: String,
    pub records: Vec<RuleRecord>,
}

impl ListResponse {
    pub fn new(records: Vec<RuleRecord>) -> Self {
        Self {
            status: "ok".to_string(),
            records,
        }
    }
}

/// Single-record response for insert/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub status: String,
    pub record: RuleRecord,
}

impl RecordResponse {
    pub fn new(record: RuleRecord) -> Self {
        Self {
            status: "ok".to_string(),
            record,
        }
    }
}

/// Delete acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
    pub id: RecordId,
}

impl DeleteResponse {
    pub fn new(id: RecordId) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

/// Distinct-value options for one field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub status: String,
    pub field: String,
    pub options: Vec<FieldOption>,
}

impl OptionsResponse {
    pub fn new(field: impl Into<String>, options: Vec<FieldOption>) -> Self {
        Self {
            status: "ok".to_string(),
            field: field.into(),
            options,
        }
    }
}

/// Error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::new("WRITE_ACCESS_DENIED", "no write access");
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("WRITE_ACCESS_DENIED"));
    }

    #[test]
    fn test_list_response_status_ok() {
        let json = serde_json::to_string(&ListResponse::new(Vec::new())).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"records\":[]"));
    }
}
