//! Wire-mapping conversion for API models.
//!
//! Every serializable model implements [`ToMapping`] explicitly; nested
//! models and sequence elements are converted recursively through their
//! own serde schemas, so the conversion is dispatched statically rather
//! than probed at runtime.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{WdsError, WdsResult};

/// Capability to convert a model into its wire mapping.
///
/// The mapping keys are the wire JSON keys (declared once per field via
/// serde), and any nested convertible value appears in its own mapping
/// form. Both operations are pure.
pub trait ToMapping: Serialize {
    /// Convert the model into a mapping from wire key to value.
    fn to_mapping(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // Models are plain data; a non-object here is unreachable.
            _ => Map::new(),
        }
    }

    /// Deterministic, human-readable rendering of the wire mapping.
    ///
    /// Keys are emitted in sorted order, so equal mappings render
    /// identically.
    fn to_display_string(&self) -> String {
        serde_json::to_string_pretty(&Value::Object(self.to_mapping())).unwrap_or_default()
    }
}

/// A model that can be reconstructed from a wire mapping.
///
/// `REQUIRED_FIELDS` names the wire keys that must be present and
/// non-null; [`WireModel::from_mapping`] validates them before decoding,
/// so an absent mandatory field fails with [`WdsError::MissingField`]
/// rather than a generic decode error.
pub trait WireModel: ToMapping + DeserializeOwned {
    /// Wire keys that are mandatory at construction.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Validate and decode a model from its wire mapping.
    fn from_mapping(mapping: &Map<String, Value>) -> WdsResult<Self> {
        for field in Self::REQUIRED_FIELDS {
            match mapping.get(*field) {
                None | Some(Value::Null) => {
                    return Err(WdsError::MissingField {
                        field: (*field).to_string(),
                    });
                }
                Some(_) => {}
            }
        }
        serde_json::from_value(Value::Object(mapping.clone())).map_err(Into::into)
    }
}

impl WireModel for crate::models::SearchRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["offset", "limit", "sort"];
}

impl WireModel for crate::models::RecordResponse {
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "type", "attributes"];
}

impl WireModel for crate::models::RecordQueryResponse {
    const REQUIRED_FIELDS: &'static [&'static str] = &["searchRequest", "totalRecords", "records"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordQueryResponse, RecordResponse, SearchRequest, SortDirection};
    use serde_json::json;

    fn sample_envelope() -> RecordQueryResponse {
        RecordQueryResponse::new(
            SearchRequest::new().with_limit(2),
            2,
            vec![
                RecordResponse::new("r1", "widget", json!({"color": "blue"})),
                RecordResponse::new("r2", "widget", json!({"color": "red"})),
            ],
        )
    }

    #[test]
    fn test_envelope_mapping_shape() {
        let mapping = sample_envelope().to_mapping();
        assert_eq!(
            Value::Object(mapping),
            json!({
                "searchRequest": {"offset": 0, "limit": 2, "sort": "asc"},
                "totalRecords": 2,
                "records": [
                    {"id": "r1", "type": "widget", "attributes": {"color": "blue"}},
                    {"id": "r2", "type": "widget", "attributes": {"color": "red"}},
                ],
            })
        );
    }

    #[test]
    fn test_nested_values_are_expanded_recursively() {
        let mapping = sample_envelope().to_mapping();

        // The echoed request is itself a mapping, not an opaque blob
        assert!(mapping["searchRequest"].is_object());
        assert_eq!(mapping["searchRequest"]["sort"], json!("asc"));

        // Each sequence element is converted too
        assert_eq!(mapping["records"][1]["id"], json!("r2"));
    }

    #[test]
    fn test_round_trip_preserves_equality() {
        let envelope = sample_envelope();
        let mapping = envelope.to_mapping();
        let rebuilt = RecordQueryResponse::from_mapping(&mapping).unwrap();
        assert_eq!(envelope, rebuilt);
    }

    #[test]
    fn test_from_mapping_rejects_each_missing_field() {
        let full = sample_envelope().to_mapping();

        for field in RecordQueryResponse::REQUIRED_FIELDS {
            let mut mapping = full.clone();
            mapping.remove(*field);

            let err = RecordQueryResponse::from_mapping(&mapping).unwrap_err();
            match err {
                WdsError::MissingField { field: name } => assert_eq!(name, *field),
                other => panic!("expected MissingField, got {other}"),
            }
        }
    }

    #[test]
    fn test_from_mapping_rejects_null_field() {
        let mut mapping = sample_envelope().to_mapping();
        mapping.insert("totalRecords".to_string(), Value::Null);

        let err = RecordQueryResponse::from_mapping(&mapping).unwrap_err();
        assert!(matches!(err, WdsError::MissingField { field } if field == "totalRecords"));
    }

    #[test]
    fn test_display_string_is_deterministic() {
        let a = sample_envelope();
        let b = sample_envelope();
        assert_eq!(a.to_display_string(), b.to_display_string());

        let rendered = a.to_display_string();
        assert!(rendered.contains("\"searchRequest\""));
        assert!(rendered.contains("\"totalRecords\""));
        assert!(rendered.contains("\"records\""));
    }

    #[test]
    fn test_search_request_round_trip() {
        let request = SearchRequest::new()
            .with_offset(5)
            .with_sort(SortDirection::Desc)
            .with_sort_attribute("name");

        let rebuilt = SearchRequest::from_mapping(&request.to_mapping()).unwrap();
        assert_eq!(request, rebuilt);
    }
}
