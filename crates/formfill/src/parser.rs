//! Parsing of layout and record JSON

use crate::schema::{Field, Layout, Record};
use crate::Result;
use serde_json::Value;

/// Parse a layout document from a JSON string
///
/// Coordinate keys outside the closed field set are rejected.
pub fn parse_layout(json: &str) -> Result<Layout> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a single record from a JSON object string
///
/// Values are coerced to text the way spreadsheet rows arrive: numbers and
/// booleans become their string form, nulls count as absent, and keys outside
/// the field set are ignored.
pub fn parse_record(json: &str) -> Result<Record> {
    let value: Value = serde_json::from_str(json)?;
    record_from_value(value)
}

/// Parse a batch of records from a JSON array string
///
/// A top-level object is accepted as a batch of one.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(rows) => rows.into_iter().map(record_from_value).collect(),
        row => Ok(vec![record_from_value(row)?]),
    }
}

fn record_from_value(value: Value) -> Result<Record> {
    let row: serde_json::Map<String, Value> = serde_json::from_value(value)?;

    let mut record = Record::new();
    for field in Field::ALL {
        match row.get(field.as_str()) {
            None | Some(Value::Null) => {}
            Some(value) => {
                record.set(field, value_to_string(value));
            }
        }
    }
    Ok(record)
}

/// Convert a JSON value to its text form
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FillError;
    use crate::schema::Position;
    use serde_json::json;

    #[test]
    fn test_parse_layout() {
        let json = r#"{
            "coordinates": {
                "name": {"x": 140, "y": 228},
                "age": {"x": 620, "y": 220}
            },
            "fontSize": 24,
            "markers": true
        }"#;

        let layout = parse_layout(json).unwrap();

        assert_eq!(layout.coordinates.len(), 2);
        assert_eq!(
            layout.coordinates.get(&Field::Age),
            Some(&Position::new(620, 220))
        );
        assert_eq!(layout.font_size, 24);
        assert!(layout.markers);
    }

    #[test]
    fn test_parse_layout_rejects_unknown_field() {
        let json = r#"{
            "coordinates": {
                "phone": {"x": 0, "y": 0}
            }
        }"#;

        let result = parse_layout(json);

        match result {
            Err(FillError::JsonError(_)) => {}
            _ => panic!("Expected JsonError for unknown coordinate key"),
        }
    }

    #[test]
    fn test_parse_record_coerces_scalars() {
        let json = json!({
            "name": "Asha",
            "age": 34,
            "sex": "F"
        })
        .to_string();

        let record = parse_record(&json).unwrap();

        assert_eq!(record.get(Field::Name), Some("Asha"));
        assert_eq!(record.get(Field::Age), Some("34"));
        assert_eq!(record.get(Field::Sex), Some("F"));
        assert_eq!(record.get(Field::Disease), None);
    }

    #[test]
    fn test_parse_record_null_counts_as_absent() {
        let json = r#"{"name": "Asha", "disease": null}"#;

        let record = parse_record(json).unwrap();

        assert_eq!(record.get(Field::Name), Some("Asha"));
        assert_eq!(record.get(Field::Disease), None);
    }

    #[test]
    fn test_parse_record_ignores_unknown_keys() {
        let json = r#"{"name": "Asha", "phone": "555-0100"}"#;

        let record = parse_record(json).unwrap();

        assert_eq!(record.get(Field::Name), Some("Asha"));
    }

    #[test]
    fn test_parse_record_rejects_non_object() {
        let result = parse_record(r#"["Asha", 34]"#);

        match result {
            Err(FillError::JsonError(_)) => {}
            _ => panic!("Expected JsonError for a non-object record"),
        }
    }

    #[test]
    fn test_parse_records_array() {
        let json = json!([
            {"name": "Asha", "age": 34},
            {"name": "Benji", "disease": "Influenza"},
        ])
        .to_string();

        let records = parse_records(&json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(Field::Age), Some("34"));
        assert_eq!(records[1].get(Field::Disease), Some("Influenza"));
    }

    #[test]
    fn test_parse_records_accepts_single_object() {
        let records = parse_records(r#"{"name": "Asha"}"#).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(Field::Name), Some("Asha"));
    }

    #[test]
    fn test_value_to_string_composites() {
        let value = json!({"nested": true});
        assert_eq!(value_to_string(&value), r#"{"nested":true}"#);

        let value = json!(false);
        assert_eq!(value_to_string(&value), "false");
    }
}
