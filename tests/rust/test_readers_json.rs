use super::*;

#[test]
fn test_read_json_rows() {
    let src = r#"[
        {"AccountNo": "A1", "Layer": 1},
        {"AccountNo": "A2", "Layer": 1, "parent_acc_no": "A1", "Active": true, "Note": null}
    ]"#;
    let rows = JsonReader.read(src.as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Layer"), Some(&CellValue::Number(1.0)));
    assert_eq!(rows[1].get("Active"), Some(&CellValue::Bool(true)));
    assert_eq!(rows[1].get("Note"), Some(&CellValue::Empty));
}

#[test]
fn test_read_json_keeps_key_order() {
    let rows = JsonReader.read(r#"[{"z": 1, "a": 2, "m": 3}]"#.as_bytes()).unwrap();
    let keys: Vec<&str> = rows[0].keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_read_json_empty_array() {
    assert!(JsonReader.read("[]".as_bytes()).unwrap().is_empty());
}

#[test]
fn test_read_json_rejects_object() {
    let err = JsonReader.read(r#"{"AccountNo": "A1"}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, FlowError::Shape { .. }));
    assert!(err.to_string().contains("an object"));
}

#[test]
fn test_read_json_rejects_scalar_row() {
    let err = JsonReader.read(r#"[{"a": 1}, 5]"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn test_read_json_syntax_error() {
    let err = JsonReader.read("[{".as_bytes()).unwrap_err();
    assert!(matches!(err, FlowError::Json(_)));
}

#[test]
fn test_nested_value_kept_as_text() {
    let rows = JsonReader.read(r#"[{"tags": ["a", "b"]}]"#.as_bytes()).unwrap();
    assert_eq!(rows[0].get("tags"), Some(&CellValue::Text(r#"["a","b"]"#.into())));
}
