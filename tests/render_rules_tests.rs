use content_report::{
    render, sanitize_rows, value, Error, FieldType, Map, Schema, SchemaField, Value,
};

fn object(value: Value) -> Map {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn single_field(field: SchemaField) -> Schema {
    Schema::new()
        .with_title("Rules")
        .with_description("Rendering rules")
        .with_field(field)
}

#[test]
fn test_empty_field_list_renders_empty_string() {
    let schema = Schema::new().with_title("Nothing here");
    assert_eq!(render(&schema, &object(value!({ "a": 1 }))).unwrap(), "");

    let from_json = Schema::from_json_str(r#"{ "title": "No properties" }"#).unwrap();
    assert_eq!(render(&from_json, &Map::new()).unwrap(), "");
}

#[test]
fn test_blank_values_leave_no_trace() {
    let schema = Schema::new()
        .with_field(SchemaField::string("none"))
        .with_field(SchemaField::string("empty_string"))
        .with_field(SchemaField::new("empty_list", FieldType::Array))
        .with_field(SchemaField::new("empty_map", FieldType::Object))
        .with_field(SchemaField::string("kept"));
    let instance = object(value!({
        "none": null,
        "empty_string": "",
        "empty_list": [],
        "empty_map": {},
        "kept": "yes"
    }));

    let report = render(&schema, &instance).unwrap();
    println!("Blank values:\n{}", report);

    for heading in ["None", "Empty_string", "Empty_list", "Empty_map"] {
        assert!(!report.contains(heading), "{heading} should be skipped");
    }
    assert!(report.ends_with("#### **Kept:**\n yes"));
}

#[test]
fn test_zero_and_false_are_skipped_by_default() {
    let schema = Schema::new()
        .with_field(SchemaField::new("count", FieldType::Integer))
        .with_field(SchemaField::new("ratio", FieldType::Number))
        .with_field(SchemaField::new("done", FieldType::Boolean));
    let instance = object(value!({ "count": 0, "ratio": 0.0, "done": false }));

    assert_eq!(
        render(&schema, &instance).unwrap(),
        "# Document: No title available - No description available.\n### Attributes:"
    );
}

#[test]
fn test_headings_follow_declaration_order() {
    let schema = Schema::new()
        .with_field(SchemaField::string("c"))
        .with_field(SchemaField::string("a"))
        .with_field(SchemaField::string("b"));
    let instance = object(value!({ "a": "1", "b": "2", "c": "3" }));

    let report = render(&schema, &instance).unwrap();
    let headings: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("#### **"))
        .collect();
    assert_eq!(headings, vec!["#### **C:**", "#### **A:**", "#### **B:**"]);
}

#[test]
fn test_row_list_becomes_table() {
    let schema = single_field(SchemaField::new("rows", FieldType::Array));
    let instance = object(value!({ "rows": [{ "a": "1", "b": "2" }, { "a": "3", "b": "4" }] }));

    let report = render(&schema, &instance).unwrap();
    assert_eq!(
        report,
        "# Document: Rules - Rendering rules\n### Attributes:\n\
         #### **Rows:**\n \
         |   a |   b |\n\
         |-----|-----|\n\
         |   1 |   2 |\n\
         |   3 |   4 |"
    );
}

#[test]
fn test_table_cells_are_sanitized() {
    let schema = single_field(SchemaField::new("notes", FieldType::Array));
    let instance = object(value!({
        "notes": [
            { "who": "ann", "text": "line one\nline two" },
            { "who": "bob", "text": "  first<br>second  " }
        ]
    }));

    let report = render(&schema, &instance).unwrap();
    assert!(report.contains("| ann   | line one line two |"));
    assert!(report.contains("| bob   | first second      |"));
    assert!(!report.contains("<br>"));
}

#[test]
fn test_sanitizer_preserves_rows_and_columns() {
    let first = object(value!({ "z": "a\nb", "y": 1 }));
    let second = object(value!({ "z": "<br>", "y": null }));

    let rows = sanitize_rows(&[&first, &second]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["z", "y"]);
    assert_eq!(rows[0]["z"], "a b");
    assert_eq!(rows[0]["y"], "1");
    assert_eq!(rows[1]["z"], "");
    assert_eq!(rows[1]["y"], "None");
}

#[test]
fn test_scalar_list_becomes_bullets() {
    let schema = single_field(SchemaField::new("tags", FieldType::Array));
    let report = render(&schema, &object(value!({ "tags": ["x", "y"] }))).unwrap();

    let bullets: Vec<&str> = report.lines().filter(|l| l.starts_with("    - ")).collect();
    assert_eq!(bullets, vec!["    - x", "    - y"]);
    assert!(report.ends_with("#### **Tags:**\n \n    - x\n    - y"));
}

#[test]
fn test_flat_mapping_lines() {
    let schema = single_field(SchemaField::new("labels", FieldType::Object));
    let report = render(&schema, &object(value!({ "labels": { "k1": "v1", "k2": 7 } }))).unwrap();

    assert!(report.contains("   - **`k1`**: `v1`\n"));
    assert!(report.contains("   - **`k2`**: `7`\n"));
    assert_eq!(report.matches("**`k1`**").count(), 1);
}

#[test]
fn test_date_time_reformatted() {
    let schema = single_field(SchemaField::string("opened").with_format("date-time"));

    for (input, expected) in [
        ("2023-01-05T10:00:00", "2023-01-05 10:00:00"),
        ("2023-01-05 10:00", "2023-01-05 10:00:00"),
        ("2023-01-05T10:00:00.123+02:00", "2023-01-05 10:00:00"),
        ("2023-01-05T10:00:00+02", "2023-01-05 10:00:00"),
        ("2023-01-05T10", "2023-01-05 10:00:00"),
        ("Thu, 05 Jan 2023 10:00:00 +0000", "2023-01-05 10:00:00"),
        ("2023-01-05", "2023-01-05 00:00:00"),
    ] {
        let report = render(&schema, &object(value!({ "opened": input }))).unwrap();
        assert!(
            report.ends_with(&format!("#### **Opened:**\n {expected}")),
            "{input} rendered as {report}"
        );
    }
}

#[test]
fn test_unparseable_date_fails_whole_document() {
    let schema = Schema::new()
        .with_field(SchemaField::string("name"))
        .with_field(SchemaField::string("opened").with_format("date-time"));
    let err = render(&schema, &object(value!({ "name": "ok", "opened": "whenever" }))).unwrap_err();
    assert!(matches!(err, Error::DateFormat { .. }));
}

#[test]
fn test_missing_reference_fails() {
    let schema = single_field(SchemaField::reference("owner", "#/$defs/Person"));
    let err = render(&schema, &object(value!({ "owner": { "name": "ann" } }))).unwrap_err();
    assert!(matches!(err, Error::SchemaResolution { ref field, .. } if field == "owner"));
}

#[test]
fn test_nested_reference_fails() {
    let schema = single_field(SchemaField::reference("owner", "#/$defs/Alias"))
        .with_def("Alias", SchemaField::reference("Alias", "#/$defs/Person"))
        .with_def("Person", SchemaField::new("Person", FieldType::Object));
    let err = render(&schema, &object(value!({ "owner": { "name": "ann" } }))).unwrap_err();
    assert!(matches!(err, Error::SchemaResolution { .. }));
}

#[test]
fn test_resolved_reference_uses_definition() {
    let schema = single_field(SchemaField::reference("owner", "#/$defs/Person")).with_def(
        "Person",
        SchemaField::new("Person", FieldType::Object).with_title("Owner record"),
    );
    let report = render(&schema, &object(value!({ "owner": { "name": "ann" } }))).unwrap();
    assert!(report.ends_with("#### **Owner record:**\n \n   - **`name`**: `ann`\n"));
}

#[test]
fn test_title_fallback_capitalizes() {
    let schema = single_field(SchemaField::string("createdAt"));
    let report = render(&schema, &object(value!({ "createdAt": "today" }))).unwrap();
    assert!(report.contains("#### **Createdat:**"));
}

#[test]
fn test_scalars_use_plain_text() {
    let schema = Schema::new()
        .with_field(SchemaField::new("int", FieldType::Integer))
        .with_field(SchemaField::new("float", FieldType::Number))
        .with_field(SchemaField::new("whole", FieldType::Number))
        .with_field(SchemaField::new("flag", FieldType::Boolean));
    let instance = object(value!({ "int": 42, "float": 2.75, "whole": 3.0, "flag": true }));

    let report = render(&schema, &instance).unwrap();
    assert!(report.contains("#### **Int:**\n 42\n"));
    assert!(report.contains("#### **Float:**\n 2.75\n"));
    assert!(report.contains("#### **Whole:**\n 3.0\n"));
    assert!(report.ends_with("#### **Flag:**\n True"));
}

#[test]
fn test_literals_inside_lists_and_mappings() {
    let schema = Schema::new()
        .with_field(SchemaField::new("flags", FieldType::Array))
        .with_field(SchemaField::new("settings", FieldType::Object));
    let instance = object(value!({
        "flags": [true, null, ["a", 1]],
        "settings": { "dark": false, "extra": { "k": "v" } }
    }));

    let report = render(&schema, &instance).unwrap();
    assert!(report.contains("    - True\n    - None\n    - ['a', 1]"));
    assert!(report.contains("   - **`dark`**: `False`\n"));
    assert!(report.contains("   - **`extra`**: `{'k': 'v'}`\n"));
}

#[test]
fn test_rows_without_keys_render_empty_body() {
    let schema = Schema::new()
        .with_field(SchemaField::new("items", FieldType::Array))
        .with_field(SchemaField::string("after"));
    let report = render(&schema, &object(value!({ "items": [{}], "after": "x" }))).unwrap();
    assert!(report.contains("#### **Items:**\n \n#### **After:**\n x"));
    assert!(!report.contains('|'));
}
