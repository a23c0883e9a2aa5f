//! Rendering from a JSON Schema document with `$defs` and `$ref`.
//!
//! Run with: cargo run --example json_schema

use content_report::{render_json_str, Schema};
use std::error::Error;

const SCHEMA: &str = r##"{
    "title": "Employee",
    "description": "HR record",
    "type": "object",
    "properties": {
        "name": { "type": "string", "title": "Full Name" },
        "hired": { "type": "string", "format": "date-time" },
        "manager": { "anyOf": [{ "type": "string" }, { "type": "null" }] },
        "office": { "$ref": "#/$defs/Office" },
        "skills": { "type": "array", "items": { "type": "string" } }
    },
    "$defs": {
        "Office": { "type": "object", "title": "Office Location" }
    }
}"##;

const INSTANCE: &str = r#"{
    "name": "Grace Hopper",
    "hired": "1944-07-02 09:00",
    "manager": null,
    "office": { "building": "Cruft", "room": "214" },
    "skills": ["COBOL", "compilers"]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::from_json_str(SCHEMA)?;
    for field in &schema.fields {
        println!("{} -> {}", field.name, schema.resolve(field)?.field_type);
    }
    println!();

    println!("{}", render_json_str(SCHEMA, INSTANCE)?);

    Ok(())
}
