//! Building instances with the value! macro.
//!
//! Run with: cargo run --example macro

use content_report::{render, value, FieldType, Schema, SchemaField};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new()
        .with_title("Incident")
        .with_description("Postmortem summary")
        .with_field(SchemaField::string("summary"))
        .with_field(SchemaField::string("opened").with_format("date-time"))
        .with_field(SchemaField::new("services", FieldType::Array))
        .with_field(SchemaField::new("labels", FieldType::Object))
        .with_field(SchemaField::string("resolution"));

    let severity = 2;
    let instance = value!({
        "summary": "Checkout latency spike",
        "opened": "2024-02-11T03:12:45Z",
        "services": ["checkout", "payments"],
        "labels": { "severity": severity, "team": "core" },
        "resolution": null
    });

    let map = instance
        .as_object()
        .ok_or("instance must be an object")?;
    println!("{}", render(&schema, map)?);

    Ok(())
}
